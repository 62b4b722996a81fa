//! Command-line interface definitions
//!
//! One subcommand per manager operation; global options select the base
//! directory and output verbosity.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::permissions::PermissionFlags;

/// File-management utility scoped to a single base directory
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base directory all operations are resolved against (created if absent)
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub base: PathBuf,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress all output except errors)
    #[arg(short, long)]
    pub quiet: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Manager operations, one subcommand each
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the immediate children of the base directory
    List,

    /// Create an empty file (fails if it already exists)
    CreateFile {
        /// Name of the file, relative to the base directory
        name: String,
    },

    /// Create a single directory (non-recursive)
    Mkdir {
        /// Name of the directory, relative to the base directory
        name: String,
    },

    /// Delete a file, or a directory and its entire contents
    Delete {
        /// Name of the entry, relative to the base directory
        name: String,
    },

    /// Move an entry into an existing directory, keeping its name
    Move {
        /// Name of the entry to move
        name: String,
        /// Existing destination directory, relative to the base directory
        target_dir: String,
    },

    /// Rename an entry within the base directory
    ///
    /// An existing destination is rejected; renaming an entry onto itself
    /// is a no-op.
    Rename {
        /// Current name
        old_name: String,
        /// New name
        new_name: String,
    },

    /// Copy a file, or a directory tree recursively, into an existing directory
    Copy {
        /// Name of the entry to copy
        name: String,
        /// Existing destination directory, relative to the base directory
        target_dir: String,
    },

    /// Change the owner permission bits of an entry
    ///
    /// Defaults to read+write, no execute; group and other bits are cleared.
    Chmod {
        /// Name of the entry, relative to the base directory
        name: String,

        /// Clear the owner read bit
        #[arg(long)]
        no_read: bool,

        /// Clear the owner write bit
        #[arg(long)]
        no_write: bool,

        /// Set the owner execute bit
        #[arg(long, short = 'x')]
        execute: bool,
    },

    /// Recursively search entry names for a substring (case-sensitive)
    Search {
        /// Substring to look for in entry names
        keyword: String,
    },

    /// Print a file's contents and append a line to it
    Append {
        /// Name of the file, relative to the base directory
        name: String,

        /// Text to append; prompts once on standard input when omitted
        text: Option<String>,
    },
}

impl Command {
    /// Permission flags for a `Chmod` command, `None` for any other command
    #[must_use]
    pub fn permission_flags(&self) -> Option<PermissionFlags> {
        match self {
            Self::Chmod {
                no_read,
                no_write,
                execute,
                ..
            } => Some(PermissionFlags {
                read: !no_read,
                write: !no_write,
                execute: *execute,
            }),
            _ => None,
        }
    }
}

impl Args {
    /// Validate command-line arguments
    ///
    /// # Errors
    ///
    /// Returns an error if both `--quiet` and `--verbose` are given.
    pub fn validate(&self) -> Result<()> {
        if self.quiet && self.verbose > 0 {
            anyhow::bail!("--quiet and --verbose are mutually exclusive");
        }
        Ok(())
    }
}
