//! dirman binary entry point
//!
//! Parses the command line, initializes logging, dispatches one manager
//! operation, and renders the outcome as human-readable status lines.
//! Typed errors from the library map to a non-zero exit status.

use anyhow::Result;
use clap::Parser;
use dirman::cli::{Args, Command};
use dirman::{DirectoryManager, EntryKind, PermissionFlags};
use std::io::{self, BufRead, Write};
use tracing::level_filters::LevelFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    args.validate()?;
    init_logging(args.verbose, args.quiet);

    let manager = DirectoryManager::new(&args.base)?;
    run(&manager, args.command, args.quiet)
}

/// Map the verbosity flags onto a tracing level filter
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

#[allow(clippy::print_stdout)]
fn run(manager: &DirectoryManager, command: Command, quiet: bool) -> Result<()> {
    let flags = command.permission_flags();
    match command {
        Command::List => {
            println!("Contents of {}:", manager.base().display());
            for entry in manager.list()? {
                let kind = match entry.kind {
                    EntryKind::Directory => "dir ",
                    EntryKind::File => "file",
                };
                println!("{kind}  {}", entry.name.to_string_lossy());
            }
        }
        Command::CreateFile { name } => {
            manager.create_file(&name)?;
            status(quiet, format_args!("Created file '{name}'"));
        }
        Command::Mkdir { name } => {
            manager.create_dir(&name)?;
            status(quiet, format_args!("Created directory '{name}'"));
        }
        Command::Delete { name } => {
            manager.remove(&name)?;
            status(quiet, format_args!("Deleted '{name}'"));
        }
        Command::Move { name, target_dir } => {
            manager.move_into(&name, &target_dir)?;
            status(quiet, format_args!("Moved '{name}' into '{target_dir}'"));
        }
        Command::Rename { old_name, new_name } => {
            manager.rename(&old_name, &new_name)?;
            status(quiet, format_args!("Renamed '{old_name}' to '{new_name}'"));
        }
        Command::Copy { name, target_dir } => {
            manager.copy_into(&name, &target_dir)?;
            status(quiet, format_args!("Copied '{name}' into '{target_dir}'"));
        }
        Command::Chmod { name, .. } => {
            let flags = flags.unwrap_or_else(PermissionFlags::default);
            manager.set_permissions(&name, flags)?;
            status(quiet, format_args!("Updated permissions for '{name}'"));
        }
        Command::Search { keyword } => {
            println!("Search results for '{keyword}':");
            for hit in manager.search(&keyword)? {
                println!("{}", hit.display());
            }
        }
        Command::Append { name, text } => {
            let contents = manager.read_file(&name)?;
            println!("Contents of '{name}':");
            println!("{contents}");
            let text = match text {
                Some(text) => text,
                None => prompt_line("Text to append: ")?,
            };
            manager.append_line(&name, &text)?;
            status(quiet, format_args!("Appended to '{name}'"));
        }
    }
    Ok(())
}

/// Print a status line unless quiet mode is on
#[allow(clippy::print_stdout)]
fn status(quiet: bool, message: std::fmt::Arguments<'_>) {
    if !quiet {
        println!("{message}");
    }
}

/// Read exactly one line from standard input
#[allow(clippy::print_stdout)]
fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
