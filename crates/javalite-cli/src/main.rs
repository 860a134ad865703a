// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Javalite command-line interface.
//!
//! This is the main entry point for the `javalite` command.

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, Subcommand};
use miette::Result;

use javalite_cli::commands::{self, OutputFormat};
use javalite_cli::{config, logging};

/// Javalite: lexing, parsing, validation and highlighting for a small Java subset
#[derive(Debug, Parser)]
#[command(name = "javalite")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (default: `javalite.toml` in the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<Utf8PathBuf>,

    /// Log more (`-v` for debug, `-vv` for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate `.java` files and report diagnostics
    Check {
        /// Files or directories to check
        #[arg(default_value = ".")]
        paths: Vec<Utf8PathBuf>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print a file as highlighted HTML
    Highlight {
        /// Source file to highlight
        file: Utf8PathBuf,
    },

    /// Print the tokens of a file
    Tokens {
        /// Source file to tokenize
        file: Utf8PathBuf,

        /// Include whitespace, newline and comment tokens
        #[arg(long)]
        trivia: bool,
    },

    /// Parse a file and print its outline
    Parse {
        /// Source file to parse
        file: Utf8PathBuf,
    },
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = config::load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Command::Check { paths, format } => commands::check::run(&paths, format, config),
        Command::Highlight { file } => commands::highlight::run(&file),
        Command::Tokens { file, trivia } => commands::tokens::run(&file, trivia),
        Command::Parse { file } => commands::parse::run(&file),
    });

    // Exit with appropriate code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}
