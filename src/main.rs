//! hostwire - message extensions for Teams app projects
//!
//! A command line tool that registers message extensions in the Teams app
//! manifest and wires them into the bot classes of a generated TypeScript
//! project without disturbing the surrounding code.

use clap::Parser;

mod augment;
mod cli;
mod commands;
mod common;
mod error;
mod identifier;
mod manifest;
mod operations;
mod project;
mod transaction;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add(args) => commands::add::run(cli.workspace, cli.verbose, args),
        Commands::Hosts(args) => commands::hosts::run(cli.workspace, cli.verbose, args),
        Commands::Check => commands::check::run(cli.workspace, cli.verbose),
        Commands::Versions => commands::versions::run(cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        ui::print_fatal(&e);
        std::process::exit(1);
    }
}
