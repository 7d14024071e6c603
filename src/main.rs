//! Componentry CLI - install registry components into your project
//!
//! Usage: componentry <COMMAND>
//!
//! Commands:
//!   install  Install entries and everything they depend on
//!   diff     Compare installed entries with the registry

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use componentry::presentation::{Cli, Commands};
use componentry::ui::primitives::icon::Icon;
use componentry::ui::UiContext;

use commands::diff::{cmd_diff, DiffArgs};
use commands::install::{cmd_install, InstallArgs};

fn main() -> ExitCode {
    let cli = Cli::parse();
    componentry::logging::init(cli.verbose, cli.json);
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    match run(cli, &ui) {
        Ok(code) => code,
        Err(err) => {
            // --json runs already emitted an error event on stdout
            eprintln!("{} {:#}", Icon::Error.colored(ui.color, ui.unicode), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, ui: &UiContext) -> Result<ExitCode> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        match cli.command {
            Commands::Install {
                names,
                cwd,
                registry,
                yes,
                overwrite,
                dry_run,
            } => {
                let args = InstallArgs {
                    names,
                    cwd,
                    registry,
                    yes,
                    overwrite,
                    dry_run,
                };
                cmd_install(args, ui).await.map(|()| ExitCode::SUCCESS)
            }
            Commands::Diff {
                name,
                cwd,
                registry,
            } => cmd_diff(DiffArgs { name, cwd, registry }, ui).await,
        }
    })
}
