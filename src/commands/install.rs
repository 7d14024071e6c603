//! Install command handler

use std::path::PathBuf;

use anyhow::Result;

use componentry::application::InstallOptions;
use componentry::presentation::create_install_use_case;
use componentry::ui::json::{emit_event, ErrorEvent, InstallEvent};
use componentry::ui::views::install::{render_install_header, render_install_result};
use componentry::ui::UiContext;

use super::project::load_project_config;

pub struct InstallArgs {
    pub names: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub registry: Option<String>,
    pub yes: bool,
    pub overwrite: bool,
    pub dry_run: bool,
}

pub async fn cmd_install(args: InstallArgs, ui: &UiContext) -> Result<()> {
    let project = load_project_config(args.cwd.as_deref(), args.registry.as_deref(), ui.json)?;

    if !ui.json {
        print!(
            "{}",
            render_install_header(&args.names, project.config.registry_location(), ui)
        );
    }

    // --json runs never prompt
    let use_case = create_install_use_case(&project, !ui.json);
    let options = InstallOptions::new(args.names)
        .with_yes(args.yes || ui.json)
        .with_overwrite(args.overwrite)
        .with_dry_run(args.dry_run);

    let result = match use_case.execute(&project, &options).await {
        Ok(result) => result,
        Err(err) => {
            if ui.json {
                emit_event(&ErrorEvent::new("install", err.to_string()).with_subject(err.subject()))?;
            }
            return Err(err.into());
        }
    };

    if ui.json {
        emit_event(&InstallEvent::new(&result, args.dry_run))?;
    } else {
        print!(
            "{}",
            render_install_result(&result, project.cwd(), args.dry_run, ui)
        );
    }
    Ok(())
}
