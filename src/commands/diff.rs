//! Diff command handler

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use componentry::presentation::create_diff_use_case;
use componentry::ui::json::{emit_event, DiffEvent, ErrorEvent};
use componentry::ui::views::diff::{render_diff_header, render_diff_report};
use componentry::ui::UiContext;

use super::project::load_project_config;

pub struct DiffArgs {
    pub name: Option<String>,
    pub cwd: Option<PathBuf>,
    pub registry: Option<String>,
}

/// Exits non-zero when some installed entry could not be checked.
pub async fn cmd_diff(args: DiffArgs, ui: &UiContext) -> Result<ExitCode> {
    let project = load_project_config(args.cwd.as_deref(), args.registry.as_deref(), ui.json)?;

    if !ui.json {
        print!(
            "{}",
            render_diff_header(project.config.registry_location(), ui)
        );
    }

    let use_case = create_diff_use_case(&project);
    let report = match use_case.execute(&project, args.name.as_deref()).await {
        Ok(report) => report,
        Err(err) => {
            if ui.json {
                emit_event(&ErrorEvent::new("diff", err.to_string()).with_subject(err.subject()))?;
            }
            return Err(err.into());
        }
    };

    if ui.json {
        emit_event(&DiffEvent::new(&report))?;
    } else {
        print!("{}", render_diff_report(&report, project.cwd(), ui));
    }

    if report.failures.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
