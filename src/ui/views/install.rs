use std::path::Path;

use crate::application::{FileAction, InstallResult};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::display_path;

pub fn render_install_header(names: &[String], registry: &str, ui: &UiContext) -> String {
    format!(
        "{} Componentry Install\n  Entries: {}\n  Registry: {}\n",
        Icon::Install.colored(ui.color, ui.unicode),
        names.join(", "),
        registry
    )
}

/// Summary of an install run, `dry_run` changes the wording only.
pub fn render_install_result(
    result: &InstallResult,
    cwd: &Path,
    dry_run: bool,
    ui: &UiContext,
) -> String {
    let mut out = String::new();

    if !result.closure.is_empty() {
        out.push_str(&format!("  Resolved: {}\n", result.closure.join(", ")));
    }

    let sections = [
        (FileAction::Create, if dry_run { "Would create" } else { "Created" }),
        (FileAction::Update, if dry_run { "Would overwrite" } else { "Overwritten" }),
        (FileAction::Skipped, "Skipped, differs from registry"),
    ];
    for (action, label) in sections {
        let count = result.count(action);
        if count == 0 {
            continue;
        }
        let icon = match action {
            FileAction::Skipped => Icon::Pending,
            _ => Icon::Arrow,
        };
        out.push_str(&format!("\n  {} ({}):\n", label, count));
        for file in result.with_action(action) {
            out.push_str(&format!(
                "    {} {}\n",
                icon.colored(ui.color, ui.unicode),
                display_path(&file.path, cwd)
            ));
        }
    }

    let unchanged = result.count(FileAction::Unchanged);
    if unchanged > 0 {
        out.push_str(&format!("\n  Unchanged ({}):\n", unchanged));
        if ui.verbose > 0 {
            for file in result.with_action(FileAction::Unchanged) {
                out.push_str(&format!("    {}\n", display_path(&file.path, cwd)));
            }
        }
    }

    if let Some(sheet) = result.stylesheet.as_ref().filter(|s| s.is_changed()) {
        let verb = match (dry_run, sheet.original.is_some()) {
            (true, true) => "would update",
            (true, false) => "would create",
            (false, true) => "updated",
            (false, false) => "created",
        };
        out.push_str(&format!(
            "\n  Stylesheet {}: {}\n",
            verb,
            display_path(&sheet.path, cwd)
        ));
    }

    let warnings = warnings(result);
    if !warnings.is_empty() {
        out.push_str(&format!("\n  Warnings ({}):\n", warnings.len()));
        for warning in &warnings {
            out.push_str(&format!(
                "    {} {}\n",
                Icon::Warning.colored(ui.color, ui.unicode),
                warning
            ));
        }
    }

    if !result.package_dependencies.is_empty() {
        out.push_str(&format!(
            "\n  Add these packages: {}\n",
            result.package_dependencies.join(" ")
        ));
    }

    out.push('\n');
    out.push_str(&status_line(result, dry_run, ui));
    out.push('\n');
    out
}

fn warnings(result: &InstallResult) -> Vec<String> {
    let mut warnings: Vec<String> = result
        .collisions
        .iter()
        .map(|c| {
            format!(
                "{} and {} both target {}; kept {}",
                c.first,
                c.second,
                c.path.display(),
                c.first
            )
        })
        .collect();
    warnings.extend(
        result
            .rejected
            .iter()
            .map(|e| format!("skipped invalid index entry {}", e)),
    );
    warnings
}

fn status_line(result: &InstallResult, dry_run: bool, ui: &UiContext) -> String {
    let writes = result.count(FileAction::Create) + result.count(FileAction::Update);
    let files = if writes == 1 { "file" } else { "files" };

    if !result.has_writes() {
        return format!(
            "{} Already up-to-date",
            Icon::Success.colored(ui.color, ui.unicode)
        );
    }
    if dry_run {
        return format!(
            "{} Dry run: {} {} would be written",
            Icon::Pending.colored(ui.color, ui.unicode),
            writes,
            files
        );
    }
    format!(
        "{} Install complete: {} {} written",
        Icon::Success.colored(ui.color, ui.unicode),
        writes,
        files
    )
}
