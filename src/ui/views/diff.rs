use std::path::Path;

use crate::application::{DiffReport, DiffStatus};
use crate::ui::components::diff::render_patch_with_line_numbers;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::display_path;

pub fn render_diff_header(registry: &str, ui: &UiContext) -> String {
    format!(
        "{} Componentry Diff\n  Registry: {}\n",
        Icon::Diff.colored(ui.color, ui.unicode),
        registry
    )
}

pub fn render_diff_report(report: &DiffReport, cwd: &Path, ui: &UiContext) -> String {
    let mut out = String::new();

    for entry in &report.entries {
        match &entry.status {
            DiffStatus::NotInstalled => out.push_str(&format!(
                "{} {} is not installed\n",
                Icon::Pending.colored(ui.color, ui.unicode),
                entry.name
            )),
            DiffStatus::UpToDate => out.push_str(&format!(
                "{} {} is up to date\n",
                Icon::Success.colored(ui.color, ui.unicode),
                entry.name
            )),
            DiffStatus::Changed(changes) => {
                out.push_str(&format!(
                    "{} {} ({} changed)\n",
                    Icon::Modified.colored(ui.color, ui.unicode),
                    entry.name,
                    changes.len()
                ));
                for change in changes {
                    let path = display_path(&change.file_path, cwd);
                    out.push('\n');
                    out.push_str(&render_patch_with_line_numbers(&path, &change.patch, ui.color));
                }
                out.push('\n');
            }
        }
    }

    for failure in &report.failures {
        out.push_str(&format!(
            "{} {}: {}\n",
            Icon::Error.colored(ui.color, ui.unicode),
            failure.name,
            failure.message
        ));
    }

    for collision in &report.collisions {
        out.push_str(&format!(
            "{} {} and {} both target {}\n",
            Icon::Warning.colored(ui.color, ui.unicode),
            collision.first,
            collision.second,
            display_path(&collision.path, cwd)
        ));
    }

    out.push_str(&render_diff_summary(report));
    out
}

pub fn render_diff_summary(report: &DiffReport) -> String {
    if report.entries.is_empty() && report.failures.is_empty() {
        return "No installed entries found\n".to_string();
    }

    let changed = report.changed().count();
    let up_to_date = report
        .entries
        .iter()
        .filter(|e| e.status == DiffStatus::UpToDate)
        .count();
    let mut line = format!("{} changed, {} up to date", changed, up_to_date);
    if !report.failures.is_empty() {
        line.push_str(&format!(", {} failed", report.failures.len()));
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{DiffFailure, EntryDiff};
    use crate::domain::services::{Change, Differ};

    fn report() -> DiffReport {
        let patch = Differ::new().hunks("a\nb\n", "a\nc\n");
        DiffReport {
            entries: vec![
                EntryDiff {
                    name: "button".to_string(),
                    status: DiffStatus::Changed(vec![Change::from_patch(
                        "/app/components/ui/button.tsx",
                        patch,
                    )
                    .unwrap()]),
                },
                EntryDiff {
                    name: "utils".to_string(),
                    status: DiffStatus::UpToDate,
                },
            ],
            failures: vec![DiffFailure {
                name: "card".to_string(),
                message: "not found".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn renders_changed_entries_with_patch() {
        let out = render_diff_report(&report(), Path::new("/app"), &UiContext::plain());
        assert!(out.starts_with("[~] button (1 changed)\n\n--- registry/components/ui/button.tsx\n"));
        assert!(out.contains("  2 + c\n"));
        assert!(out.contains("[OK] utils is up to date\n"));
        assert!(out.contains("[FAIL] card: not found\n"));
        assert!(out.ends_with("1 changed, 1 up to date, 1 failed\n"));
    }

    #[test]
    fn empty_report_summary() {
        assert_eq!(
            render_diff_summary(&DiffReport::default()),
            "No installed entries found\n"
        );
    }

    #[test]
    fn header_shows_registry() {
        let out = render_diff_header("./registry", &UiContext::plain());
        assert_eq!(out, "[DIFF] Componentry Diff\n  Registry: ./registry\n");
    }
}
