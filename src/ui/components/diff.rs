use crossterm::style::Stylize;

use crate::domain::services::{Hunk, HunkTag};
use crate::ui::theme;

/// Render a patch (registry rendering → project copy) as a unified diff
/// with old/new line numbers.
pub fn render_patch_with_line_numbers(path: &str, patch: &[Hunk], supports_color: bool) -> String {
    let old_lines: usize = patch
        .iter()
        .filter(|h| h.tag != HunkTag::Added)
        .map(Hunk::line_count)
        .sum();
    let new_lines: usize = patch
        .iter()
        .filter(|h| h.tag != HunkTag::Removed)
        .map(Hunk::line_count)
        .sum();
    let width = old_lines.max(new_lines).max(1).to_string().len();

    let mut out = String::new();

    let header_a = format!("--- registry/{}", path);
    let header_b = format!("+++ project/{}", path);
    out.push_str(&color_line(&header_a, None, supports_color));
    out.push('\n');
    out.push_str(&color_line(&header_b, None, supports_color));
    out.push('\n');

    let mut old_no = 0usize;
    let mut new_no = 0usize;
    for hunk in patch {
        for value in hunk.value.lines() {
            let (old_col, new_col, sign) = match hunk.tag {
                HunkTag::Removed => {
                    old_no += 1;
                    (Some(old_no), None, "-")
                }
                HunkTag::Added => {
                    new_no += 1;
                    (None, Some(new_no), "+")
                }
                HunkTag::Unchanged => {
                    old_no += 1;
                    new_no += 1;
                    (Some(old_no), Some(new_no), " ")
                }
            };

            let old_col = old_col
                .map(|n| format!("{:>width$}", n, width = width))
                .unwrap_or_else(|| " ".repeat(width));
            let new_col = new_col
                .map(|n| format!("{:>width$}", n, width = width))
                .unwrap_or_else(|| " ".repeat(width));

            let line = format!("{old_col} {new_col} {sign} {value}");
            out.push_str(&color_line(&line, Some(hunk.tag), supports_color));
            out.push('\n');
        }
    }

    out
}

/// `None` styles a header line.
fn color_line(s: &str, tag: Option<HunkTag>, supports_color: bool) -> String {
    if !supports_color {
        return s.to_string();
    }

    match tag {
        None => format!("{}", s.with(theme::colors::INFO)),
        Some(HunkTag::Removed) => format!("{}", s.with(theme::colors::ERROR)),
        Some(HunkTag::Added) => format!("{}", s.with(theme::colors::SUCCESS)),
        Some(HunkTag::Unchanged) => format!("{}", s.with(theme::colors::DIM)),
    }
}
