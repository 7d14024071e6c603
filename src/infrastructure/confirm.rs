//! Interactive confirmation
//!
//! Prompts on the terminal before an install writes anything.

use dialoguer::theme::ColorfulTheme;

use crate::domain::ports::{Confirm, PendingWrite};

/// Asks the user via a dialoguer yes/no prompt. Defaults to yes.
#[derive(Debug, Default)]
pub struct InteractiveConfirm;

impl InteractiveConfirm {
    pub fn new() -> Self {
        Self
    }
}

impl Confirm for InteractiveConfirm {
    fn confirm(&self, pending: &PendingWrite) -> bool {
        dialoguer::Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt_text(pending))
            .default(true)
            .interact()
            // a closed stdin or a broken terminal counts as "no"
            .unwrap_or(false)
    }
}

/// "Write 3 new files, overwrite 1 and update the stylesheet?"
pub fn prompt_text(pending: &PendingWrite) -> String {
    let mut parts = Vec::new();
    if pending.create > 0 {
        parts.push(format!(
            "write {} new file{}",
            pending.create,
            if pending.create == 1 { "" } else { "s" }
        ));
    }
    if pending.update > 0 {
        parts.push(format!("overwrite {}", pending.update));
    }
    if pending.stylesheet {
        parts.push("update the stylesheet".to_string());
    }

    let body = match parts.len() {
        0 => return "Nothing to write. Continue?".to_string(),
        1 => parts.remove(0),
        n => {
            let last = parts.remove(n - 1);
            format!("{} and {}", parts.join(", "), last)
        }
    };

    let mut chars = body.chars();
    match chars.next() {
        Some(first) => format!("{}{}?", first.to_uppercase(), chars.as_str()),
        None => body,
    }
}
