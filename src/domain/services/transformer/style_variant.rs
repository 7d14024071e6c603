//! Style preset application
//!
//! Registry sources mark styleable spots with `cn-*` class tokens. The
//! configured style preset maps each token to concrete utility classes.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::{rewrite_string_literals, TransformContext, Transformer};

/// `cn-*` tokens that survive even without a mapping
const ALLOWLIST: &[&str] = &["cn-menu-target"];

pub struct StyleVariantTransformer;

impl Transformer for StyleVariantTransformer {
    fn name(&self) -> &'static str {
        "style-variant"
    }

    fn apply(&self, text: &str, ctx: &TransformContext<'_>) -> String {
        let Some(style_map) = ctx.style_map else {
            return text.to_string();
        };

        // a token contributes its classes once per file
        let mut applied: HashSet<String> = HashSet::new();
        rewrite_string_literals(text, |body| apply_to_class_list(body, style_map, &mut applied))
    }
}

fn is_style_token(class: &str) -> bool {
    class.len() > 3
        && class.starts_with("cn-")
        && class[3..]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// New class list for a literal body, `None` when it has no `cn-*` token.
fn apply_to_class_list(
    body: &str,
    style_map: &IndexMap<String, String>,
    applied: &mut HashSet<String>,
) -> Option<String> {
    let classes: Vec<&str> = body.split_whitespace().collect();
    if !classes.iter().any(|c| is_style_token(c)) {
        return None;
    }

    let mut mapped: Vec<&str> = Vec::new();
    let mut kept: Vec<&str> = Vec::new();
    for class in &classes {
        if !is_style_token(class) {
            kept.push(*class);
            continue;
        }
        if applied.insert((*class).to_string()) {
            if let Some(replacement) = style_map.get(*class) {
                mapped.extend(replacement.split_whitespace());
            }
        }
        if ALLOWLIST.contains(class) {
            kept.push(*class);
        }
    }

    let mut result: Vec<&str> = Vec::with_capacity(mapped.len() + kept.len());
    for class in mapped.into_iter().chain(kept) {
        if !result.contains(&class) {
            result.push(class);
        }
    }

    let rewritten = result.join(" ");
    if rewritten == body {
        None
    } else {
        Some(rewritten)
    }
}
