//! Token inlining for projects without CSS variables
//!
//! `bg-background` only works when the stylesheet defines `--background`.
//! With CSS variables disabled, token utilities are replaced by the
//! palette's concrete colours for both schemes:
//! `hover:bg-primary/90` → `hover:bg-slate-900/90 dark:hover:bg-slate-50/90`.

use crate::domain::entities::Palette;

use super::{rewrite_string_literals, TransformContext, Transformer};

/// Utility prefixes that take a colour; longest first.
const COLOR_PREFIXES: &[&str] = &[
    "ring-offset-",
    "divide-",
    "outline-",
    "border-",
    "stroke-",
    "ring-",
    "fill-",
    "from-",
    "text-",
    "via-",
    "bg-",
    "to-",
];

pub struct InlineTokensTransformer;

impl Transformer for InlineTokensTransformer {
    fn name(&self) -> &'static str {
        "inline-tokens"
    }

    fn apply(&self, text: &str, ctx: &TransformContext<'_>) -> String {
        if ctx.config.css_variables() {
            return text.to_string();
        }
        let Some(palette) = ctx.palette else {
            return text.to_string();
        };
        if palette.inline_colors.is_empty() {
            return text.to_string();
        }

        rewrite_string_literals(text, |body| inline_class_list(body, palette))
    }
}

/// A class split into `variant:` chain, utility and `/modifier`.
struct ClassParts<'a> {
    variant: Option<&'a str>,
    utility: &'a str,
    modifier: Option<&'a str>,
}

fn split_class(class: &str) -> ClassParts<'_> {
    let (variant, rest) = match class.rsplit_once(':') {
        Some((variant, rest)) => (Some(variant), rest),
        None => (None, class),
    };
    let (utility, modifier) = match rest.split_once('/') {
        Some((utility, modifier)) => (utility, Some(modifier)),
        None => (rest, None),
    };
    ClassParts {
        variant,
        utility,
        modifier,
    }
}

fn compose(variant: Option<&str>, utility: &str, modifier: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(variant) = variant {
        out.push_str(variant);
        out.push(':');
    }
    out.push_str(utility);
    if let Some(modifier) = modifier {
        out.push('/');
        out.push_str(modifier);
    }
    out
}

fn inline_class_list(body: &str, palette: &Palette) -> Option<String> {
    let mut light: Vec<String> = Vec::new();
    let mut dark: Vec<String> = Vec::new();
    let mut changed = false;

    for class in body.split_whitespace() {
        match inline_class(class, palette) {
            Some((light_class, dark_class)) => {
                changed = true;
                if let Some(l) = light_class {
                    if !light.contains(&l) {
                        light.push(l);
                    }
                }
                if let Some(d) = dark_class {
                    if !dark.contains(&d) {
                        dark.push(d);
                    }
                }
            }
            None => {
                let kept = class.to_string();
                if !light.contains(&kept) {
                    light.push(kept);
                }
            }
        }
    }

    if !changed {
        return None;
    }
    light.extend(dark);
    Some(light.join(" "))
}

/// Light and dark replacements for one class, `None` if it is no token utility.
fn inline_class(class: &str, palette: &Palette) -> Option<(Option<String>, Option<String>)> {
    let parts = split_class(class);
    let prefix = COLOR_PREFIXES
        .iter()
        .find(|p| parts.utility.starts_with(**p))?;
    let token = &parts.utility[prefix.len()..];

    let is_dark_variant = parts
        .variant
        .is_some_and(|v| v.split(':').any(|segment| segment == "dark"));

    if is_dark_variant {
        let color = palette.inline_color("dark", token)?;
        let utility = format!("{}{}", prefix, color);
        return Some((None, Some(compose(parts.variant, &utility, parts.modifier))));
    }

    let light_color = palette.inline_color("light", token)?;
    let light_utility = format!("{}{}", prefix, light_color);
    let light = compose(parts.variant, &light_utility, parts.modifier);

    let dark = palette.inline_color("dark", token).map(|color| {
        let utility = format!("{}{}", prefix, color);
        let variant = match parts.variant {
            Some(v) => format!("dark:{}", v),
            None => "dark".to_string(),
        };
        compose(Some(&variant), &utility, parts.modifier)
    });

    Some((Some(light), dark))
}
