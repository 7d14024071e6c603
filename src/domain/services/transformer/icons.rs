//! Icon placeholder substitution
//!
//! Registry sources render icons through `<IconPlaceholder lucide="CheckIcon"
//! tabler="IconCheck" … />`. The placeholder is replaced by the icon named
//! for the configured library and the placeholder import by an import from
//! that library's package.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{TransformContext, Transformer};

/// Attribute name → package for every supported icon library
const LIBRARIES: &[(&str, &str)] = &[
    ("lucide", "lucide-react"),
    ("tabler", "@tabler/icons-react"),
    ("radix", "@radix-ui/react-icons"),
    ("hugeicons", "@hugeicons/core-free-icons"),
];

const HUGEICONS_WRAPPER_PACKAGE: &str = "@hugeicons/react";

static PLACEHOLDER_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*import\s*\{\s*IconPlaceholder\s*\}\s*from\s*["'][^"'\n]+["'](;?)[ \t]*$"#)
        .expect("valid regex")
});

static PLACEHOLDER_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<IconPlaceholder((?:\s+[A-Za-z_][\w.:-]*(?:=(?:"[^"]*"|'[^']*'|\{[^}]*\}))?)*)\s*/>"#,
    )
    .expect("valid regex")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_][\w.:-]*)(?:=("[^"]*"|'[^']*'|\{[^}]*\}))?"#).expect("valid regex")
});

pub struct IconTransformer;

impl Transformer for IconTransformer {
    fn name(&self) -> &'static str {
        "icons"
    }

    fn apply(&self, text: &str, ctx: &TransformContext<'_>) -> String {
        let library = ctx.config.icon_library();
        let Some(package) = package_for(library) else {
            return text.to_string();
        };
        let Some(import) = PLACEHOLDER_IMPORT.find(text) else {
            return text.to_string();
        };
        let semicolon = PLACEHOLDER_IMPORT
            .captures(import.as_str())
            .and_then(|c| c.get(1))
            .is_some_and(|m| !m.as_str().is_empty());

        let mut icons: Vec<String> = Vec::new();
        let mut unresolved = false;
        let mut replace = |segment: &str| {
            PLACEHOLDER_ELEMENT
                .replace_all(segment, |caps: &Captures<'_>| {
                    match render_icon(&caps[1], library) {
                        Some((icon, element)) => {
                            if !icons.contains(&icon) {
                                icons.push(icon);
                            }
                            element
                        }
                        None => {
                            unresolved = true;
                            caps[0].to_string()
                        }
                    }
                })
                .into_owned()
        };
        let before = replace(&text[..import.start()]);
        let after = replace(&text[import.end()..]);

        if icons.is_empty() {
            return text.to_string();
        }

        let end = if semicolon { ";" } else { "" };
        let mut imports = Vec::new();
        if library == "hugeicons" {
            imports.push(format!(
                "import {{ HugeiconsIcon }} from \"{}\"{}",
                HUGEICONS_WRAPPER_PACKAGE, end
            ));
        }
        imports.push(format!(
            "import {{ {} }} from \"{}\"{}",
            icons.join(", "),
            package,
            end
        ));
        if unresolved {
            imports.push(import.as_str().trim().to_string());
        }

        format!("{}{}{}", before, imports.join("\n"), after)
    }
}

fn package_for(library: &str) -> Option<&'static str> {
    LIBRARIES
        .iter()
        .find(|(name, _)| *name == library)
        .map(|(_, package)| *package)
}

/// Rendered element for one placeholder, `None` when it names no icon for
/// `library`.
fn render_icon(attributes: &str, library: &str) -> Option<(String, String)> {
    let mut icon = None;
    let mut props: Vec<&str> = Vec::new();
    let mut has_stroke_width = false;

    for caps in ATTRIBUTE.captures_iter(attributes) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let name = name.as_str();
        if name == library {
            icon = caps
                .get(2)
                .map(|v| v.as_str().trim_matches(['"', '\'', '{', '}']).trim().to_string())
                .filter(|v| !v.is_empty());
        } else if package_for(name).is_none() {
            has_stroke_width |= name == "strokeWidth";
            props.push(whole.as_str());
        }
    }

    let icon = icon?;
    let mut parts: Vec<String> = Vec::new();
    let tag = if library == "hugeicons" {
        parts.push(format!("icon={{{}}}", icon));
        if !has_stroke_width {
            parts.push("strokeWidth={2}".to_string());
        }
        "HugeiconsIcon".to_string()
    } else {
        icon.clone()
    };
    parts.extend(props.iter().map(|p| p.to_string()));

    let element = if parts.is_empty() {
        format!("<{} />", tag)
    } else {
        format!("<{} {} />", tag, parts.join(" "))
    };
    Some((icon, element))
}
