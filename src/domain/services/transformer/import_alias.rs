//! Import alias rewriting
//!
//! Registry sources import siblings through registry-internal paths
//! (`@/registry/new-york/ui/button`) or the default project layout
//! (`@/components/ui/button`). Both are rewritten to the aliases configured
//! for the consuming project.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{TransformContext, Transformer};
use crate::config::AliasConfig;

static MODULE_SPECIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\bfrom\s*|\bimport\s*\(\s*|\bimport\s+|\brequire\s*\(\s*)(["'])([^"'\n]+)(["'])"#)
        .expect("valid regex")
});

pub struct ImportAliasTransformer;

impl Transformer for ImportAliasTransformer {
    fn name(&self) -> &'static str {
        "import-alias"
    }

    fn apply(&self, text: &str, ctx: &TransformContext<'_>) -> String {
        let aliases = ctx.config.aliases();
        MODULE_SPECIFIER
            .replace_all(text, |caps: &Captures<'_>| {
                let specifier = &caps[3];
                match rewrite_specifier(specifier, aliases) {
                    Some(rewritten) => {
                        format!("{}{}{}{}", &caps[1], &caps[2], rewritten, &caps[4])
                    }
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

/// Which configured alias a rule targets
#[derive(Clone, Copy)]
enum Target {
    Ui,
    Utils,
    Lib,
    Hooks,
    Components,
}

impl Target {
    fn alias(self, aliases: &AliasConfig) -> String {
        match self {
            Target::Ui => aliases.ui(),
            Target::Utils => aliases.utils.clone(),
            Target::Lib => aliases.lib(),
            Target::Hooks => aliases.hooks(),
            Target::Components => aliases.components.clone(),
        }
    }
}

/// Rewrite one specifier, `None` when no rule applies.
pub(super) fn rewrite_specifier(specifier: &str, aliases: &AliasConfig) -> Option<String> {
    if let Some(rest) = specifier.strip_prefix("@/registry/") {
        // drop the style segment
        let (_, inner) = rest.split_once('/')?;
        return rewrite_inner(inner, aliases);
    }

    if !specifier.starts_with("@/") {
        return None;
    }
    let (target, remainder) = match_rule(&specifier[2..])?;
    let alias = target.alias(aliases);

    // already expressed through the configured alias
    if specifier == alias || specifier.starts_with(&format!("{}/", alias)) {
        return None;
    }
    Some(join(&alias, remainder))
}

fn rewrite_inner(inner: &str, aliases: &AliasConfig) -> Option<String> {
    let (target, remainder) = match_rule(inner).or_else(|| {
        ["components/", "blocks/"]
            .iter()
            .find_map(|p| inner.strip_prefix(p))
            .map(|rest| (Target::Components, rest))
    })?;
    Some(join(&target.alias(aliases), remainder))
}

/// Match the project-layout rules against a path without its `@/` prefix.
fn match_rule(path: &str) -> Option<(Target, &str)> {
    if path == "lib/utils" {
        return Some((Target::Utils, ""));
    }
    const RULES: &[(&str, Target)] = &[
        ("components/ui/", Target::Ui),
        ("ui/", Target::Ui),
        ("components/", Target::Components),
        ("hooks/", Target::Hooks),
        ("lib/", Target::Lib),
    ];
    RULES
        .iter()
        .find_map(|(prefix, target)| path.strip_prefix(prefix).map(|rest| (*target, rest)))
}

fn join(alias: &str, remainder: &str) -> String {
    if remainder.is_empty() {
        alias.to_string()
    } else {
        format!("{}/{}", alias.trim_end_matches('/'), remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom() -> AliasConfig {
        AliasConfig {
            components: "~/app/components".to_string(),
            utils: "~/app/lib/cn".to_string(),
            ui: Some("~/design/ui".to_string()),
            lib: None,
            hooks: Some("~/app/hooks".to_string()),
        }
    }

    #[test]
    fn registry_paths_map_to_aliases() {
        let aliases = custom();
        assert_eq!(
            rewrite_specifier("@/registry/new-york/ui/button", &aliases).as_deref(),
            Some("~/design/ui/button")
        );
        assert_eq!(
            rewrite_specifier("@/registry/new-york/lib/utils", &aliases).as_deref(),
            Some("~/app/lib/cn")
        );
        assert_eq!(
            rewrite_specifier("@/registry/default/hooks/use-mobile", &aliases).as_deref(),
            Some("~/app/hooks/use-mobile")
        );
        assert_eq!(
            rewrite_specifier("@/registry/new-york/blocks/login-01/form", &aliases).as_deref(),
            Some("~/app/components/login-01/form")
        );
    }

    #[test]
    fn project_layout_paths_map_to_aliases() {
        let aliases = custom();
        assert_eq!(
            rewrite_specifier("@/components/ui/card", &aliases).as_deref(),
            Some("~/design/ui/card")
        );
        assert_eq!(
            rewrite_specifier("@/lib/utils", &aliases).as_deref(),
            Some("~/app/lib/cn")
        );
        assert_eq!(
            rewrite_specifier("@/components/theme-provider", &aliases).as_deref(),
            Some("~/app/components/theme-provider")
        );
    }

    #[test]
    fn default_aliases_leave_project_paths_alone() {
        let aliases = AliasConfig::default();
        assert_eq!(rewrite_specifier("@/components/ui/card", &aliases), None);
        assert_eq!(rewrite_specifier("@/lib/utils", &aliases), None);
    }

    #[test]
    fn nested_alias_is_not_applied_twice() {
        let aliases = AliasConfig {
            components: "@/components/custom".to_string(),
            ..AliasConfig::default()
        };
        let once = rewrite_specifier("@/components/header", &aliases).unwrap();
        assert_eq!(once, "@/components/custom/header");
        assert_eq!(rewrite_specifier(&once, &aliases), None);
    }

    #[test]
    fn packages_are_untouched() {
        assert_eq!(rewrite_specifier("react", &AliasConfig::default()), None);
        assert_eq!(
            rewrite_specifier("@radix-ui/react-slot", &AliasConfig::default()),
            None
        );
    }
}
