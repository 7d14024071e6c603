//! Property tests for stylesheet merging.

use proptest::prelude::*;

use componentry::domain::entities::{BaseRule, SchemeTokens, TokenMap};
use componentry::domain::services::{default_base_rules, merge_stylesheet};

const SEEDS: &[&str] = &[
    "",
    "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n",
    "@layer base {\n  :root {\n    --background: 0 0% 100%;\n  }\n}\n",
    "@layer base{:root{--accent:9 9% 9%}.dark{--accent:1 1% 1%;}}",
    "/* theme */\n@layer base {\n  body {\n    margin: 0;\n  }\n}\n\n.x { color: red }\n",
];

fn token_map() -> impl Strategy<Value = TokenMap> {
    proptest::collection::vec(
        ("tk-[a-z]{1,8}(-[a-z]{1,5})?", "[0-9]{1,3} [0-9]{1,2}% [0-9]{1,2}%"),
        0..6,
    )
    .prop_map(|pairs| pairs.into_iter().collect())
}

fn scheme_tokens() -> impl Strategy<Value = SchemeTokens> {
    (token_map(), token_map(), any::<bool>()).prop_map(|(light, dark, with_dark)| {
        let mut tokens = SchemeTokens::new();
        tokens.insert("light".to_string(), light);
        if with_dark {
            tokens.insert("dark".to_string(), dark);
        }
        tokens
    })
}

fn base_rules() -> impl Strategy<Value = Vec<BaseRule>> {
    (any::<bool>(), proptest::collection::vec("[a-z]{1,6}", 0..3)).prop_map(|(defaults, extra)| {
        let mut rules = if defaults { default_base_rules() } else { Vec::new() };
        for class in extra {
            rules.push(BaseRule::new("html", format!("{}-smooth", class)));
        }
        rules
    })
}

/// Unrelated rules placed before the seed stylesheet
fn prefix() -> impl Strategy<Value = String> {
    proptest::collection::vec(("[a-z]{1,6}", "[a-z]{3,8}"), 0..4).prop_map(|rules| {
        rules
            .into_iter()
            .map(|(class, value)| format!(".{} {{ color: {}; }}\n", class, value))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: merging the same tokens twice equals merging once.
    #[test]
    fn property_merge_is_idempotent(
        seed in prop::sample::select(SEEDS),
        prefix in prefix(),
        tokens in scheme_tokens(),
        rules in base_rules(),
    ) {
        let src = format!("{}{}", prefix, seed);
        let once = merge_stylesheet(&src, &tokens, &rules).unwrap();
        let twice = merge_stylesheet(&once, &tokens, &rules).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: unrelated content survives byte-for-byte.
    #[test]
    fn property_merge_preserves_unrelated_content(
        seed in prop::sample::select(SEEDS),
        prefix in prefix(),
        tokens in scheme_tokens(),
        rules in base_rules(),
    ) {
        let src = format!("{}{}", prefix, seed);
        let out = merge_stylesheet(&src, &tokens, &rules).unwrap();

        prop_assert!(out.starts_with(&prefix), "prefix lost:\n{}", out);
        if !seed.contains("@layer base") {
            prop_assert!(out.starts_with(src.trim_end()), "content lost:\n{}", out);
        }
        if seed.contains(".x { color: red }") {
            prop_assert!(out.contains("\n\n.x { color: red }\n"), "rule moved:\n{}", out);
        }
    }

    /// PROPERTY: every merged token is declared exactly once with its value.
    #[test]
    fn property_merged_tokens_are_declared_once(
        seed in prop::sample::select(SEEDS),
        tokens in scheme_tokens(),
    ) {
        let out = merge_stylesheet(seed, &tokens, &[]).unwrap();
        let light = tokens.get("light").cloned().unwrap_or_default();
        for (name, value) in &light {
            let decl = format!("--{}: {}", name, value);
            prop_assert!(out.contains(&decl), "missing {:?} in\n{}", decl, out);
        }
        // a single scheme (light) makes token names unambiguous
        if tokens.len() == 1 {
            for name in light.keys() {
                let needle = format!("--{}:", name);
                prop_assert_eq!(out.matches(&needle).count(), 1);
            }
        }
    }
}
