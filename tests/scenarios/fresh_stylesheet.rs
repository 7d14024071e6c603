//! Scenario: tokens merged into a stylesheet without a base layer
//!
//! Merging `{light: {background: white}, dark: {background: black}}` creates
//! a base layer with a `:root` rule and a `.dark` rule.

use componentry::domain::entities::SchemeTokens;
use componentry::domain::services::{merge_stylesheet, validate};
use serde_json::json;

fn tokens() -> SchemeTokens {
    let mut tokens = SchemeTokens::new();
    tokens.insert(
        "light".to_string(),
        [("background".to_string(), "white".to_string())].into_iter().collect(),
    );
    tokens.insert(
        "dark".to_string(),
        [("background".to_string(), "black".to_string())].into_iter().collect(),
    );
    tokens
}

#[test]
fn scenario_base_layer_is_created() {
    let src = "@tailwind base;\n\nh1 { font-weight: 700; }\n";

    let out = merge_stylesheet(src, &tokens(), &[]).unwrap();

    assert_eq!(
        out,
        "@tailwind base;\n\nh1 { font-weight: 700; }\n\n@layer base {\n  :root {\n    --background: white;\n  }\n  .dark {\n    --background: black;\n  }\n}\n"
    );
}

#[test]
fn scenario_merging_again_changes_nothing() {
    let once = merge_stylesheet("", &tokens(), &[]).unwrap();
    let twice = merge_stylesheet(&once, &tokens(), &[]).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn scenario_registry_tokens_merge_in_registry_order() {
    let raw = json!([{"name": "neutral", "type": "registry:style", "cssVars": {
        "light": {"foreground": "a", "background": "b"},
        "dark": {"foreground": "c", "background": "d"}
    }}]);
    let validation = validate(&raw).unwrap();
    let neutral = validation.index.get("neutral").unwrap();

    let out = merge_stylesheet("", &neutral.css_vars, &[]).unwrap();

    assert_eq!(
        out,
        "@layer base {\n  :root {\n    --foreground: a;\n    --background: b;\n  }\n  .dark {\n    --foreground: c;\n    --background: d;\n  }\n}\n"
    );
}
