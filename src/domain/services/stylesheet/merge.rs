//! Token and base-rule merging
//!
//! All edits happen inside the base layer (`@layer base { … }`). Tokens go
//! into `:root` (light scheme) or `.<scheme>` rules; base rules become
//! `selector { @apply …; }`. Existing declarations are updated in place and
//! nothing outside the touched rules is re-rendered.

use super::node::{AtRule, Declaration, Node, Rule, Stylesheet};
use crate::domain::entities::{BaseRule, SchemeTokens, TokenMap};

const INDENT_UNIT: &str = "  ";

/// Selector holding the tokens of `scheme`.
pub fn scheme_selector(scheme: &str) -> String {
    if scheme == "light" {
        ":root".to_string()
    } else {
        format!(".{}", scheme)
    }
}

/// `--name` for a token given with or without its leading dashes.
pub fn custom_property(token: &str) -> String {
    format!("--{}", token.trim_start_matches("--"))
}

/// Apply tokens and base rules to `sheet`. Returns whether anything changed.
pub fn merge_into(sheet: &mut Stylesheet, tokens: &SchemeTokens, base_rules: &[BaseRule]) -> bool {
    let has_tokens = tokens.values().any(|t| !t.is_empty());
    if !has_tokens && base_rules.is_empty() {
        return false;
    }

    let (layer_index, created) = match find_base_layer(&sheet.nodes) {
        Some(index) => (index, false),
        None => {
            let mut layer = AtRule::block("layer", "base");
            layer.before = if sheet.nodes.is_empty() {
                String::new()
            } else {
                "\n\n".to_string()
            };
            layer.after = "\n".to_string();
            sheet.nodes.push(Node::AtRule(layer));
            if sheet.after.is_empty() {
                sheet.after = "\n".to_string();
            }
            (sheet.nodes.len() - 1, true)
        }
    };

    let Node::AtRule(layer) = &mut sheet.nodes[layer_index] else {
        return false;
    };
    let layer_indent = indent_of(&layer.before);
    let Some(children) = layer.nodes.as_mut() else {
        return false;
    };
    let mut layer = Container {
        children,
        after: &mut layer.after,
        indent: layer_indent,
    };

    let mut changed = created;
    for (scheme, scheme_tokens) in tokens {
        changed |= merge_tokens(&mut layer, &scheme_selector(scheme), scheme_tokens);
    }
    for rule in base_rules {
        changed |= merge_base_rule(&mut layer, rule);
    }
    changed
}

fn find_base_layer(nodes: &[Node]) -> Option<usize> {
    nodes.iter().position(|node| {
        matches!(node, Node::AtRule(at)
            if at.name == "layer" && at.params.trim() == "base" && at.nodes.is_some())
    })
}

fn find_rule(nodes: &[Node], selector: &str) -> Option<usize> {
    nodes
        .iter()
        .position(|node| matches!(node, Node::Rule(rule) if rule.selector.trim() == selector))
}

/// Children of the base layer plus the raws needed to append to it
struct Container<'a> {
    children: &'a mut Vec<Node>,
    after: &'a mut String,
    indent: String,
}

fn merge_tokens(layer: &mut Container<'_>, selector: &str, tokens: &TokenMap) -> bool {
    let (index, created) = match find_rule(layer.children, selector) {
        Some(index) => (index, false),
        None if tokens.is_empty() => return false,
        None => (append_rule(layer, selector), true),
    };

    let Node::Rule(rule) = &mut layer.children[index] else {
        return created;
    };
    let rule_indent = indent_of(&rule.before);

    let mut changed = created;
    for (token, value) in tokens {
        let prop = custom_property(token);
        let value = value.trim();
        let existing = rule.nodes.iter_mut().find_map(|node| match node {
            Node::Declaration(decl) if decl.prop == prop => Some(decl),
            _ => None,
        });

        match existing {
            Some(decl) if decl.value == value => {}
            Some(decl) => {
                decl.value = value.to_string();
                changed = true;
            }
            None => {
                append_child(
                    &mut rule.nodes,
                    &mut rule.after,
                    &rule_indent,
                    Node::Declaration(Declaration::new(prop, value)),
                );
                changed = true;
            }
        }
    }
    changed
}

fn merge_base_rule(layer: &mut Container<'_>, base: &BaseRule) -> bool {
    let apply = normalize_space(&base.apply);
    if apply.is_empty() {
        return false;
    }

    let (index, created) = match find_rule(layer.children, base.selector.trim()) {
        Some(index) => (index, false),
        None => (append_rule(layer, base.selector.trim()), true),
    };

    let Node::Rule(rule) = &mut layer.children[index] else {
        return created;
    };

    let present = rule.nodes.iter().any(|node| {
        matches!(node, Node::AtRule(at) if at.name == "apply" && normalize_space(&at.params) == apply)
    });
    if present {
        return created;
    }

    let rule_indent = indent_of(&rule.before);
    append_child(
        &mut rule.nodes,
        &mut rule.after,
        &rule_indent,
        Node::AtRule(AtRule::statement("apply", apply)),
    );
    true
}

/// Append an empty rule to the layer, returning its index.
fn append_rule(layer: &mut Container<'_>, selector: &str) -> usize {
    let indent = child_indent(layer.children, &layer.indent);
    let mut rule = Rule::new(selector);
    rule.before = match layer.children.last() {
        Some(last) if last.before().contains("\n\n") => format!("\n\n{}", indent),
        _ => format!("\n{}", indent),
    };
    rule.after = format!("\n{}", indent);
    layer.children.push(Node::Rule(rule));
    if !layer.after.contains('\n') {
        *layer.after = format!("\n{}", layer.indent);
    }
    layer.children.len() - 1
}

/// Append `node` to a container's children, one per line.
fn append_child(
    children: &mut Vec<Node>,
    container_after: &mut String,
    container_indent: &str,
    mut node: Node,
) {
    let indent = child_indent(children, container_indent);
    if let Some(last) = children.last_mut() {
        last.terminate();
    }
    node.set_before(format!("\n{}", indent));
    children.push(node);
    if !container_after.contains('\n') {
        *container_after = format!("\n{}", container_indent);
    }
}

/// Indentation used by existing children, or one level below the container.
fn child_indent(children: &[Node], container_indent: &str) -> String {
    children
        .iter()
        .rev()
        .map(Node::before)
        .find(|before| before.contains('\n'))
        .map(indent_of)
        .unwrap_or_else(|| format!("{}{}", container_indent, INDENT_UNIT))
}

/// Horizontal whitespace after the last line break of `before`.
fn indent_of(before: &str) -> String {
    match before.rsplit_once('\n') {
        Some((_, tail)) => tail.chars().filter(|c| *c == ' ' || *c == '\t').collect(),
        None => String::new(),
    }
}

fn normalize_space(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
