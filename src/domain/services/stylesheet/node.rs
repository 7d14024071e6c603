//! Stylesheet parse tree
//!
//! Every node keeps the raw text around it (`before`, `between`, `after`),
//! so serialising an unmodified tree reproduces the input exactly.

use std::fmt::{self, Write};

/// A parsed stylesheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub nodes: Vec<Node>,
    /// Trailing text after the last node
    pub after: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Rule(Rule),
    AtRule(AtRule),
    Declaration(Declaration),
    Comment(Comment),
}

/// `selector { … }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub before: String,
    pub selector: String,
    /// Between selector and `{`
    pub between: String,
    pub nodes: Vec<Node>,
    /// Between the last child and `}`
    pub after: String,
}

/// `@name params;` or `@name params { … }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRule {
    pub before: String,
    pub name: String,
    /// Between the name and the params
    pub after_name: String,
    pub params: String,
    /// Between the params and `{` / `;`
    pub between: String,
    /// `None` for statement at-rules like `@apply` or `@import`
    pub nodes: Option<Vec<Node>>,
    /// Between the last child and `}`
    pub after: String,
    /// Statement at-rules only: terminated by `;`
    pub semicolon: bool,
}

/// `prop: value;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub before: String,
    pub prop: String,
    /// Between prop and value, colon included
    pub between: String,
    pub value: String,
    /// Between the value and `;`
    pub value_after: String,
    pub semicolon: bool,
}

/// `/* … */`, delimiters included in `text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub before: String,
    pub text: String,
}

impl Node {
    pub fn before(&self) -> &str {
        match self {
            Node::Rule(n) => &n.before,
            Node::AtRule(n) => &n.before,
            Node::Declaration(n) => &n.before,
            Node::Comment(n) => &n.before,
        }
    }

    pub fn set_before(&mut self, before: String) {
        match self {
            Node::Rule(n) => n.before = before,
            Node::AtRule(n) => n.before = before,
            Node::Declaration(n) => n.before = before,
            Node::Comment(n) => n.before = before,
        }
    }

    /// Make a statement node end with `;` so a sibling can follow it.
    pub(crate) fn terminate(&mut self) {
        match self {
            Node::Declaration(d) => d.semicolon = true,
            Node::AtRule(a) if a.nodes.is_none() => a.semicolon = true,
            _ => {}
        }
    }
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            before: String::new(),
            selector: selector.into(),
            between: " ".to_string(),
            nodes: Vec::new(),
            after: String::new(),
        }
    }
}

impl AtRule {
    /// Block at-rule such as `@layer base { }`
    pub fn block(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            before: String::new(),
            name: name.into(),
            after_name: " ".to_string(),
            params: params.into(),
            between: " ".to_string(),
            nodes: Some(Vec::new()),
            after: String::new(),
            semicolon: false,
        }
    }

    /// Statement at-rule such as `@apply border-border;`
    pub fn statement(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            before: String::new(),
            name: name.into(),
            after_name: " ".to_string(),
            params: params.into(),
            between: String::new(),
            nodes: None,
            after: String::new(),
            semicolon: true,
        }
    }
}

impl Declaration {
    pub fn new(prop: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            before: String::new(),
            prop: prop.into(),
            between: ": ".to_string(),
            value: value.into(),
            value_after: String::new(),
            semicolon: true,
        }
    }
}

fn write_nodes(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    for node in nodes {
        write!(f, "{}", node)?;
    }
    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Rule(rule) => {
                write!(f, "{}{}{}{{", rule.before, rule.selector, rule.between)?;
                write_nodes(f, &rule.nodes)?;
                write!(f, "{}}}", rule.after)
            }
            Node::AtRule(at) => {
                write!(f, "{}@{}{}{}{}", at.before, at.name, at.after_name, at.params, at.between)?;
                match &at.nodes {
                    Some(nodes) => {
                        f.write_char('{')?;
                        write_nodes(f, nodes)?;
                        write!(f, "{}}}", at.after)
                    }
                    None if at.semicolon => f.write_char(';'),
                    None => Ok(()),
                }
            }
            Node::Declaration(decl) => {
                write!(
                    f,
                    "{}{}{}{}{}",
                    decl.before, decl.prop, decl.between, decl.value, decl.value_after
                )?;
                if decl.semicolon {
                    f.write_char(';')?;
                }
                Ok(())
            }
            Node::Comment(comment) => write!(f, "{}{}", comment.before, comment.text),
        }
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nodes(f, &self.nodes)?;
        f.write_str(&self.after)
    }
}
