//! Lossless stylesheet parser
//!
//! Whitespace and stray semicolons between nodes land in the next node's
//! `before` (or the container's `after`), so nothing is dropped.

use super::node::{AtRule, Comment, Declaration, Node, Rule, Stylesheet};
use crate::error::{ComponentryError, ComponentryResult};

/// Parse `src` into a [`Stylesheet`].
pub fn parse(src: &str) -> ComponentryResult<Stylesheet> {
    let mut parser = Parser { src, pos: 0 };
    let (nodes, after) = parser.container(None)?;
    Ok(Stylesheet { nodes, after })
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn bytes(&self) -> &'a [u8] {
        self.src.as_bytes()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    fn peek_at(&self, pos: usize) -> Option<u8> {
        self.bytes().get(pos).copied()
    }

    fn error(&self, at: usize, message: impl Into<String>) -> ComponentryError {
        let line = self.src[..at.min(self.src.len())].matches('\n').count() + 1;
        ComponentryError::StylesheetParse {
            line,
            message: message.into(),
        }
    }

    /// Children up to the matching `}` (or end of input at the root).
    fn container(&mut self, open_at: Option<usize>) -> ComponentryResult<(Vec<Node>, String)> {
        let mut nodes = Vec::new();

        loop {
            let start = self.pos;
            while matches!(self.peek(), Some(b) if b.is_ascii_whitespace() || b == b';') {
                self.pos += 1;
            }
            let pending = self.src[start..self.pos].to_string();

            let Some(byte) = self.peek() else {
                if let Some(open) = open_at {
                    return Err(self.error(open, "unclosed block"));
                }
                return Ok((nodes, pending));
            };

            match byte {
                b'}' => {
                    if open_at.is_none() {
                        return Err(self.error(self.pos, "unexpected '}'"));
                    }
                    self.pos += 1;
                    return Ok((nodes, pending));
                }
                b'/' if self.peek_at(self.pos + 1) == Some(b'*') => {
                    let end = self.comment_end(self.pos)?;
                    nodes.push(Node::Comment(Comment {
                        before: pending,
                        text: self.src[self.pos..end].to_string(),
                    }));
                    self.pos = end;
                }
                b'@' => nodes.push(self.at_rule(pending)?),
                _ => nodes.push(self.statement(pending)?),
            }
        }
    }

    /// Offset just past the `*/` closing the comment that opens at `start`.
    fn comment_end(&self, start: usize) -> ComponentryResult<usize> {
        self.src[start + 2..]
            .find("*/")
            .map(|i| start + 2 + i + 2)
            .ok_or_else(|| self.error(start, "unclosed comment"))
    }

    /// Scan from the current position to the first `{`, `;` or `}` outside
    /// strings, comments and brackets. Does not consume the terminator.
    fn scan_prelude(&self) -> ComponentryResult<(usize, Option<u8>)> {
        let bytes = self.bytes();
        let mut i = self.pos;
        let mut depth = 0usize;
        let mut open_bracket = 0usize;

        while i < bytes.len() {
            match bytes[i] {
                quote @ (b'"' | b'\'') => {
                    let start = i;
                    i += 1;
                    loop {
                        match bytes.get(i) {
                            None | Some(b'\n') => {
                                return Err(self.error(start, "unclosed string"));
                            }
                            Some(b'\\') => i += 2,
                            Some(&b) if b == quote => break,
                            Some(_) => i += 1,
                        }
                    }
                }
                b'/' if bytes.get(i + 1) == Some(&b'*') => {
                    i = self.comment_end(i)?;
                    continue;
                }
                b'(' | b'[' => {
                    if depth == 0 {
                        open_bracket = i;
                    }
                    depth += 1;
                }
                b')' | b']' => depth = depth.saturating_sub(1),
                b @ (b'{' | b';' | b'}') if depth == 0 => return Ok((i, Some(b))),
                _ => {}
            }
            i += 1;
        }

        if depth > 0 {
            return Err(self.error(open_bracket, "unclosed bracket"));
        }
        Ok((bytes.len(), None))
    }

    fn at_rule(&mut self, before: String) -> ComponentryResult<Node> {
        let src = self.src;
        let at = self.pos;
        self.pos += 1;
        let name_start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_alphanumeric() || b == b'-' || b == b'_') {
            self.pos += 1;
        }
        if self.pos == name_start {
            return Err(self.error(at, "at-rule without a name"));
        }
        let name = src[name_start..self.pos].to_string();

        let ws_start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
        let after_name = src[ws_start..self.pos].to_string();

        let params_start = self.pos;
        let (end, terminator) = self.scan_prelude()?;
        let raw = &src[params_start..end];
        let params = raw.trim_end();

        let mut rule = AtRule {
            before,
            name,
            after_name,
            params: params.to_string(),
            between: raw[params.len()..].to_string(),
            nodes: None,
            after: String::new(),
            semicolon: false,
        };

        match terminator {
            Some(b'{') => {
                self.pos = end + 1;
                let (nodes, after) = self.container(Some(end))?;
                rule.nodes = Some(nodes);
                rule.after = after;
            }
            Some(b';') => {
                self.pos = end + 1;
                rule.semicolon = true;
            }
            _ => {
                // unterminated statement: trailing whitespace belongs to the container
                rule.between.clear();
                self.pos = params_start + params.len();
            }
        }
        Ok(Node::AtRule(rule))
    }

    fn statement(&mut self, before: String) -> ComponentryResult<Node> {
        let src = self.src;
        let start = self.pos;
        let (end, terminator) = self.scan_prelude()?;
        let raw = &src[start..end];

        if terminator == Some(b'{') {
            let selector = raw.trim_end();
            let between = raw[selector.len()..].to_string();
            self.pos = end + 1;
            let (nodes, after) = self.container(Some(end))?;
            return Ok(Node::Rule(Rule {
                before,
                selector: selector.to_string(),
                between,
                nodes,
                after,
            }));
        }

        let text = raw.trim_end();
        let semicolon = terminator == Some(b';');
        let value_after = if semicolon {
            self.pos = end + 1;
            raw[text.len()..].to_string()
        } else {
            self.pos = start + text.len();
            String::new()
        };

        let colon = find_colon(text).ok_or_else(|| {
            let word = text.split_whitespace().next().unwrap_or(text);
            self.error(start, format!("unknown word '{}'", word))
        })?;

        let prop_raw = &text[..colon];
        let prop = prop_raw.trim_end();
        if prop.is_empty() {
            return Err(self.error(start, "declaration without a property"));
        }
        let rest = &text[colon + 1..];
        let value = rest.trim_start();
        let between = format!(
            "{}:{}",
            &prop_raw[prop.len()..],
            &rest[..rest.len() - value.len()]
        );

        Ok(Node::Declaration(Declaration {
            before,
            prop: prop.to_string(),
            between,
            value: value.to_string(),
            value_after,
            semicolon,
        }))
    }
}

/// First `:` outside strings and brackets.
fn find_colon(text: &str) -> Option<usize> {
    let mut quote: Option<u8> = None;
    let mut depth = 0usize;
    let mut escaped = false;

    for (i, b) in text.bytes().enumerate() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == q {
                quote = None;
            }
            continue;
        }
        match b {
            b'"' | b'\'' => quote = Some(b),
            b'(' | b'[' => depth += 1,
            b')' | b']' => depth = depth.saturating_sub(1),
            b':' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}
