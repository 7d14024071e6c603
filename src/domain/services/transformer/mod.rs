//! Transformer Pipeline
//!
//! Rewrites registry source text for the consuming project. Every pass is a
//! pure `text -> text` function of the file content and the context, is
//! idempotent, and leaves text it does not recognise untouched.
//!
//! Passes run in a fixed order:
//! 1. [`ImportAliasTransformer`] - module specifiers to project aliases
//! 2. [`IconTransformer`] - icon placeholders to the configured icon library
//! 3. [`StyleVariantTransformer`] - `cn-*` tokens to the preset's classes
//! 4. [`InlineTokensTransformer`] - token utilities to palette colours
//!    (only with CSS variables disabled)

mod icons;
mod import_alias;
mod inline_tokens;
mod style_variant;

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{Captures, Regex};

use crate::config::ProjectConfig;
use crate::domain::entities::{Palette, RegistryEntry, RegistryFile, TransformedFile};
use crate::domain::services::target_path::resolve_target_path;
use crate::error::{ComponentryError, ComponentryResult};

pub use icons::IconTransformer;
pub use import_alias::ImportAliasTransformer;
pub use inline_tokens::InlineTokensTransformer;
pub use style_variant::StyleVariantTransformer;

/// Inputs shared by every pass
#[derive(Debug, Clone, Copy)]
pub struct TransformContext<'a> {
    pub config: &'a ProjectConfig,
    /// Base palette, required by the inline-token pass
    pub palette: Option<&'a Palette>,
    /// `cn-*` → classes of the configured style preset
    pub style_map: Option<&'a IndexMap<String, String>>,
}

impl<'a> TransformContext<'a> {
    pub fn new(config: &'a ProjectConfig) -> Self {
        Self {
            config,
            palette: None,
            style_map: None,
        }
    }

    pub fn with_palette(mut self, palette: Option<&'a Palette>) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_style_map(mut self, style_map: Option<&'a IndexMap<String, String>>) -> Self {
        self.style_map = style_map.filter(|m| !m.is_empty());
        self
    }
}

/// One rewrite pass
pub trait Transformer: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, text: &str, ctx: &TransformContext<'_>) -> String;
}

/// Ordered list of passes
pub struct TransformerPipeline {
    passes: Vec<Box<dyn Transformer>>,
}

impl Default for TransformerPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl TransformerPipeline {
    /// The fixed production order
    pub fn standard() -> Self {
        Self {
            passes: vec![
                Box::new(ImportAliasTransformer),
                Box::new(IconTransformer),
                Box::new(StyleVariantTransformer),
                Box::new(InlineTokensTransformer),
            ],
        }
    }

    pub fn with_passes(passes: Vec<Box<dyn Transformer>>) -> Self {
        Self { passes }
    }

    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Run every pass over `text`.
    pub fn run(&self, text: &str, ctx: &TransformContext<'_>) -> String {
        self.passes
            .iter()
            .fold(text.to_string(), |acc, pass| pass.apply(&acc, ctx))
    }

    /// Render one registry file for the project: content and destination.
    pub fn transform(
        &self,
        file: &RegistryFile,
        entry: &RegistryEntry,
        ctx: &TransformContext<'_>,
    ) -> ComponentryResult<TransformedFile> {
        let content = file
            .content
            .as_deref()
            .ok_or_else(|| ComponentryError::Fetch {
                resource: entry.name.clone(),
                message: format!("no content for '{}'", file.path),
            })?;

        let target = resolve_target_path(file, entry, ctx.config)?;
        let rendered = self.run(content, ctx);
        tracing::trace!(entry = %entry.name, file = %file.path, "transformed file");

        Ok(TransformedFile::new(
            entry.name.clone(),
            file.path.clone(),
            target,
            rendered,
        ))
    }
}

static STRING_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"\\\n]*)"|'([^'\\\n]*)'|`([^`\\$]*)`"#).expect("valid regex")
});

/// Rewrite the body of every simple string literal for which `rewrite`
/// returns `Some`. Literals with escapes or template substitutions are left
/// alone.
pub(crate) fn rewrite_string_literals<F>(text: &str, mut rewrite: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    STRING_LITERAL
        .replace_all(text, |caps: &Captures<'_>| {
            let whole = &caps[0];
            let body = caps
                .get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or("");
            match rewrite(body) {
                Some(new_body) => {
                    let quote = &whole[..1];
                    format!("{quote}{new_body}{quote}")
                }
                None => whole.to_string(),
            }
        })
        .into_owned()
}
