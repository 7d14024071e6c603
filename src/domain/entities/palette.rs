//! Palette - the concrete design-token values of a named colour scheme

use super::{SchemeTokens, TokenMap};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    pub name: String,
    /// scheme → token → value, `light` and `dark` always present
    pub css_vars: SchemeTokens,
    /// scheme → token → utility colour, used when CSS variables are off
    pub inline_colors: SchemeTokens,
}

impl Palette {
    pub fn light(&self) -> Option<&TokenMap> {
        self.css_vars.get("light")
    }

    pub fn dark(&self) -> Option<&TokenMap> {
        self.css_vars.get("dark")
    }

    /// Inline colour for `token` in `scheme`, if the palette defines one.
    pub fn inline_color(&self, scheme: &str, token: &str) -> Option<&str> {
        self.inline_colors
            .get(scheme)
            .and_then(|tokens| tokens.get(token))
            .map(String::as_str)
    }
}
