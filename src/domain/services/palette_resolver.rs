//! Base Palette Resolver
//!
//! Looks up the configured base colour in the registry and produces the
//! concrete token values per colour scheme.

use crate::domain::entities::{ItemType, Palette, RegistryIndex};
use crate::error::{ComponentryError, ComponentryResult};

/// Radius token added to the light scheme when the palette has none.
pub const DEFAULT_RADIUS: &str = "0.5rem";

pub fn resolve_palette(name: &str, index: &RegistryIndex) -> ComponentryResult<Palette> {
    let entry = index
        .get(name)
        .filter(|e| e.item_type == ItemType::Style)
        .ok_or_else(|| ComponentryError::PaletteNotFound {
            name: name.to_string(),
        })?;

    let mut css_vars = entry.css_vars.clone();
    let light = css_vars.entry("light".to_string()).or_default();
    if !light.contains_key("radius") {
        light.insert("radius".to_string(), DEFAULT_RADIUS.to_string());
    }
    css_vars.entry("dark".to_string()).or_default();

    Ok(Palette {
        name: entry.name.clone(),
        css_vars,
        inline_colors: entry.inline_colors.clone(),
    })
}
