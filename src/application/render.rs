//! Rendering registry entries for a project
//!
//! Shared by install and diff: builds the transform context from the index
//! and runs every file through the transformer pipeline.

use indexmap::IndexMap;

use crate::config::ProjectConfig;
use crate::domain::entities::{ItemType, Palette, RegistryEntry, RegistryIndex, TransformedFile};
use crate::domain::services::{resolve_palette, TransformContext, TransformerPipeline};
use crate::error::ComponentryResult;

/// Index-derived inputs of the transform passes
#[derive(Debug, Clone, Default)]
pub struct RenderInputs {
    pub palette: Option<Palette>,
    pub style_map: Option<IndexMap<String, String>>,
}

impl RenderInputs {
    /// Look up the style preset and, when `need_palette`, the base palette.
    pub fn prepare(
        index: &RegistryIndex,
        config: &ProjectConfig,
        need_palette: bool,
    ) -> ComponentryResult<Self> {
        let palette = if need_palette {
            Some(resolve_palette(config.base_color(), index)?)
        } else {
            None
        };

        let style_map = index
            .get(config.style())
            .filter(|e| e.item_type == ItemType::Style && !e.style_map.is_empty())
            .map(|e| e.style_map.clone());
        if style_map.is_none() {
            tracing::debug!(style = config.style(), "no style map for configured style");
        }

        Ok(Self { palette, style_map })
    }

    pub fn context<'a>(&'a self, config: &'a ProjectConfig) -> TransformContext<'a> {
        TransformContext::new(config)
            .with_palette(self.palette.as_ref())
            .with_style_map(self.style_map.as_ref())
    }
}

/// Transform every file of `entries`, in entry then file order.
pub fn render_entries(
    pipeline: &TransformerPipeline,
    entries: &[RegistryEntry],
    ctx: &TransformContext<'_>,
) -> ComponentryResult<Vec<TransformedFile>> {
    let mut files = Vec::new();
    for entry in entries {
        for file in &entry.files {
            files.push(pipeline.transform(file, entry, ctx)?);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RegistryFile;
    use crate::error::ComponentryError;
    use std::path::Path;

    fn index() -> RegistryIndex {
        let mut style = RegistryEntry::new("new-york", ItemType::Style);
        style
            .style_map
            .insert("cn-button".to_string(), "rounded-md px-4".to_string());
        [
            style,
            RegistryEntry::new("neutral", ItemType::Style)
                .with_css_vars("light", &[("background", "0 0% 100%")]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn prepare_finds_style_map_and_palette() {
        let config = ProjectConfig::default_for(Path::new("/app"));
        let inputs = RenderInputs::prepare(&index(), &config, true).unwrap();

        assert_eq!(inputs.palette.as_ref().map(|p| p.name.as_str()), Some("neutral"));
        assert_eq!(
            inputs.style_map.as_ref().and_then(|m| m.get("cn-button")).map(String::as_str),
            Some("rounded-md px-4")
        );
    }

    #[test]
    fn palette_is_only_required_when_needed() {
        let mut config = ProjectConfig::default_for(Path::new("/app"));
        config.config.tailwind.base_color = "zinc".to_string();

        assert!(RenderInputs::prepare(&index(), &config, false).is_ok());
        assert!(matches!(
            RenderInputs::prepare(&index(), &config, true),
            Err(ComponentryError::PaletteNotFound { .. })
        ));
    }

    #[test]
    fn render_keeps_entry_and_file_order() {
        let config = ProjectConfig::default_for(Path::new("/app"));
        let inputs = RenderInputs::default();
        let entries = vec![
            RegistryEntry::new("card", ItemType::Ui)
                .with_file(RegistryFile::new("ui/card.tsx", "a"))
                .with_file(RegistryFile::new("ui/card-header.tsx", "b")),
            RegistryEntry::new("use-mobile", ItemType::Hook)
                .with_file(RegistryFile::new("hooks/use-mobile.ts", "c")),
        ];

        let files = render_entries(
            &TransformerPipeline::standard(),
            &entries,
            &inputs.context(&config),
        )
        .unwrap();

        let origins: Vec<_> = files.iter().map(|f| f.origin()).collect();
        assert_eq!(
            origins,
            vec!["card/ui/card.tsx", "card/ui/card-header.tsx", "use-mobile/hooks/use-mobile.ts"]
        );
        assert_eq!(files[2].target_path(), Path::new("/app/hooks/use-mobile.ts"));
    }
}
