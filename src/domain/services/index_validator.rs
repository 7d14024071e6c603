//! Registry index validation
//!
//! Turns the raw catalogue document into a [`RegistryIndex`]. Each element is
//! checked on its own: a malformed entry is rejected with the path of the
//! offending field while the rest of the index still loads.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::domain::entities::{
    BaseRule, FileKind, ItemType, RegistryEntry, RegistryFile, RegistryIndex, SchemeTokens,
};
use crate::error::{ComponentryError, ComponentryResult, SchemaError};

/// Outcome of validating an index document
#[derive(Debug, Default)]
pub struct IndexValidation {
    pub index: RegistryIndex,
    /// Entries that failed validation, in document order
    pub rejected: Vec<SchemaError>,
}

/// Validate a whole index document (a JSON array of entries).
pub fn validate(raw: &Value) -> ComponentryResult<IndexValidation> {
    let items = raw.as_array().ok_or_else(|| ComponentryError::IndexUnparsable {
        message: format!("expected an array of entries, found {}", kind_of(raw)),
    })?;

    let mut result = IndexValidation::default();
    for (i, item) in items.iter().enumerate() {
        let path = format!("[{}]", i);
        match validate_entry(item, &path) {
            Ok(entry) => {
                let name = entry.name.clone();
                if !result.index.insert(entry) {
                    result
                        .rejected
                        .push(SchemaError::new(format!("{}.name", path), format!("duplicate entry '{}'", name)));
                }
            }
            Err(err) => {
                tracing::warn!(path = %err.path, message = %err.message, "rejected registry entry");
                result.rejected.push(err);
            }
        }
    }

    tracing::debug!(
        entries = result.index.len(),
        rejected = result.rejected.len(),
        "validated registry index"
    );
    Ok(result)
}

/// Validate a single entry document; `path` prefixes every reported field.
pub fn validate_entry(raw: &Value, path: &str) -> Result<RegistryEntry, SchemaError> {
    let obj = expect_object(raw, path)?;

    let name = required_str(obj, path, "name")?;
    if name.trim().is_empty() {
        return Err(SchemaError::new(field(path, "name"), "must not be empty"));
    }

    let type_raw = required_str(obj, path, "type")?;
    let item_type = ItemType::parse(type_raw).ok_or_else(|| {
        SchemaError::new(
            field(path, "type"),
            format!("unknown entry type '{}'", type_raw),
        )
    })?;

    let mut entry = RegistryEntry::new(name, item_type);
    entry.files = files(obj.get("files"), &field(path, "files"))?;
    if item_type.requires_files() && entry.files.is_empty() {
        return Err(SchemaError::new(
            field(path, "files"),
            format!("{} entries must ship at least one file", item_type),
        ));
    }

    entry.dependencies = string_list(obj.get("dependencies"), &field(path, "dependencies"))?;
    entry.registry_dependencies = string_list(
        obj.get("registryDependencies"),
        &field(path, "registryDependencies"),
    )?;
    entry.css_vars = css_vars(obj.get("cssVars"), &field(path, "cssVars"))?;
    entry.base_layer = base_layer(obj.get("baseLayer"), &field(path, "baseLayer"))?;
    entry.style_map = string_map(obj.get("styleMap"), &field(path, "styleMap"))?;
    entry.inline_colors = scheme_tokens(obj.get("inlineColors"), &field(path, "inlineColors"))?;

    Ok(entry)
}

fn files(raw: Option<&Value>, path: &str) -> Result<Vec<RegistryFile>, SchemaError> {
    let Some(raw) = raw.filter(|v| !v.is_null()) else {
        return Ok(Vec::new());
    };
    let items = raw
        .as_array()
        .ok_or_else(|| SchemaError::new(path, format!("expected array, found {}", kind_of(raw))))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let path = format!("{}[{}]", path, i);
            let obj = expect_object(item, &path)?;

            let file_path = required_str(obj, &path, "path")?;
            let content = optional_str(obj, &path, "content")?;
            let kind = match optional_str(obj, &path, "type")? {
                Some(raw_kind) => Some(FileKind::parse(raw_kind).ok_or_else(|| {
                    SchemaError::new(
                        field(&path, "type"),
                        format!("unknown file type '{}'", raw_kind),
                    )
                })?),
                None => None,
            };
            let target = optional_str(obj, &path, "target")?.filter(|t| !t.is_empty());

            Ok(RegistryFile {
                path: file_path.to_string(),
                content: content.map(str::to_string),
                kind,
                target: target.map(str::to_string),
            })
        })
        .collect()
}

fn string_list(raw: Option<&Value>, path: &str) -> Result<Vec<String>, SchemaError> {
    let Some(raw) = raw.filter(|v| !v.is_null()) else {
        return Ok(Vec::new());
    };
    let items = raw
        .as_array()
        .ok_or_else(|| SchemaError::new(path, format!("expected array, found {}", kind_of(raw))))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                SchemaError::new(
                    format!("{}[{}]", path, i),
                    format!("expected string, found {}", kind_of(item)),
                )
            })
        })
        .collect()
}

fn string_map(raw: Option<&Value>, path: &str) -> Result<IndexMap<String, String>, SchemaError> {
    let Some(raw) = raw.filter(|v| !v.is_null()) else {
        return Ok(IndexMap::new());
    };
    let obj = expect_object(raw, path)?;

    obj.iter()
        .map(|(key, value)| {
            let value = value.as_str().ok_or_else(|| {
                SchemaError::new(
                    field(path, key),
                    format!("expected string, found {}", kind_of(value)),
                )
            })?;
            Ok((key.clone(), value.to_string()))
        })
        .collect()
}

fn scheme_tokens(raw: Option<&Value>, path: &str) -> Result<SchemeTokens, SchemaError> {
    let Some(raw) = raw.filter(|v| !v.is_null()) else {
        return Ok(SchemeTokens::new());
    };
    let obj = expect_object(raw, path)?;

    obj.iter()
        .map(|(scheme, tokens)| Ok((scheme.clone(), string_map(Some(tokens), &field(path, scheme))?)))
        .collect()
}

/// Token names and values are spliced into stylesheet declarations, so they
/// may not carry declaration or block delimiters.
fn css_vars(raw: Option<&Value>, path: &str) -> Result<SchemeTokens, SchemaError> {
    let vars = scheme_tokens(raw, path)?;
    for (scheme, tokens) in &vars {
        for (token, value) in tokens {
            let at = field(&field(path, scheme), token);
            if let Some(c) = token.chars().find(|c| matches!(c, ';' | '{' | '}' | ':') || c.is_whitespace()) {
                return Err(SchemaError::new(at, format!("token name may not contain {:?}", c)));
            }
            if let Some(c) = value.chars().find(|c| matches!(c, ';' | '{' | '}')) {
                return Err(SchemaError::new(at, format!("token value may not contain {:?}", c)));
            }
        }
    }
    Ok(vars)
}

fn base_layer(raw: Option<&Value>, path: &str) -> Result<Vec<BaseRule>, SchemaError> {
    let Some(raw) = raw.filter(|v| !v.is_null()) else {
        return Ok(Vec::new());
    };
    let items = raw
        .as_array()
        .ok_or_else(|| SchemaError::new(path, format!("expected array, found {}", kind_of(raw))))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let path = format!("{}[{}]", path, i);
            let obj = expect_object(item, &path)?;
            Ok(BaseRule::new(
                required_str(obj, &path, "selector")?,
                required_str(obj, &path, "apply")?,
            ))
        })
        .collect()
}

fn expect_object<'a>(raw: &'a Value, path: &str) -> Result<&'a Map<String, Value>, SchemaError> {
    raw.as_object()
        .ok_or_else(|| SchemaError::new(path, format!("expected object, found {}", kind_of(raw))))
}

fn required_str<'a>(
    obj: &'a Map<String, Value>,
    path: &str,
    key: &str,
) -> Result<&'a str, SchemaError> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(SchemaError::new(
            field(path, key),
            format!("expected string, found {}", kind_of(other)),
        )),
        None => Err(SchemaError::new(field(path, key), "missing required field")),
    }
}

fn optional_str<'a>(
    obj: &'a Map<String, Value>,
    path: &str,
    key: &str,
) -> Result<Option<&'a str>, SchemaError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(SchemaError::new(
            field(path, key),
            format!("expected string, found {}", kind_of(other)),
        )),
    }
}

fn field(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_array_index_is_unparsable() {
        let err = validate(&json!({"name": "button"})).unwrap_err();
        assert!(matches!(err, ComponentryError::IndexUnparsable { .. }));
    }

    #[test]
    fn valid_entries_load_in_order() {
        let raw = json!([
            {"name": "button", "type": "registry:ui", "files": [{"path": "ui/button.tsx"}]},
            {"name": "utils", "type": "registry:lib", "files": [{"path": "lib/utils.ts", "type": "registry:lib"}]},
            {"name": "neutral", "type": "registry:style", "cssVars": {"light": {"background": "0 0% 100%"}}}
        ]);

        let result = validate(&raw).unwrap();
        assert!(result.rejected.is_empty());
        let names: Vec<_> = result.index.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["button", "utils", "neutral"]);
        assert_eq!(result.index.get("utils").unwrap().item_type, ItemType::Hook);
    }

    #[test]
    fn malformed_entry_is_rejected_with_field_path() {
        let raw = json!([
            {"name": "button", "type": "registry:ui", "files": [{"path": "ui/button.tsx"}]},
            {"name": "card", "type": "registry:ui", "files": [{"path": "ui/card.tsx"}],
             "cssVars": {"light": {"background": 42}}}
        ]);

        let result = validate(&raw).unwrap();
        assert_eq!(result.index.len(), 1);
        assert_eq!(result.rejected.len(), 1);
        assert_eq!(result.rejected[0].path, "[1].cssVars.light.background");
        assert_eq!(result.rejected[0].message, "expected string, found number");
    }

    #[test]
    fn css_var_values_cannot_open_declarations() {
        let raw = json!([
            {"name": "neutral", "type": "registry:style",
             "cssVars": {"light": {"x": "1; --y: 2"}}},
            {"name": "zinc", "type": "registry:style",
             "cssVars": {"dark": {"ring": "0 0% 0%}"}}},
            {"name": "slate", "type": "registry:style",
             "cssVars": {"light": {"ring": "oklch(0.7 0.1 250)"}}}
        ]);

        let result = validate(&raw).unwrap();
        assert_eq!(result.index.len(), 1);
        assert!(result.index.get("slate").is_some());
        let paths: Vec<_> = result.rejected.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["[0].cssVars.light.x", "[1].cssVars.dark.ring"]);
    }

    #[test]
    fn css_vars_keep_registry_order() {
        let raw = json!([{"name": "neutral", "type": "registry:style", "cssVars": {
            "light": {"foreground": "a", "background": "b"},
            "dark": {"foreground": "c", "background": "d"}
        }}]);

        let result = validate(&raw).unwrap();
        let vars = &result.index.get("neutral").unwrap().css_vars;
        let schemes: Vec<_> = vars.keys().map(String::as_str).collect();
        assert_eq!(schemes, vec!["light", "dark"]);
        let light: Vec<_> = vars["light"].keys().map(String::as_str).collect();
        assert_eq!(light, vec!["foreground", "background"]);
    }

    #[test]
    fn installable_entry_without_files_is_rejected() {
        let raw = json!([{"name": "dialog", "type": "registry:ui", "files": []}]);
        let result = validate(&raw).unwrap();
        assert_eq!(result.rejected[0].path, "[0].files");
    }

    #[test]
    fn unknown_type_is_rejected() {
        let raw = json!([{"name": "x", "type": "registry:example", "files": [{"path": "a.tsx"}]}]);
        let result = validate(&raw).unwrap();
        assert_eq!(result.rejected[0].path, "[0].type");
    }

    #[test]
    fn duplicate_names_keep_the_first() {
        let raw = json!([
            {"name": "button", "type": "registry:ui", "files": [{"path": "ui/button.tsx", "content": "a"}]},
            {"name": "button", "type": "registry:ui", "files": [{"path": "ui/button.tsx", "content": "b"}]}
        ]);
        let result = validate(&raw).unwrap();
        assert_eq!(result.index.len(), 1);
        assert_eq!(
            result.index.get("button").unwrap().files[0].content.as_deref(),
            Some("a")
        );
        assert_eq!(result.rejected[0].path, "[1].name");
    }

    #[test]
    fn registry_dependencies_must_be_strings() {
        let raw = json!([{"name": "combobox", "type": "registry:ui",
            "files": [{"path": "ui/combobox.tsx"}], "registryDependencies": ["popover", 3]}]);
        let result = validate(&raw).unwrap();
        assert_eq!(result.rejected[0].path, "[0].registryDependencies[1]");
    }

    #[test]
    fn entry_document_carries_base_layer_and_style_map() {
        let raw = json!({
            "name": "new-york", "type": "registry:style",
            "baseLayer": [{"selector": "html", "apply": "scroll-smooth"}],
            "styleMap": {"cn-button": "rounded-md px-4"}
        });
        let entry = validate_entry(&raw, "").unwrap();
        assert_eq!(entry.base_layer, vec![BaseRule::new("html", "scroll-smooth")]);
        assert_eq!(entry.style_map.get("cn-button").map(String::as_str), Some("rounded-md px-4"));
    }

    #[test]
    fn entry_document_paths_start_at_the_root() {
        let err = validate_entry(&json!({"type": "registry:ui"}), "").unwrap_err();
        assert_eq!(err.path, "name");
    }
}
