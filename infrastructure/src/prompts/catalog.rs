//! Filesystem prompt catalog
//!
//! Loads one template file per [`PromptKey`] from a directory at
//! construction time, resolving the complete closed key set up front. A
//! missing template is reported immediately with every absent key named,
//! instead of surfacing as a string-lookup failure mid-run.
//!
//! Rendering substitutes `{{field}}` placeholders from the JSON payload:
//! string fields verbatim, other values JSON-encoded, and `{{data}}` as the
//! whole payload. Unknown fields render empty.

use agora_application::{PromptCatalog, PromptError, PromptKey};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("missing prompt templates in {dir}: {keys}")]
    Missing { dir: String, keys: String },

    #[error("failed to read template '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Prompt catalog backed by `<dir>/<key>.md` files.
#[derive(Debug)]
pub struct FsPromptCatalog {
    templates: HashMap<PromptKey, String>,
}

impl FsPromptCatalog {
    /// Load and validate every known template, failing fast on absences.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let mut templates = HashMap::new();
        let mut missing = Vec::new();

        for key in PromptKey::ALL {
            let path = dir.join(format!("{}.md", key.as_str()));
            if !path.exists() {
                missing.push(key.to_string());
                continue;
            }
            let content = std::fs::read_to_string(&path).map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })?;
            templates.insert(key, content);
        }

        if !missing.is_empty() {
            return Err(CatalogError::Missing {
                dir: dir.display().to_string(),
                keys: missing.join(", "),
            });
        }

        Ok(Self { templates })
    }
}

impl PromptCatalog for FsPromptCatalog {
    fn render(&self, key: PromptKey, data: &Value) -> Result<String, PromptError> {
        let template = self
            .templates
            .get(&key)
            .ok_or(PromptError::MissingTemplate(key))?;
        Ok(render_placeholders(template, data))
    }
}

fn render_placeholders(template: &str, data: &Value) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                out.push_str(&lookup(data, after[..end].trim()));
                rest = &after[end + 2..];
            }
            None => {
                // Unterminated placeholder: emit the rest verbatim
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

fn lookup(data: &Value, field: &str) -> String {
    let value = if field == "data" {
        Some(data)
    } else {
        data.get(field)
    };
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
