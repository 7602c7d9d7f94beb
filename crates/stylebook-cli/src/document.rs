//! JSON style documents on disk.
//!
//! ```json
//! {
//!   "styles": [{"id": "S:1", "name": "Body/M", "fontName": {...}, "fontSize": 14}],
//!   "fonts": [{"family": "Inter", "style": "Regular"}]
//! }
//! ```
//!
//! `fonts` is the local font catalog; loading a font outside it fails.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use stylebook::{FieldWrite, FontName, StoreError, StyleRecord, StyleStore};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub styles: Vec<StyleRecord>,
    #[serde(default)]
    pub fonts: Vec<FontName>,
}

impl Document {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read document {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse document {}", path.display()))
    }

    /// Writes the document back, replacing the file atomically.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to replace document {}", path.display()))?;
        debug!(path = %path.display(), styles = self.styles.len(), "document saved");
        Ok(())
    }

    fn style_mut(&mut self, id: &str) -> Result<&mut StyleRecord, StoreError> {
        self.styles
            .iter_mut()
            .find(|style| style.id == id)
            .ok_or_else(|| StoreError::StyleNotFound { id: id.to_string() })
    }
}

impl StyleStore for Document {
    async fn load_font(&mut self, font: &FontName) -> Result<(), StoreError> {
        if self.fonts.contains(font) {
            Ok(())
        } else {
            Err(StoreError::FontUnavailable {
                family: font.family.clone(),
                style: font.style.clone(),
                reason: "not in the document's font catalog".to_string(),
            })
        }
    }

    async fn write_field(&mut self, id: &str, write: &FieldWrite) -> Result<(), StoreError> {
        let style = self.style_mut(id)?;
        match write {
            FieldWrite::Name(name) => style.name = name.clone(),
            FieldWrite::Description(text) => style.description = text.clone(),
            FieldWrite::FontName(font) => style.font_name = font.clone(),
            FieldWrite::FontSize(size) => style.font_size = *size,
            FieldWrite::LineHeight(line_height) => style.line_height = *line_height,
            FieldWrite::BoundVariable {
                field,
                variable_id: Some(variable_id),
            } => {
                style.bound_variables.insert(*field, variable_id.clone());
            }
            FieldWrite::BoundVariable {
                field,
                variable_id: None,
            } => {
                style.bound_variables.remove(field);
            }
        }
        Ok(())
    }

    async fn list_styles(&mut self) -> Result<Vec<StyleRecord>, StoreError> {
        Ok(self.styles.clone())
    }
}
