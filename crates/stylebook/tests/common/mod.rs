#![allow(dead_code)]

use std::collections::HashSet;

use stylebook::{
    FieldWrite, FontAvailability, FontName, LineHeight, StoreError, StyleRecord, StyleStore,
};

/// An in-memory document whose font catalog decides which loads succeed.
#[derive(Debug, Default)]
pub struct FakeDocument {
    pub styles: Vec<StyleRecord>,
    pub fonts: FontAvailability,
    pub loaded: Vec<FontName>,
    /// `(style id, field label)` pairs whose writes fail.
    pub failing_writes: HashSet<(String, String)>,
    pub fail_list: bool,
    pub writes: Vec<(String, FieldWrite)>,
}

impl FakeDocument {
    pub fn new(styles: Vec<StyleRecord>, catalog: Vec<FontName>) -> Self {
        Self {
            styles,
            fonts: FontAvailability::from_catalog(catalog),
            ..Self::default()
        }
    }

    pub fn style(&self, id: &str) -> &StyleRecord {
        self.styles
            .iter()
            .find(|s| s.id == id)
            .expect("style exists in fake document")
    }

    pub fn fail_write(&mut self, id: &str, field: &str) {
        self.failing_writes.insert((id.to_string(), field.to_string()));
    }
}

impl StyleStore for FakeDocument {
    async fn load_font(&mut self, font: &FontName) -> Result<(), StoreError> {
        if self.fonts.is_available(&font.family, &font.style) {
            self.loaded.push(font.clone());
            Ok(())
        } else {
            Err(StoreError::FontUnavailable {
                family: font.family.clone(),
                style: font.style.clone(),
                reason: "not in catalog".to_string(),
            })
        }
    }

    async fn write_field(&mut self, id: &str, write: &FieldWrite) -> Result<(), StoreError> {
        if self
            .failing_writes
            .contains(&(id.to_string(), write.label().to_string()))
        {
            return Err(StoreError::WriteFailed {
                id: id.to_string(),
                field: write.label().to_string(),
                reason: "locked".to_string(),
            });
        }
        let style = self
            .styles
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::StyleNotFound { id: id.to_string() })?;
        match write {
            FieldWrite::Name(name) => style.name = name.clone(),
            FieldWrite::Description(text) => style.description = text.clone(),
            FieldWrite::FontName(font) => style.font_name = font.clone(),
            FieldWrite::FontSize(size) => style.font_size = *size,
            FieldWrite::LineHeight(line_height) => style.line_height = *line_height,
            FieldWrite::BoundVariable { field, variable_id } => match variable_id {
                Some(variable_id) => {
                    style.bound_variables.insert(*field, variable_id.clone());
                }
                None => {
                    style.bound_variables.remove(field);
                }
            },
        }
        self.writes.push((id.to_string(), write.clone()));
        Ok(())
    }

    async fn list_styles(&mut self) -> Result<Vec<StyleRecord>, StoreError> {
        if self.fail_list {
            return Err(StoreError::ListFailed("document closed".to_string()));
        }
        Ok(self.styles.clone())
    }
}

pub fn inter(style: &str) -> FontName {
    FontName::new("Inter", style)
}

pub fn sample_styles() -> Vec<StyleRecord> {
    vec![
        StyleRecord::new("S:1", "Heading/H1", inter("Bold"), 32.0)
            .with_line_height(LineHeight::pixels(40.0)),
        StyleRecord::new("S:2", "Heading/H2", inter("Bold"), 24.0)
            .with_line_height(LineHeight::pixels(32.0)),
        StyleRecord::new("S:3", "Body/Regular", inter("Regular"), 14.0)
            .with_line_height(LineHeight::percent(150.0)),
        StyleRecord::new("S:4", "Body/Small", inter("Regular"), 12.0),
    ]
}

pub fn sample_catalog() -> Vec<FontName> {
    vec![inter("Regular"), inter("Bold"), FontName::new("Roboto", "Regular")]
}
