//! Font availability index built from the host's font catalog.

use std::collections::HashMap;

use crate::model::FontName;

/// Availability of a font key in the local catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStatus {
    Available,
    /// No face of this family is installed.
    MissingFamily,
    /// The family is installed but not this style.
    MissingStyle,
}

impl FontStatus {
    pub fn is_ok(self) -> bool {
        self == FontStatus::Available
    }

    /// Short reason for a warning badge, `None` when available.
    pub fn reason(self) -> Option<&'static str> {
        match self {
            FontStatus::Available => None,
            FontStatus::MissingFamily => Some("family"),
            FontStatus::MissingStyle => Some("style"),
        }
    }
}

/// Family to styles, in first-seen catalog order.
#[derive(Debug, Clone, Default)]
pub struct FontAvailability {
    families: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl FontAvailability {
    /// Groups a flat catalog by family. Entries of the same family need not
    /// be adjacent; duplicate faces are collapsed.
    pub fn from_catalog(catalog: impl IntoIterator<Item = FontName>) -> Self {
        let mut availability = Self::default();
        for font in catalog {
            let slot = match availability.index.get(&font.family) {
                Some(&i) => i,
                None => {
                    let i = availability.families.len();
                    availability.index.insert(font.family.clone(), i);
                    availability.families.push((font.family, Vec::new()));
                    i
                }
            };
            let styles = &mut availability.families[slot].1;
            if !styles.contains(&font.style) {
                styles.push(font.style);
            }
        }
        availability
    }

    pub fn is_available(&self, family: &str, style: &str) -> bool {
        self.status(family, style).is_ok()
    }

    pub fn status(&self, family: &str, style: &str) -> FontStatus {
        match self.styles(family) {
            None => FontStatus::MissingFamily,
            Some(styles) if styles.iter().any(|s| s == style) => FontStatus::Available,
            Some(_) => FontStatus::MissingStyle,
        }
    }

    pub fn font_status(&self, font: &FontName) -> FontStatus {
        self.status(&font.family, &font.style)
    }

    /// Styles of `family`, in catalog order.
    pub fn styles(&self, family: &str) -> Option<&[String]> {
        self.index
            .get(family)
            .map(|&i| self.families[i].1.as_slice())
    }

    /// Families with their styles, in catalog order.
    pub fn families(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.families
            .iter()
            .map(|(family, styles)| (family.as_str(), styles.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> FontAvailability {
        FontAvailability::from_catalog(vec![
            FontName::new("Inter", "Regular"),
            FontName::new("Roboto", "Regular"),
            FontName::new("Inter", "Bold"),
            FontName::new("Inter", "Regular"),
        ])
    }

    #[test]
    fn test_status() {
        let fonts = catalog();
        assert_eq!(fonts.status("Inter", "Bold"), FontStatus::Available);
        assert_eq!(fonts.status("Inter", "Black"), FontStatus::MissingStyle);
        assert_eq!(fonts.status("Lato", "Regular"), FontStatus::MissingFamily);
        assert!(fonts.is_available("Roboto", "Regular"));
        assert!(!fonts.is_available("Roboto", "Bold"));
    }

    #[test]
    fn test_grouping_ignores_catalog_order() {
        let fonts = catalog();
        assert_eq!(
            fonts.styles("Inter").unwrap(),
            &["Regular".to_string(), "Bold".to_string()]
        );
        let families: Vec<_> = fonts.families().map(|(f, _)| f).collect();
        assert_eq!(families, vec!["Inter", "Roboto"]);
    }

    #[test]
    fn test_reason() {
        assert_eq!(FontStatus::Available.reason(), None);
        assert_eq!(FontStatus::MissingStyle.reason(), Some("style"));
        assert!(FontAvailability::default().is_empty());
    }
}
