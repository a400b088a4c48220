//! Resume template records.
//!
//! A template is a bag of named HTML fragments plus styling fields. Field
//! names on the wire follow the stored record (`headerHTML`,
//! `primaryColor`, ...), so templates exported from the web application
//! load unchanged.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Gallery category a template is filed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateCategory {
    Professional,
    Academic,
    Creative,
    Technical,
    EntryLevel,
    Executive,
    #[default]
    Other,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 7] = [
        TemplateCategory::Professional,
        TemplateCategory::Academic,
        TemplateCategory::Creative,
        TemplateCategory::Technical,
        TemplateCategory::EntryLevel,
        TemplateCategory::Executive,
        TemplateCategory::Other,
    ];

    /// Wire name, e.g. `ENTRY_LEVEL`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Professional => "PROFESSIONAL",
            TemplateCategory::Academic => "ACADEMIC",
            TemplateCategory::Creative => "CREATIVE",
            TemplateCategory::Technical => "TECHNICAL",
            TemplateCategory::EntryLevel => "ENTRY_LEVEL",
            TemplateCategory::Executive => "EXECUTIVE",
            TemplateCategory::Other => "OTHER",
        }
    }

    /// Human readable label, e.g. `Entry Level`.
    pub fn label(&self) -> &'static str {
        match self {
            TemplateCategory::Professional => "Professional",
            TemplateCategory::Academic => "Academic",
            TemplateCategory::Creative => "Creative",
            TemplateCategory::Technical => "Technical",
            TemplateCategory::EntryLevel => "Entry Level",
            TemplateCategory::Executive => "Executive",
            TemplateCategory::Other => "Other",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateCategory {
    type Err = Error;

    /// Accepts the wire name in any case, with `-` or space in place of `_`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
        TemplateCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| {
                Error::ValidationError(format!(
                    "unknown template category '{s}' (expected one of: {})",
                    TemplateCategory::ALL.map(|c| c.as_str()).join(", ")
                ))
            })
    }
}

/// Styling fields turned into CSS custom properties.
///
/// Sizes are unitless numbers; `px` is appended when the style block is
/// generated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateStyle {
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    pub font_size: f64,
    pub line_height: f64,
    pub section_spacing: f64,
    pub item_spacing: f64,
}

impl Default for TemplateStyle {
    fn default() -> Self {
        Self {
            primary_color: "#4A6CF7".to_string(),
            secondary_color: "#6E82A6".to_string(),
            font_family: "'Inter', sans-serif".to_string(),
            font_size: 12.0,
            line_height: 1.5,
            section_spacing: 24.0,
            item_spacing: 12.0,
        }
    }
}

/// A resume template: metadata, HTML fragments and style.
///
/// Every `*_title_html` fragment must open an element that the assembler
/// closes with [`SECTION_CLOSE`](crate::constants::SECTION_CLOSE).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: TemplateCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_public")]
    pub is_public: bool,

    #[serde(default, rename = "headerHTML")]
    pub header_html: String,
    #[serde(default, rename = "contactHTML")]
    pub contact_html: String,
    #[serde(default, rename = "educationTitleHTML")]
    pub education_title_html: String,
    #[serde(default, rename = "educationItemHTML")]
    pub education_item_html: String,
    #[serde(default, rename = "experienceTitleHTML")]
    pub experience_title_html: String,
    #[serde(default, rename = "experienceItemHTML")]
    pub experience_item_html: String,
    #[serde(default, rename = "skillsTitleHTML")]
    pub skills_title_html: String,
    #[serde(default, rename = "skillsItemHTML")]
    pub skills_item_html: String,
    #[serde(default, rename = "projectsTitleHTML")]
    pub projects_title_html: Option<String>,
    #[serde(default, rename = "projectsItemHTML")]
    pub projects_item_html: Option<String>,

    /// Template stylesheet; may reference the style fields as `var(--...)`
    #[serde(default, rename = "cssStyles")]
    pub css_styles: String,

    #[serde(flatten)]
    pub style: TemplateStyle,
}

fn default_public() -> bool {
    true
}

impl Template {
    /// Creates an empty, public template with default styling.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_public: true,
            ..Default::default()
        }
    }

    /// Both projects fragments, when the template defines a projects section.
    ///
    /// Missing and empty fragments both count as absent.
    pub fn projects_fragments(&self) -> Option<(&str, &str)> {
        let title = self.projects_title_html.as_deref().filter(|s| !s.is_empty())?;
        let item = self.projects_item_html.as_deref().filter(|s| !s.is_empty())?;
        Some((title, item))
    }

    pub fn has_projects_section(&self) -> bool {
        self.projects_fragments().is_some()
    }

    /// Checks the rules a template must meet before it can be published.
    ///
    /// Name and description must be non-blank. Font size and the two
    /// spacings must be positive whole numbers; line height must be positive.
    ///
    /// # Errors
    /// * `Error::ValidationError` naming the first offending field
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::ValidationError("name is required".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(Error::ValidationError(format!(
                "template '{}': description is required",
                self.name
            )));
        }
        let sizes = [
            ("fontSize", self.style.font_size),
            ("sectionSpacing", self.style.section_spacing),
            ("itemSpacing", self.style.item_spacing),
        ];
        for (field, value) in sizes {
            if !(value > 0.0 && value.fract() == 0.0) {
                return Err(Error::ValidationError(format!(
                    "template '{}': {field} must be a positive integer, got {value}",
                    self.name
                )));
            }
        }
        if !(self.style.line_height > 0.0 && self.style.line_height.is_finite()) {
            return Err(Error::ValidationError(format!(
                "template '{}': lineHeight must be positive, got {}",
                self.name, self.style.line_height
            )));
        }
        Ok(())
    }

    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!("entry-level".parse::<TemplateCategory>().unwrap(), TemplateCategory::EntryLevel);
        assert_eq!("Academic".parse::<TemplateCategory>().unwrap(), TemplateCategory::Academic);
        assert!("fancy".parse::<TemplateCategory>().is_err());
    }

    #[test]
    fn test_validate() {
        let mut template = Template::new("Modern");
        template.description = "Two columns".to_string();
        assert!(template.validate().is_ok());

        template.style.line_height = 0.0;
        assert!(template.validate().is_err());
        template.style.line_height = 1.5;

        template.style.item_spacing = 12.5;
        assert!(matches!(template.validate(), Err(Error::ValidationError(msg)) if msg.contains("itemSpacing")));
        template.style.item_spacing = 12.0;

        template.style.font_size = f64::INFINITY;
        assert!(template.validate().is_err());
    }

    #[test]
    fn test_empty_projects_fragment_counts_as_missing() {
        let mut template = Template::new("t");
        template.projects_title_html = Some("<section>".to_string());
        template.projects_item_html = Some(String::new());
        assert!(!template.has_projects_section());

        template.projects_item_html = Some("<p>{{title}}</p>".to_string());
        assert_eq!(template.projects_fragments(), Some(("<section>", "<p>{{title}}</p>")));
    }
}
