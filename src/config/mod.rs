//! Declarative template configuration
//!
//! A [`TemplateConfig`] describes one template variant: header shape, how and
//! where each resume section is laid out, the color palette and typography.
//! It is passive data; the renderer turns it into HTML, CSS and a preview.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Template family, used for gallery filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Professional,
    Modern,
    Creative,
    Minimal,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Professional,
        Category::Modern,
        Category::Creative,
        Category::Minimal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Professional => "professional",
            Category::Modern => "modern",
            Category::Creative => "creative",
            Category::Minimal => "minimal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

/// Arrangement of the header block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderStyle {
    Centered,
    LeftAligned,
    RightAligned,
    /// Identity on the left, contact details on the right
    Split,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillsStyle {
    Chips,
    List,
    Grid,
    Bars,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceStyle {
    Cards,
    Timeline,
    Simple,
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationStyle {
    Cards,
    List,
    Simple,
}

/// Column a section renders into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Left,
    Right,
    FullWidth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadingSize {
    Small,
    Medium,
    Large,
}

impl HeadingSize {
    /// Screen sizes in pixels for (name, section title, item title)
    pub fn scale(&self) -> (u32, u32, u32) {
        match self {
            HeadingSize::Small => (28, 16, 14),
            HeadingSize::Medium => (32, 18, 15),
            HeadingSize::Large => (38, 20, 16),
        }
    }
}

/// The three configurable resume sections, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    Skills,
    Experience,
    Education,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 3] = [
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Education,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Skills => "skills",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
        }
    }

    /// Heading shown above the section
    pub fn heading(&self) -> &'static str {
        match self {
            SectionKind::Skills => "Skills",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLayout {
    pub style: HeaderStyle,
    pub show_avatar: bool,
    pub show_title: bool,
}

/// Style and placement of a single section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLayout<S> {
    pub style: S,
    pub position: Position,
}

impl<S> SectionLayout<S> {
    pub fn new(style: S, position: Position) -> Self {
        Self { style, position }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionsLayout {
    pub skills: SectionLayout<SkillsStyle>,
    pub experience: SectionLayout<ExperienceStyle>,
    pub education: SectionLayout<EducationStyle>,
}

impl SectionsLayout {
    pub fn position(&self, kind: SectionKind) -> Position {
        match kind {
            SectionKind::Skills => self.skills.position,
            SectionKind::Experience => self.experience.position,
            SectionKind::Education => self.education.position,
        }
    }

    /// Sections claiming `position`, in render order
    pub fn claiming(&self, position: Position) -> Vec<SectionKind> {
        SectionKind::ORDER
            .into_iter()
            .filter(|kind| self.position(*kind) == position)
            .collect()
    }

    /// Column structure implied by the section positions
    pub fn columns(&self) -> ColumnPlan {
        ColumnPlan {
            left: self.claiming(Position::Left),
            right: self.claiming(Position::Right),
            full_width: self.claiming(Position::FullWidth),
        }
    }
}

/// Which sections go where, derived from positions alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPlan {
    pub left: Vec<SectionKind>,
    pub right: Vec<SectionKind>,
    pub full_width: Vec<SectionKind>,
}

impl ColumnPlan {
    /// A grid container is needed when any section claims a side column
    pub fn has_grid(&self) -> bool {
        !self.left.is_empty() || !self.right.is_empty()
    }

    /// Both side columns are claimed
    pub fn is_two_column(&self) -> bool {
        !self.left.is_empty() && !self.right.is_empty()
    }
}

/// Palette; every value is an opaque CSS color string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    pub heading_font: String,
    pub body_font: String,
    pub heading_size: HeadingSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub header: HeaderLayout,
    pub sections: SectionsLayout,
    pub colors: Colors,
    pub typography: Typography,
}

/// Complete description of one template variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Registry and cache index; stable for the life of the process
    pub key: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub layout: Layout,
}

/// Listing metadata for a template, without layout internals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMeta {
    pub key: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Embedded preview image as a data URI (fallback catalog only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl TemplateConfig {
    /// Load a template from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a template from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn meta(&self) -> TemplateMeta {
        TemplateMeta {
            key: self.key.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category,
            preview: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(skills: Position, experience: Position, education: Position) -> SectionsLayout {
        SectionsLayout {
            skills: SectionLayout::new(SkillsStyle::Chips, skills),
            experience: SectionLayout::new(ExperienceStyle::Cards, experience),
            education: SectionLayout::new(EducationStyle::List, education),
        }
    }

    #[test]
    fn test_column_plan_stacks_in_fixed_order() {
        let plan = sections(Position::Left, Position::Right, Position::Left).columns();
        assert_eq!(plan.left, vec![SectionKind::Skills, SectionKind::Education]);
        assert_eq!(plan.right, vec![SectionKind::Experience]);
        assert!(plan.full_width.is_empty());
        assert!(plan.is_two_column());
    }

    #[test]
    fn test_column_plan_all_full_width() {
        let plan = sections(Position::FullWidth, Position::FullWidth, Position::FullWidth).columns();
        assert!(!plan.has_grid());
        assert_eq!(plan.full_width.len(), 3);
    }

    #[test]
    fn test_column_plan_single_side() {
        let plan = sections(Position::Right, Position::FullWidth, Position::Right).columns();
        assert!(plan.has_grid());
        assert!(!plan.is_two_column());
        assert!(plan.left.is_empty());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Modern".parse::<Category>(), Ok(Category::Modern));
        assert!("retro".parse::<Category>().is_err());
    }

    #[test]
    fn test_parse_full_template_toml() {
        let toml_str = r##"
key = "ocean"
name = "Ocean"
description = "Blue two-column"
category = "modern"

[layout.header]
style = "split"
show_avatar = true
show_title = false

[layout.sections.skills]
style = "bars"
position = "left"

[layout.sections.experience]
style = "timeline"
position = "right"

[layout.sections.education]
style = "cards"
position = "full-width"

[layout.colors]
primary = "#0369a1"
secondary = "#38bdf8"
accent = "#0c4a6e"
background = "#ffffff"
text = "#0f172a"

[layout.typography]
heading_font = "Inter, sans-serif"
body_font = "Inter, sans-serif"
heading_size = "large"
"##;
        let config = TemplateConfig::from_toml_str(toml_str).expect("Should parse");
        assert_eq!(config.key, "ocean");
        assert_eq!(config.category, Category::Modern);
        assert_eq!(config.layout.header.style, HeaderStyle::Split);
        assert_eq!(config.layout.sections.skills.style, SkillsStyle::Bars);
        assert_eq!(
            config.layout.sections.education.position,
            Position::FullWidth
        );
        assert_eq!(config.layout.typography.heading_size, HeadingSize::Large);
    }

    #[test]
    fn test_parse_rejects_unknown_variant() {
        let toml_str = r##"
key = "x"
name = "X"
description = ""
category = "retro"
"##;
        assert!(matches!(
            TemplateConfig::from_toml_str(toml_str),
            Err(ConfigError::Toml(_))
        ));
    }
}
