//! Ready-made template configs
//!
//! Archetype constructors fix the structure of a template family and derive
//! the secondary and accent shades from one primary color. [`create_custom`]
//! starts from a neutral default and deep-merges caller overrides into it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::config::{
    Category, Colors, EducationStyle, ExperienceStyle, HeaderLayout, HeaderStyle, HeadingSize,
    Layout, Position, SectionLayout, SectionsLayout, SkillsStyle, TemplateConfig, Typography,
};
use crate::error::ConfigError;

const WHITE: &str = "#ffffff";

fn config(
    key: impl Into<String>,
    name: impl Into<String>,
    description: impl Into<String>,
    category: Category,
    layout: Layout,
) -> TemplateConfig {
    TemplateConfig {
        key: key.into(),
        name: name.into(),
        description: description.into(),
        category,
        layout,
    }
}

fn typography(heading: &str, body: &str, size: HeadingSize) -> Typography {
    Typography {
        heading_font: heading.to_string(),
        body_font: body.to_string(),
        heading_size: size,
    }
}

/// Serif headings, left-aligned header, detailed experience on the right
pub fn create_professional(
    key: impl Into<String>,
    name: impl Into<String>,
    description: impl Into<String>,
    primary: HexColor,
) -> TemplateConfig {
    let layout = Layout {
        header: HeaderLayout {
            style: HeaderStyle::LeftAligned,
            show_avatar: false,
            show_title: true,
        },
        sections: SectionsLayout {
            skills: SectionLayout::new(SkillsStyle::List, Position::Left),
            experience: SectionLayout::new(ExperienceStyle::Detailed, Position::Right),
            education: SectionLayout::new(EducationStyle::Simple, Position::Left),
        },
        colors: Colors {
            primary: primary.to_hex(),
            secondary: primary.darken(20.0).to_hex(),
            accent: primary.lighten(40.0).to_hex(),
            background: WHITE.to_string(),
            text: "#1f2937".to_string(),
        },
        typography: typography(
            "Georgia, 'Times New Roman', serif",
            "'Helvetica Neue', Arial, sans-serif",
            HeadingSize::Medium,
        ),
    };
    config(key, name, description, Category::Professional, layout)
}

/// Split header with avatar, skill chips and an experience timeline
pub fn create_modern(
    key: impl Into<String>,
    name: impl Into<String>,
    description: impl Into<String>,
    primary: HexColor,
) -> TemplateConfig {
    let layout = Layout {
        header: HeaderLayout {
            style: HeaderStyle::Split,
            show_avatar: true,
            show_title: true,
        },
        sections: SectionsLayout {
            skills: SectionLayout::new(SkillsStyle::Chips, Position::Left),
            experience: SectionLayout::new(ExperienceStyle::Timeline, Position::Right),
            education: SectionLayout::new(EducationStyle::Cards, Position::Left),
        },
        colors: Colors {
            primary: primary.to_hex(),
            secondary: primary.lighten(30.0).to_hex(),
            accent: primary.lighten(45.0).to_hex(),
            background: WHITE.to_string(),
            text: "#111827".to_string(),
        },
        typography: typography(
            "'Inter', system-ui, sans-serif",
            "'Inter', system-ui, sans-serif",
            HeadingSize::Large,
        ),
    };
    config(key, name, description, Category::Modern, layout)
}

/// Centered header, experience cards on the left, skill bars on the right
pub fn create_creative(
    key: impl Into<String>,
    name: impl Into<String>,
    description: impl Into<String>,
    primary: HexColor,
) -> TemplateConfig {
    let layout = Layout {
        header: HeaderLayout {
            style: HeaderStyle::Centered,
            show_avatar: true,
            show_title: true,
        },
        sections: SectionsLayout {
            skills: SectionLayout::new(SkillsStyle::Bars, Position::Right),
            experience: SectionLayout::new(ExperienceStyle::Cards, Position::Left),
            education: SectionLayout::new(EducationStyle::Cards, Position::Right),
        },
        colors: Colors {
            primary: primary.to_hex(),
            secondary: primary.lighten(20.0).to_hex(),
            accent: primary.darken(15.0).to_hex(),
            background: "#fafafa".to_string(),
            text: "#1f2937".to_string(),
        },
        typography: typography(
            "'Poppins', sans-serif",
            "'Nunito', sans-serif",
            HeadingSize::Large,
        ),
    };
    config(key, name, description, Category::Creative, layout)
}

/// Single column, plain lists, small headings
pub fn create_minimal(
    key: impl Into<String>,
    name: impl Into<String>,
    description: impl Into<String>,
    primary: HexColor,
) -> TemplateConfig {
    let layout = Layout {
        header: HeaderLayout {
            style: HeaderStyle::LeftAligned,
            show_avatar: false,
            show_title: true,
        },
        sections: SectionsLayout {
            skills: SectionLayout::new(SkillsStyle::List, Position::FullWidth),
            experience: SectionLayout::new(ExperienceStyle::Simple, Position::FullWidth),
            education: SectionLayout::new(EducationStyle::List, Position::FullWidth),
        },
        colors: Colors {
            primary: primary.to_hex(),
            secondary: primary.lighten(40.0).to_hex(),
            accent: primary.darken(10.0).to_hex(),
            background: WHITE.to_string(),
            text: "#374151".to_string(),
        },
        typography: typography(
            "system-ui, -apple-system, sans-serif",
            "system-ui, -apple-system, sans-serif",
            HeadingSize::Small,
        ),
    };
    config(key, name, description, Category::Minimal, layout)
}

/// Dispatch to the archetype constructor for `category`
pub fn create_archetype(
    category: Category,
    key: impl Into<String>,
    name: impl Into<String>,
    description: impl Into<String>,
    primary: HexColor,
) -> TemplateConfig {
    match category {
        Category::Professional => create_professional(key, name, description, primary),
        Category::Modern => create_modern(key, name, description, primary),
        Category::Creative => create_creative(key, name, description, primary),
        Category::Minimal => create_minimal(key, name, description, primary),
    }
}

/// Named presets built on the archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickTemplate {
    Corporate,
    Executive,
    Tech,
    Startup,
    Designer,
    Artist,
    Clean,
    Simple,
}

impl QuickTemplate {
    pub const ALL: [QuickTemplate; 8] = [
        QuickTemplate::Corporate,
        QuickTemplate::Executive,
        QuickTemplate::Tech,
        QuickTemplate::Startup,
        QuickTemplate::Designer,
        QuickTemplate::Artist,
        QuickTemplate::Clean,
        QuickTemplate::Simple,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            QuickTemplate::Corporate => "corporate",
            QuickTemplate::Executive => "executive",
            QuickTemplate::Tech => "tech",
            QuickTemplate::Startup => "startup",
            QuickTemplate::Designer => "designer",
            QuickTemplate::Artist => "artist",
            QuickTemplate::Clean => "clean",
            QuickTemplate::Simple => "simple",
        }
    }

    fn details(&self) -> (&'static str, &'static str, Category, HexColor) {
        match self {
            QuickTemplate::Corporate => (
                "Corporate",
                "Conservative layout for corporate roles",
                Category::Professional,
                HexColor::from_rgb(0x1e, 0x40, 0xaf),
            ),
            QuickTemplate::Executive => (
                "Executive",
                "Understated layout for senior leadership",
                Category::Professional,
                HexColor::from_rgb(0x11, 0x18, 0x27),
            ),
            QuickTemplate::Tech => (
                "Tech",
                "Timeline layout for engineering roles",
                Category::Modern,
                HexColor::from_rgb(0x10, 0xb9, 0x81),
            ),
            QuickTemplate::Startup => (
                "Startup",
                "Energetic layout for startup roles",
                Category::Modern,
                HexColor::from_rgb(0x8b, 0x5c, 0xf6),
            ),
            QuickTemplate::Designer => (
                "Designer",
                "Expressive layout for design portfolios",
                Category::Creative,
                HexColor::from_rgb(0xec, 0x48, 0x99),
            ),
            QuickTemplate::Artist => (
                "Artist",
                "Bold layout for creative work",
                Category::Creative,
                HexColor::from_rgb(0xf5, 0x9e, 0x0b),
            ),
            QuickTemplate::Clean => (
                "Clean",
                "Single column with generous whitespace",
                Category::Minimal,
                HexColor::from_rgb(0x37, 0x41, 0x51),
            ),
            QuickTemplate::Simple => (
                "Simple",
                "Plain single-column layout",
                Category::Minimal,
                HexColor::from_rgb(0x6b, 0x72, 0x80),
            ),
        }
    }

    pub fn category(&self) -> Category {
        self.details().2
    }

    pub fn primary(&self) -> HexColor {
        self.details().3
    }

    pub fn build(&self) -> TemplateConfig {
        let (name, description, category, primary) = self.details();
        create_archetype(category, self.key(), name, description, primary)
    }
}

/// All quick templates, in declaration order
pub fn quick_templates() -> Vec<TemplateConfig> {
    QuickTemplate::ALL.iter().map(QuickTemplate::build).collect()
}

/// Apply a partial override onto a value
///
/// Nested structs merge field by field; leaf values replace.
pub trait Merge<Patch> {
    fn merge(&mut self, patch: Patch);
}

fn replace<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderOverrides {
    pub style: Option<HeaderStyle>,
    pub show_avatar: Option<bool>,
    pub show_title: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionOverride<S> {
    pub style: Option<S>,
    pub position: Option<Position>,
}

impl<S> Default for SectionOverride<S> {
    fn default() -> Self {
        Self {
            style: None,
            position: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionsOverrides {
    pub skills: Option<SectionOverride<SkillsStyle>>,
    pub experience: Option<SectionOverride<ExperienceStyle>>,
    pub education: Option<SectionOverride<EducationStyle>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypographyOverrides {
    pub heading_font: Option<String>,
    pub body_font: Option<String>,
    pub heading_size: Option<HeadingSize>,
}

/// Partial layout; every absent field keeps the default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutOverrides {
    pub header: Option<HeaderOverrides>,
    pub sections: Option<SectionsOverrides>,
    pub colors: Option<ColorOverrides>,
    pub typography: Option<TypographyOverrides>,
}

impl Merge<HeaderOverrides> for HeaderLayout {
    fn merge(&mut self, patch: HeaderOverrides) {
        replace(&mut self.style, patch.style);
        replace(&mut self.show_avatar, patch.show_avatar);
        replace(&mut self.show_title, patch.show_title);
    }
}

impl<S> Merge<SectionOverride<S>> for SectionLayout<S> {
    fn merge(&mut self, patch: SectionOverride<S>) {
        replace(&mut self.style, patch.style);
        replace(&mut self.position, patch.position);
    }
}

impl Merge<SectionsOverrides> for SectionsLayout {
    fn merge(&mut self, patch: SectionsOverrides) {
        if let Some(skills) = patch.skills {
            self.skills.merge(skills);
        }
        if let Some(experience) = patch.experience {
            self.experience.merge(experience);
        }
        if let Some(education) = patch.education {
            self.education.merge(education);
        }
    }
}

impl Merge<ColorOverrides> for Colors {
    fn merge(&mut self, patch: ColorOverrides) {
        replace(&mut self.primary, patch.primary);
        replace(&mut self.secondary, patch.secondary);
        replace(&mut self.accent, patch.accent);
        replace(&mut self.background, patch.background);
        replace(&mut self.text, patch.text);
    }
}

impl Merge<TypographyOverrides> for Typography {
    fn merge(&mut self, patch: TypographyOverrides) {
        replace(&mut self.heading_font, patch.heading_font);
        replace(&mut self.body_font, patch.body_font);
        replace(&mut self.heading_size, patch.heading_size);
    }
}

impl Merge<LayoutOverrides> for Layout {
    fn merge(&mut self, patch: LayoutOverrides) {
        if let Some(header) = patch.header {
            self.header.merge(header);
        }
        if let Some(sections) = patch.sections {
            self.sections.merge(sections);
        }
        if let Some(colors) = patch.colors {
            self.colors.merge(colors);
        }
        if let Some(typography) = patch.typography {
            self.typography.merge(typography);
        }
    }
}

/// Baseline layout used by [`create_custom`]
pub fn default_layout() -> Layout {
    Layout {
        header: HeaderLayout {
            style: HeaderStyle::LeftAligned,
            show_avatar: true,
            show_title: true,
        },
        sections: SectionsLayout {
            skills: SectionLayout::new(SkillsStyle::Chips, Position::Left),
            experience: SectionLayout::new(ExperienceStyle::Cards, Position::Right),
            education: SectionLayout::new(EducationStyle::List, Position::Left),
        },
        colors: Colors {
            primary: "#3b82f6".to_string(),
            secondary: "#64748b".to_string(),
            accent: "#93c5fd".to_string(),
            background: WHITE.to_string(),
            text: "#1f2937".to_string(),
        },
        typography: typography(
            "system-ui, sans-serif",
            "system-ui, sans-serif",
            HeadingSize::Medium,
        ),
    }
}

/// Build a config from the default layout with `overrides` deep-merged in
pub fn create_custom(
    key: impl Into<String>,
    name: impl Into<String>,
    description: impl Into<String>,
    category: Category,
    overrides: LayoutOverrides,
) -> TemplateConfig {
    let mut layout = default_layout();
    layout.merge(overrides);
    config(key, name, description, category, layout)
}

/// A custom template as written in a TOML file
///
/// ```toml
/// key = "ocean"
/// name = "Ocean"
/// category = "modern"
///
/// [layout.colors]
/// primary = "#0369a1"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomTemplateSpec {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub layout: LayoutOverrides,
}

impl CustomTemplateSpec {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn into_config(self) -> TemplateConfig {
        create_custom(
            self.key,
            self.name,
            self.description,
            self.category,
            self.layout,
        )
    }
}
