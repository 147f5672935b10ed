//! Templates shipped with the crate

use crate::color::HexColor;
use crate::config::{Category, TemplateConfig};

use super::factory::{create_archetype, quick_templates};

fn showcase(category: Category) -> TemplateConfig {
    let (name, description, primary) = match category {
        Category::Professional => (
            "Professional",
            "Traditional two-column layout with serif headings",
            HexColor::from_rgb(0x1e, 0x3a, 0x8a),
        ),
        Category::Modern => (
            "Modern",
            "Split header, skill chips and an experience timeline",
            HexColor::from_rgb(0x3b, 0x82, 0xf6),
        ),
        Category::Creative => (
            "Creative",
            "Centered header with skill bars and card sections",
            HexColor::from_rgb(0xdb, 0x27, 0x77),
        ),
        Category::Minimal => (
            "Minimal",
            "Single column with plain lists",
            HexColor::from_rgb(0x11, 0x18, 0x27),
        ),
    };
    create_archetype(category, category.as_str(), name, description, primary)
}

/// One showcase per archetype followed by the quick templates
pub fn builtin_templates() -> Vec<TemplateConfig> {
    let mut templates: Vec<TemplateConfig> = Category::ALL.into_iter().map(showcase).collect();
    templates.extend(quick_templates());
    templates
}
