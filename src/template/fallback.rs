//! Static template catalog
//!
//! Hand-authored metadata with pre-baked preview images. It never consults a
//! registry, so it stays usable when registry state is empty or suspect.

use crate::config::{Category, TemplateMeta};
use crate::renderer::svg::to_data_uri;

struct FallbackEntry {
    key: &'static str,
    name: &'static str,
    description: &'static str,
    category: Category,
    svg: &'static str,
}

const PROFESSIONAL_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="150" height="200" viewBox="0 0 150 200"><rect width="150" height="200" fill="#ffffff"/><rect width="150" height="50" fill="#1e3a8a"/><rect x="10" y="15" width="60" height="4" fill="#ffffff"/><rect x="10" y="27.5" width="37.5" height="4" fill="#ffffff" fill-opacity="0.7"/><rect x="10" y="60" width="48" height="130" fill="#000757" fill-opacity="0.35"/><rect x="68" y="60" width="72" height="130" fill="#84a0f0" fill-opacity="0.35"/></svg>"##;

const MODERN_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="150" height="200" viewBox="0 0 150 200"><rect width="150" height="200" fill="#ffffff"/><rect width="150" height="50" fill="#3b82f6"/><circle cx="25" cy="25" r="15" fill="#ffffff" fill-opacity="0.9"/><rect x="50" y="15" width="60" height="4" fill="#ffffff"/><rect x="50" y="27.5" width="37.5" height="4" fill="#ffffff" fill-opacity="0.7"/><rect x="10" y="60" width="48" height="130" fill="#88cfff" fill-opacity="0.35"/><rect x="68" y="60" width="72" height="130" fill="#aef5ff" fill-opacity="0.35"/></svg>"##;

const CREATIVE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="150" height="200" viewBox="0 0 150 200"><rect width="150" height="200" fill="#fafafa"/><rect width="150" height="50" fill="#db2777"/><circle cx="75" cy="16" r="10" fill="#ffffff" fill-opacity="0.9"/><rect x="45" y="30" width="60" height="4" fill="#ffffff"/><rect x="56.25" y="38" width="37.5" height="4" fill="#ffffff" fill-opacity="0.7"/><rect x="10" y="60" width="48" height="130" fill="#ff5aaa" fill-opacity="0.35"/><rect x="68" y="60" width="72" height="130" fill="#b50151" fill-opacity="0.35"/></svg>"##;

const MINIMAL_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="150" height="200" viewBox="0 0 150 200"><rect width="150" height="200" fill="#ffffff"/><rect width="150" height="50" fill="#111827"/><rect x="10" y="15" width="60" height="4" fill="#ffffff"/><rect x="10" y="27.5" width="37.5" height="4" fill="#ffffff" fill-opacity="0.7"/><rect x="10" y="60" width="130" height="130" fill="#777e8d" fill-opacity="0.35"/></svg>"##;

const CATALOG: [FallbackEntry; 4] = [
    FallbackEntry {
        key: "professional",
        name: "Professional",
        description: "Traditional two-column layout with serif headings",
        category: Category::Professional,
        svg: PROFESSIONAL_SVG,
    },
    FallbackEntry {
        key: "modern",
        name: "Modern",
        description: "Split header, skill chips and an experience timeline",
        category: Category::Modern,
        svg: MODERN_SVG,
    },
    FallbackEntry {
        key: "creative",
        name: "Creative",
        description: "Centered header with skill bars and card sections",
        category: Category::Creative,
        svg: CREATIVE_SVG,
    },
    FallbackEntry {
        key: "minimal",
        name: "Minimal",
        description: "Single column with plain lists",
        category: Category::Minimal,
        svg: MINIMAL_SVG,
    },
];

/// The static catalog, in display order
pub fn fallback_templates() -> Vec<TemplateMeta> {
    CATALOG
        .iter()
        .map(|entry| TemplateMeta {
            key: entry.key.to_string(),
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            category: entry.category,
            preview: Some(to_data_uri(entry.svg)),
        })
        .collect()
}
