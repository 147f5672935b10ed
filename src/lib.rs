//! Resume Templates - configuration-driven resume template engine
//!
//! A [`TemplateConfig`] declares a resume layout: header shape, section styles
//! and columns, palette and typography. The renderer compiles it into an HTML
//! fragment for given [`ResumeData`], a matching stylesheet and a small SVG
//! preview. The [`TemplateRegistry`] serves all three by template key and
//! memoizes the per-config artifacts.
//!
//! # Example
//!
//! ```rust
//! use resume_templates::template::create_modern;
//! use resume_templates::{HexColor, ResumeData, Skill, TemplateRegistry};
//!
//! let registry = TemplateRegistry::new();
//! let primary: HexColor = "#10b981".parse().unwrap();
//! registry.register(create_modern("m1", "Modern", "Two columns", primary));
//!
//! let mut data = ResumeData::new("Ada Lovelace");
//! data.skills.push(Skill::new("Math"));
//!
//! let html = registry.generate_html("m1", &data).unwrap();
//! assert!(html.contains("Ada Lovelace"));
//!
//! let css = registry.get_css("m1").unwrap();
//! assert!(css.contains(".rt-resume"));
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod renderer;
pub mod resume;
pub mod template;

pub use color::HexColor;
pub use config::{Category, TemplateConfig, TemplateMeta};
pub use error::{ConfigError, TemplateError};
pub use renderer::{
    assemble_document, ArtifactGenerator, DocumentMode, DocumentOptions, RenderConfig,
    StandardGenerator, TemplateGenerator,
};
pub use resume::{Education, ResumeData, Skill, WorkExperience};
pub use template::{RegistryStats, TemplateRegistry};

/// Render an HTML fragment with the default render configuration
///
/// # Example
///
/// ```rust
/// use resume_templates::template::create_minimal;
/// use resume_templates::{generate_html, HexColor, ResumeData};
///
/// let config = create_minimal("clean", "Clean", "", HexColor::from_rgb(0x37, 0x41, 0x51));
/// let html = generate_html(&config, &ResumeData::new("Grace Hopper"));
/// assert!(html.contains("Grace Hopper"));
/// ```
pub fn generate_html(config: &TemplateConfig, data: &ResumeData) -> String {
    renderer::html::generate_html(config, data, &RenderConfig::default())
}

/// Render the stylesheet for `config` with the default render configuration
pub fn generate_css(config: &TemplateConfig) -> String {
    renderer::css::generate_css(config, &RenderConfig::default())
}

/// Render the preview data URI for `config` with the default render configuration
pub fn generate_preview_svg(config: &TemplateConfig) -> String {
    renderer::svg::generate_preview_svg(config, &RenderConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::create_professional;

    #[test]
    fn test_free_functions_match_generator() {
        let config = create_professional("p", "P", "", HexColor::from_rgb(0x3b, 0x82, 0xf6));
        let render = RenderConfig::default();
        let generator = TemplateGenerator::new(&config, &render);
        let data = ResumeData::new("Ada Lovelace");

        assert_eq!(generate_html(&config, &data), generator.generate_html(&data));
        assert_eq!(generate_css(&config), generator.generate_css());
        assert_eq!(generate_preview_svg(&config), generator.generate_preview_svg());
    }
}
