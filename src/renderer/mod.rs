//! Artifact generation from template configs
//!
//! A [`TemplateConfig`] compiles into three coupled artifacts: an HTML
//! fragment (per resume), a stylesheet and an SVG preview (per config). All
//! three are pure functions of their inputs.

pub mod config;
pub mod css;
pub mod document;
pub mod html;
pub mod markup;
pub mod svg;

pub use config::RenderConfig;
pub use document::{assemble_document, DocumentMode, DocumentOptions};

use crate::config::TemplateConfig;
use crate::resume::ResumeData;

/// Generator bound to one template config
#[derive(Debug, Clone, Copy)]
pub struct TemplateGenerator<'a> {
    config: &'a TemplateConfig,
    render: &'a RenderConfig,
}

impl<'a> TemplateGenerator<'a> {
    pub fn new(config: &'a TemplateConfig, render: &'a RenderConfig) -> Self {
        Self { config, render }
    }

    pub fn config(&self) -> &TemplateConfig {
        self.config
    }

    /// HTML fragment for `data`
    pub fn generate_html(&self, data: &ResumeData) -> String {
        html::generate_html(self.config, data, self.render)
    }

    pub fn generate_css(&self) -> String {
        css::generate_css(self.config, self.render)
    }

    /// Preview as a base64 SVG data URI
    pub fn generate_preview_svg(&self) -> String {
        svg::generate_preview_svg(self.config, self.render)
    }
}

/// Compiles configs into artifacts on behalf of the registry
///
/// The registry only talks to this trait, so an alternate backend (or a
/// counting stub in tests) can be swapped in.
pub trait ArtifactGenerator: Send + Sync {
    fn html(&self, config: &TemplateConfig, data: &ResumeData) -> String;
    fn css(&self, config: &TemplateConfig) -> String;
    fn preview(&self, config: &TemplateConfig) -> String;
}

/// The built-in HTML/CSS/SVG backend
#[derive(Debug, Clone, Default)]
pub struct StandardGenerator {
    render: RenderConfig,
}

impl StandardGenerator {
    pub fn new(render: RenderConfig) -> Self {
        Self { render }
    }

    pub fn render_config(&self) -> &RenderConfig {
        &self.render
    }

    pub fn bind<'a>(&'a self, config: &'a TemplateConfig) -> TemplateGenerator<'a> {
        TemplateGenerator::new(config, &self.render)
    }
}

impl ArtifactGenerator for StandardGenerator {
    fn html(&self, config: &TemplateConfig, data: &ResumeData) -> String {
        self.bind(config).generate_html(data)
    }

    fn css(&self, config: &TemplateConfig) -> String {
        self.bind(config).generate_css()
    }

    fn preview(&self, config: &TemplateConfig) -> String {
        self.bind(config).generate_preview_svg()
    }
}
