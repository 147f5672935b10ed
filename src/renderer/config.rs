//! Configuration for artifact generation

/// Options shared by the HTML, CSS and preview generators
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Prefix for CSS class names (e.g., "rt-" for "rt-header")
    pub class_prefix: Option<String>,

    /// Whether to format HTML and CSS output with indentation
    pub pretty_print: bool,

    /// Preview canvas size (width, height)
    pub preview_size: (f64, f64),
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            class_prefix: Some("rt-".to_string()),
            pretty_print: true,
            preview_size: (150.0, 200.0),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the preview canvas size
    pub fn with_preview_size(mut self, width: f64, height: f64) -> Self {
        self.preview_size = (width, height);
        self
    }

    pub(crate) fn prefix(&self) -> &str {
        self.class_prefix.as_deref().unwrap_or("")
    }
}
