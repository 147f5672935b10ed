//! Template catalog
//!
//! Factory presets, the built-in table, the static fallback catalog and the
//! [`TemplateRegistry`] that serves generated artifacts by key.
//!
//! # Example
//!
//! ```rust
//! use resume_templates::template::TemplateRegistry;
//! use resume_templates::ResumeData;
//!
//! let registry = TemplateRegistry::with_builtins();
//! let html = registry
//!     .generate_html("tech", &ResumeData::new("Ada Lovelace"))
//!     .unwrap();
//! assert!(html.contains("Ada Lovelace"));
//! ```

pub mod builtin;
pub mod factory;
mod fallback;
mod registry;

pub use builtin::builtin_templates;
pub use factory::{
    create_archetype, create_creative, create_custom, create_minimal, create_modern,
    create_professional, quick_templates, CustomTemplateSpec, LayoutOverrides, Merge,
    QuickTemplate,
};
pub use fallback::fallback_templates;
pub use registry::{RegistryStats, TemplateRegistry};
