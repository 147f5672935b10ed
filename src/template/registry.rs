//! Template registry with memoized artifacts
//!
//! Stores configs by key and caches the per-config artifacts (CSS and the
//! preview image). HTML depends on resume data and is never cached.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{Category, TemplateConfig, TemplateMeta};
use crate::error::TemplateError;
use crate::renderer::{
    assemble_document, ArtifactGenerator, DocumentOptions, RenderConfig, StandardGenerator,
};
use crate::resume::ResumeData;

use super::builtin::builtin_templates;
use super::fallback;

/// A registered config together with its cached artifacts
struct Entry {
    config: Arc<TemplateConfig>,
    css: Option<Arc<str>>,
    preview: Option<Arc<str>>,
}

impl Entry {
    fn new(config: TemplateConfig) -> Self {
        Self {
            config: Arc::new(config),
            css: None,
            preview: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Artifact {
    Css,
    Preview,
}

impl Artifact {
    fn name(self) -> &'static str {
        match self {
            Artifact::Css => "css",
            Artifact::Preview => "preview",
        }
    }

    fn slot(self, entry: &mut Entry) -> &mut Option<Arc<str>> {
        match self {
            Artifact::Css => &mut entry.css,
            Artifact::Preview => &mut entry.preview,
        }
    }

    fn cached(self, entry: &Entry) -> Option<&Arc<str>> {
        match self {
            Artifact::Css => entry.css.as_ref(),
            Artifact::Preview => entry.preview.as_ref(),
        }
    }
}

/// Counts describing registry contents and cache occupancy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub total: usize,
    /// Every category is present, zero when unused
    pub by_category: BTreeMap<Category, usize>,
    pub cached_css: usize,
    pub cached_previews: usize,
}

/// Catalog of known templates
///
/// All methods take `&self`; the registry can be shared across threads
/// behind an `Arc`.
pub struct TemplateRegistry {
    entries: RwLock<HashMap<String, Entry>>,
    generator: Box<dyn ArtifactGenerator>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("keys", &self.keys())
            .finish_non_exhaustive()
    }
}

impl TemplateRegistry {
    /// Create an empty registry using the standard generator
    pub fn new() -> Self {
        Self::with_render_config(RenderConfig::default())
    }

    /// Create an empty registry whose artifacts follow `render`
    pub fn with_render_config(render: RenderConfig) -> Self {
        Self::with_generator(Box::new(StandardGenerator::new(render)))
    }

    /// Create an empty registry backed by a custom generator
    pub fn with_generator(generator: Box<dyn ArtifactGenerator>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            generator,
        }
    }

    /// Create a registry preloaded with the built-in templates
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register_many(builtin_templates());
        registry
    }

    /// Register a template, replacing any existing entry with the same key
    ///
    /// Replacing drops the cached artifacts of the previous config.
    pub fn register(&self, config: TemplateConfig) {
        let key = config.key.clone();
        let previous = self.entries.write().insert(key.clone(), Entry::new(config));
        debug!(key = %key, replaced = previous.is_some(), "registered template");
    }

    pub fn register_many(&self, configs: impl IntoIterator<Item = TemplateConfig>) {
        for config in configs {
            self.register(config);
        }
    }

    pub fn get_template(&self, key: &str) -> Option<Arc<TemplateConfig>> {
        self.entries
            .read()
            .get(key)
            .map(|entry| Arc::clone(&entry.config))
    }

    pub fn has_template(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Metadata for every template, sorted by key
    pub fn get_all_templates(&self) -> Vec<TemplateMeta> {
        self.collect_meta(|_| true)
    }

    pub fn get_templates_by_category(&self, category: Category) -> Vec<TemplateMeta> {
        self.collect_meta(|config| config.category == category)
    }

    fn collect_meta(&self, filter: impl Fn(&TemplateConfig) -> bool) -> Vec<TemplateMeta> {
        let mut metas: Vec<TemplateMeta> = self
            .entries
            .read()
            .values()
            .filter(|entry| filter(&entry.config))
            .map(|entry| entry.config.meta())
            .collect();
        metas.sort_by(|a, b| a.key.cmp(&b.key));
        metas
    }

    /// Registered keys in sorted order
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn snapshot(&self, key: &str) -> Result<Arc<TemplateConfig>, TemplateError> {
        self.get_template(key)
            .ok_or_else(|| TemplateError::not_found(key))
    }

    /// Render the HTML fragment for `data` with the template under `key`
    pub fn generate_html(&self, key: &str, data: &ResumeData) -> Result<String, TemplateError> {
        let config = self.snapshot(key)?;
        Ok(self.generator.html(&config, data))
    }

    /// Stylesheet for `key`, generated on first request
    pub fn get_css(&self, key: &str) -> Result<Arc<str>, TemplateError> {
        self.cached(key, Artifact::Css)
    }

    /// Preview data URI for `key`, generated on first request
    pub fn get_preview(&self, key: &str) -> Result<Arc<str>, TemplateError> {
        self.cached(key, Artifact::Preview)
    }

    /// Standalone HTML document for `data`, with the cached stylesheet inlined
    pub fn render_document(
        &self,
        key: &str,
        data: &ResumeData,
        options: &DocumentOptions,
    ) -> Result<String, TemplateError> {
        let body = self.generate_html(key, data)?;
        let css = self.get_css(key)?;
        Ok(assemble_document(&body, &css, options))
    }

    fn cached(&self, key: &str, artifact: Artifact) -> Result<Arc<str>, TemplateError> {
        let config = {
            let entries = self.entries.read();
            let entry = entries
                .get(key)
                .ok_or_else(|| TemplateError::not_found(key))?;
            if let Some(hit) = artifact.cached(entry) {
                return Ok(Arc::clone(hit));
            }
            Arc::clone(&entry.config)
        };

        debug!(key, artifact = artifact.name(), "cache miss, generating");
        let value: Arc<str> = match artifact {
            Artifact::Css => self.generator.css(&config),
            Artifact::Preview => self.generator.preview(&config),
        }
        .into();

        let mut entries = self.entries.write();
        match entries.get_mut(key) {
            Some(entry) if Arc::ptr_eq(&entry.config, &config) => {
                // A concurrent reader may have stored the same artifact first
                let stored = artifact.slot(entry).get_or_insert_with(|| Arc::clone(&value));
                Ok(Arc::clone(stored))
            }
            _ => {
                warn!(
                    key,
                    artifact = artifact.name(),
                    "template changed during generation, result not cached"
                );
                Ok(value)
            }
        }
    }

    /// Remove a template and its cached artifacts
    ///
    /// Returns whether the key was registered.
    pub fn remove_template(&self, key: &str) -> bool {
        let removed = self.entries.write().remove(key).is_some();
        debug!(key, removed, "removed template");
        removed
    }

    /// Drop every cached artifact, keeping the registered configs
    pub fn clear_caches(&self) {
        let mut entries = self.entries.write();
        for entry in entries.values_mut() {
            entry.css = None;
            entry.preview = None;
        }
        debug!(templates = entries.len(), "cleared caches");
    }

    pub fn get_stats(&self) -> RegistryStats {
        let entries = self.entries.read();
        let mut by_category: BTreeMap<Category, usize> =
            Category::ALL.into_iter().map(|c| (c, 0)).collect();
        for entry in entries.values() {
            *by_category.entry(entry.config.category).or_default() += 1;
        }
        RegistryStats {
            total: entries.len(),
            by_category,
            cached_css: entries.values().filter(|e| e.css.is_some()).count(),
            cached_previews: entries.values().filter(|e| e.preview.is_some()).count(),
        }
    }

    /// Static catalog that does not depend on registry state
    pub fn fallback_templates() -> Vec<TemplateMeta> {
        fallback::fallback_templates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;
    use crate::template::factory::{create_minimal, create_modern};

    const GREEN: HexColor = HexColor::from_rgb(0x10, 0xb9, 0x81);

    #[test]
    fn test_registry_register_and_get() {
        let registry = TemplateRegistry::new();
        registry.register(create_modern("m1", "Modern", "d", GREEN));

        assert!(registry.has_template("m1"));
        let config = registry.get_template("m1").expect("Should be registered");
        assert_eq!(config.name, "Modern");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_unknown_key() {
        let registry = TemplateRegistry::new();
        assert!(registry.get_template("ghost").is_none());
        assert_eq!(
            registry.get_css("ghost").unwrap_err(),
            TemplateError::not_found("ghost")
        );
        assert!(registry.get_preview("ghost").is_err());
    }

    #[test]
    fn test_css_is_cached() {
        let registry = TemplateRegistry::new();
        registry.register(create_modern("m1", "Modern", "d", GREEN));

        let first = registry.get_css("m1").expect("css");
        let second = registry.get_css("m1").expect("css");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.get_stats().cached_css, 1);
        assert_eq!(registry.get_stats().cached_previews, 0);
    }

    #[test]
    fn test_register_evicts_cache() {
        let registry = TemplateRegistry::new();
        registry.register(create_modern("t", "T", "", GREEN));
        let before = registry.get_preview("t").expect("preview");

        registry.register(create_minimal("t", "T", "", GREEN));
        assert_eq!(registry.get_stats().cached_previews, 0);
        let after = registry.get_preview("t").expect("preview");
        assert_ne!(before, after);
    }

    #[test]
    fn test_clear_caches_keeps_templates() {
        let registry = TemplateRegistry::new();
        registry.register(create_modern("m1", "Modern", "d", GREEN));
        registry.get_css("m1").expect("css");
        registry.get_preview("m1").expect("preview");

        registry.clear_caches();
        let stats = registry.get_stats();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.cached_css, 0);
        assert_eq!(stats.cached_previews, 0);
    }

    #[test]
    fn test_remove_template() {
        let registry = TemplateRegistry::new();
        registry.register(create_modern("m1", "Modern", "d", GREEN));
        assert!(registry.remove_template("m1"));
        assert!(!registry.remove_template("m1"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_listing_sorted_and_filtered() {
        let registry = TemplateRegistry::new();
        registry.register(create_modern("zeta", "Z", "", GREEN));
        registry.register(create_minimal("alpha", "A", "", GREEN));
        registry.register(create_modern("beta", "B", "", GREEN));

        let keys: Vec<String> = registry
            .get_all_templates()
            .into_iter()
            .map(|m| m.key)
            .collect();
        assert_eq!(keys, vec!["alpha", "beta", "zeta"]);

        let modern = registry.get_templates_by_category(Category::Modern);
        assert_eq!(modern.len(), 2);
        assert!(registry
            .get_templates_by_category(Category::Creative)
            .is_empty());
    }

    #[test]
    fn test_stats_by_category() {
        let registry = TemplateRegistry::with_builtins();
        let stats = registry.get_stats();
        assert_eq!(stats.total, 12);
        assert_eq!(stats.by_category.len(), Category::ALL.len());
        assert_eq!(stats.by_category.values().sum::<usize>(), 12);
        assert_eq!(stats.by_category[&Category::Modern], 3);
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TemplateRegistry>();
    }
}
