//! Registry contract tests
//!
//! Metadata round-trips, memoization observed through a counting generator,
//! invalidation on re-registration, unknown-key failures and the fallback
//! catalog's independence from registry state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock, Weak};
use std::thread;

use pretty_assertions::assert_eq;

use resume_templates::template::factory::TypographyOverrides;
use resume_templates::template::{
    builtin_templates, create_custom, create_modern, create_professional, LayoutOverrides,
};
use resume_templates::{
    ArtifactGenerator, Category, DocumentMode, DocumentOptions, HexColor, ResumeData,
    StandardGenerator, TemplateConfig, TemplateError, TemplateRegistry,
};

const GREEN: HexColor = HexColor::from_rgb(0x10, 0xb9, 0x81);
const RED: HexColor = HexColor::from_rgb(0xdc, 0x26, 0x26);

#[derive(Default)]
struct Counts {
    html: AtomicUsize,
    css: AtomicUsize,
    preview: AtomicUsize,
}

/// Delegates to the standard generator and counts each call
struct CountingGenerator {
    inner: StandardGenerator,
    counts: Arc<Counts>,
}

impl ArtifactGenerator for CountingGenerator {
    fn html(&self, config: &TemplateConfig, data: &ResumeData) -> String {
        self.counts.html.fetch_add(1, Ordering::SeqCst);
        self.inner.html(config, data)
    }

    fn css(&self, config: &TemplateConfig) -> String {
        self.counts.css.fetch_add(1, Ordering::SeqCst);
        self.inner.css(config)
    }

    fn preview(&self, config: &TemplateConfig) -> String {
        self.counts.preview.fetch_add(1, Ordering::SeqCst);
        self.inner.preview(config)
    }
}

fn counting_registry() -> (TemplateRegistry, Arc<Counts>) {
    let counts = Arc::new(Counts::default());
    let generator = CountingGenerator {
        inner: StandardGenerator::default(),
        counts: Arc::clone(&counts),
    };
    (TemplateRegistry::with_generator(Box::new(generator)), counts)
}

/// Replaces its own template with a red one while the first stylesheet is
/// being generated
struct ReplacingGenerator {
    inner: StandardGenerator,
    registry: Arc<OnceLock<Weak<TemplateRegistry>>>,
    replaced: AtomicBool,
}

impl ArtifactGenerator for ReplacingGenerator {
    fn html(&self, config: &TemplateConfig, data: &ResumeData) -> String {
        self.inner.html(config, data)
    }

    fn css(&self, config: &TemplateConfig) -> String {
        let css = self.inner.css(config);
        if !self.replaced.swap(true, Ordering::SeqCst) {
            if let Some(registry) = self.registry.get().and_then(Weak::upgrade) {
                registry.register(create_professional(&config.key, "P", "", RED));
            }
        }
        css
    }

    fn preview(&self, config: &TemplateConfig) -> String {
        self.inner.preview(config)
    }
}

#[test]
fn test_round_trip_metadata() {
    let registry = TemplateRegistry::new();
    for config in builtin_templates() {
        registry.register(config.clone());
        let stored = registry.get_template(&config.key).expect("registered");
        assert_eq!(stored.key, config.key);
        assert_eq!(stored.name, config.name);
        assert_eq!(stored.description, config.description);
        assert_eq!(stored.category, config.category);
    }
}

#[test]
fn test_get_all_templates_is_metadata() {
    let registry = TemplateRegistry::with_builtins();
    let all = registry.get_all_templates();
    assert_eq!(all.len(), builtin_templates().len());
    assert!(all.iter().all(|meta| meta.preview.is_none()));
    assert!(all.windows(2).all(|pair| pair[0].key < pair[1].key));
}

#[test]
fn test_templates_by_category() {
    let registry = TemplateRegistry::with_builtins();
    for category in Category::ALL {
        let metas = registry.get_templates_by_category(category);
        assert!(!metas.is_empty());
        assert!(metas.iter().all(|meta| meta.category == category));
    }
}

#[test]
fn test_css_generated_once() {
    let (registry, counts) = counting_registry();
    registry.register(create_modern("m1", "Modern", "d", GREEN));

    let first = registry.get_css("m1").expect("css");
    let second = registry.get_css("m1").expect("css");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(counts.css.load(Ordering::SeqCst), 1);
}

#[test]
fn test_preview_generated_once() {
    let (registry, counts) = counting_registry();
    registry.register(create_modern("m1", "Modern", "d", GREEN));

    let first = registry.get_preview("m1").expect("preview");
    let second = registry.get_preview("m1").expect("preview");

    assert!(Arc::ptr_eq(&first, &second));
    assert!(first.starts_with("data:image/svg+xml;base64,"));
    assert_eq!(counts.preview.load(Ordering::SeqCst), 1);
}

#[test]
fn test_html_not_cached() {
    let (registry, counts) = counting_registry();
    registry.register(create_modern("m1", "Modern", "d", GREEN));

    let data = ResumeData::new("Ada Lovelace");
    registry.generate_html("m1", &data).expect("html");
    registry.generate_html("m1", &data).expect("html");
    assert_eq!(counts.html.load(Ordering::SeqCst), 2);
}

#[test]
fn test_reregister_invalidates_cache() {
    let (registry, counts) = counting_registry();
    registry.register(create_professional("p", "P", "", GREEN));
    let before = registry.get_css("p").expect("css");

    registry.register(create_professional("p", "P", "", RED));
    let after = registry.get_css("p").expect("css");

    assert_ne!(before, after);
    assert!(after.contains("#dc2626"));
    assert_eq!(counts.css.load(Ordering::SeqCst), 2);
}

#[test]
fn test_replacement_during_generation_is_not_cached() {
    let slot = Arc::new(OnceLock::new());
    let registry = Arc::new(TemplateRegistry::with_generator(Box::new(ReplacingGenerator {
        inner: StandardGenerator::default(),
        registry: Arc::clone(&slot),
        replaced: AtomicBool::new(false),
    })));
    slot.set(Arc::downgrade(&registry)).expect("set once");
    registry.register(create_professional("p", "P", "", GREEN));

    let first = registry.get_css("p").expect("css");
    assert!(first.contains("#10b981"));
    assert_eq!(registry.get_stats().cached_css, 0);

    let second = registry.get_css("p").expect("css");
    assert!(second.contains("#dc2626"));
    assert!(!second.contains("#10b981"));
    assert_eq!(registry.get_stats().cached_css, 1);
    assert!(Arc::ptr_eq(&second, &registry.get_css("p").expect("css")));
}

#[test]
fn test_document_style_survives_hostile_font() {
    let overrides = LayoutOverrides {
        typography: Some(TypographyOverrides {
            heading_font: Some("x</style><script>alert(1)</script>".into()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let registry = TemplateRegistry::new();
    registry.register(create_custom("evil", "Evil", "", Category::Modern, overrides));

    let doc = registry
        .render_document("evil", &ResumeData::new("Ada Lovelace"), &DocumentOptions::new())
        .expect("document");
    let close = doc.find("</style>").expect("style element closes");
    assert_eq!(doc.matches("</style>").count(), 1);
    assert!(doc.find("alert(1)").expect("font text kept") < close);
    assert!(!doc.contains("</script>"));
}

#[test]
fn test_clear_caches_forces_regeneration() {
    let (registry, counts) = counting_registry();
    registry.register(create_modern("m1", "Modern", "d", GREEN));

    registry.get_css("m1").expect("css");
    registry.clear_caches();
    registry.get_css("m1").expect("css");
    assert_eq!(counts.css.load(Ordering::SeqCst), 2);
}

#[test]
fn test_unknown_key_fails() {
    let registry = TemplateRegistry::with_builtins();
    let data = ResumeData::new("Ada Lovelace");
    let expected = TemplateError::not_found("does-not-exist");

    assert_eq!(
        registry.generate_html("does-not-exist", &data).unwrap_err(),
        expected
    );
    assert_eq!(registry.get_css("does-not-exist").unwrap_err(), expected);
    assert_eq!(registry.get_preview("does-not-exist").unwrap_err(), expected);
    assert_eq!(
        registry
            .render_document("does-not-exist", &data, &DocumentOptions::new())
            .unwrap_err(),
        expected
    );
}

#[test]
fn test_removed_key_fails_and_drops_cache() {
    let registry = TemplateRegistry::new();
    registry.register(create_modern("m1", "Modern", "d", GREEN));
    registry.get_css("m1").expect("css");

    assert!(registry.remove_template("m1"));
    assert!(!registry.has_template("m1"));
    assert!(registry.get_css("m1").is_err());
    assert_eq!(registry.get_stats().cached_css, 0);
}

#[test]
fn test_fallback_independent_of_registry() {
    let registry = TemplateRegistry::with_builtins();
    for key in registry.keys() {
        registry.remove_template(&key);
    }
    assert!(registry.is_empty());

    let fallback = TemplateRegistry::fallback_templates();
    assert!(!fallback.is_empty());
    assert!(fallback.iter().all(|meta| meta.preview.is_some()));
}

#[test]
fn test_stats_track_cache_occupancy() {
    let registry = TemplateRegistry::with_builtins();
    registry.get_css("tech").expect("css");
    registry.get_css("clean").expect("css");
    registry.get_preview("tech").expect("preview");

    let stats = registry.get_stats();
    assert_eq!(stats.total, 12);
    assert_eq!(stats.cached_css, 2);
    assert_eq!(stats.cached_previews, 1);
    assert_eq!(stats.by_category[&Category::Minimal], 3);

    let json = serde_json::to_value(&stats).expect("serializable");
    assert_eq!(json["total"], 12);
    assert_eq!(json["by_category"]["minimal"], 3);
}

#[test]
fn test_render_document_inlines_cached_css() {
    let registry = TemplateRegistry::with_builtins();
    let options = DocumentOptions::new()
        .with_title("Ada Lovelace")
        .with_mode(DocumentMode::Print);
    let doc = registry
        .render_document("corporate", &ResumeData::new("Ada Lovelace"), &options)
        .expect("document");

    let css = registry.get_css("corporate").expect("css");
    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains(&*css));
    assert!(doc.contains("<title>Ada Lovelace</title>"));
    assert!(doc.contains("size: A4;"));
    assert_eq!(registry.get_stats().cached_css, 1);
}

#[test]
fn test_concurrent_reads_share_one_artifact() {
    let (registry, counts) = counting_registry();
    registry.register(create_modern("m1", "Modern", "d", GREEN));
    let registry = Arc::new(registry);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.get_css("m1").expect("css"))
        })
        .collect();
    let results: Vec<Arc<str>> = handles
        .into_iter()
        .map(|h| h.join().expect("thread"))
        .collect();

    let stored = registry.get_css("m1").expect("css");
    assert!(results.iter().all(|css| css == &stored));
    assert!(counts.css.load(Ordering::SeqCst) >= 1);
}
