//! Schematic SVG preview generation
//!
//! The preview is a coarse fingerprint of a template: header band, avatar
//! placeholder, two text bars and up to two content blocks placed where the
//! sections are claimed. It never looks at resume data.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config::{HeaderStyle, TemplateConfig};

use super::RenderConfig;

const PADDING: f64 = 10.0;
const LINE_HEIGHT: f64 = 4.0;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    prefix: String,
    pretty_print: bool,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            prefix: config.prefix().to_string(),
            pretty_print: config.pretty_print,
            elements: vec![],
        }
    }

    fn indent_str(&self) -> &str {
        if self.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, class: &str, x: f64, y: f64, w: f64, h: f64, styles: &str) {
        self.elements.push(format!(
            r#"{}<rect class="{}{}" x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            self.prefix,
            class,
            num(x),
            num(y),
            num(w),
            num(h),
            styles
        ));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, class: &str, cx: f64, cy: f64, r: f64, styles: &str) {
        self.elements.push(format!(
            r#"{}<circle class="{}{}" cx="{}" cy="{}" r="{}"{}/>"#,
            self.indent_str(),
            self.prefix,
            class,
            num(cx),
            num(cy),
            num(r),
            styles
        ));
    }

    /// Build the final SVG string
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" class="{}preview">"#,
            self.prefix,
            w = num(width),
            h = num(height),
        );
        svg.push_str(nl);
        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }
        svg.push_str("</svg>");
        svg
    }
}

/// Format a coordinate with at most two decimals
fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}", rounded)
}

fn fill(color: &str) -> String {
    format!(r#" fill="{}""#, escape_attr(color))
}

fn fill_with_opacity(color: &str, opacity: f64) -> String {
    format!(
        r#" fill="{}" fill-opacity="{}""#,
        escape_attr(color),
        num(opacity)
    )
}

/// Colors are opaque strings; keep them from breaking out of the attribute
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}

/// Render the raw preview SVG markup for `config`
pub fn preview_markup(config: &TemplateConfig, render: &RenderConfig) -> String {
    let (width, height) = render.preview_size;
    let colors = &config.layout.colors;
    let header = &config.layout.header;
    let plan = config.layout.sections.columns();

    let mut builder = SvgBuilder::new(render);
    builder.add_rect("preview-background", 0.0, 0.0, width, height, &fill(&colors.background));

    let band = height * 0.25;
    builder.add_rect("preview-header", 0.0, 0.0, width, band, &fill(&colors.primary));

    let wide = width * 0.4;
    let narrow = width * 0.25;
    let line_styles = [fill("#ffffff"), fill_with_opacity("#ffffff", 0.7)];

    match header.style {
        HeaderStyle::Centered => {
            let r = band * 0.2;
            if header.show_avatar {
                builder.add_circle(
                    "preview-avatar",
                    width / 2.0,
                    band * 0.32,
                    r,
                    &fill_with_opacity("#ffffff", 0.9),
                );
            }
            for ((w, y), styles) in [(wide, band * 0.6), (narrow, band * 0.76)]
                .into_iter()
                .zip(&line_styles)
            {
                builder.add_rect("preview-line", (width - w) / 2.0, y, w, LINE_HEIGHT, styles);
            }
        }
        HeaderStyle::LeftAligned | HeaderStyle::Split | HeaderStyle::RightAligned => {
            let r = band * 0.3;
            let avatar_span = if header.show_avatar { 2.0 * r + PADDING } else { 0.0 };
            let right_aligned = header.style == HeaderStyle::RightAligned;

            if header.show_avatar {
                let cx = if right_aligned {
                    width - PADDING - r
                } else {
                    PADDING + r
                };
                builder.add_circle(
                    "preview-avatar",
                    cx,
                    band / 2.0,
                    r,
                    &fill_with_opacity("#ffffff", 0.9),
                );
            }

            for ((w, y), styles) in [(wide, band * 0.3), (narrow, band * 0.55)]
                .into_iter()
                .zip(&line_styles)
            {
                let x = if right_aligned {
                    width - PADDING - avatar_span - w
                } else {
                    PADDING + avatar_span
                };
                builder.add_rect("preview-line", x, y, w, LINE_HEIGHT, styles);
            }
        }
    }

    let top = band + PADDING;
    let block_height = height - top - PADDING;
    let inner = width - 2.0 * PADDING;

    let blocks: Vec<(f64, f64, &str)> = if plan.is_two_column() {
        let left = (inner - PADDING) * 0.4;
        vec![
            (PADDING, left, colors.secondary.as_str()),
            (2.0 * PADDING + left, inner - PADDING - left, colors.accent.as_str()),
        ]
    } else {
        vec![(PADDING, inner, colors.secondary.as_str())]
    };

    for (x, w, color) in blocks {
        builder.add_rect(
            "preview-block",
            x,
            top,
            w,
            block_height,
            &fill_with_opacity(color, 0.35),
        );
        builder.add_rect(
            "preview-line",
            x + 6.0,
            top + 6.0,
            w * 0.5,
            LINE_HEIGHT,
            &fill(&colors.primary),
        );
    }

    builder.build(width, height)
}

/// Render the preview as a `data:image/svg+xml;base64,…` URI
pub fn generate_preview_svg(config: &TemplateConfig, render: &RenderConfig) -> String {
    to_data_uri(&preview_markup(config, render))
}

/// Wrap SVG markup in a base64 data URI
pub fn to_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}
