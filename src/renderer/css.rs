//! Stylesheet generation
//!
//! Output order: custom properties from the palette and typography, a scoped
//! reset, one rule per [`Class`] in [`Class::vocabulary`], then a print block
//! that pins sizes for PDF capture.

use crate::config::{
    EducationStyle, ExperienceStyle, HeaderStyle, Layout, SectionKind, SkillsStyle,
    TemplateConfig,
};

use super::markup::{Class, Side};
use super::RenderConfig;

/// A single CSS rule
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: vec![],
        }
    }

    pub fn decl(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }

    fn write(&self, out: &mut String, pretty: bool, depth: usize) {
        if pretty {
            let pad = "  ".repeat(depth);
            out.push_str(&format!("{}{} {{\n", pad, self.selector));
            for (property, value) in &self.declarations {
                out.push_str(&format!("{}  {}: {};\n", pad, property, value));
            }
            out.push_str(&format!("{}}}\n", pad));
        } else {
            out.push_str(&format!("{}{{", self.selector));
            for (property, value) in &self.declarations {
                out.push_str(&format!("{}:{};", property, value));
            }
            out.push('}');
        }
    }
}

/// Top-level stylesheet entry
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Rule(Rule),
    Media { query: String, rules: Vec<Rule> },
}

impl Block {
    /// Every rule in this block, including those nested in a media query
    pub fn rules(&self) -> &[Rule] {
        match self {
            Block::Rule(rule) => std::slice::from_ref(rule),
            Block::Media { rules, .. } => rules,
        }
    }
}

/// Render the stylesheet for `config`
pub fn generate_css(config: &TemplateConfig, render: &RenderConfig) -> String {
    let blocks = build_stylesheet(config, render.prefix());
    let pretty = render.pretty_print;

    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if pretty && i > 0 {
            out.push('\n');
        }
        match block {
            Block::Rule(rule) => rule.write(&mut out, pretty, 0),
            Block::Media { query, rules } => {
                if pretty {
                    out.push_str(&format!("@media {} {{\n", query));
                } else {
                    out.push_str(&format!("@media {}{{", query));
                }
                for rule in rules {
                    rule.write(&mut out, pretty, 1);
                }
                out.push('}');
                if pretty {
                    out.push('\n');
                }
            }
        }
    }
    out
}

/// Build the typed stylesheet for `config`
pub fn build_stylesheet(config: &TemplateConfig, prefix: &str) -> Vec<Block> {
    let layout = &config.layout;
    let vars = Vars { prefix };

    let mut blocks: Vec<Block> = base_rules(layout, prefix, &vars)
        .into_iter()
        .map(Block::Rule)
        .collect();

    for class in Class::vocabulary(config) {
        let mut rule = Rule::new(selector(prefix, &[class]));
        rule.declarations = declarations(class, layout, &vars);
        blocks.push(Block::Rule(rule));
    }

    blocks.push(Block::Media {
        query: "print".to_string(),
        rules: print_rules(prefix),
    });

    blocks
}

/// Comma-separated class selector list
fn selector(prefix: &str, classes: &[Class]) -> String {
    classes
        .iter()
        .map(|c| format!(".{}", c.token(prefix)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Custom property names and `var()` references
struct Vars<'a> {
    prefix: &'a str,
}

impl Vars<'_> {
    fn name(&self, token: &str) -> String {
        format!("--{}{}", self.prefix, token)
    }

    fn var(&self, token: &str) -> String {
        format!("var({})", self.name(token))
    }
}

fn base_rules(layout: &Layout, prefix: &str, vars: &Vars) -> Vec<Rule> {
    let colors = &layout.colors;
    let typography = &layout.typography;
    let root = selector(prefix, &[Class::Resume]);

    vec![
        Rule::new(":root")
            .decl(vars.name("primary"), colors.primary.as_str())
            .decl(vars.name("secondary"), colors.secondary.as_str())
            .decl(vars.name("accent"), colors.accent.as_str())
            .decl(vars.name("background"), colors.background.as_str())
            .decl(vars.name("text"), colors.text.as_str())
            .decl(vars.name("heading-font"), typography.heading_font.as_str())
            .decl(vars.name("body-font"), typography.body_font.as_str()),
        Rule::new(format!("{r} *, {r} *::before, {r} *::after", r = root))
            .decl("box-sizing", "border-box")
            .decl("margin", "0")
            .decl("padding", "0"),
        Rule::new(format!("{r} h1, {r} h2, {r} h3", r = root))
            .decl("font-family", vars.var("heading-font"))
            .decl("line-height", "1.2"),
        Rule::new(format!("{} ul", root)).decl("list-style", "none"),
    ]
}

type Decls = Vec<(String, String)>;

fn d(pairs: &[(&str, &str)]) -> Decls {
    pairs
        .iter()
        .map(|(p, v)| (p.to_string(), v.to_string()))
        .collect()
}

/// Declarations for one class; exhaustive so every emitted class is styled
fn declarations(class: Class, layout: &Layout, vars: &Vars) -> Decls {
    let primary = vars.var("primary");
    let secondary = vars.var("secondary");
    let accent = vars.var("accent");
    let text = vars.var("text");
    let (name_px, section_px, item_px) = layout.typography.heading_size.scale();

    match class {
        Class::Resume => vec![
            ("font-family".into(), vars.var("body-font")),
            ("color".into(), text),
            ("background".into(), vars.var("background")),
            ("max-width".into(), "800px".into()),
            ("margin".into(), "0 auto".into()),
            ("padding".into(), "40px".into()),
            ("line-height".into(), "1.5".into()),
        ],
        Class::Header => vec![
            ("display".into(), "flex".into()),
            ("align-items".into(), "center".into()),
            ("gap".into(), "24px".into()),
            ("padding-bottom".into(), "24px".into()),
            ("margin-bottom".into(), "24px".into()),
            ("border-bottom".into(), format!("2px solid {}", primary)),
        ],
        Class::HeaderVariant(style) => match style {
            HeaderStyle::Centered => d(&[("flex-direction", "column"), ("text-align", "center")]),
            HeaderStyle::LeftAligned => d(&[("flex-direction", "row"), ("text-align", "left")]),
            HeaderStyle::RightAligned => {
                d(&[("flex-direction", "row-reverse"), ("text-align", "right")])
            }
            HeaderStyle::Split => d(&[
                ("justify-content", "space-between"),
                ("align-items", "flex-start"),
            ]),
        },
        Class::Avatar => vec![
            ("width".into(), "96px".into()),
            ("height".into(), "96px".into()),
            ("border-radius".into(), "50%".into()),
            ("object-fit".into(), "cover".into()),
            ("flex-shrink".into(), "0".into()),
            ("border".into(), format!("3px solid {}", primary)),
        ],
        Class::AvatarInitials => vec![
            ("display".into(), "flex".into()),
            ("align-items".into(), "center".into()),
            ("justify-content".into(), "center".into()),
            ("background".into(), primary),
            ("color".into(), "#ffffff".into()),
            ("font-size".into(), "32px".into()),
            ("font-weight".into(), "700".into()),
        ],
        Class::Identity => d(&[
            ("display", "flex"),
            ("flex-direction", "column"),
            ("gap", "4px"),
            ("min-width", "0"),
        ]),
        Class::Name => vec![
            ("color".into(), primary),
            ("font-size".into(), format!("{}px", name_px)),
            ("font-weight".into(), "700".into()),
        ],
        Class::Title => vec![
            ("color".into(), secondary),
            ("font-size".into(), "18px".into()),
        ],
        Class::Contact => {
            let mut decls = d(&[
                ("display", "flex"),
                ("flex-wrap", "wrap"),
                ("gap", "4px 12px"),
                ("font-size", "14px"),
                ("margin-top", "8px"),
            ]);
            let alignment = match layout.header.style {
                HeaderStyle::Centered => d(&[("justify-content", "center")]),
                HeaderStyle::LeftAligned => d(&[("justify-content", "flex-start")]),
                HeaderStyle::RightAligned => d(&[("justify-content", "flex-end")]),
                HeaderStyle::Split => d(&[
                    ("flex-direction", "column"),
                    ("align-items", "flex-end"),
                    ("margin-top", "0"),
                ]),
            };
            decls.extend(alignment);
            decls
        }
        Class::ContactItem => vec![
            ("color".into(), text),
            ("white-space".into(), "nowrap".into()),
        ],
        Class::Summary => vec![
            ("margin-bottom".into(), "24px".into()),
            ("padding".into(), "12px 16px".into()),
            ("border-left".into(), format!("4px solid {}", accent)),
        ],
        Class::Content | Class::FullWidth | Class::Column => d(&[
            ("display", "flex"),
            ("flex-direction", "column"),
            ("gap", "24px"),
            ("min-width", "0"),
        ]),
        Class::Grid => d(&[
            ("display", "grid"),
            ("grid-template-columns", "minmax(0, 1fr) minmax(0, 2fr)"),
            ("gap", "32px"),
        ]),
        Class::GridSingle => d(&[("grid-template-columns", "minmax(0, 1fr)")]),
        Class::ColumnSide(Side::Left) => d(&[("grid-column", "1")]),
        Class::ColumnSide(Side::Right) => d(&[("grid-column", "auto")]),
        Class::Section => d(&[("display", "block")]),
        Class::SectionVariant(kind) => match kind {
            SectionKind::Experience => d(&[("break-inside", "auto")]),
            SectionKind::Skills | SectionKind::Education => d(&[("break-inside", "avoid")]),
        },
        Class::SectionTitle => vec![
            ("color".into(), primary),
            ("font-size".into(), format!("{}px", section_px)),
            ("text-transform".into(), "uppercase".into()),
            ("letter-spacing".into(), "0.05em".into()),
            ("padding-bottom".into(), "4px".into()),
            ("margin-bottom".into(), "12px".into()),
            ("border-bottom".into(), format!("1px solid {}", accent)),
        ],
        Class::Skills => d(&[("gap", "8px")]),
        Class::SkillsVariant(style) => match style {
            SkillsStyle::Chips => d(&[("display", "flex"), ("flex-wrap", "wrap")]),
            SkillsStyle::List => d(&[
                ("display", "flex"),
                ("flex-direction", "column"),
                ("gap", "4px"),
            ]),
            SkillsStyle::Grid => d(&[
                ("display", "grid"),
                ("grid-template-columns", "repeat(2, minmax(0, 1fr))"),
            ]),
            SkillsStyle::Bars => d(&[
                ("display", "flex"),
                ("flex-direction", "column"),
                ("gap", "10px"),
            ]),
        },
        Class::Skill => d(&[("font-size", "14px")]),
        Class::SkillVariant(style) => match style {
            SkillsStyle::Chips => vec![
                ("padding".into(), "4px 12px".into()),
                ("border-radius".into(), "9999px".into()),
                ("background".into(), primary),
                ("color".into(), "#ffffff".into()),
            ],
            SkillsStyle::List => vec![
                ("padding-left".into(), "12px".into()),
                ("border-left".into(), format!("3px solid {}", accent)),
            ],
            SkillsStyle::Grid => vec![
                ("padding".into(), "6px 10px".into()),
                ("border".into(), format!("1px solid {}", secondary)),
                ("border-radius".into(), "4px".into()),
                ("text-align".into(), "center".into()),
            ],
            SkillsStyle::Bars => d(&[
                ("display", "flex"),
                ("flex-direction", "column"),
                ("gap", "4px"),
            ]),
        },
        Class::SkillLabel => d(&[("font-size", "13px"), ("font-weight", "600")]),
        Class::SkillTrack => d(&[
            ("height", "8px"),
            ("background", "#e5e7eb"),
            ("border-radius", "4px"),
            ("overflow", "hidden"),
        ]),
        Class::SkillFill => vec![
            ("height".into(), "100%".into()),
            ("background".into(), primary),
            ("border-radius".into(), "4px".into()),
        ],
        Class::ExperienceList => d(&[
            ("display", "flex"),
            ("flex-direction", "column"),
            ("gap", "16px"),
        ]),
        Class::ExperienceListVariant(style) => match style {
            ExperienceStyle::Timeline => vec![
                ("position".into(), "relative".into()),
                ("padding-left".into(), "20px".into()),
                ("border-left".into(), format!("2px solid {}", secondary)),
            ],
            ExperienceStyle::Cards | ExperienceStyle::Simple => d(&[("gap", "12px")]),
            ExperienceStyle::Detailed => d(&[("gap", "20px")]),
        },
        Class::Experience => d(&[("position", "relative")]),
        Class::ExperienceVariant(style) => match style {
            ExperienceStyle::Cards => vec![
                ("padding".into(), "16px".into()),
                ("border".into(), format!("1px solid {}", accent)),
                ("border-radius".into(), "8px".into()),
            ],
            ExperienceStyle::Timeline => d(&[("padding-left", "8px")]),
            ExperienceStyle::Simple => d(&[("padding-bottom", "8px")]),
            ExperienceStyle::Detailed => vec![
                ("padding-bottom".into(), "12px".into()),
                ("border-bottom".into(), format!("1px solid {}", accent)),
            ],
        },
        Class::ExperienceMarker => vec![
            ("position".into(), "absolute".into()),
            ("left".into(), "-27px".into()),
            ("top".into(), "6px".into()),
            ("width".into(), "12px".into()),
            ("height".into(), "12px".into()),
            ("border-radius".into(), "50%".into()),
            ("background".into(), primary),
        ],
        Class::ExperienceHeader => d(&[
            ("display", "flex"),
            ("flex-wrap", "wrap"),
            ("align-items", "baseline"),
            ("gap", "4px 12px"),
            ("margin-bottom", "6px"),
        ]),
        Class::JobTitle => vec![
            ("font-size".into(), format!("{}px", item_px)),
            ("width".into(), "100%".into()),
        ],
        Class::Company | Class::Institution => vec![
            ("color".into(), secondary),
            ("font-weight".into(), "600".into()),
        ],
        Class::Duration | Class::Year => d(&[("font-size", "13px"), ("opacity", "0.7")]),
        Class::JobLocation => d(&[
            ("font-size", "13px"),
            ("font-style", "italic"),
            ("opacity", "0.7"),
        ]),
        Class::Responsibilities => d(&[
            ("list-style", "disc"),
            ("padding-left", "20px"),
            ("font-size", "14px"),
        ]),
        Class::Responsibility => d(&[("margin-bottom", "2px")]),
        Class::EducationList => d(&[
            ("display", "flex"),
            ("flex-direction", "column"),
            ("gap", "12px"),
        ]),
        Class::EducationListVariant(style) => match style {
            EducationStyle::Cards => d(&[("gap", "12px")]),
            EducationStyle::List => d(&[("gap", "6px")]),
            EducationStyle::Simple => d(&[("gap", "8px")]),
        },
        Class::Education => d(&[("display", "flex"), ("flex-direction", "column")]),
        Class::EducationVariant(style) => match style {
            EducationStyle::Cards => vec![
                ("padding".into(), "12px".into()),
                ("border".into(), format!("1px solid {}", accent)),
                ("border-radius".into(), "8px".into()),
            ],
            EducationStyle::List => d(&[
                ("flex-direction", "row"),
                ("flex-wrap", "wrap"),
                ("gap", "4px 8px"),
            ]),
            EducationStyle::Simple => d(&[("padding-bottom", "4px")]),
        },
        Class::Degree => vec![
            ("font-size".into(), format!("{}px", item_px)),
            ("font-weight".into(), "600".into()),
        ],
    }
}

/// Fixed sizes used when the fragment is captured for PDF
fn print_rules(prefix: &str) -> Vec<Rule> {
    vec![
        Rule::new(selector(prefix, &[Class::Resume]))
            .decl("max-width", "none")
            .decl("padding", "24px")
            .decl("-webkit-print-color-adjust", "exact")
            .decl("print-color-adjust", "exact"),
        Rule::new(selector(prefix, &[Class::Header]))
            .decl("padding-bottom", "16px")
            .decl("margin-bottom", "16px"),
        Rule::new(selector(prefix, &[Class::Name])).decl("font-size", "28px"),
        Rule::new(selector(prefix, &[Class::SectionTitle])).decl("font-size", "16px"),
        Rule::new(selector(prefix, &[Class::JobTitle, Class::Degree])).decl("font-size", "14px"),
        Rule::new(selector(prefix, &[Class::Avatar]))
            .decl("width", "80px")
            .decl("height", "80px"),
        Rule::new(selector(prefix, &[Class::Content, Class::Column, Class::FullWidth]))
            .decl("gap", "16px"),
        Rule::new(selector(prefix, &[Class::Section])).decl("break-inside", "avoid-page"),
    ]
}
