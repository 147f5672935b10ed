//! Typed HTML tree and the class vocabulary shared by HTML and CSS output
//!
//! Markup is never assembled from raw class strings. Every class attribute is
//! built from [`Class`] values, and the stylesheet generator matches
//! exhaustively over the same enum, so adding a class without a rule is a
//! compile error rather than silently unstyled output.

use crate::config::{
    EducationStyle, ExperienceStyle, HeaderStyle, SectionKind, SkillsStyle, TemplateConfig,
};

/// Side column inside the content grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// One CSS class token used by generated markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Resume,
    Header,
    HeaderVariant(HeaderStyle),
    Avatar,
    AvatarInitials,
    Identity,
    Name,
    Title,
    Contact,
    ContactItem,
    Summary,
    Content,
    Grid,
    GridSingle,
    Column,
    ColumnSide(Side),
    FullWidth,
    Section,
    SectionVariant(SectionKind),
    SectionTitle,
    Skills,
    SkillsVariant(SkillsStyle),
    Skill,
    SkillVariant(SkillsStyle),
    SkillLabel,
    SkillTrack,
    SkillFill,
    ExperienceList,
    ExperienceListVariant(ExperienceStyle),
    Experience,
    ExperienceVariant(ExperienceStyle),
    ExperienceMarker,
    ExperienceHeader,
    JobTitle,
    Company,
    Duration,
    JobLocation,
    Responsibilities,
    Responsibility,
    EducationList,
    EducationListVariant(EducationStyle),
    Education,
    EducationVariant(EducationStyle),
    Degree,
    Institution,
    Year,
}

fn header_style_name(style: HeaderStyle) -> &'static str {
    match style {
        HeaderStyle::Centered => "centered",
        HeaderStyle::LeftAligned => "left-aligned",
        HeaderStyle::RightAligned => "right-aligned",
        HeaderStyle::Split => "split",
    }
}

fn skills_style_name(style: SkillsStyle) -> &'static str {
    match style {
        SkillsStyle::Chips => "chips",
        SkillsStyle::List => "list",
        SkillsStyle::Grid => "grid",
        SkillsStyle::Bars => "bars",
    }
}

fn skill_item_name(style: SkillsStyle) -> &'static str {
    match style {
        SkillsStyle::Chips => "chip",
        SkillsStyle::List => "list-item",
        SkillsStyle::Grid => "grid-item",
        SkillsStyle::Bars => "bar",
    }
}

fn experience_style_name(style: ExperienceStyle) -> &'static str {
    match style {
        ExperienceStyle::Cards => "cards",
        ExperienceStyle::Timeline => "timeline",
        ExperienceStyle::Simple => "simple",
        ExperienceStyle::Detailed => "detailed",
    }
}

fn education_style_name(style: EducationStyle) -> &'static str {
    match style {
        EducationStyle::Cards => "cards",
        EducationStyle::List => "list",
        EducationStyle::Simple => "simple",
    }
}

impl Class {
    /// Class name without prefix
    pub fn name(&self) -> String {
        match self {
            Class::Resume => "resume".into(),
            Class::Header => "header".into(),
            Class::HeaderVariant(s) => format!("header--{}", header_style_name(*s)),
            Class::Avatar => "avatar".into(),
            Class::AvatarInitials => "avatar--initials".into(),
            Class::Identity => "header__identity".into(),
            Class::Name => "header__name".into(),
            Class::Title => "header__title".into(),
            Class::Contact => "header__contact".into(),
            Class::ContactItem => "header__contact-item".into(),
            Class::Summary => "summary".into(),
            Class::Content => "content".into(),
            Class::Grid => "grid".into(),
            Class::GridSingle => "grid--single".into(),
            Class::Column => "column".into(),
            Class::ColumnSide(side) => format!("column--{}", side.as_str()),
            Class::FullWidth => "full-width".into(),
            Class::Section => "section".into(),
            Class::SectionVariant(kind) => format!("section--{}", kind.as_str()),
            Class::SectionTitle => "section__title".into(),
            Class::Skills => "skills".into(),
            Class::SkillsVariant(s) => format!("skills--{}", skills_style_name(*s)),
            Class::Skill => "skill".into(),
            Class::SkillVariant(s) => format!("skill--{}", skill_item_name(*s)),
            Class::SkillLabel => "skill__label".into(),
            Class::SkillTrack => "skill__track".into(),
            Class::SkillFill => "skill__fill".into(),
            Class::ExperienceList => "experience-list".into(),
            Class::ExperienceListVariant(s) => {
                format!("experience-list--{}", experience_style_name(*s))
            }
            Class::Experience => "experience".into(),
            Class::ExperienceVariant(s) => format!("experience--{}", experience_style_name(*s)),
            Class::ExperienceMarker => "experience__marker".into(),
            Class::ExperienceHeader => "experience__header".into(),
            Class::JobTitle => "experience__title".into(),
            Class::Company => "experience__company".into(),
            Class::Duration => "experience__duration".into(),
            Class::JobLocation => "experience__location".into(),
            Class::Responsibilities => "experience__responsibilities".into(),
            Class::Responsibility => "experience__responsibility".into(),
            Class::EducationList => "education-list".into(),
            Class::EducationListVariant(s) => {
                format!("education-list--{}", education_style_name(*s))
            }
            Class::Education => "education".into(),
            Class::EducationVariant(s) => format!("education--{}", education_style_name(*s)),
            Class::Degree => "education__degree".into(),
            Class::Institution => "education__institution".into(),
            Class::Year => "education__year".into(),
        }
    }

    /// Class name with the configured prefix
    pub fn token(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.name())
    }

    /// Every class the HTML generator can emit for `config`, in stylesheet order
    pub fn vocabulary(config: &TemplateConfig) -> Vec<Class> {
        let layout = &config.layout;
        let skills = layout.sections.skills.style;
        let experience = layout.sections.experience.style;
        let education = layout.sections.education.style;
        let plan = layout.sections.columns();

        let mut classes = vec![
            Class::Resume,
            Class::Header,
            Class::HeaderVariant(layout.header.style),
        ];
        if layout.header.show_avatar {
            classes.extend([Class::Avatar, Class::AvatarInitials]);
        }
        classes.extend([Class::Identity, Class::Name]);
        if layout.header.show_title {
            classes.push(Class::Title);
        }
        classes.extend([Class::Contact, Class::ContactItem, Class::Summary, Class::Content]);

        if plan.has_grid() {
            classes.push(Class::Grid);
            if !plan.is_two_column() {
                classes.push(Class::GridSingle);
            }
            classes.push(Class::Column);
            if !plan.left.is_empty() {
                classes.push(Class::ColumnSide(Side::Left));
            }
            if !plan.right.is_empty() {
                classes.push(Class::ColumnSide(Side::Right));
            }
        }
        if !plan.full_width.is_empty() {
            classes.push(Class::FullWidth);
        }

        classes.push(Class::Section);
        classes.extend(SectionKind::ORDER.into_iter().map(Class::SectionVariant));
        classes.push(Class::SectionTitle);

        classes.extend([
            Class::Skills,
            Class::SkillsVariant(skills),
            Class::Skill,
            Class::SkillVariant(skills),
        ]);
        if skills == SkillsStyle::Bars {
            classes.extend([Class::SkillLabel, Class::SkillTrack, Class::SkillFill]);
        }

        classes.extend([
            Class::ExperienceList,
            Class::ExperienceListVariant(experience),
            Class::Experience,
            Class::ExperienceVariant(experience),
        ]);
        if experience == ExperienceStyle::Timeline {
            classes.push(Class::ExperienceMarker);
        }
        classes.extend([
            Class::ExperienceHeader,
            Class::JobTitle,
            Class::Company,
            Class::Duration,
        ]);
        if experience == ExperienceStyle::Detailed {
            classes.push(Class::JobLocation);
        }
        classes.extend([Class::Responsibilities, Class::Responsibility]);

        classes.extend([
            Class::EducationList,
            Class::EducationListVariant(education),
            Class::Education,
            Class::EducationVariant(education),
            Class::Degree,
            Class::Institution,
            Class::Year,
        ]);

        classes
    }
}

/// HTML element names used by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    Header,
    Main,
    Section,
    Article,
    H1,
    H2,
    H3,
    P,
    Span,
    Ul,
    Li,
    Img,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Header => "header",
            Tag::Main => "main",
            Tag::Section => "section",
            Tag::Article => "article",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::P => "p",
            Tag::Span => "span",
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::Img => "img",
        }
    }

    fn is_void(&self) -> bool {
        matches!(self, Tag::Img)
    }
}

/// A node in the generated document fragment
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element with typed classes
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub classes: Vec<Class>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            classes: vec![],
            attrs: vec![],
            children: vec![],
        }
    }

    pub fn class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Serialize to HTML
    pub fn render(&self, prefix: &str, pretty: bool) -> String {
        let mut out = String::new();
        write_element(self, &mut out, prefix, pretty, 0);
        out
    }

    /// Visit this element and all descendant elements, depth-first
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        visit(self);
        for child in &self.children {
            if let Node::Element(e) = child {
                e.walk(visit);
            }
        }
    }
}

fn write_element(element: &Element, out: &mut String, prefix: &str, pretty: bool, depth: usize) {
    if pretty {
        out.push_str(&"  ".repeat(depth));
    }

    out.push_str(&format!("<{}", element.tag.as_str()));
    if !element.classes.is_empty() {
        let classes = element
            .classes
            .iter()
            .map(|c| c.token(prefix))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(r#" class="{}""#, classes));
    }
    for (name, value) in &element.attrs {
        out.push_str(&format!(r#" {}="{}""#, name, escape_html(value)));
    }
    out.push('>');

    if element.tag.is_void() {
        if pretty {
            out.push('\n');
        }
        return;
    }

    let inline = element
        .children
        .iter()
        .all(|c| matches!(c, Node::Text(_)));

    if inline {
        for child in &element.children {
            if let Node::Text(text) = child {
                out.push_str(&escape_html(text));
            }
        }
    } else {
        if pretty {
            out.push('\n');
        }
        for child in &element.children {
            match child {
                Node::Element(e) => write_element(e, out, prefix, pretty, depth + 1),
                Node::Text(text) => {
                    if pretty {
                        out.push_str(&"  ".repeat(depth + 1));
                    }
                    out.push_str(&escape_html(text));
                    if pretty {
                        out.push('\n');
                    }
                }
            }
        }
        if pretty {
            out.push_str(&"  ".repeat(depth));
        }
    }

    out.push_str(&format!("</{}>", element.tag.as_str()));
    if pretty {
        out.push('\n');
    }
}

/// Escape special HTML characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b"), "a &lt; b");
        assert_eq!(escape_html("R&D"), "R&amp;D");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
    }

    #[test]
    fn test_class_tokens_use_prefix() {
        assert_eq!(Class::HeaderVariant(HeaderStyle::Split).token("rt-"), "rt-header--split");
        assert_eq!(Class::SkillVariant(SkillsStyle::Bars).token(""), "skill--bar");
        assert_eq!(Class::ColumnSide(Side::Left).token("x-"), "x-column--left");
    }

    #[test]
    fn test_render_compact() {
        let el = Element::new(Tag::Ul)
            .class(Class::Skills)
            .child(Element::new(Tag::Li).class(Class::Skill).text("Rust"));
        assert_eq!(
            el.render("", false),
            r#"<ul class="skills"><li class="skill">Rust</li></ul>"#
        );
    }

    #[test]
    fn test_render_pretty_indents_block_children() {
        let el = Element::new(Tag::Div)
            .class(Class::Content)
            .child(Element::new(Tag::P).text("hi"));
        assert_eq!(
            el.render("rt-", true),
            "<div class=\"rt-content\">\n  <p>hi</p>\n</div>\n"
        );
    }

    #[test]
    fn test_render_void_element_and_attrs() {
        let el = Element::new(Tag::Img)
            .class(Class::Avatar)
            .attr("src", "a.png?x=1&y=2")
            .attr("alt", "Ada");
        assert_eq!(
            el.render("", false),
            r#"<img class="avatar" src="a.png?x=1&amp;y=2" alt="Ada">"#
        );
    }

    #[test]
    fn test_walk_visits_all_elements() {
        let el = Element::new(Tag::Div)
            .child(Element::new(Tag::Span).text("a"))
            .child(Element::new(Tag::Div).child(Element::new(Tag::Span)));
        let mut count = 0;
        el.walk(&mut |_| count += 1);
        assert_eq!(count, 4);
    }
}
