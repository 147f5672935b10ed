//! HTML fragment generation
//!
//! The fragment is built as an [`Element`] tree in a fixed order: header,
//! optional summary, then the content region. Column structure comes from the
//! section positions in the config; resume data only decides whether a
//! section has anything to show.

use crate::config::{
    EducationStyle, ExperienceStyle, HeaderStyle, SectionKind, SkillsStyle, TemplateConfig,
};
use crate::resume::{Education, ResumeData, Skill, WorkExperience};

use super::markup::{Class, Element, Side, Tag};
use super::RenderConfig;

/// Render the resume fragment for `config`
pub fn generate_html(config: &TemplateConfig, data: &ResumeData, render: &RenderConfig) -> String {
    build_tree(config, data).render(render.prefix(), render.pretty_print)
}

/// Build the typed tree for the resume fragment
pub fn build_tree(config: &TemplateConfig, data: &ResumeData) -> Element {
    let mut root = Element::new(Tag::Div)
        .class(Class::Resume)
        .child(header(config, data));

    if let Some(summary) = non_blank(data.summary.as_deref()) {
        root = root.child(Element::new(Tag::P).class(Class::Summary).text(summary));
    }

    root.child(content(config, data))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn header(config: &TemplateConfig, data: &ResumeData) -> Element {
    let layout = &config.layout.header;

    let mut header = Element::new(Tag::Header)
        .class(Class::Header)
        .class(Class::HeaderVariant(layout.style));

    if layout.show_avatar {
        header = header.child(avatar(data));
    }

    let mut identity = Element::new(Tag::Div).class(Class::Identity).child(
        Element::new(Tag::H1)
            .class(Class::Name)
            .text(data.primary_name.as_str()),
    );
    if layout.show_title {
        if let Some(title) = non_blank(data.title.as_deref()) {
            identity = identity.child(Element::new(Tag::P).class(Class::Title).text(title));
        }
    }

    let contact = contact(data);
    match layout.style {
        // Contact details sit beside the identity block instead of under it
        HeaderStyle::Split => {
            header = header.child(identity);
            if let Some(contact) = contact {
                header = header.child(contact);
            }
        }
        HeaderStyle::Centered | HeaderStyle::LeftAligned | HeaderStyle::RightAligned => {
            if let Some(contact) = contact {
                identity = identity.child(contact);
            }
            header = header.child(identity);
        }
    }

    header
}

fn avatar(data: &ResumeData) -> Element {
    match non_blank(data.avatar.as_deref()) {
        Some(src) => Element::new(Tag::Img)
            .class(Class::Avatar)
            .attr("src", src)
            .attr("alt", data.primary_name.as_str()),
        None => Element::new(Tag::Div)
            .class(Class::Avatar)
            .class(Class::AvatarInitials)
            .attr("aria-hidden", "true")
            .text(data.initials()),
    }
}

fn contact(data: &ResumeData) -> Option<Element> {
    let items = data.contact_items();
    if items.is_empty() {
        return None;
    }
    Some(
        Element::new(Tag::Div).class(Class::Contact).children(
            items
                .into_iter()
                .map(|item| Element::new(Tag::Span).class(Class::ContactItem).text(item)),
        ),
    )
}

fn content(config: &TemplateConfig, data: &ResumeData) -> Element {
    let plan = config.layout.sections.columns();
    let mut content = Element::new(Tag::Main).class(Class::Content);

    if plan.has_grid() {
        let mut grid = Element::new(Tag::Div).class(Class::Grid);
        if !plan.is_two_column() {
            grid = grid.class(Class::GridSingle);
        }
        if !plan.left.is_empty() {
            grid = grid.child(column(Side::Left, &plan.left, config, data));
        }
        if !plan.right.is_empty() {
            grid = grid.child(column(Side::Right, &plan.right, config, data));
        }
        content = content.child(grid);
    }

    if !plan.full_width.is_empty() {
        content = content.child(
            Element::new(Tag::Div).class(Class::FullWidth).children(
                plan.full_width
                    .iter()
                    .filter_map(|kind| section(*kind, config, data)),
            ),
        );
    }

    content
}

fn column(side: Side, kinds: &[SectionKind], config: &TemplateConfig, data: &ResumeData) -> Element {
    Element::new(Tag::Div)
        .class(Class::Column)
        .class(Class::ColumnSide(side))
        .children(kinds.iter().filter_map(|kind| section(*kind, config, data)))
}

/// A titled section, or `None` when the underlying list is empty
fn section(kind: SectionKind, config: &TemplateConfig, data: &ResumeData) -> Option<Element> {
    let sections = &config.layout.sections;
    let body = match kind {
        SectionKind::Skills => skills(&data.skills, sections.skills.style)?,
        SectionKind::Experience => {
            experience(&data.work_experiences, sections.experience.style)?
        }
        SectionKind::Education => education(&data.educations, sections.education.style)?,
    };

    Some(
        Element::new(Tag::Section)
            .class(Class::Section)
            .class(Class::SectionVariant(kind))
            .child(
                Element::new(Tag::H2)
                    .class(Class::SectionTitle)
                    .text(kind.heading()),
            )
            .child(body),
    )
}

fn skills(skills: &[Skill], style: SkillsStyle) -> Option<Element> {
    if skills.is_empty() {
        return None;
    }

    let (container_tag, item_tag) = match style {
        SkillsStyle::List => (Tag::Ul, Tag::Li),
        SkillsStyle::Chips => (Tag::Div, Tag::Span),
        SkillsStyle::Grid | SkillsStyle::Bars => (Tag::Div, Tag::Div),
    };

    let items = skills.iter().map(|skill| {
        let item = Element::new(item_tag)
            .class(Class::Skill)
            .class(Class::SkillVariant(style));
        match style {
            SkillsStyle::Bars => {
                let level = skill.effective_level();
                item.attr("data-level", level.to_string())
                    .child(
                        Element::new(Tag::Span)
                            .class(Class::SkillLabel)
                            .text(skill.name.as_str()),
                    )
                    .child(
                        Element::new(Tag::Div).class(Class::SkillTrack).child(
                            Element::new(Tag::Div)
                                .class(Class::SkillFill)
                                .attr("style", format!("width: {}%", level)),
                        ),
                    )
            }
            SkillsStyle::Chips | SkillsStyle::List | SkillsStyle::Grid => {
                item.text(skill.name.as_str())
            }
        }
    });

    Some(
        Element::new(container_tag)
            .class(Class::Skills)
            .class(Class::SkillsVariant(style))
            .children(items),
    )
}

fn experience(jobs: &[WorkExperience], style: ExperienceStyle) -> Option<Element> {
    if jobs.is_empty() {
        return None;
    }

    let items = jobs.iter().map(|job| {
        let mut item = Element::new(Tag::Article)
            .class(Class::Experience)
            .class(Class::ExperienceVariant(style));

        if style == ExperienceStyle::Timeline {
            item = item.child(
                Element::new(Tag::Span)
                    .class(Class::ExperienceMarker)
                    .attr("aria-hidden", "true"),
            );
        }

        let mut heading = Element::new(Tag::Div)
            .class(Class::ExperienceHeader)
            .child(
                Element::new(Tag::H3)
                    .class(Class::JobTitle)
                    .text(job.title.as_str()),
            )
            .child(
                Element::new(Tag::Span)
                    .class(Class::Company)
                    .text(job.company.as_str()),
            );
        if let Some(duration) = job.duration() {
            heading = heading.child(Element::new(Tag::Span).class(Class::Duration).text(duration));
        }
        if style == ExperienceStyle::Detailed {
            if let Some(location) = non_blank(job.location.as_deref()) {
                heading = heading.child(
                    Element::new(Tag::Span)
                        .class(Class::JobLocation)
                        .text(location),
                );
            }
        }
        item = item.child(heading);

        let duties: Vec<&str> = job
            .responsibilities
            .iter()
            .map(String::as_str)
            .filter(|r| !r.trim().is_empty())
            .collect();
        if !duties.is_empty() {
            item = item.child(
                Element::new(Tag::Ul).class(Class::Responsibilities).children(
                    duties
                        .into_iter()
                        .map(|d| Element::new(Tag::Li).class(Class::Responsibility).text(d)),
                ),
            );
        }

        item
    });

    Some(
        Element::new(Tag::Div)
            .class(Class::ExperienceList)
            .class(Class::ExperienceListVariant(style))
            .children(items),
    )
}

fn education(entries: &[Education], style: EducationStyle) -> Option<Element> {
    if entries.is_empty() {
        return None;
    }

    let (container_tag, item_tag, degree_tag) = match style {
        EducationStyle::List => (Tag::Ul, Tag::Li, Tag::Span),
        EducationStyle::Cards | EducationStyle::Simple => (Tag::Div, Tag::Div, Tag::H3),
    };

    let items = entries.iter().map(|entry| {
        let mut item = Element::new(item_tag)
            .class(Class::Education)
            .class(Class::EducationVariant(style))
            .child(
                Element::new(degree_tag)
                    .class(Class::Degree)
                    .text(entry.degree.as_str()),
            )
            .child(
                Element::new(Tag::Span)
                    .class(Class::Institution)
                    .text(entry.institution.as_str()),
            );
        if let Some(year) = non_blank(entry.year.as_deref()) {
            item = item.child(Element::new(Tag::Span).class(Class::Year).text(year));
        }
        item
    });

    Some(
        Element::new(container_tag)
            .class(Class::EducationList)
            .class(Class::EducationListVariant(style))
            .children(items),
    )
}
