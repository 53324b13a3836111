//! Section templates, one fixed template per section kind.
//!
//! Every main section renders into the same shell: `div.section` holding a
//! title and a content block. A section whose payload is missing or untitled
//! keeps its shell with the `hidden` class, so its layout slot stays stable.

use crate::models::resume::{
    non_empty, AchievementItem, BasicInfo, EducationItem, InformationMap, OtherSection,
    PositionItem, ProjectItem, Section, SectionKey, WorkItem,
};
use crate::view::date::format_date;
use crate::view::node::{class_names, Element};
use crate::view::styles::{self, Icon};

const EDUCATION_COLUMNS: [&str; 4] = ["Year", "Degree / Board", "Institute", "GPA / Marks(%)"];

// ────────────────────────────────────────────────────────────────────────────
// Dispatch
// ────────────────────────────────────────────────────────────────────────────

/// Renders the main-area fragment for `key`.
///
/// `BasicInfo` has no main-area fragment: it feeds the header instead.
pub fn render_section(key: SectionKey, information: &InformationMap) -> Option<Element> {
    let content = match key {
        SectionKey::WorkExp => work_exp_content(information.work_exp.as_ref()),
        SectionKey::Project => project_content(information.project.as_ref()),
        SectionKey::Education => education_content(information.education.as_ref()),
        SectionKey::Achievement => achievement_content(information.achievement.as_ref()),
        SectionKey::PositionOfResponsibility => {
            position_content(information.position_of_responsibility.as_ref())
        }
        SectionKey::Other => other_content(information.other.as_ref()),
        SectionKey::BasicInfo => return None,
    };
    Some(section_shell(key, information.section_title(key), content))
}

fn shell_key(key: SectionKey) -> &'static str {
    match key {
        SectionKey::WorkExp => "workexp",
        other => other.as_str(),
    }
}

fn section_shell(key: SectionKey, title: Option<&str>, content: Element) -> Element {
    let visible = title.is_some();
    Element::new("div")
        .key(shell_key(key))
        .class(class_names(&[(styles::SECTION, true), (styles::HIDDEN, !visible)]))
        .attr("data-section", key.as_str())
        .child(
            Element::new("div")
                .class(styles::SECTION_TITLE)
                .text(title.unwrap_or_default()),
        )
        .child(content)
}

fn content_block() -> Element {
    Element::new("div").class(styles::CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Shared fragments
// ────────────────────────────────────────────────────────────────────────────

/// Identity of an item within its list: its title plus its position.
pub fn item_key(title: Option<&str>, index: usize) -> String {
    format!("{}{index}", title.unwrap_or_default())
}

/// Identity of a point within its list: its text plus its position.
pub fn point_key(point: &str, index: usize) -> String {
    format!("{point}{index}")
}

/// `ul.points` with one `li` per point, in order. `None` for an empty list.
fn points_list(points: &[String]) -> Option<Element> {
    if points.is_empty() {
        return None;
    }
    let items = points.iter().enumerate().map(|(i, point)| {
        Element::new("li")
            .class(styles::POINT)
            .key(point_key(point, i))
            .text(point.as_str())
    });
    Some(Element::new("ul").class(styles::POINTS).children(items))
}

fn paragraph(class: &str, text: Option<&str>) -> Option<Element> {
    text.map(|t| Element::new("p").class(class).text(t))
}

fn icon_text(tag: &'static str, class: &str, icon: Icon, text: &str) -> Element {
    Element::new(tag)
        .class(class)
        .child(icon.element())
        .text(format!(" {text}"))
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

/// Name, title and contact links from `basicInfo.detail`.
pub fn render_header(basic: Option<&BasicInfo>) -> Element {
    let field = |f: fn(&BasicInfo) -> &Option<String>| basic.and_then(|b| non_empty(f(b)));

    let contact = |icon: Icon, value: Option<&str>| {
        value.map(|v| icon_text("a", styles::LINK, icon, v))
    };

    let links = Element::new("div")
        .class(styles::LINKS)
        .child_opt(
            contact(Icon::AtSign, field(|b| &b.email)).map(|a| a.attr("type", "email")),
        )
        .child_opt(contact(Icon::Phone, field(|b| &b.phone)))
        .child_opt(contact(Icon::Linkedin, field(|b| &b.linkedin)))
        .child_opt(contact(Icon::GitHub, field(|b| &b.github)));

    Element::new("div")
        .class(styles::HEADER)
        .child_opt(paragraph(styles::HEADING, field(|b| &b.name)))
        .child_opt(paragraph(styles::SUB_HEADING, field(|b| &b.title)))
        .child(links)
}

// ────────────────────────────────────────────────────────────────────────────
// Section contents
// ────────────────────────────────────────────────────────────────────────────

fn work_exp_content(section: Option<&Section<WorkItem>>) -> Element {
    let items = section.into_iter().flat_map(|s| s.details.iter()).enumerate();
    content_block().children(items.map(|(i, item)| work_item(item, i)))
}

fn work_item(item: &WorkItem, index: usize) -> Element {
    let title = non_empty(&item.title);

    let header = Element::new("div")
        .class(styles::ITEM_HEADER)
        .child_opt(paragraph(styles::TITLE, title))
        .child_opt(paragraph(styles::SUB_TITLE, non_empty(&item.company_name)));

    // The range shows only when both ends are known.
    let dates = match (non_empty(&item.start_date), non_empty(&item.end_date)) {
        (Some(start), Some(end)) => Some(icon_text(
            "div",
            styles::DATE,
            Icon::Calendar,
            &format!("{} - {}", format_date(Some(start)), format_date(Some(end))),
        )),
        _ => None,
    };

    let meta = Element::new("div")
        .class(styles::ITEM_META)
        .child_opt(dates)
        .child_opt(
            non_empty(&item.location).map(|loc| icon_text("p", styles::DATE, Icon::MapPin, loc)),
        );

    Element::new("div")
        .class(styles::ITEM)
        .key(item_key(title, index))
        .child(header)
        .child(meta)
        .child_opt(points_list(&item.points))
}

fn project_content(section: Option<&Section<ProjectItem>>) -> Element {
    let items = section.into_iter().flat_map(|s| s.details.iter()).enumerate();
    content_block().children(items.map(|(i, item)| project_item(item, i)))
}

fn project_item(item: &ProjectItem, index: usize) -> Element {
    let title = non_empty(&item.title);

    let anchor = |icon: Icon, href: &str| {
        Element::new("a")
            .class(styles::LINK)
            .attr("href", href)
            .child(icon.element())
            .text(href)
    };

    let meta = Element::new("div")
        .class(styles::ITEM_META)
        .child_opt(non_empty(&item.link).map(|href| anchor(Icon::Paperclip, href)))
        .child_opt(non_empty(&item.github).map(|href| anchor(Icon::GitHub, href)));

    Element::new("div")
        .class(styles::ITEM)
        .key(item_key(title, index))
        .child(
            Element::new("div")
                .class(styles::ITEM_HEADER)
                .child_opt(paragraph(styles::TITLE, title)),
        )
        .child(meta)
        .child_opt(paragraph(styles::OVERVIEW, non_empty(&item.overview)))
        .child_opt(points_list(&item.points))
}

fn education_content(section: Option<&Section<EducationItem>>) -> Element {
    let head = Element::new("thead").child(
        Element::new("tr").children(
            EDUCATION_COLUMNS
                .iter()
                .map(|column| Element::new("th").text(*column)),
        ),
    );

    let rows = section
        .into_iter()
        .flat_map(|s| s.details.iter())
        .enumerate()
        .map(|(i, item)| education_row(item, i));

    content_block().child(
        Element::new("table")
            .class(styles::EDUCATION_TABLE)
            .child(head)
            .child(Element::new("tbody").children(rows)),
    )
}

/// Missing fields leave their cell empty so the columns stay aligned.
fn education_row(item: &EducationItem, index: usize) -> Element {
    let years = [non_empty(&item.start_year), non_empty(&item.end_year)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" - ");

    let cell = |text: Option<&str>| {
        let td = Element::new("td");
        match text {
            Some(t) if !t.is_empty() => td.text(t),
            _ => td,
        }
    };

    Element::new("tr")
        .key(item_key(non_empty(&item.title), index))
        .child(cell(Some(years.as_str())))
        .child(cell(non_empty(&item.title)))
        .child(cell(non_empty(&item.college)))
        .child(cell(non_empty(&item.gpa)))
}

fn achievement_content(section: Option<&Section<AchievementItem>>) -> Element {
    let items = section
        .into_iter()
        .flat_map(|s| s.details.iter())
        .enumerate()
        .map(|(i, item)| {
            let title = non_empty(&item.title);
            Element::new("div")
                .class(styles::ITEM)
                .key(item_key(title, i))
                .child_opt(title.map(|t| Element::new("h3").text(t)))
                .child_opt(non_empty(&item.overview).map(|o| Element::new("p").text(o)))
                .child_opt(points_list(&item.points))
        });
    content_block().children(items)
}

fn position_content(section: Option<&Section<PositionItem>>) -> Element {
    let items = section
        .into_iter()
        .flat_map(|s| s.details.iter())
        .enumerate()
        .map(|(i, item)| {
            let title = non_empty(&item.title);
            Element::new("div")
                .class(styles::ITEM)
                .key(item_key(title, i))
                .child(
                    Element::new("div")
                        .class(styles::ITEM_HEADER)
                        .child_opt(paragraph(styles::TITLE, title)),
                )
                .child_opt(points_list(&item.points))
        });
    content_block().children(items)
}

fn other_content(section: Option<&OtherSection>) -> Element {
    let detail = section.and_then(|s| non_empty(&s.detail));
    content_block().child_opt(paragraph(styles::OVERVIEW, detail))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
