//! Class names shared by the resume templates and the document stylesheet.

use crate::view::node::Element;

pub const CONTAINER: &str = "container";
pub const HEADER: &str = "header";
pub const HEADING: &str = "heading";
pub const SUB_HEADING: &str = "subHeading";
pub const LINKS: &str = "links";
pub const LINK: &str = "link";
pub const MAIN: &str = "main";
pub const SECTION: &str = "section";
pub const HIDDEN: &str = "hidden";
pub const SECTION_TITLE: &str = "sectionTitle";
pub const CONTENT: &str = "content";
pub const ITEM: &str = "item";
pub const ITEM_HEADER: &str = "itemHeader";
pub const ITEM_META: &str = "itemMeta";
pub const TITLE: &str = "title";
pub const SUB_TITLE: &str = "subTitle";
pub const DATE: &str = "date";
pub const OVERVIEW: &str = "overview";
pub const POINTS: &str = "points";
pub const POINT: &str = "point";
pub const EDUCATION_TABLE: &str = "educationTable";
pub const ICON: &str = "icon";

/// Custom property the accent effect writes onto the container.
pub const ACCENT_PROPERTY: &str = "--color";

/// Icons referenced by the templates. Glyphs come from the host's icon set;
/// the view only emits a placeholder carrying the icon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    AtSign,
    Calendar,
    GitHub,
    Linkedin,
    MapPin,
    Paperclip,
    Phone,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::AtSign => "at-sign",
            Icon::Calendar => "calendar",
            Icon::GitHub => "github",
            Icon::Linkedin => "linkedin",
            Icon::MapPin => "map-pin",
            Icon::Paperclip => "paperclip",
            Icon::Phone => "phone",
        }
    }

    pub fn element(&self) -> Element {
        Element::new("i")
            .class(ICON)
            .attr("data-icon", self.name())
            .attr("aria-hidden", "true")
    }
}

/// Minimal stylesheet for standalone documents: the hidden state and accent usage.
pub const DOCUMENT_CSS: &str = "\
.container { --color: #239ce2; font-family: system-ui, sans-serif; max-width: 800px; margin: 0 auto; }
.hidden { display: none; }
.heading { font-size: 2em; font-weight: bold; margin: 0; }
.subHeading { color: var(--color); margin: 4px 0 12px; }
.links { display: flex; flex-wrap: wrap; gap: 16px; }
.link { display: inline-flex; align-items: center; gap: 4px; color: inherit; }
.sectionTitle { color: var(--color); font-weight: 600; border-bottom: 2px solid var(--color); margin-top: 20px; }
.item { margin: 10px 0; }
.title { font-weight: 600; margin: 0; }
.subTitle { margin: 0; }
.itemMeta { display: flex; gap: 16px; }
.date { color: #6c757d; }
.educationTable { width: 100%; border-collapse: collapse; }
.educationTable th, .educationTable td { text-align: left; padding: 6px; }
";
