#![allow(dead_code)]

//! The resume view component.
//!
//! A `ResumeView` is one mounted instance. Each `render` call rebuilds the tree
//! from the props alone; the only state carried between calls is the container
//! handle the accent effect writes to.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::models::resume::{InformationMap, SectionOrder};
use crate::view::node::{Element, Node};
use crate::view::sections::{render_header, render_section};
use crate::view::styles::{self, ACCENT_PROPERTY};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeProps {
    #[serde(default)]
    pub information: InformationMap,
    #[serde(default)]
    pub sections: SectionOrder,
    #[serde(default)]
    pub active_color: Option<String>,
}

/// The mounted container node. Style set here survives re-renders, the way an
/// imperatively set DOM property does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerHandle {
    style: BTreeMap<String, String>,
}

impl ContainerHandle {
    pub fn set_property(&mut self, name: &str, value: &str) {
        self.style.insert(name.to_string(), value.to_string());
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }
}

/// Caller-owned slot that receives the rendered root node.
#[derive(Debug, Clone, Default)]
pub struct NodeRef(Option<Node>);

impl NodeRef {
    pub fn new() -> Self {
        NodeRef(None)
    }

    pub fn get(&self) -> Option<&Node> {
        self.0.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct ResumeView {
    container: Option<ContainerHandle>,
    /// Accent value the effect last ran with; `None` until the first run.
    accent_dep: Option<Option<String>>,
}

impl ResumeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container(&self) -> Option<&ContainerHandle> {
        self.container.as_ref()
    }

    /// Renders the resume and commits it: mounts the container on first use,
    /// runs the accent effect, then fills `forwarded` with the root node.
    pub fn render(&mut self, props: &ResumeProps, forwarded: Option<&mut NodeRef>) -> Node {
        let information = &props.information;

        let sections: Vec<Element> = props
            .sections
            .keys()
            .iter()
            .filter_map(|&key| render_section(key, information))
            .collect();

        let hidden = sections
            .iter()
            .filter(|s| s.has_class(styles::HIDDEN))
            .count();
        debug!(
            "Rendering resume: {} sections ({} hidden)",
            sections.len(),
            hidden
        );

        let mut container = Element::new("div")
            .class(styles::CONTAINER)
            .child(render_header(information.basic_info()))
            .child(Element::new("div").class(styles::MAIN).children(sections));

        if self.container.is_none() {
            self.container = Some(ContainerHandle::default());
        }
        self.sync_accent(props.active_color.as_deref());

        if let Some(handle) = &self.container {
            container.style = handle.style.clone();
        }

        let root: Node = Element::new("div").child(container).into();
        if let Some(slot) = forwarded {
            slot.0 = Some(root.clone());
        }
        root
    }

    /// Drops the container. A later render mounts a fresh one.
    pub fn unmount(&mut self) {
        self.container = None;
        self.accent_dep = None;
    }

    /// Runs when the accent input changed since the last run. Writes the
    /// accent onto the container only if both exist.
    fn sync_accent(&mut self, active_color: Option<&str>) {
        let Some(container) = self.container.as_mut() else {
            return;
        };
        let dep = active_color.map(str::to_string);
        if self.accent_dep.as_ref() == Some(&dep) {
            return;
        }
        self.accent_dep = Some(dep);

        if let Some(color) = active_color.filter(|c| !c.is_empty()) {
            debug!("Setting accent {ACCENT_PROPERTY} to {color}");
            container.set_property(ACCENT_PROPERTY, color);
        }
    }
}

/// Mounts a fresh view and renders `props` once.
pub fn render_once(props: &ResumeProps) -> Node {
    ResumeView::new().render(props, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SectionKey;
    use serde_json::json;

    fn props(value: serde_json::Value) -> ResumeProps {
        serde_json::from_value(value).unwrap()
    }

    fn sample_props() -> ResumeProps {
        props(json!({
            "information": {
                "basicInfo": { "sectionTitle": "Basic Info", "detail": { "name": "Ada", "email": "ada@example.com" } },
                "workExp": {
                    "sectionTitle": "Work Experience",
                    "details": [{ "title": "Engineer", "startDate": "2023-03-05", "endDate": "2024-03-05", "points": ["a", "b", "c"] }]
                },
                "education": { "sectionTitle": "Education", "details": [] },
                "other": { "detail": "untitled" }
            },
            "sections": {
                "basicInfo": "Basic Info",
                "education": "Education",
                "workExp": "Work Experience",
                "other": "Other"
            },
            "activeColor": "#239ce2"
        }))
    }

    fn container_of(root: &Node) -> &Element {
        root.as_element()
            .and_then(|r| r.find(&|e| e.has_class(styles::CONTAINER)))
            .unwrap()
    }

    fn main_sections(root: &Node) -> Vec<&Element> {
        let main = container_of(root)
            .find(&|e| e.has_class(styles::MAIN))
            .unwrap();
        main.child_elements().collect()
    }

    // ── structure ───────────────────────────────────────────────────────────

    #[test]
    fn test_sections_follow_caller_order() {
        let root = render_once(&sample_props());
        let order: Vec<&str> = main_sections(&root)
            .iter()
            .map(|s| s.attr_value("data-section").unwrap())
            .collect();
        assert_eq!(order, vec!["education", "workExp", "other"]);
    }

    #[test]
    fn test_untitled_section_is_hidden_not_removed() {
        let root = render_once(&sample_props());
        let sections = main_sections(&root);
        let other = sections.last().unwrap();
        assert!(other.has_class(styles::HIDDEN));
        assert!(!sections[0].has_class(styles::HIDDEN));
    }

    #[test]
    fn test_sections_missing_from_order_are_not_rendered() {
        let mut p = sample_props();
        p.sections = SectionOrder::new([SectionKey::WorkExp]);
        let root = render_once(&p);
        assert_eq!(main_sections(&root).len(), 1);
    }

    #[test]
    fn test_header_renders_regardless_of_order() {
        let mut p = sample_props();
        p.sections = SectionOrder::default();
        let root = render_once(&p);
        let heading = container_of(&root)
            .find(&|e| e.has_class(styles::HEADING))
            .unwrap();
        assert_eq!(Node::from(heading.clone()).text_content(), "Ada");
        assert!(main_sections(&root).is_empty());
    }

    #[test]
    fn test_empty_props_render_bare_shell() {
        let root = render_once(&ResumeProps::default());
        let html = root.to_html();
        assert!(html.starts_with("<div><div class=\"container\">"));
        assert!(html.contains("<div class=\"main\"></div>"));
    }

    #[test]
    fn test_points_keep_order() {
        let root = render_once(&sample_props());
        let mut items = Vec::new();
        container_of(&root).find_all(&|e| e.tag == "li", &mut items);
        let texts: Vec<String> = items
            .into_iter()
            .map(|li| Node::from(li.clone()).text_content())
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rerender_with_identical_props_is_identical() {
        let p = sample_props();
        let mut view = ResumeView::new();
        let first = view.render(&p, None);
        let second = view.render(&p, None);
        assert_eq!(first, second);
        assert_eq!(first.to_html(), second.to_html());
    }

    #[test]
    fn test_forwarded_ref_receives_root() {
        let mut slot = NodeRef::new();
        assert!(slot.get().is_none());
        let root = ResumeView::new().render(&sample_props(), Some(&mut slot));
        assert_eq!(slot.get(), Some(&root));
    }

    // ── accent effect ───────────────────────────────────────────────────────

    #[test]
    fn test_accent_applied_on_mount() {
        let root = render_once(&sample_props());
        assert_eq!(
            container_of(&root).style.get(ACCENT_PROPERTY).map(String::as_str),
            Some("#239ce2")
        );
    }

    #[test]
    fn test_accent_tracks_latest_value() {
        let mut p = sample_props();
        let mut view = ResumeView::new();

        p.active_color = Some("red".to_string());
        view.render(&p, None);
        p.active_color = Some("blue".to_string());
        let root = view.render(&p, None);

        assert_eq!(view.container().unwrap().property(ACCENT_PROPERTY), Some("blue"));
        assert_eq!(container_of(&root).style.len(), 1);
        assert_eq!(
            container_of(&root).style.get(ACCENT_PROPERTY).map(String::as_str),
            Some("blue")
        );
    }

    #[test]
    fn test_omitted_accent_keeps_previous_value() {
        let mut p = sample_props();
        let mut view = ResumeView::new();

        p.active_color = Some("green".to_string());
        view.render(&p, None);
        p.active_color = None;
        let root = view.render(&p, None);
        assert_eq!(view.container().unwrap().property(ACCENT_PROPERTY), Some("green"));
        assert_eq!(
            container_of(&root).style.get(ACCENT_PROPERTY).map(String::as_str),
            Some("green")
        );

        p.active_color = Some(String::new());
        view.render(&p, None);
        assert_eq!(view.container().unwrap().property(ACCENT_PROPERTY), Some("green"));
    }

    #[test]
    fn test_no_accent_leaves_container_unstyled() {
        let mut p = sample_props();
        p.active_color = None;
        let root = render_once(&p);
        assert!(container_of(&root).style.is_empty());
        assert!(!root.to_html().contains("style="));
    }

    #[test]
    fn test_accent_without_container_is_noop() {
        let mut view = ResumeView::new();
        view.sync_accent(Some("red"));
        assert!(view.container().is_none());
    }

    #[test]
    fn test_unmount_then_render_remounts_with_accent() {
        let p = sample_props();
        let mut view = ResumeView::new();
        view.render(&p, None);
        view.unmount();
        assert!(view.container().is_none());
        view.render(&p, None);
        assert_eq!(
            view.container().unwrap().property(ACCENT_PROPERTY),
            Some("#239ce2")
        );
    }
}
