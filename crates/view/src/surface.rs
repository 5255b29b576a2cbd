use std::fmt::Write as _;

use crate::dom::{escape, Display, Element, Node};

pub const CARD_CONTAINER_ID: &str = "project-container";
pub const DETAIL_CONTAINER_ID: &str = "project-details";
pub const BACK_BUTTON_ID: &str = "back-btn";

/// Collapsible info box. `title` is the visible heading text and selects which
/// profile field fills `content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutBox {
    pub title: String,
    pub content: Element,
    pub collapsed: bool,
}

impl AboutBox {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Element::new("div").class("content"),
            collapsed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    fn to_element(&self) -> Element {
        let mut element = Element::new("div").class("box");
        if self.collapsed {
            element = element.class("collapsed");
        }
        element
            .child(Element::new("div").class("box-title").text(&self.title))
            .child(self.content.clone())
    }
}

/// The page the renderer writes into. Every insertion point is optional; a
/// missing one turns the operations touching it into no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    pub header_name: Option<Element>,
    pub about_boxes: Vec<AboutBox>,
    pub back_button: Option<Element>,
    pub card_grid: Option<Element>,
    pub detail_panel: Option<Element>,
}

impl Surface {
    /// Full page layout with one info box per title.
    pub fn with_about_titles<I, T>(titles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            header_name: Some(Element::new("span").text("Portfolio")),
            about_boxes: titles.into_iter().map(|title| AboutBox::new(title)).collect(),
            back_button: Some(
                Element::new("button")
                    .with_id(BACK_BUTTON_ID)
                    .displayed(Display::None)
                    .text("Back"),
            ),
            card_grid: Some(
                Element::new("div")
                    .with_id(CARD_CONTAINER_ID)
                    .displayed(Display::Grid),
            ),
            detail_panel: Some(
                Element::new("div")
                    .with_id(DETAIL_CONTAINER_ID)
                    .displayed(Display::None),
            ),
        }
    }

    pub fn about_box(&self, title: &str) -> Option<&AboutBox> {
        self.about_boxes.iter().find(|about_box| about_box.title == title)
    }

    pub fn project_cards(&self) -> impl Iterator<Item = &Element> {
        self.card_grid.iter().flat_map(Element::child_elements)
    }

    pub fn detail_blocks(&self) -> impl Iterator<Item = &Element> {
        self.detail_panel.iter().flat_map(Element::child_elements)
    }

    /// Serializes the page as a standalone HTML document.
    pub fn to_html(&self, page_title: &str) -> String {
        let mut body = Element::new("div").class("page");

        let mut header = Element::new("header").class("header");
        if let Some(name) = &self.header_name {
            header = header.child(Element::new("div").class("header-left").child(name.clone()));
        }
        body = body.child(header);

        if !self.about_boxes.is_empty() {
            body = body.child(
                Element::new("section")
                    .class("about")
                    .children(self.about_boxes.iter().map(|b| Node::from(b.to_element()))),
            );
        }

        let mut projects = Element::new("section").class("projects");
        for slot in [&self.back_button, &self.card_grid, &self.detail_panel]
            .into_iter()
            .flatten()
        {
            projects = projects.child(slot.clone());
        }
        body = body.child(projects);

        let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape(page_title));
        out.push_str("<link rel=\"stylesheet\" href=\"style.css\">\n</head>\n<body>\n");
        out.push_str(&body.to_html());
        out.push_str("\n</body>\n</html>\n");
        out
    }
}
