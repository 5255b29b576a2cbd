//! Lightweight text markup used by sheet content.
//!
//! Every line becomes its own paragraph. Profile text additionally turns
//! `**text**` into bold and renders `- item` lines as `- ` followed by a bold item.
//! Project descriptions keep `- item` lines as plain text.

use crate::dom::{Element, Node};

const BULLET: &str = "- ";

fn lines(content: &str) -> impl Iterator<Item = &str> {
    content.split('\n').map(|line| line.trim_end_matches('\r'))
}

/// Splits `text` on `**` pairs; an unpaired `**` stays literal.
fn inline_bold(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };
        if open > 0 {
            nodes.push(Node::text(&rest[..open]));
        }
        nodes.push(Element::new("b").text(&after_open[..close]).into());
        rest = &after_open[close + 2..];
    }
    if !rest.is_empty() {
        nodes.push(Node::text(rest));
    }
    nodes
}

pub fn format_about(content: &str) -> Vec<Node> {
    lines(content)
        .map(|line| {
            let paragraph = Element::new("p");
            match line.strip_prefix(BULLET) {
                Some(item) => paragraph
                    .text(BULLET)
                    .child(Element::new("b").children(inline_bold(item))),
                None => paragraph.children(inline_bold(line)),
            }
            .into()
        })
        .collect()
}

pub fn format_description(content: &str) -> Vec<Node> {
    lines(content)
        .map(|line| Element::new("p").text(line).into())
        .collect()
}

#[cfg(test)]
#[path = "tests/markup_tests.rs"]
mod tests;
