use std::collections::BTreeMap;

use shared::domain::{normalize_key, AboutProfile, PortfolioSnapshot, ProjectId, ProjectRecord};
use tracing::debug;

use crate::{
    dom::{Display, Element, Node},
    markup::{format_about, format_description},
    surface::Surface,
};

pub const DEFAULT_THUMBNAIL: &str = "assets/default-thumbnail.png";

/// Info box heading -> profile key. Titles not listed fall back to
/// [`normalize_key`] of the heading itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutTitles(BTreeMap<String, String>);

impl AboutTitles {
    pub fn standard() -> Self {
        [
            ("Say Hello!", "greeting"),
            ("Where I Am Now?", "current_status"),
            ("What Drives Me?", "introduction"),
            ("My Vision", "introduction"),
            ("My Skills and Approach", "skills"),
            ("Let's Connect!", "email"),
        ]
        .into_iter()
        .collect()
    }

    pub fn insert(&mut self, title: impl Into<String>, key: impl Into<String>) {
        self.0.insert(title.into(), key.into());
    }

    pub fn key_for(&self, title: &str) -> String {
        self.0
            .get(title)
            .cloned()
            .unwrap_or_else(|| normalize_key(title))
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl Default for AboutTitles {
    fn default() -> Self {
        Self::standard()
    }
}

impl<T: Into<String>, K: Into<String>> FromIterator<(T, K)> for AboutTitles {
    fn from_iter<I: IntoIterator<Item = (T, K)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(title, key)| (title.into(), key.into()))
                .collect(),
        )
    }
}

/// Media shown at the top of a detail block. A video wins over any images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMedia<'a> {
    Video(&'a str),
    Image(&'a str),
    Carousel(&'a [String]),
    Nothing,
}

impl<'a> DetailMedia<'a> {
    pub fn select(project: &'a ProjectRecord) -> Self {
        if let Some(video) = project.video.as_deref() {
            return Self::Video(video);
        }
        match project.images.as_slice() {
            [] => Self::Nothing,
            [single] => Self::Image(single.as_str()),
            images => Self::Carousel(images),
        }
    }

    fn to_element(self, alt: &str) -> Element {
        let container = Element::new("div").class("project-images");
        let image = |src: &str| Element::new("img").attr("src", src).attr("alt", alt);
        match self {
            Self::Video(src) => container.child(
                Element::new("video")
                    .attr("controls", "")
                    .attr("width", "100%")
                    .child(
                        Element::new("source")
                            .attr("src", src)
                            .attr("type", "video/mp4"),
                    )
                    .text("Your browser does not support the video tag."),
            ),
            Self::Image(src) => container.child(image(src)),
            Self::Carousel(sources) => container.child(
                Element::new("div").class("project-images-carousel").child(
                    Element::new("div")
                        .class("carousel-track")
                        .children(sources.iter().map(|src| Node::from(image(src.as_str())))),
                ),
            ),
            Self::Nothing => container,
        }
    }
}

/// Fills a [`Surface`] from a snapshot. Rendering the same snapshot twice
/// yields the same surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    about_titles: AboutTitles,
    default_thumbnail: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(AboutTitles::standard(), DEFAULT_THUMBNAIL)
    }
}

impl Renderer {
    pub fn new(about_titles: AboutTitles, default_thumbnail: impl Into<String>) -> Self {
        Self {
            about_titles,
            default_thumbnail: default_thumbnail.into(),
        }
    }

    pub fn about_titles(&self) -> &AboutTitles {
        &self.about_titles
    }

    pub fn render(&self, snapshot: &PortfolioSnapshot, surface: &mut Surface) {
        self.render_about(&snapshot.about, surface);
        self.render_projects(&snapshot.projects, surface);
    }

    /// Writes the profile name into the header and profile text into every box
    /// whose key has a value. Boxes without a value keep their content.
    pub fn render_about(&self, about: &AboutProfile, surface: &mut Surface) {
        if let (Some(header), Some(name)) = (surface.header_name.as_mut(), about.get("name")) {
            header.children = vec![Node::text(name)];
        }

        for about_box in &mut surface.about_boxes {
            let key = self.about_titles.key_for(&about_box.title);
            if let Some(value) = about.get(&key) {
                about_box.content.children = format_about(value);
            }
        }
    }

    pub fn render_projects(&self, projects: &[ProjectRecord], surface: &mut Surface) {
        let (Some(grid), Some(details)) = (surface.card_grid.as_mut(), surface.detail_panel.as_mut())
        else {
            debug!("project containers missing; skipping project rendering");
            return;
        };

        grid.children.clear();
        details.children.clear();
        for (index, project) in projects.iter().enumerate() {
            let id = ProjectId::from_index(index);
            grid.children.push(self.project_card(project, id).into());
            details.children.push(self.project_detail(project, id).into());
        }
    }

    pub fn project_card(&self, project: &ProjectRecord, id: ProjectId) -> Element {
        let thumbnail = project
            .thumbnail
            .as_deref()
            .unwrap_or(&self.default_thumbnail);

        Element::new("div")
            .class("project-card")
            .attr("data-project", id.to_string())
            .child(
                Element::new("div").class("project-thumbnail").child(
                    Element::new("img")
                        .attr("src", thumbnail)
                        .attr("alt", project.title_or_empty()),
                ),
            )
            .child(
                Element::new("div")
                    .class("project-title")
                    .text(project.title_or_empty()),
            )
    }

    /// Hidden detail block: media, title row, description, and an outbound link
    /// when the project has one.
    pub fn project_detail(&self, project: &ProjectRecord, id: ProjectId) -> Element {
        let title = project.title_or_empty();

        let mut detail = Element::new("div")
            .class("project-card-details")
            .attr("data-project", id.to_string())
            .displayed(Display::None)
            .child(DetailMedia::select(project).to_element(title))
            .child(
                Element::new("div")
                    .class("project-title-row")
                    .child(Element::new("div").class("project-title").text(title))
                    .child(
                        Element::new("span")
                            .class("project-date")
                            .text(project.date.as_deref().unwrap_or_default()),
                    ),
            )
            .child(
                Element::new("div").class("project-description").children(
                    project
                        .description
                        .as_deref()
                        .map(format_description)
                        .unwrap_or_default(),
                ),
            );

        if let Some(link) = project.external_link.as_deref() {
            detail = detail.child(
                Element::new("a")
                    .class("learn-more-btn")
                    .attr("href", link)
                    .attr("target", "_blank")
                    .text("Visit Project"),
            );
        }
        detail
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
