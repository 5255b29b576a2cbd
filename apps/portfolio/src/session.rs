//! Startup wiring: load, then render, then attach the controller.

use client_core::{PortfolioLoader, SheetSource};
use shared::domain::{PortfolioSnapshot, ProjectId, ViewState};
use tracing::{info, warn};
use view::{InteractionController, Renderer, Surface, Target};

use crate::config::Settings;

pub struct Session {
    pub snapshot: PortfolioSnapshot,
    pub surface: Surface,
    pub controller: InteractionController,
    page_title: String,
}

impl Session {
    pub async fn start<S: SheetSource>(loader: &PortfolioLoader<S>, settings: &Settings) -> Self {
        let snapshot = loader.load().await;

        let renderer = Renderer::new(settings.about_title_table(), &settings.default_thumbnail);
        let mut surface = Surface::with_about_titles(settings.about_box_titles());
        renderer.render(&snapshot, &mut surface);

        let controller = InteractionController::attach(&surface);
        info!(
            cards = surface.project_cards().count(),
            handlers = controller.registry().len(),
            "portfolio rendered"
        );

        Self {
            snapshot,
            surface,
            controller,
            page_title: settings.page_title.clone(),
        }
    }

    pub fn select(&mut self, id: ProjectId) -> ViewState {
        if !self
            .controller
            .activate(Target::ProjectCard(id), &mut self.surface)
        {
            warn!(project = %id, "no project card with this id");
        }
        self.controller.state()
    }

    pub fn to_html(&self) -> String {
        self.surface.to_html(&self.page_title)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
