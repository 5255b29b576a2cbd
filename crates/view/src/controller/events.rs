//! Interactive targets on the surface and the events they raise.

use std::collections::HashMap;

use shared::domain::ProjectId;

use crate::surface::Surface;

/// Something on the surface that reacts to activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    ProjectCard(ProjectId),
    BackButton,
    /// Heading of the info box at this index.
    BoxTitle(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    SelectProject(ProjectId),
    Back,
    ToggleBox(usize),
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectProject(_) => "select_project",
            Self::Back => "back",
            Self::ToggleBox(_) => "toggle_box",
        }
    }
}

/// Targets found on a rendered surface, each bound to the event it raises.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerRegistry {
    handlers: HashMap<Target, UiEvent>,
}

impl HandlerRegistry {
    pub fn from_surface(surface: &Surface) -> Self {
        let mut registry = Self::default();

        for card in surface.project_cards() {
            let Some(id) = card
                .attr_value("data-project")
                .and_then(|raw| raw.parse::<ProjectId>().ok())
            else {
                continue;
            };
            registry.register(Target::ProjectCard(id), UiEvent::SelectProject(id));
        }

        if surface.back_button.is_some() {
            registry.register(Target::BackButton, UiEvent::Back);
        }

        for index in 0..surface.about_boxes.len() {
            registry.register(Target::BoxTitle(index), UiEvent::ToggleBox(index));
        }

        registry
    }

    pub fn register(&mut self, target: Target, event: UiEvent) {
        self.handlers.insert(target, event);
    }

    pub fn dispatch(&self, target: Target) -> Option<UiEvent> {
        self.handlers.get(&target).copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
