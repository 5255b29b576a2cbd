//! Controller layer: interactive targets, view-state transitions, and the
//! dispatcher tying clicks on the surface to those transitions.

pub mod events;
pub mod reducer;

use shared::domain::ViewState;
use tracing::debug;

pub use events::{HandlerRegistry, Target, UiEvent};

use crate::surface::Surface;

/// Owns the [`ViewState`] for a rendered surface. Attach it after rendering;
/// transitions only touch what is already on the surface.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: ViewState,
    registry: HandlerRegistry,
}

impl InteractionController {
    pub fn attach(surface: &Surface) -> Self {
        Self {
            state: ViewState::Browsing,
            registry: HandlerRegistry::from_surface(surface),
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Routes a click on `target`. Returns `false` when nothing handles it.
    pub fn activate(&mut self, target: Target, surface: &mut Surface) -> bool {
        let Some(event) = self.registry.dispatch(target) else {
            debug!(?target, "no handler registered for target");
            return false;
        };
        self.handle(event, surface);
        true
    }

    pub fn handle(&mut self, event: UiEvent, surface: &mut Surface) {
        let next = reducer::apply(self.state, event, surface);
        debug!(
            event = event.name(),
            from = ?self.state,
            to = ?next,
            "view event handled"
        );
        self.state = next;
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
