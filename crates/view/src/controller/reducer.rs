//! View-state transitions and the visibility changes that go with them.

use shared::domain::{ProjectId, ViewState};

use super::events::UiEvent;
use crate::{dom::Display, surface::Surface};

pub fn apply(state: ViewState, event: UiEvent, surface: &mut Surface) -> ViewState {
    match event {
        UiEvent::SelectProject(id) => show_project(state, id, surface),
        UiEvent::Back => show_grid(state, surface),
        UiEvent::ToggleBox(index) => {
            if let Some(about_box) = surface.about_boxes.get_mut(index) {
                about_box.toggle();
            }
            state
        }
    }
}

/// Needs the grid, the detail panel and the back control; otherwise the state
/// is left as it was.
fn show_project(state: ViewState, id: ProjectId, surface: &mut Surface) -> ViewState {
    let (Some(grid), Some(details), Some(back)) = (
        surface.card_grid.as_mut(),
        surface.detail_panel.as_mut(),
        surface.back_button.as_mut(),
    ) else {
        return state;
    };

    grid.set_display(Display::None);
    details.set_display(Display::Block);
    back.set_display(Display::Block);

    let wanted = id.to_string();
    for detail in details.child_elements_mut() {
        let display = if detail.attr_value("data-project") == Some(wanted.as_str()) {
            Display::Block
        } else {
            Display::None
        };
        detail.set_display(display);
    }

    ViewState::Viewing(id)
}

fn show_grid(state: ViewState, surface: &mut Surface) -> ViewState {
    let (Some(grid), Some(details), Some(back)) = (
        surface.card_grid.as_mut(),
        surface.detail_panel.as_mut(),
        surface.back_button.as_mut(),
    ) else {
        return state;
    };

    grid.set_display(Display::Grid);
    details.set_display(Display::None);
    back.set_display(Display::None);
    for detail in details.child_elements_mut() {
        detail.set_display(Display::None);
    }

    ViewState::Browsing
}
