//! View layer: a small element tree standing in for the page, the renderer that
//! fills it from a snapshot, and the controller that reacts to clicks on it.

pub mod controller;
pub mod dom;
pub mod markup;
pub mod render;
pub mod surface;

pub use controller::{HandlerRegistry, InteractionController, Target, UiEvent};
pub use dom::{Display, Element, Node};
pub use render::{AboutTitles, DetailMedia, Renderer, DEFAULT_THUMBNAIL};
pub use surface::{AboutBox, Surface};
