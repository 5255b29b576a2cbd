//! Data model and error taxonomy shared by the loader, parser and view crates.

pub mod domain;
pub mod error;
