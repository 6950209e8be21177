//! Reusable Dioxus components for the onboarding front-end.
//!
//! Each component ships its own stylesheet next to its source and links it
//! with `asset!`, so pages only need to import the component.

pub mod components;

pub use components::*;
