//! Widgets for editing OTM dictionaries.
pub mod components;
pub mod types;
pub mod widgets;
