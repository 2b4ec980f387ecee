//! Reusable UI components.

pub mod form_field;
pub mod nav_bar;
pub mod status_bar;
