//! Presentation components shared by the loan dashboards.
//!
//! Each component links its own stylesheet; colours come from the CSS
//! variables declared in the app's `main.css`.

pub mod components;

pub use components::*;
