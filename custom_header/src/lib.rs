//! Page header component and the small Dioxus app that hosts it.
pub mod components;
pub mod style;
pub mod views;

pub use components::{CustomHeader, HeaderProps};
pub use style::{HeaderStyle, StyleError};
