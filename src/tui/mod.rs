//! # Rendering Layer
//!
//! Turns application data into finished terminal strings. Nothing here does
//! I/O or keeps state between calls: the driver passes the current width on
//! every redraw and writes whatever comes back.
//!
//! ```text
//!   raw strings ──► sanitize ──► measure ──► components ──► String
//!                                   ▲
//!                  width policy ────┘
//! ```
//!
//! All components hang off [`Renderer`], which closes over one immutable
//! [`Theme`]. Layout helpers ([`sanitize`], [`measure`], [`width`]) are
//! plain functions and can be used on their own.

mod component;
pub mod components;
pub mod measure;
pub mod sanitize;
pub mod theme;
pub mod width;

pub use component::Component;
pub use components::{Alignment, DiffRow, TableColumn, TableGrid, TableRow};
pub use theme::Theme;

/// Entry point for every component. Cheap to clone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render any props-style component with this renderer's theme.
    pub fn render<C: Component>(&self, component: &C) -> String {
        component.render(&self.theme)
    }
}
