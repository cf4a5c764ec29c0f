//! Boxline: fixed-width, ANSI-styled layout for untrusted terminal text.

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::{List, ListEvent, MetaValue};
pub use crate::tui::{Alignment, Component, DiffRow, Renderer, TableColumn, TableGrid, TableRow, Theme};

/// Which component the demo binary draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    #[default]
    Table,
    Diff,
    Grid,
    Dialog,
    Input,
    Preview,
    Status,
    List,
    Metadata,
    Error,
}
