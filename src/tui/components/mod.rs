//! # Components
//!
//! Each file holds one component: its props types, its rendering, and its
//! tests. Most components are methods on [`Renderer`](super::Renderer);
//! the grid, which has enough knobs to warrant a props struct, implements
//! [`Component`](super::Component) instead.
//!
//! ```text
//! components/
//! ├── frame.rs       (boxed / active / error / titled boxes)
//! ├── table.rs       (label/value rows)
//! ├── diff.rs        (before/after rows)
//! ├── grid.rs        (multi-column TableGrid)
//! ├── dialog.rs      (confirm, input, confirm-with-preview)
//! ├── status_bar.rs  (wrapped key hints)
//! └── metadata.rs    (nested metadata listing)
//! ```
//!
//! Composition runs one way: dialogs build on tables, diffs and frames;
//! tables and diffs build on frames. Nothing reaches back up.

pub mod dialog;
pub mod diff;
pub mod frame;
pub mod grid;
pub mod metadata;
pub mod status_bar;
pub mod table;

pub use diff::DiffRow;
pub use grid::{Alignment, TableColumn, TableGrid};
pub use table::TableRow;
