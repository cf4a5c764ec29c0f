//! # Core
//!
//! Everything that is not about drawing. It knows nothing about ANSI codes
//! or terminal widths.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │          CORE           │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • List (cursor state)  │
//!                    │  • MetaValue (data)     │
//!                    │  • config (settings)    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                    ┌─────────────────────────┐
//!                    │           TUI           │
//!                    │  Renderer + components  │
//!                    └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`list`]: cursor/offset pagination and its reducer
//! - [`metadata`]: tagged metadata tree
//! - [`config`]: theme/display settings from `~/.boxline/config.toml`

pub mod config;
pub mod list;
pub mod metadata;

pub use list::{List, ListEvent};
pub use metadata::MetaValue;
