//! # UI Module
//!
//! This module provides the terminal user interface for Newsdeck.
//!
//! ## Components
//!
//! - [`App`] - Application state (palette, results, selection, focus store)
//! - [`mod@keys`] - Maps key events onto app operations
//! - [`mod@render`] - Rendering functions for drawing the TUI
//! - [`Config`] - Persisted user configuration
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    Header                        │
//! ├─────────────────────┬───────────────────────────┤
//! │  > query            │                           │
//! ├─────────────────────┤      Source Preview       │
//! │   Source list       │   (name, title, column,   │
//! │   (palette) or      │    focus state)           │
//! │   Focused list      │                           │
//! ├─────────────────────┴───────────────────────────┤
//! │                    Footer                        │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod keys;
pub mod render;

pub use app::{App, View};
pub use config::Config;
pub use keys::handle_key;
pub use render::render;
