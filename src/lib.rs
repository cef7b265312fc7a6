//! Newsdeck - a terminal command palette for news sources
//!
//! This library provides the core functionality for building the source
//! catalog, searching it, tracking the selected source and keeping the
//! user's focused (favorite) sources.

pub mod focus;
pub mod logging;
pub mod source;
pub mod ui;
