//! # Focus Module
//!
//! Tracks which sources the user has focused (favorited).
//!
//! ## Overview
//!
//! The focused ids live in a [`FocusStore`] owned by the caller and passed
//! in by reference; nothing here reaches for global state. Every change
//! goes through [`toggle_focus`], which rewrites the whole list so readers
//! see either the old or the new state, never a partial one.
//!
//! Two stores are provided:
//! - [`MemoryFocusStore`] - kept in memory, used by tests and `--no-persist`
//! - [`FileFocusStore`] - persisted as JSON in the user's data directory

mod set;
mod store;

pub use set::{focused_items, is_focused, toggle_focus};
pub use store::{
    default_focus_path, FileFocusStore, FocusFile, FocusStore, MemoryFocusStore,
};
