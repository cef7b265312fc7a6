//! # Source Module
//!
//! The content-source catalog and everything that reads it.
//!
//! ## Pipeline
//!
//! ```text
//! catalog JSON ──> SourceMap ──> Catalog::build ──> search(query) ──> palette rows
//!                  (file order)   (no redirects,                       │
//!                                  sorted by sort key)                 ▼
//!                                                            Selection::select
//! ```
//!
//! - [`entry`] - raw records, the built-in catalog and file loading
//! - [`catalog`] - the derived, sorted [`Catalog`] of [`SourceItem`]s
//! - [`mod@search`] - fuzzy ranking of catalog items for a query
//! - [`selection`] - the currently selected source

pub mod catalog;
pub mod entry;
pub mod search;
pub mod selection;

pub use catalog::{Catalog, SourceItem};
pub use entry::{
    builtin_sources, dangling_redirects, load_sources, parse_sources, SourceEntry, SourceId,
    SourceMap,
};
pub use search::search;
pub use selection::Selection;
