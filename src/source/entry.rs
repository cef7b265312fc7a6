//! # Catalog Entries
//!
//! Raw source records as they appear in a catalog file, plus the loaders
//! for the built-in catalog and user-supplied catalog files.
//!
//! ## Format
//!
//! ```json
//! {
//!   "github": { "name": "Github", "redirect": "github-trending-today" },
//!   "github-trending-today": {
//!     "name": "Github",
//!     "title": "Today",
//!     "column": "tech",
//!     "sort_key": "github"
//!   }
//! }
//! ```
//!
//! Key order in the file is preserved and used as the tie breaker when two
//! sources share a sort key.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::fs;
use std::path::Path;

/// The catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("builtin.json");

/// Unique identifier of a content source (e.g. `github-trending-today`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for SourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SourceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SourceId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SourceId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A single record of the static source mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceEntry {
    /// Display name
    pub name: String,
    /// Optional subtitle shown next to the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Column (category) the source is listed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    /// When set, this entry is an alias for another source and is never listed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<SourceId>,
    /// Precomputed ordering key (e.g. a pinyin transliteration of `name`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,
}

impl SourceEntry {
    pub fn is_redirect(&self) -> bool {
        self.redirect.is_some()
    }
}

/// The static mapping from source id to record, in file order.
pub type SourceMap = IndexMap<SourceId, SourceEntry>;

/// Parse the catalog embedded in the binary.
pub fn builtin_sources() -> Result<SourceMap> {
    let sources = parse_sources(BUILTIN_CATALOG).context("Failed to parse built-in catalog")?;
    warn_dangling_redirects(&sources);
    Ok(sources)
}

/// Load a catalog from a JSON file.
pub fn load_sources(path: &Path) -> Result<SourceMap> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let sources = parse_sources(&content)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

    tracing::debug!(path = %path.display(), entries = sources.len(), "loaded catalog");
    warn_dangling_redirects(&sources);
    Ok(sources)
}

/// Parse a catalog from its JSON text.
pub fn parse_sources(json: &str) -> Result<SourceMap> {
    let sources: SourceMap = serde_json::from_str(json).context("Invalid catalog JSON")?;
    Ok(sources)
}

/// Redirect entries whose target is not part of the mapping, as `(alias, target)`.
pub fn dangling_redirects(sources: &SourceMap) -> Vec<(&SourceId, &SourceId)> {
    sources
        .iter()
        .filter_map(|(id, entry)| entry.redirect.as_ref().map(|target| (id, target)))
        .filter(|(_, target)| !sources.contains_key(*target))
        .collect()
}

fn warn_dangling_redirects(sources: &SourceMap) {
    for (alias, target) in dangling_redirects(sources) {
        tracing::warn!(%alias, %target, "catalog redirect points at an unknown source");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_sources_preserves_file_order() {
        let json = r#"{
            "zeta": { "name": "Zeta" },
            "alpha": { "name": "Alpha" },
            "mid": { "name": "Mid" }
        }"#;

        let sources = parse_sources(json).unwrap();
        let ids: Vec<&str> = sources.keys().map(SourceId::as_str).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_sources_optional_fields() {
        let json = r#"{
            "hn": { "name": "Hacker News", "title": "Top", "column": "tech", "sort_key": "hackernews" },
            "plain": { "name": "Plain" }
        }"#;

        let sources = parse_sources(json).unwrap();
        let hn = sources.get("hn").unwrap();
        assert_eq!(hn.title.as_deref(), Some("Top"));
        assert_eq!(hn.column.as_deref(), Some("tech"));
        assert_eq!(hn.sort_key.as_deref(), Some("hackernews"));
        assert!(!hn.is_redirect());

        let plain = sources.get("plain").unwrap();
        assert!(plain.title.is_none());
        assert!(plain.sort_key.is_none());
    }

    #[test]
    fn test_parse_sources_rejects_unknown_fields() {
        let json = r#"{ "a": { "name": "A", "colour": "red" } }"#;
        assert!(parse_sources(json).is_err());
    }

    #[test]
    fn test_parse_sources_rejects_missing_name() {
        let json = r#"{ "a": { "title": "no name" } }"#;
        assert!(parse_sources(json).is_err());
    }

    #[test]
    fn test_builtin_catalog_parses() {
        let sources = builtin_sources().unwrap();
        assert!(!sources.is_empty());
        assert!(sources.values().any(SourceEntry::is_redirect));
        assert!(dangling_redirects(&sources).is_empty());
    }

    #[test]
    fn test_dangling_redirects() {
        let json = r#"{
            "old": { "name": "Old", "redirect": "new" },
            "gone": { "name": "Gone", "redirect": "missing" },
            "new": { "name": "New" }
        }"#;

        let sources = parse_sources(json).unwrap();
        let dangling = dangling_redirects(&sources);
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].0, "gone");
        assert_eq!(dangling[0].1, "missing");
    }

    #[test]
    fn test_load_sources_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        fs::write(&path, r#"{ "a": { "name": "Alpha" } }"#).unwrap();

        let sources = load_sources(&path).unwrap();
        assert_eq!(sources.len(), 1);
    }

    #[test]
    fn test_load_sources_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.json");

        let err = load_sources(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }

    #[test]
    fn test_source_id_comparisons() {
        let id = SourceId::from("zhihu");
        assert_eq!(id, "zhihu");
        assert_eq!(id.as_str(), "zhihu");
        assert_eq!(id.to_string(), "zhihu");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""zhihu""#);
    }
}
