//! # Source Catalog
//!
//! The derived, read-only list of selectable sources. Built once from a
//! [`SourceMap`] and never mutated afterwards: searching and selection only
//! ever borrow from it.

use super::entry::{SourceEntry, SourceId, SourceMap};

/// A selectable source as shown in the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceItem {
    pub id: SourceId,
    pub name: String,
    pub title: Option<String>,
    pub column: Option<String>,
    /// Ordering key, never displayed
    pub sort_key: String,
}

impl SourceItem {
    fn from_entry(id: &SourceId, entry: &SourceEntry) -> Self {
        Self {
            id: id.clone(),
            name: entry.name.clone(),
            title: entry.title.clone(),
            column: entry.column.clone(),
            sort_key: entry
                .sort_key
                .clone()
                .unwrap_or_else(|| id.as_str().to_string()),
        }
    }

    /// Site prefix of the id, shared by sources of the same site
    /// (`github-trending-today` -> `github`).
    pub fn icon_key(&self) -> &str {
        let id = self.id.as_str();
        id.split_once('-').map_or(id, |(site, _)| site)
    }

    /// Strings the search query is matched against: name, title and sort key.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.name.as_str()),
            self.title.as_deref(),
            Some(self.sort_key.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|keyword| !keyword.is_empty())
    }
}

/// Sorted list of every non-redirect source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<SourceItem>,
}

impl Catalog {
    /// Drop redirect aliases and sort the rest by sort key.
    ///
    /// The sort is stable, so sources sharing a sort key keep their order
    /// from the mapping.
    pub fn build(sources: &SourceMap) -> Self {
        let mut items: Vec<SourceItem> = sources
            .iter()
            .filter(|(_, entry)| !entry.is_redirect())
            .map(|(id, entry)| SourceItem::from_entry(id, entry))
            .collect();

        items.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));

        Self { items }
    }

    pub fn items(&self) -> &[SourceItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&SourceItem> {
        self.items.first()
    }

    pub fn get(&self, id: &str) -> Option<&SourceItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Position of `id` in sorted order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::entry::{builtin_sources, parse_sources};

    fn two_source_map() -> SourceMap {
        parse_sources(
            r#"{
                "b": { "name": "Beta", "sort_key": "b" },
                "a": { "name": "Alpha", "sort_key": "a" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_build_sorts_by_sort_key() {
        let catalog = Catalog::build(&two_source_map());
        let ids: Vec<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_build_drops_redirects() {
        let sources = parse_sources(
            r#"{
                "36kr": { "name": "36氪", "redirect": "36kr-quick" },
                "36kr-quick": { "name": "36氪", "title": "快讯", "sort_key": "36ke" }
            }"#,
        )
        .unwrap();

        let catalog = Catalog::build(&sources);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("36kr-quick"));
        assert!(!catalog.contains("36kr"));
    }

    #[test]
    fn test_build_keeps_input_order_on_ties() {
        let sources = parse_sources(
            r#"{
                "z-second": { "name": "Second", "sort_key": "same" },
                "a-first": { "name": "First", "sort_key": "same" },
                "m-third": { "name": "Third", "sort_key": "same" },
                "before": { "name": "Before", "sort_key": "aaa" }
            }"#,
        )
        .unwrap();

        let catalog = Catalog::build(&sources);
        let ids: Vec<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["before", "z-second", "a-first", "m-third"]);
    }

    #[test]
    fn test_missing_sort_key_falls_back_to_id() {
        let sources = parse_sources(
            r#"{
                "zulu": { "name": "Alpha" },
                "alpha": { "name": "Zulu" }
            }"#,
        )
        .unwrap();

        let catalog = Catalog::build(&sources);
        assert_eq!(catalog.items()[0].id, "alpha");
        assert_eq!(catalog.items()[0].sort_key, "alpha");
    }

    #[test]
    fn test_builtin_catalog_invariants() {
        let sources = builtin_sources().unwrap();
        let catalog = Catalog::build(&sources);

        let expected = sources.values().filter(|e| !e.is_redirect()).count();
        assert_eq!(catalog.len(), expected);

        for pair in catalog.items().windows(2) {
            assert!(pair[0].sort_key <= pair[1].sort_key);
        }

        for item in catalog.items() {
            let entry = sources.get(&item.id).unwrap();
            assert!(!entry.is_redirect());
        }

        let mut ids: Vec<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_empty_mapping_builds_empty_catalog() {
        let catalog = Catalog::build(&SourceMap::new());
        assert!(catalog.is_empty());
        assert!(catalog.first().is_none());
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::build(&two_source_map());
        assert_eq!(catalog.get("b").map(|i| i.name.as_str()), Some("Beta"));
        assert_eq!(catalog.position("b"), Some(1));
        assert!(catalog.get("z").is_none());
        assert_eq!(catalog.first().map(|i| i.id.as_str()), Some("a"));
    }

    #[test]
    fn test_icon_key() {
        let sources = parse_sources(
            r#"{
                "github-trending-today": { "name": "Github" },
                "zhihu": { "name": "知乎" }
            }"#,
        )
        .unwrap();
        let catalog = Catalog::build(&sources);

        assert_eq!(catalog.get("github-trending-today").unwrap().icon_key(), "github");
        assert_eq!(catalog.get("zhihu").unwrap().icon_key(), "zhihu");
    }

    #[test]
    fn test_keywords_skip_missing_title() {
        let catalog = Catalog::build(&two_source_map());
        let keywords: Vec<&str> = catalog.get("a").unwrap().keywords().collect();
        assert_eq!(keywords, vec!["Alpha", "a"]);
    }
}
