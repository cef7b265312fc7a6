//! # Catalog Search
//!
//! Fuzzy search over the catalog using `frizbee`. Every item contributes
//! its keywords (name, title, sort key) as haystacks; an item scores as
//! its best matching keyword. Results are ranked by score, ties keep
//! catalog order.
//!
//! `frizbee` aligns UTF-8 bytes, so a CJK query can be scored against
//! continuation bytes taken from different characters. A keyword only
//! counts when the query's characters appear in it in order.

use super::catalog::{Catalog, SourceItem};
use frizbee::{match_list, Config};

/// Matcher options for palette queries.
///
/// Catalogs are small, so every haystack is scored, but typos are not
/// allowed: all query characters must appear in order.
pub fn matcher_config() -> Config {
    Config {
        prefilter: true,
        max_typos: Some(0),
        sort: false,
        ..Config::default()
    }
}

/// Rank the catalog items matching `query`.
///
/// An empty (or whitespace-only) query returns the whole catalog in
/// sorted order.
pub fn search<'a>(query: &str, catalog: &'a Catalog) -> Vec<&'a SourceItem> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return catalog.items().iter().collect();
    }

    let mut haystacks = Vec::new();
    let mut owners = Vec::new();
    for (index, item) in catalog.items().iter().enumerate() {
        for keyword in item.keywords() {
            haystacks.push(keyword);
            owners.push(index);
        }
    }

    let mut best: Vec<Option<u16>> = vec![None; catalog.len()];
    for entry in match_list(trimmed, &haystacks, &matcher_config()) {
        if entry.score == 0 {
            continue;
        }
        let index = entry.index as usize;
        let (Some(&owner), Some(keyword)) = (owners.get(index), haystacks.get(index)) else {
            continue;
        };
        if !contains_chars_in_order(trimmed, keyword) {
            continue;
        }
        let slot = &mut best[owner];
        *slot = Some(slot.map_or(entry.score, |score| score.max(entry.score)));
    }

    let mut ranked: Vec<(usize, u16)> = best
        .into_iter()
        .enumerate()
        .filter_map(|(index, score)| score.map(|score| (index, score)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    tracing::trace!(query = trimmed, matches = ranked.len(), "catalog search");

    let items = catalog.items();
    ranked.into_iter().map(|(index, _)| &items[index]).collect()
}

/// Case-insensitive, char-level subsequence test.
fn contains_chars_in_order(needle: &str, haystack: &str) -> bool {
    let mut chars = haystack.chars().flat_map(char::to_lowercase);
    needle
        .chars()
        .flat_map(char::to_lowercase)
        .all(|c| chars.any(|h| h == c))
}
