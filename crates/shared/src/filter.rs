use std::collections::BTreeSet;

use crate::models::{Category, Marker};

/// Color used for a marker whose category key matches nothing.
pub const FALLBACK_COLOR: &str = "#ffffff";
/// Glyph used for a marker whose category key matches nothing.
pub const FALLBACK_GLYPH: &str = "📍";

/// Category keys currently shown on the map.
///
/// Only changed through [`VisibilitySet::toggle`]; bulk actions are expressed
/// as a list of keys to toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilitySet {
    keys: BTreeSet<String>,
}

impl VisibilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Add `key` if absent, remove it if present.
    pub fn toggle(&mut self, key: &str) {
        if !self.keys.remove(key) {
            self.keys.insert(key.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// How many of `categories` are visible.
    pub fn count_visible(&self, categories: &[Category]) -> usize {
        categories.iter().filter(|c| self.contains(&c.key)).count()
    }
}

impl<S: Into<String>> FromIterator<S> for VisibilitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// One row of the filter checklist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterEntry<'a> {
    pub category: &'a Category,
    pub visible: bool,
}

/// Categories whose display name contains `query`, ignoring case.
/// An empty query matches everything.
pub fn search_categories<'a>(
    categories: &'a [Category],
    query: &str,
    visible: &VisibilitySet,
) -> Vec<FilterEntry<'a>> {
    let needle = query.to_lowercase();
    categories
        .iter()
        .filter(|c| c.display_name.to_lowercase().contains(&needle))
        .map(|category| FilterEntry {
            category,
            visible: visible.contains(&category.key),
        })
        .collect()
}

/// Keys to toggle so every category of the (unfiltered) list becomes visible.
pub fn select_all_toggles(categories: &[Category], visible: &VisibilitySet) -> Vec<String> {
    categories
        .iter()
        .filter(|c| !visible.contains(&c.key))
        .map(|c| c.key.clone())
        .collect()
}

/// Keys to toggle so every category of the list becomes hidden.
pub fn clear_all_toggles(categories: &[Category], visible: &VisibilitySet) -> Vec<String> {
    categories
        .iter()
        .filter(|c| visible.contains(&c.key))
        .map(|c| c.key.clone())
        .collect()
}

/// Markers whose category is visible, in dataset order.
pub fn visible_markers<'a>(markers: &'a [Marker], visible: &VisibilitySet) -> Vec<&'a Marker> {
    markers
        .iter()
        .filter(|m| visible.contains(&m.category_key))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle<'a> {
    pub color: &'a str,
    pub glyph: &'a str,
}

/// Color and glyph for `key`, or the neutral fallback if no category has it.
pub fn category_style<'a>(categories: &'a [Category], key: &str) -> CategoryStyle<'a> {
    match categories.iter().find(|c| c.key == key) {
        Some(c) => CategoryStyle {
            color: &c.color,
            glyph: &c.glyph,
        },
        None => CategoryStyle {
            color: FALLBACK_COLOR,
            glyph: FALLBACK_GLYPH,
        },
    }
}
