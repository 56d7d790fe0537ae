//! Translation entries and the grouped lookup table.

use std::collections::HashSet;

use indexmap::IndexMap;

/// One translation: `before` to `after`, optionally restricted to feature
/// labels. An empty tag set means the entry applies regardless of label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    before: String,
    after: String,
    tags: HashSet<String>,
}

impl Translation {
    /// Wildcard entry.
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            tags: HashSet::new(),
        }
    }

    /// Entry restricted to one label.
    pub fn tagged(
        tag: impl Into<String>,
        before: impl Into<String>,
        after: impl Into<String>,
    ) -> Self {
        Self::new(before, after).add_tag(tag)
    }

    pub fn add_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn before(&self) -> &str {
        &self.before
    }

    pub fn after(&self) -> &str {
        &self.after
    }

    pub fn has_no_tag(&self) -> bool {
        self.tags.is_empty()
    }

    /// Whether the entry applies under `tag`: untagged entries always do.
    pub fn matches_tag(&self, tag: &str) -> bool {
        self.tags.is_empty() || self.tags.contains(tag)
    }
}

/// Translations grouped by source text. Within a group, tagged entries sort
/// ahead of wildcards so a label-specific match takes priority.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: IndexMap<String, Vec<Translation>>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Translation>,
    {
        let mut grouped: IndexMap<String, Vec<Translation>> = IndexMap::new();
        for entry in entries {
            grouped
                .entry(entry.before.clone())
                .or_default()
                .push(entry);
        }
        for group in grouped.values_mut() {
            // Stable: registration order is kept within the two classes.
            group.sort_by_key(Translation::has_no_tag);
        }
        Self { entries: grouped }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// All entries for a source text, tagged first.
    pub fn lookup(&self, before: &str) -> &[Translation] {
        self.entries.get(before).map_or(&[], Vec::as_slice)
    }

    /// Wildcard translation of `before`, if any.
    pub fn translate(&self, before: &str) -> Option<&str> {
        self.lookup(before)
            .iter()
            .find(|t| t.has_no_tag())
            .map(Translation::after)
    }

    /// Label-aware translation of `before`: the first entry whose tag set is
    /// empty or contains `label`.
    pub fn translate_tagged(&self, label: &str, before: &str) -> Option<&str> {
        self.lookup(before)
            .iter()
            .find(|t| t.matches_tag(label))
            .map(Translation::after)
    }
}
