//! The rule table: property name to keyword rule, registration order
//! preserved.

use indexmap::IndexMap;

use crate::rules::KeywordRule;

/// Mapping from property name to its keyword rule.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: IndexMap<String, KeywordRule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, keyed by its property name. A later rule for the same
    /// property replaces the earlier one.
    pub fn insert(&mut self, rule: KeywordRule) -> Option<KeywordRule> {
        self.rules.insert(rule.property.clone(), rule)
    }

    pub fn get(&self, property: &str) -> Option<&KeywordRule> {
        self.rules.get(property)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.rules.contains_key(property)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordRule> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<KeywordRule> for RuleTable {
    fn from_iter<T: IntoIterator<Item = KeywordRule>>(iter: T) -> Self {
        let mut table = Self::new();
        for rule in iter {
            table.insert(rule);
        }
        table
    }
}
