//! Structured results of the suite naming grammars.
//!
//! Produced by `wf-parser`. Parsing is total: input that does not follow a
//! grammar degrades to the `Plain` variant with the original text preserved.

/// A GUI display name, decomposed by the `[LABEL] Name` grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayName {
    /// Display name with an uppercase feature label.
    Labeled { label: String, name: String },
    /// Anything that does not follow the labeled grammar.
    Plain(String),
}

impl DisplayName {
    /// The feature label, if the grammar matched.
    pub fn label(&self) -> Option<&str> {
        match self {
            DisplayName::Labeled { label, .. } => Some(label),
            DisplayName::Plain(_) => None,
        }
    }

    /// The name portion; the whole text when unlabeled.
    pub fn name(&self) -> &str {
        match self {
            DisplayName::Labeled { name, .. } => name,
            DisplayName::Plain(text) => text,
        }
    }

    /// The canonical display string: `[LABEL] Name`, or the original text.
    pub fn display(&self) -> String {
        match self {
            DisplayName::Labeled { label, name } => format!("[{}] {}", label, name),
            DisplayName::Plain(text) => text.clone(),
        }
    }

    pub fn is_labeled(&self) -> bool {
        matches!(self, DisplayName::Labeled { .. })
    }
}

/// A physical property name, decomposed by the `_PREFIX_Name` grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyName {
    /// Property name with an uppercase group prefix and optional `_N` suffix.
    Prefixed {
        prefix: String,
        name: String,
        suffix: String,
    },
    /// Anything that does not follow the prefixed grammar.
    Plain(String),
}

impl PropertyName {
    /// The uppercase group prefix, if the grammar matched.
    pub fn prefix(&self) -> Option<&str> {
        match self {
            PropertyName::Prefixed { prefix, .. } => Some(prefix),
            PropertyName::Plain(_) => None,
        }
    }

    /// The name portion; the whole text when unprefixed.
    pub fn name(&self) -> &str {
        match self {
            PropertyName::Prefixed { name, .. } => name,
            PropertyName::Plain(text) => text,
        }
    }

    /// The numbered suffix (`_2` etc.), empty when absent or unprefixed.
    pub fn suffix(&self) -> &str {
        match self {
            PropertyName::Prefixed { suffix, .. } => suffix,
            PropertyName::Plain(_) => "",
        }
    }

    /// The feature label: prefix plus any numbered suffix, uppercased.
    pub fn label(&self) -> Option<String> {
        match self {
            PropertyName::Prefixed { prefix, suffix, .. } => {
                Some(format!("{}{}", prefix, suffix.to_ascii_uppercase()))
            }
            PropertyName::Plain(_) => None,
        }
    }

    pub fn is_prefixed(&self) -> bool {
        matches!(self, PropertyName::Prefixed { .. })
    }
}
