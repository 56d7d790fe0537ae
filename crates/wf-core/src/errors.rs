//! Error types for the WF suite tools.
//!
//! Nothing in this core is fatal; these types are advisories the caller may
//! log or ignore.

use thiserror::Error;

/// Advisories raised while registering shader features.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A feature with this label is already registered; the first wins.
    #[error("duplicate feature label: {label}")]
    DuplicateLabel { label: String },
}
