//! Core types and contracts for the WF shader suite tools.
//!
//! This crate provides the foundational types used across all other wf crates:
//! - Structured name parts produced by the naming grammars
//! - Variant descriptors and candidate paths
//! - The property-bag (material) contract
//! - Version metadata
//! - Error types

pub mod bag;
pub mod errors;
pub mod names;
pub mod types;
pub mod version;

pub use bag::*;
pub use errors::*;
pub use names::*;
pub use types::*;
pub use version::*;
