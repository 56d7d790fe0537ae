//! Keyword rules and batch synchronization.
//!
//! Property values drive shader-compiler keyword state through a table of
//! rules (boolean and enumerated), plus a synthesized rule for every enable
//! toggle. The synchronizer runs a three-phase pass over material batches:
//! deny-list deletion, rule application, and the derived lighting flag.

mod features;
mod rules;
mod sync;
mod table;

pub use features::{FeaturePredicate, FeatureRegistry, ShaderFeature};
pub use rules::{is_property_true, set_keyword, KeywordRule, RuleKind, PROPERTY_TRUE_EPSILON};
pub use sync::KeywordSynchronizer;
pub use table::RuleTable;
