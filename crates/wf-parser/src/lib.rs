//! Parsers for the suite's naming conventions.
//!
//! Properties and display names encode feature grouping purely in naming
//! patterns (`_PREFIX_Name`, `[LABEL] Name`, `_PREFIX_FUNC_ENABLE`). This
//! crate decomposes them into the structured parts defined in `wf-core`.
//! All parsers are total: unmatched input degrades to an unlabeled result
//! that preserves the original text.

mod grammar;
mod lexer;

pub use grammar::{
    is_enable_keyword, is_enable_toggle_property, parse_display_name, parse_property_name,
};
