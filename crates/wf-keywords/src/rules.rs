//! Keyword rules: one property controlling one keyword (boolean) or one of
//! a deduplicated keyword set (enumerated).

use wf_core::PropertyBag;

/// Truthiness threshold for float-backed toggles; absorbs serialization
/// noise around zero.
pub const PROPERTY_TRUE_EPSILON: f32 = 0.001;

/// Whether a property value counts as "true".
pub fn is_property_true(value: f32) -> bool {
    PROPERTY_TRUE_EPSILON < value.abs()
}

/// Toggle a keyword only when its current state differs. Empty and literal
/// `_` keywords are placeholders and never touched.
///
/// Returns whether the bag changed.
pub fn set_keyword(bag: &mut dyn PropertyBag, keyword: &str, value: bool) -> bool {
    if keyword.is_empty() || keyword == "_" || bag.is_keyword_enabled(keyword) == value {
        return false;
    }
    if value {
        bag.enable_keyword(keyword);
    } else {
        bag.disable_keyword(keyword);
    }
    true
}

/// A rule mapping one property to shader-compiler keyword state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    /// Property whose value selects the keyword state.
    pub property: String,
    /// Optional gating property; when falsy, every keyword is forced off.
    pub gate: Option<String>,
    pub kind: RuleKind,
}

/// The two rule shapes. The set is closed: every consumer matches
/// exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// One keyword, on iff the property clears the epsilon.
    Bool { keyword: String },
    /// A deduplicated keyword list and the raw-index remap table into it.
    Enum {
        keywords: Vec<String>,
        remap: Vec<usize>,
    },
}

impl KeywordRule {
    /// Boolean rule: `keyword` follows the truthiness of `property`.
    pub fn bool(property: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            gate: None,
            kind: RuleKind::Bool {
                keyword: keyword.into(),
            },
        }
    }

    /// Enumerated rule over raw keyword labels, duplicates allowed.
    ///
    /// Duplicates collapse into one keyword; the remap table sends every raw
    /// enum index to the first occurrence in the deduplicated list.
    pub fn enumerated<I, S>(property: impl Into<String>, raw_keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keywords: Vec<String> = Vec::new();
        let mut remap: Vec<usize> = Vec::new();
        for raw in raw_keywords {
            let raw = raw.into();
            match keywords.iter().position(|k| *k == raw) {
                Some(idx) => remap.push(idx),
                None => {
                    keywords.push(raw);
                    remap.push(keywords.len() - 1);
                }
            }
        }
        Self {
            property: property.into(),
            gate: None,
            kind: RuleKind::Enum { keywords, remap },
        }
    }

    /// Gate every keyword of this rule behind a boolean property.
    pub fn gated(mut self, gate: impl Into<String>) -> Self {
        self.gate = Some(gate.into());
        self
    }

    /// Apply the rule to a bag. Idempotent: keywords already in the target
    /// state are not touched. Returns whether anything changed.
    pub fn apply(&self, bag: &mut dyn PropertyBag) -> bool {
        let gate_open = self.gate_open(bag);
        match &self.kind {
            RuleKind::Bool { keyword } => {
                let value = is_property_true(bag.float_or(&self.property, 0.0));
                set_keyword(bag, keyword, gate_open && value)
            }
            RuleKind::Enum { keywords, remap } => {
                let raw = bag.int_or(&self.property, -1);
                let selected = usize::try_from(raw)
                    .ok()
                    .filter(|v| *v < remap.len())
                    .map(|v| remap[v]);
                let mut changed = false;
                for (idx, keyword) in keywords.iter().enumerate() {
                    changed |= set_keyword(bag, keyword, gate_open && selected == Some(idx));
                }
                changed
            }
        }
    }

    fn gate_open(&self, bag: &dyn PropertyBag) -> bool {
        match &self.gate {
            Some(gate) => is_property_true(bag.float_or(gate, 0.0)),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_core::MemoryBag;

    fn bag() -> MemoryBag {
        MemoryBag::new("UnlitWF/UnToon_Opaque")
    }

    #[test]
    fn epsilon_truthiness() {
        assert!(!is_property_true(0.0));
        assert!(!is_property_true(0.0005));
        assert!(!is_property_true(-0.0005));
        assert!(is_property_true(0.01));
        assert!(is_property_true(-0.01));
    }

    #[test]
    fn bool_rule_follows_property() {
        let rule = KeywordRule::bool("_CL_Enable", "_CL_ENABLE");
        let mut bag = bag();

        bag.set_float("_CL_Enable", 0.0005);
        assert!(!rule.apply(&mut bag));
        assert!(!bag.is_keyword_enabled("_CL_ENABLE"));

        bag.set_float("_CL_Enable", 0.01);
        assert!(rule.apply(&mut bag));
        assert!(bag.is_keyword_enabled("_CL_ENABLE"));

        // Unchanged input: no report, no toggle.
        assert!(!rule.apply(&mut bag));
        assert!(bag.is_keyword_enabled("_CL_ENABLE"));
    }

    #[test]
    fn bool_rule_gate_forces_off() {
        let rule = KeywordRule::bool("_TS_Shade", "_TS_SHADE_ON").gated("_TS_Enable");
        let mut bag = bag();
        bag.set_float("_TS_Shade", 1.0);

        bag.set_float("_TS_Enable", 0.0);
        assert!(!rule.apply(&mut bag));
        assert!(!bag.is_keyword_enabled("_TS_SHADE_ON"));

        bag.set_float("_TS_Enable", 1.0);
        assert!(rule.apply(&mut bag));
        assert!(bag.is_keyword_enabled("_TS_SHADE_ON"));
    }

    #[test]
    fn enum_rule_dedup_and_remap() {
        let rule = KeywordRule::enumerated("_CH_Mode", ["A", "B", "A", "C"]);
        let RuleKind::Enum { keywords, remap } = &rule.kind else {
            panic!("expected enum kind");
        };
        assert_eq!(keywords, &["A", "B", "C"]);
        assert_eq!(remap, &[0, 1, 0, 2]);
    }

    #[test]
    fn enum_rule_idempotent_on_unique_input() {
        let rule = KeywordRule::enumerated("_CH_Mode", ["X", "Y", "Z"]);
        let RuleKind::Enum { remap, .. } = &rule.kind else {
            panic!("expected enum kind");
        };
        assert_eq!(remap, &[0, 1, 2]);
    }

    #[test]
    fn enum_rule_selects_through_remap() {
        let rule = KeywordRule::enumerated("_CH_Mode", ["A", "B", "A", "C"]);
        let mut bag = bag();

        // Raw index 2 is the second occurrence of "A".
        bag.set_int("_CH_Mode", 2);
        assert!(rule.apply(&mut bag));
        assert!(bag.is_keyword_enabled("A"));
        assert!(!bag.is_keyword_enabled("B"));
        assert!(!bag.is_keyword_enabled("C"));

        bag.set_int("_CH_Mode", 3);
        assert!(rule.apply(&mut bag));
        assert!(!bag.is_keyword_enabled("A"));
        assert!(bag.is_keyword_enabled("C"));
    }

    #[test]
    fn enum_rule_out_of_range_disables_all() {
        let rule = KeywordRule::enumerated("_CH_Mode", ["A", "B"]);
        let mut bag = bag();
        bag.set_int("_CH_Mode", 0);
        rule.apply(&mut bag);
        assert!(bag.is_keyword_enabled("A"));

        bag.set_int("_CH_Mode", 5);
        assert!(rule.apply(&mut bag));
        assert!(!bag.is_keyword_enabled("A"));
        assert!(!bag.is_keyword_enabled("B"));

        bag.set_int("_CH_Mode", -1);
        assert!(!rule.apply(&mut bag));
        assert!(!bag.is_keyword_enabled("A"));
    }

    #[test]
    fn placeholder_keywords_never_touched() {
        let mut bag = bag();
        assert!(!set_keyword(&mut bag, "_", true));
        assert!(!set_keyword(&mut bag, "", true));
        assert!(!bag.is_keyword_enabled("_"));
    }

    #[test]
    fn missing_property_is_false() {
        let rule = KeywordRule::bool("_NoSuch_Enable", "_NOSUCH_ENABLE");
        let mut bag = bag();
        assert!(!rule.apply(&mut bag));
        assert!(!bag.is_keyword_enabled("_NOSUCH_ENABLE"));
    }
}
