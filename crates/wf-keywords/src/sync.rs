//! The three-phase keyword synchronization pass over material batches.

use wf_core::{is_supported_shader, LightingFlag, PropertyBag};
use wf_parser::is_enable_toggle_property;

use crate::rules::KeywordRule;
use crate::table::RuleTable;

/// Deprecated keywords removed on sight.
const DELETE_KEYWORDS: [&str; 4] = [
    "_",
    "_ALPHATEST_ON",
    "_ALPHABLEND_ON",
    "_ALPHAPREMULTIPLY_ON",
];

/// Property driving the baked-emissive lighting flag.
const EMISSIVE_ENABLE_PROPERTY: &str = "_ES_Enable";

/// Applies the rule table (plus synthesized enable-toggle rules) to material
/// batches. Bags bound to shaders outside the suite are left untouched.
#[derive(Debug, Clone, Default)]
pub struct KeywordSynchronizer {
    rules: RuleTable,
}

impl KeywordSynchronizer {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Run one full pass over a batch. The deletion phase covers the whole
    /// batch before any rule is applied. Returns a changed flag per bag.
    pub fn sync_all<B: PropertyBag>(&self, bags: &mut [B]) -> Vec<bool> {
        let mut changed = vec![false; bags.len()];

        for (bag, changed) in bags.iter_mut().zip(changed.iter_mut()) {
            if is_supported_shader(bag.shader_name()) {
                *changed |= delete_deprecated_keywords(bag);
            }
        }

        for (bag, changed) in bags.iter_mut().zip(changed.iter_mut()) {
            if is_supported_shader(bag.shader_name()) {
                *changed |= self.apply_rules(bag);
                update_lighting_flag(bag);
            }
        }

        changed
    }

    /// Synchronize a single bag.
    pub fn sync(&self, bag: &mut dyn PropertyBag) -> bool {
        if !is_supported_shader(bag.shader_name()) {
            return false;
        }
        let mut changed = delete_deprecated_keywords(bag);
        changed |= self.apply_rules(bag);
        update_lighting_flag(bag);
        changed
    }

    fn apply_rules(&self, bag: &mut dyn PropertyBag) -> bool {
        let mut changed = false;
        for property in bag.property_names() {
            // An explicit rule takes priority over the naming convention.
            if let Some(rule) = self.rules.get(&property) {
                changed |= rule.apply(bag);
                continue;
            }
            if is_enable_toggle_property(&property) {
                let keyword = property.to_ascii_uppercase();
                changed |= KeywordRule::bool(property, keyword).apply(bag);
            }
        }
        changed
    }
}

fn delete_deprecated_keywords(bag: &mut dyn PropertyBag) -> bool {
    let mut changed = false;
    for keyword in DELETE_KEYWORDS {
        if bag.is_keyword_enabled(keyword) {
            bag.disable_keyword(keyword);
            changed = true;
        }
    }
    changed
}

/// Tie the lighting contribution to the emissive toggle, writing only on an
/// actual change.
fn update_lighting_flag(bag: &mut dyn PropertyBag) {
    if !bag.has_property(EMISSIVE_ENABLE_PROPERTY) {
        return;
    }
    let flag = if bag.int_or(EMISSIVE_ENABLE_PROPERTY, 0) != 0 {
        LightingFlag::BakedEmissive
    } else {
        LightingFlag::None
    };
    if bag.lighting_flag() != flag {
        bag.set_lighting_flag(flag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_core::MemoryBag;

    fn suite_bag() -> MemoryBag {
        MemoryBag::new("UnlitWF/UnToon_Opaque")
    }

    #[test]
    fn deletion_phase_removes_deny_listed_keywords() {
        let sync = KeywordSynchronizer::default();
        let mut bag = suite_bag();
        bag.enable_keyword("_ALPHATEST_ON");
        bag.enable_keyword("_ALPHABLEND_ON");
        bag.enable_keyword("_KEEP_ME");

        assert!(sync.sync(&mut bag));
        assert!(!bag.is_keyword_enabled("_ALPHATEST_ON"));
        assert!(!bag.is_keyword_enabled("_ALPHABLEND_ON"));
        assert!(bag.is_keyword_enabled("_KEEP_ME"));
    }

    #[test]
    fn unsupported_bags_are_skipped_entirely() {
        let sync = KeywordSynchronizer::default();
        let mut bag = MemoryBag::new("Standard");
        bag.enable_keyword("_ALPHATEST_ON");
        bag.set_float("_CL_Enable", 1.0);

        assert!(!sync.sync(&mut bag));
        assert!(bag.is_keyword_enabled("_ALPHATEST_ON"));
        assert!(!bag.is_keyword_enabled("_CL_ENABLE"));
    }

    #[test]
    fn enable_toggles_synthesize_keywords() {
        let sync = KeywordSynchronizer::default();
        let mut bag = suite_bag();
        bag.set_float("_CL_Enable", 1.0);
        bag.set_float("_TS_Enable", 0.0);
        bag.set_float("_CL_Color", 1.0);

        assert!(sync.sync(&mut bag));
        assert!(bag.is_keyword_enabled("_CL_ENABLE"));
        assert!(!bag.is_keyword_enabled("_TS_ENABLE"));
        // Non-toggle properties synthesize nothing.
        assert!(!bag.is_keyword_enabled("_CL_COLOR"));
    }

    #[test]
    fn explicit_rule_overrides_synthesis() {
        let mut rules = RuleTable::new();
        rules.insert(KeywordRule::bool("_CL_Enable", "_CL_CUSTOM"));
        let sync = KeywordSynchronizer::new(rules);

        let mut bag = suite_bag();
        bag.set_float("_CL_Enable", 1.0);
        assert!(sync.sync(&mut bag));
        assert!(bag.is_keyword_enabled("_CL_CUSTOM"));
        assert!(!bag.is_keyword_enabled("_CL_ENABLE"));
    }

    #[test]
    fn second_pass_reports_no_change() {
        let mut rules = RuleTable::new();
        rules.insert(
            KeywordRule::enumerated("_CH_Mode", ["_CH_A", "_CH_B"]).gated("_CH_Enable"),
        );
        let sync = KeywordSynchronizer::new(rules);

        let mut bag = suite_bag();
        bag.set_float("_CH_Enable", 1.0);
        bag.set_int("_CH_Mode", 1);
        bag.set_float("_CL_Enable", 1.0);

        assert!(sync.sync(&mut bag));
        assert!(!sync.sync(&mut bag));
        assert!(bag.is_keyword_enabled("_CH_B"));
        assert!(bag.is_keyword_enabled("_CL_ENABLE"));
    }

    #[test]
    fn emissive_toggle_drives_lighting_flag() {
        let sync = KeywordSynchronizer::default();
        let mut bag = suite_bag();
        bag.set_int("_ES_Enable", 1);
        sync.sync(&mut bag);
        assert_eq!(bag.lighting_flag(), LightingFlag::BakedEmissive);

        bag.set_int("_ES_Enable", 0);
        sync.sync(&mut bag);
        assert_eq!(bag.lighting_flag(), LightingFlag::None);
    }

    #[test]
    fn batch_pass_returns_per_bag_flags() {
        let sync = KeywordSynchronizer::default();
        let mut changed_bag = suite_bag();
        changed_bag.set_float("_CL_Enable", 1.0);
        let clean_bag = suite_bag();
        let foreign_bag = MemoryBag::new("Standard");

        let mut bags = [changed_bag, clean_bag, foreign_bag];
        let changed = sync.sync_all(&mut bags);
        assert_eq!(changed, [true, false, false]);

        // Whole batch is idempotent.
        let changed = sync.sync_all(&mut bags);
        assert_eq!(changed, [false, false, false]);
    }
}
