//! The property-bag contract standing in for a material, plus an in-memory
//! implementation for tests and headless tooling.

use indexmap::{IndexMap, IndexSet};

/// Lighting contribution derived from the emissive toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightingFlag {
    #[default]
    None,
    BakedEmissive,
}

/// A bag of shader properties and compiler keywords.
///
/// Missing properties never fail: value accessors return `None`, and the
/// `_or` forms substitute a caller-supplied default.
pub trait PropertyBag {
    /// The name of the shader this bag is bound to.
    fn shader_name(&self) -> &str;

    fn has_property(&self, name: &str) -> bool;

    fn float_value(&self, name: &str) -> Option<f32>;

    fn int_value(&self, name: &str) -> Option<i32>;

    /// Property names declared by the bag's shader schema.
    fn property_names(&self) -> Vec<String>;

    fn is_keyword_enabled(&self, keyword: &str) -> bool;

    fn enable_keyword(&mut self, keyword: &str);

    fn disable_keyword(&mut self, keyword: &str);

    fn lighting_flag(&self) -> LightingFlag;

    fn set_lighting_flag(&mut self, flag: LightingFlag);

    fn float_or(&self, name: &str, default: f32) -> f32 {
        self.float_value(name).unwrap_or(default)
    }

    fn int_or(&self, name: &str, default: i32) -> i32 {
        self.int_value(name).unwrap_or(default)
    }
}

/// In-memory property bag.
///
/// Properties are stored as floats or ints; the integer accessor truncates a
/// float-backed property and vice versa, the way material stores behave.
#[derive(Debug, Clone, Default)]
pub struct MemoryBag {
    shader_name: String,
    floats: IndexMap<String, f32>,
    ints: IndexMap<String, i32>,
    keywords: IndexSet<String>,
    lighting: LightingFlag,
}

impl MemoryBag {
    pub fn new(shader_name: impl Into<String>) -> Self {
        Self {
            shader_name: shader_name.into(),
            ..Self::default()
        }
    }

    pub fn set_float(&mut self, name: impl Into<String>, value: f32) -> &mut Self {
        self.floats.insert(name.into(), value);
        self
    }

    pub fn set_int(&mut self, name: impl Into<String>, value: i32) -> &mut Self {
        self.ints.insert(name.into(), value);
        self
    }

    /// Enabled keywords, in enable order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }
}

impl PropertyBag for MemoryBag {
    fn shader_name(&self) -> &str {
        &self.shader_name
    }

    fn has_property(&self, name: &str) -> bool {
        self.floats.contains_key(name) || self.ints.contains_key(name)
    }

    fn float_value(&self, name: &str) -> Option<f32> {
        self.floats
            .get(name)
            .copied()
            .or_else(|| self.ints.get(name).map(|v| *v as f32))
    }

    fn int_value(&self, name: &str) -> Option<i32> {
        self.ints
            .get(name)
            .copied()
            .or_else(|| self.floats.get(name).map(|v| *v as i32))
    }

    fn property_names(&self) -> Vec<String> {
        self.floats
            .keys()
            .chain(self.ints.keys())
            .cloned()
            .collect()
    }

    fn is_keyword_enabled(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }

    fn enable_keyword(&mut self, keyword: &str) {
        self.keywords.insert(keyword.to_string());
    }

    fn disable_keyword(&mut self, keyword: &str) {
        self.keywords.shift_remove(keyword);
    }

    fn lighting_flag(&self) -> LightingFlag {
        self.lighting
    }

    fn set_lighting_flag(&mut self, flag: LightingFlag) {
        self.lighting = flag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_properties_fall_back_to_defaults() {
        let bag = MemoryBag::new("UnlitWF/UnToon_Opaque");
        assert!(!bag.has_property("_CL_Enable"));
        assert_eq!(bag.float_value("_CL_Enable"), None);
        assert_eq!(bag.float_or("_CL_Enable", 0.5), 0.5);
        assert_eq!(bag.int_or("_CL_Enable", -1), -1);
    }

    #[test]
    fn int_and_float_views_converge() {
        let mut bag = MemoryBag::new("UnlitWF/UnToon_Opaque");
        bag.set_float("_TS_Enable", 1.0);
        bag.set_int("_CH_Mode", 2);
        assert_eq!(bag.int_value("_TS_Enable"), Some(1));
        assert_eq!(bag.float_value("_CH_Mode"), Some(2.0));
    }

    #[test]
    fn keyword_toggles_round_trip() {
        let mut bag = MemoryBag::new("UnlitWF/UnToon_Opaque");
        assert!(!bag.is_keyword_enabled("_CL_ENABLE"));
        bag.enable_keyword("_CL_ENABLE");
        assert!(bag.is_keyword_enabled("_CL_ENABLE"));
        bag.disable_keyword("_CL_ENABLE");
        assert!(!bag.is_keyword_enabled("_CL_ENABLE"));
    }
}
