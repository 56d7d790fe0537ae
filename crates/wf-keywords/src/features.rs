//! Shader feature descriptors and their registry.
//!
//! A feature is a labeled group of properties sharing a prefix, enabled by
//! its `_<PREFIX>_Enable` toggle. Labels are expected to be unique; a
//! duplicate registration is rejected with an advisory, never an error the
//! caller must stop for.

use smallvec::SmallVec;
use wf_core::{is_supported_shader, PropertyBag, RegistryError};

/// Predicate deciding whether a feature is active on a bag.
pub type FeaturePredicate = fn(&ShaderFeature, &dyn PropertyBag) -> bool;

/// One feature group of the suite.
#[derive(Clone)]
pub struct ShaderFeature {
    pub label: String,
    pub prefix: String,
    pub name: String,
    predicate: FeaturePredicate,
}

impl std::fmt::Debug for ShaderFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShaderFeature")
            .field("label", &self.label)
            .field("prefix", &self.prefix)
            .field("name", &self.name)
            .finish()
    }
}

fn default_predicate(feature: &ShaderFeature, bag: &dyn PropertyBag) -> bool {
    let toggle = format!("_{}_Enable", feature.prefix);
    bag.int_value(&toggle).is_some_and(|v| v != 0)
}

impl ShaderFeature {
    pub fn new(
        label: impl Into<String>,
        prefix: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            prefix: prefix.into(),
            name: name.into(),
            predicate: default_predicate,
        }
    }

    /// Override the enabled-predicate (features without a plain toggle).
    pub fn with_predicate(mut self, predicate: FeaturePredicate) -> Self {
        self.predicate = predicate;
        self
    }

    /// Whether the feature is active on the bag. Always false for bags
    /// outside the suite.
    pub fn is_enabled(&self, bag: &dyn PropertyBag) -> bool {
        if !is_supported_shader(bag.shader_name()) {
            return false;
        }
        (self.predicate)(self, bag)
    }
}

/// Registry of shader features, label-unique, registration order preserved.
#[derive(Debug, Clone, Default)]
pub struct FeatureRegistry {
    features: Vec<ShaderFeature>,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a feature. On a duplicate label the first registration wins
    /// and the rejected one is reported back as an advisory.
    pub fn register(&mut self, feature: ShaderFeature) -> Result<(), RegistryError> {
        if self.features.iter().any(|f| f.label == feature.label) {
            return Err(RegistryError::DuplicateLabel {
                label: feature.label,
            });
        }
        self.features.push(feature);
        Ok(())
    }

    pub fn features(&self) -> &[ShaderFeature] {
        &self.features
    }

    pub fn label_to_prefix(&self, label: &str) -> Option<&str> {
        self.features
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.prefix.as_str())
    }

    /// Map labels to their prefixes, dropping unknown labels and duplicates.
    pub fn labels_to_prefixes<'a, I>(&self, labels: I) -> SmallVec<[&str; 8]>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut prefixes: SmallVec<[&str; 8]> = SmallVec::new();
        for label in labels {
            if let Some(prefix) = self.label_to_prefix(label) {
                if !prefixes.contains(&prefix) {
                    prefixes.push(prefix);
                }
            }
        }
        prefixes
    }

    /// Features currently active on a bag, in registration order.
    pub fn enabled_features(&self, bag: &dyn PropertyBag) -> Vec<&ShaderFeature> {
        self.features.iter().filter(|f| f.is_enabled(bag)).collect()
    }
}
