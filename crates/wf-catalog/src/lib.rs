//! The variant catalog: relational queries over a family of generated
//! shader variants, for building selection menus.
//!
//! A catalog is scoped to one render pipeline at construction (the active
//! pipeline is an injected context, not computed here). Queries group the
//! descriptors along two distinct equivalence relations: same variant
//! (family + variant) and same render type (family + render type).

use std::collections::HashSet;

use indexmap::map::Entry;
use indexmap::IndexMap;
use wf_core::ShaderVariant;

/// Variant whose render types are never offered as alternates.
const CUSTOM_VARIANT: &str = "Custom";

/// Descriptors of the active render pipeline, queryable by family, variant,
/// and render type.
#[derive(Debug, Clone, Default)]
pub struct VariantCatalog {
    entries: Vec<ShaderVariant>,
}

impl VariantCatalog {
    /// Build a catalog from the full descriptor list, keeping only the
    /// active pipeline's entries in input order.
    pub fn new<I>(descriptors: I, render_pipeline: &str) -> Self
    where
        I: IntoIterator<Item = ShaderVariant>,
    {
        Self {
            entries: descriptors
                .into_iter()
                .filter(|d| d.render_pipeline == render_pipeline)
                .collect(),
        }
    }

    pub fn entries(&self) -> &[ShaderVariant] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First descriptor with the given shader name.
    pub fn find_by_name(&self, name: &str) -> Option<&ShaderVariant> {
        self.entries.iter().find(|v| v.name == name)
    }

    /// One descriptor per family: the representative when one is marked,
    /// otherwise the first in input order.
    pub fn family_list(&self) -> Vec<&ShaderVariant> {
        let mut families: IndexMap<&str, &ShaderVariant> = IndexMap::new();
        for variant in &self.entries {
            match families.entry(variant.family.as_str()) {
                Entry::Occupied(mut entry) => {
                    if variant.represent && !entry.get().represent {
                        entry.insert(variant);
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(variant);
                }
            }
        }
        families.into_values().collect()
    }

    /// All descriptors sharing (family, render type) with `reference`.
    pub fn variant_list(&self, reference: Option<&ShaderVariant>) -> Vec<&ShaderVariant> {
        let Some(r) = reference else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|v| v.family == r.family && v.render_type == r.render_type)
            .collect()
    }

    /// As [`variant_list`](Self::variant_list), plus the same-family
    /// descriptors whose variant is not already covered by the primary list.
    pub fn variant_list_with_other(
        &self,
        reference: Option<&ShaderVariant>,
    ) -> (Vec<&ShaderVariant>, Vec<&ShaderVariant>) {
        let primary = self.variant_list(reference);
        let Some(r) = reference else {
            return (primary, Vec::new());
        };
        let covered: HashSet<&str> = primary.iter().map(|v| v.variant.as_str()).collect();
        let other = self
            .entries
            .iter()
            .filter(|v| v.family == r.family && !covered.contains(v.variant.as_str()))
            .collect();
        (primary, other)
    }

    /// All descriptors sharing (family, variant) with `reference`.
    pub fn render_type_list(&self, reference: Option<&ShaderVariant>) -> Vec<&ShaderVariant> {
        let Some(r) = reference else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|v| v.family == r.family && v.variant == r.variant)
            .collect()
    }

    /// As [`render_type_list`](Self::render_type_list), plus the same-family
    /// descriptors (Custom variants excluded) whose render type is not
    /// already covered by the primary list.
    pub fn render_type_list_with_other(
        &self,
        reference: Option<&ShaderVariant>,
    ) -> (Vec<&ShaderVariant>, Vec<&ShaderVariant>) {
        let primary = self.render_type_list(reference);
        let Some(r) = reference else {
            return (primary, Vec::new());
        };
        let covered: HashSet<&str> = primary.iter().map(|v| v.render_type.as_str()).collect();
        let other = self
            .entries
            .iter()
            .filter(|v| {
                v.family == r.family
                    && v.variant != CUSTOM_VARIANT
                    && !covered.contains(v.render_type.as_str())
            })
            .collect();
        (primary, other)
    }
}
