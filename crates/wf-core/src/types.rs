//! Shared value types: candidate paths, variant descriptors, shader-name
//! predicates.

/// The substring marking a shader as belonging to the suite.
pub const SHADER_MARKER: &str = "UnlitWF";

/// The reserved shader-name namespace of the suite.
pub const NAMESPACE_PREFIX: &str = "UnlitWF/";

/// A shader asset candidate produced by the host asset index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidatePath {
    /// Project-relative asset path (`Assets/...` or `Packages/...`).
    pub path: String,
    /// The shader name loaded from the asset.
    pub shader_name: String,
}

impl CandidatePath {
    pub fn new(path: impl Into<String>, shader_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            shader_name: shader_name.into(),
        }
    }
}

/// One generated shader's coordinates in the suite's four-axis
/// classification, plus its resolvable name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShaderVariant {
    pub render_pipeline: String,
    pub family: String,
    pub variant: String,
    pub render_type: String,
    pub name: String,
    /// Preferred pick when several descriptors share (pipeline, family).
    pub represent: bool,
}

impl ShaderVariant {
    pub fn new(
        render_pipeline: impl Into<String>,
        family: impl Into<String>,
        variant: impl Into<String>,
        render_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            render_pipeline: render_pipeline.into(),
            family: family.into(),
            variant: variant.into(),
            render_type: render_type.into(),
            name: name.into(),
            represent: false,
        }
    }

    /// Mark this descriptor as the representative of its family.
    pub fn representative(mut self) -> Self {
        self.represent = true;
        self
    }

    /// Equivalence key for "same variant" grouping.
    pub fn variant_key(&self) -> (&str, &str, &str) {
        (&self.render_pipeline, &self.family, &self.variant)
    }

    /// Equivalence key for "same render type" grouping.
    pub fn render_type_key(&self) -> (&str, &str, &str) {
        (&self.render_pipeline, &self.family, &self.render_type)
    }

    pub fn same_variant(&self, other: &Self) -> bool {
        self.variant_key() == other.variant_key()
    }

    pub fn same_render_type(&self, other: &Self) -> bool {
        self.render_type_key() == other.render_type_key()
    }
}

/// Whether a shader name belongs to the suite.
pub fn is_supported_shader(shader_name: &str) -> bool {
    shader_name.contains(SHADER_MARKER)
}

/// Whether a suite shader is usable on mobile targets, judged by name.
pub fn is_mobile_supported_shader(shader_name: &str) -> bool {
    if !is_supported_shader(shader_name) {
        return false;
    }
    shader_name.contains("_Mobile_")
        || shader_name.contains("WF_UnToon_Hidden")
        || shader_name.contains("WF_DebugView")
}
