//! Priority ordering over shader asset paths.
//!
//! Candidates sort by a six-part composite key: suite-folder paths before
//! anything else, `Packages` before `Assets`, shallower parents first, then
//! parent+folder lexicographic, tail length, tail lexicographic. Distinct
//! paths can never tie on all six keys, so the order is deterministic.

use std::cmp::Ordering;

use wf_core::CandidatePath;

/// A candidate classified for ordering.
#[derive(Debug, Clone)]
pub(crate) struct RankedPath {
    candidate: CandidatePath,
    is_match: bool,
    /// 0 for `Packages/`, 1 otherwise.
    root_rank: u8,
    /// Intermediate segments between the root and the suite folder, in
    /// `/seg/seg` form; empty when unmatched.
    parent: String,
    /// The suite folder segment; empty when unmatched.
    folder: String,
    /// Path remainder below the folder; the whole path when unmatched.
    tail: String,
}

impl RankedPath {
    pub(crate) fn new(candidate: CandidatePath) -> Self {
        let root_rank = if candidate.path.starts_with("Packages/") {
            0
        } else {
            1
        };
        match classify(&candidate.path) {
            Some((parent, folder, tail)) => Self {
                candidate,
                is_match: true,
                root_rank,
                parent,
                folder,
                tail,
            },
            None => Self {
                tail: candidate.path.clone(),
                candidate,
                is_match: false,
                root_rank,
                parent: String::new(),
                folder: String::new(),
            },
        }
    }

    pub(crate) fn into_candidate(self) -> CandidatePath {
        self.candidate
    }

    fn parent_depth(&self) -> usize {
        self.parent.matches('/').count()
    }

    fn parent_and_folder(&self) -> String {
        format!("{}/{}", self.parent, self.folder)
    }
}

impl Ord for RankedPath {
    fn cmp(&self, other: &Self) -> Ordering {
        // Matched paths sort ahead of unmatched ones.
        other
            .is_match
            .cmp(&self.is_match)
            .then_with(|| self.root_rank.cmp(&other.root_rank))
            .then_with(|| self.parent_depth().cmp(&other.parent_depth()))
            .then_with(|| self.parent_and_folder().cmp(&other.parent_and_folder()))
            .then_with(|| self.tail.len().cmp(&other.tail.len()))
            .then_with(|| self.tail.cmp(&other.tail))
    }
}

impl PartialOrd for RankedPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankedPath {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedPath {}

/// Split a path into (parent, folder, tail) around the deepest suite-folder
/// segment. The path must start at a known asset root and keep at least one
/// (possibly empty) segment below the folder.
fn classify(path: &str) -> Option<(String, String, String)> {
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 3 || !matches!(segments[0], "Packages" | "Assets") {
        return None;
    }
    let folder_idx = (1..segments.len() - 1)
        .rev()
        .find(|&i| is_suite_folder(segments[i]))?;
    let parent: String = segments[1..folder_idx]
        .iter()
        .map(|s| format!("/{}", s))
        .collect();
    let folder = segments[folder_idx].to_string();
    let tail = segments[folder_idx + 1..].join("/");
    Some((parent, folder, tail))
}

/// `Unlit_?WF_?Shader` followed by an optional ASCII-alphabetic run.
fn is_suite_folder(segment: &str) -> bool {
    fn after_shader(segment: &str) -> Option<&str> {
        let rest = segment.strip_prefix("Unlit")?;
        let rest = rest.strip_prefix('_').unwrap_or(rest);
        let rest = rest.strip_prefix("WF")?;
        let rest = rest.strip_prefix('_').unwrap_or(rest);
        rest.strip_prefix("Shader")
    }
    after_shader(segment).is_some_and(|rest| rest.chars().all(|c| c.is_ascii_alphabetic()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(path: &str) -> RankedPath {
        RankedPath::new(CandidatePath::new(path, "UnlitWF/UnToon_Opaque"))
    }

    #[test]
    fn suite_folder_spellings() {
        assert!(is_suite_folder("Unlit_WF_ShaderSuite"));
        assert!(is_suite_folder("UnlitWFShader"));
        assert!(is_suite_folder("Unlit_WFShaderX"));
        assert!(is_suite_folder("UnlitWF_Shader"));

        assert!(!is_suite_folder("Unlit_WF_Shader2"));
        assert!(!is_suite_folder("UnlitWF"));
        assert!(!is_suite_folder("WF_ShaderSuite"));
        assert!(!is_suite_folder("unlit_wf_shadersuite"));
    }

    #[test]
    fn classify_picks_the_deepest_suite_folder() {
        let r = ranked("Assets/vendor/Unlit_WF_ShaderSuite/sub/Unlit_WF_ShaderSuite/a.shader");
        assert!(r.is_match);
        assert_eq!(r.parent, "/vendor/Unlit_WF_ShaderSuite/sub");
        assert_eq!(r.folder, "Unlit_WF_ShaderSuite");
        assert_eq!(r.tail, "a.shader");
    }

    #[test]
    fn classify_requires_known_root_and_tail() {
        assert!(!ranked("Library/Unlit_WF_ShaderSuite/a.shader").is_match);
        assert!(!ranked("Assets/Unlit_WF_ShaderSuite").is_match);
        let r = ranked("Temp/whatever.shader");
        assert_eq!(r.tail, "Temp/whatever.shader");
    }

    #[test]
    fn matched_before_unmatched() {
        let a = ranked("Assets/Unlit_WF_ShaderSuite/a.shader");
        let b = ranked("Assets/Elsewhere/a.shader");
        assert!(a < b);
    }

    #[test]
    fn packages_before_assets() {
        let packages = ranked("Packages/x/Unlit_WF_ShaderBar/b.shader");
        let assets = ranked("Assets/Foo/Unlit_WF_ShaderBar/a.shader");
        assert!(packages < assets);
    }

    #[test]
    fn shallower_parent_first() {
        let shallow = ranked("Assets/Unlit_WF_ShaderSuite/a.shader");
        let deep = ranked("Assets/third_party/Unlit_WF_ShaderSuite/a.shader");
        assert!(shallow < deep);
    }

    #[test]
    fn shorter_tail_breaks_remaining_ties() {
        let short = ranked("Assets/Unlit_WF_ShaderSuite/a.shader");
        let long = ranked("Assets/Unlit_WF_ShaderSuite/sub/a.shader");
        assert!(short < long);
    }
}
