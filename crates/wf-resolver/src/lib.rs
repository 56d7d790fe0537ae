//! Shader candidate resolution.
//!
//! When several shader assets carry the same symbolic name across asset
//! roots, one canonical candidate is picked by a deterministic priority
//! ordering (see [`rank`]). Resolution itself never fails: zero candidates
//! yield [`Resolution::NotFound`], and ambiguity is an advisory carried in
//! the result, not an error.

mod rank;

use rank::RankedPath;
use wf_core::{CandidatePath, NAMESPACE_PREFIX};

/// Outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one candidate matched.
    Unique(CandidatePath),
    /// Several equally-named candidates; `chosen` is the deterministic
    /// top-priority pick, `rejected` the rest in priority order.
    Ambiguous {
        chosen: CandidatePath,
        rejected: Vec<CandidatePath>,
    },
    NotFound,
}

impl Resolution {
    /// The picked candidate, if any.
    pub fn candidate(&self) -> Option<&CandidatePath> {
        match self {
            Resolution::Unique(c) => Some(c),
            Resolution::Ambiguous { chosen, .. } => Some(chosen),
            Resolution::NotFound => None,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Resolution::Ambiguous { .. })
    }
}

/// Resolve a symbolic shader name against the candidates reported by the
/// asset index.
///
/// Names outside the suite namespace go through a plain first-match lookup;
/// only suite names get the de-duplicating priority sort.
pub fn resolve(name: &str, candidates: &[CandidatePath]) -> Resolution {
    if name.trim().is_empty() {
        return Resolution::NotFound;
    }
    if !name.starts_with(NAMESPACE_PREFIX) {
        return match candidates.iter().find(|c| c.shader_name == name) {
            Some(found) => Resolution::Unique(found.clone()),
            None => Resolution::NotFound,
        };
    }

    let mut ranked: Vec<RankedPath> = candidates
        .iter()
        .filter(|c| c.shader_name == name)
        .map(|c| RankedPath::new(c.clone()))
        .collect();
    ranked.sort();

    let mut ordered: Vec<CandidatePath> = ranked.into_iter().map(RankedPath::into_candidate).collect();
    match ordered.len() {
        0 => Resolution::NotFound,
        1 => Resolution::Unique(ordered.remove(0)),
        _ => {
            let chosen = ordered.remove(0);
            Resolution::Ambiguous {
                chosen,
                rejected: ordered,
            }
        }
    }
}
