//! Recommendation Ranker — scores a profile against every catalog entry
//! and sorts descending.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::engine::scoring::{score_compatibility, FactorWeights};
use crate::models::{CareerRecord, UserProfile};

/// One ranked recommendation. Never mutated after creation.
///
/// `matched_skills` is carried explicitly so the skill-gap analyzer
/// works from data, not from the reason prose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub career: CareerRecord,
    /// Rounded once, here, from the raw factor sum. Always in [0, 100].
    pub compatibility_score: u32,
    pub matched_skills: Vec<String>,
    pub reasons: Vec<String>,
}

/// Ranks every catalog career against the profile, descending by score.
///
/// The sort is stable: careers with equal scores keep their catalog
/// order. That property is part of the contract (ties resolve to the
/// catalog's own ordering) and is pinned by tests.
pub fn rank(profile: &UserProfile, catalog: &Catalog) -> Vec<MatchResult> {
    rank_with_weights(profile, catalog, &FactorWeights::default())
}

/// `rank` with explicit factor caps, for callers tuning the weighting.
pub fn rank_with_weights(
    profile: &UserProfile,
    catalog: &Catalog,
    weights: &FactorWeights,
) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = catalog
        .careers()
        .iter()
        .map(|career| {
            let compat = score_compatibility(profile, career, weights);
            MatchResult {
                career: career.clone(),
                compatibility_score: compat.score.round() as u32,
                matched_skills: compat.matched_skills,
                reasons: compat.reasons,
            }
        })
        .collect();

    // Vec::sort_by is stable; comparing b to a gives descending order
    // while equal scores retain catalog position.
    results.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));

    debug!(
        careers = results.len(),
        top = results.first().map(|r| r.career.id.as_str()),
        "ranked catalog against profile"
    );

    results
}
