//! Compatibility Scorer — computes a 0–100 fit estimate and the
//! human-readable reasons for one (profile, career) pair.
//!
//! Factor caps: skills 40, interests 30, subjects 10, GPA bonus 10.
//! The caps total 90; scores are still reported on a 0–100 axis. This
//! is the published convention and is pinned by tests — rescaling to
//! 100 must be a deliberate, visible change.

use serde::{Deserialize, Serialize};

use crate::engine::matching::matched_terms;
use crate::models::{CareerRecord, UserProfile};

/// Per-factor score caps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FactorWeights {
    pub skills: f64,
    pub interests: f64,
    pub subjects: f64,
    pub gpa_bonus: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            skills: 40.0,
            interests: 30.0,
            subjects: 10.0,
            gpa_bonus: 10.0,
        }
    }
}

impl FactorWeights {
    /// Maximum reachable raw score under these caps.
    pub fn max_total(&self) -> f64 {
        self.skills + self.interests + self.subjects + self.gpa_bonus
    }
}

/// Full scorer output for one (profile, career) pair.
///
/// `score` is the unrounded factor sum; rounding happens exactly once,
/// when the ranker builds the final `MatchResult`. The matched-term
/// lists are explicit fields so downstream analysis never has to parse
/// the reason prose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Compatibility {
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub matched_interests: Vec<String>,
    pub matched_subjects: Vec<String>,
    pub gpa_met: bool,
    pub reasons: Vec<String>,
}

/// Scores one career against a profile.
///
/// Each set factor contributes `matched / max(total, 1) * cap`; the
/// `max(..., 1)` guard makes empty profile collections contribute 0
/// instead of dividing by zero. The GPA bonus is all-or-nothing against
/// the career's 4.0-scale minimum. Reasons are appended in fixed factor
/// order: skills, interests, subjects, GPA (the GPA sentence is always
/// present, in one of two forms).
pub fn score_compatibility(
    profile: &UserProfile,
    career: &CareerRecord,
    weights: &FactorWeights,
) -> Compatibility {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    let matched_skills = matched_terms(&profile.skills, &career.required_skills);
    score += set_factor(matched_skills.len(), profile.skills.len(), weights.skills);
    if !matched_skills.is_empty() {
        reasons.push(format!(
            "Your skills in {} align with this career.",
            list_terms(&matched_skills)
        ));
    }

    let matched_interests = matched_terms(&profile.interests, &career.related_interests);
    score += set_factor(
        matched_interests.len(),
        profile.interests.len(),
        weights.interests,
    );
    if !matched_interests.is_empty() {
        reasons.push(format!(
            "Your interests in {} match well with this career.",
            list_terms(&matched_interests)
        ));
    }

    let matched_subjects = matched_terms(&profile.subjects, &career.academic.preferred_subjects);
    score += set_factor(
        matched_subjects.len(),
        profile.subjects.len(),
        weights.subjects,
    );
    if !matched_subjects.is_empty() {
        reasons.push(format!(
            "Your academic background in {} is beneficial for this role.",
            list_terms(&matched_subjects)
        ));
    }

    let gpa_met = profile.normalized_gpa() >= career.academic.min_gpa;
    if gpa_met {
        score += weights.gpa_bonus;
        reasons.push(
            "Your academic performance meets or exceeds the typical requirements for this career."
                .to_string(),
        );
    } else {
        reasons.push(
            "This career typically requires a stronger academic performance, but other factors may compensate."
                .to_string(),
        );
    }

    Compatibility {
        score,
        matched_skills,
        matched_interests,
        matched_subjects,
        gpa_met,
        reasons,
    }
}

fn set_factor(matched: usize, total: usize, cap: f64) -> f64 {
    matched as f64 / total.max(1) as f64 * cap
}

/// Renders up to the first three matched terms, with ", etc." when more
/// matched.
fn list_terms(terms: &[String]) -> String {
    let head = terms
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if terms.len() > 3 {
        format!("{head}, etc.")
    } else {
        head
    }
}
