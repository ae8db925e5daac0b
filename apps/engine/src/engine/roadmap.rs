//! Roadmap Generator — short/medium/long-term action plans for the
//! chosen career.
//!
//! Each horizon has five fixed sentence templates. Slot `i` substitutes,
//! in priority order: the i-th missing skill, else the career's own
//! skill at the same index, else its interest at the same index, else a
//! generic phrase. Output is fully deterministic.

use serde::{Deserialize, Serialize};

use crate::engine::gaps::SkillGapResult;
use crate::engine::ranking::MatchResult;

const ITEMS_PER_HORIZON: usize = 5;

const GENERIC_FOCUS: &str = "your core professional skills";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningRoadmap {
    /// 0–6 months.
    pub short_term: Vec<String>,
    /// 6–12 months.
    pub medium_term: Vec<String>,
    /// 1–3 years.
    pub long_term: Vec<String>,
}

pub fn generate_roadmap(top_match: &MatchResult, gaps: &SkillGapResult) -> LearningRoadmap {
    let title = &top_match.career.title;
    let focus = |slot: usize| focus_for_slot(top_match, gaps, slot);

    let short_term = vec![
        format!("Take an introductory online course in {}.", focus(0)),
        format!(
            "Build a small practice project that exercises {}.",
            focus(1)
        ),
        format!(
            "Join a community or forum where {} professionals share their work.",
            title
        ),
        format!(
            "Arrange an informational interview with a working {}.",
            title
        ),
        format!(
            "Set a weekly study schedule focused on {} and track your progress.",
            focus(4)
        ),
    ];

    let medium_term = vec![
        format!("Earn a recognized certification covering {}.", focus(0)),
        format!(
            "Contribute to a volunteer or open project that relies on {}.",
            focus(1)
        ),
        format!("Create a portfolio piece that demonstrates {}.", focus(2)),
        format!("Attend a workshop or meetup centered on {}.", focus(3)),
        format!("Find a mentor who works as a {}.", title),
    ];

    let long_term = vec![
        format!(
            "Apply for internships or entry-level positions as a {}.",
            title
        ),
        format!("Develop advanced depth in {}.", focus(1)),
        format!(
            "Take the lead on a project that depends on {}.",
            focus(2)
        ),
        format!(
            "Grow a professional network within the {} field.",
            title
        ),
        format!(
            "Reassess your progress each year and keep {} up to date.",
            focus(4)
        ),
    ];

    LearningRoadmap {
        short_term,
        medium_term,
        long_term,
    }
}

/// Focus term for template slot `slot`: missing skill first, then the
/// career's own vocabulary at the parallel index, then a generic phrase.
fn focus_for_slot(top_match: &MatchResult, gaps: &SkillGapResult, slot: usize) -> String {
    gaps.missing_skills
        .get(slot)
        .or_else(|| top_match.career.required_skills.get(slot))
        .or_else(|| top_match.career.related_interests.get(slot))
        .cloned()
        .unwrap_or_else(|| GENERIC_FOCUS.to_string())
}
