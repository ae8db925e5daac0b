//! Insight Generator — recurring skills, growth outlook, and work
//! environments extracted from the top of the ranking.

use serde::{Deserialize, Serialize};

use crate::engine::ranking::MatchResult;
use crate::models::GrowthOutlook;

/// How many ranked entries feed the skill frequency count.
const SKILL_WINDOW: usize = 5;
/// How many ranked entries feed the environment union.
const ENVIRONMENT_WINDOW: usize = 3;
/// Maximum skills returned.
const TOP_SKILLS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerInsights {
    /// Most frequent required skills across the top matches, most
    /// frequent first; ties keep first-encountered order.
    pub top_skills: Vec<String>,
    /// Outlook of the single top match; `Moderate` when the list is empty.
    pub growth_outlook: GrowthOutlook,
    /// Deduplicated environment tags from the top matches, in first
    /// occurrence order.
    pub work_environments: Vec<String>,
}

pub fn generate_insights(ranked: &[MatchResult]) -> CareerInsights {
    // Order-preserving frequency count: a HashMap would scramble the
    // tie order, which is part of the contract. The window is tiny, so
    // linear scans are fine.
    let mut counts: Vec<(String, u32)> = Vec::new();
    for result in ranked.iter().take(SKILL_WINDOW) {
        for skill in &result.career.required_skills {
            match counts.iter_mut().find(|(name, _)| name == skill) {
                Some((_, count)) => *count += 1,
                None => counts.push((skill.clone(), 1)),
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1)); // stable: ties keep encounter order
    let top_skills = counts
        .into_iter()
        .take(TOP_SKILLS)
        .map(|(skill, _)| skill)
        .collect();

    let growth_outlook = ranked
        .first()
        .map(|result| result.career.growth_outlook)
        .unwrap_or_default();

    let mut work_environments: Vec<String> = Vec::new();
    for result in ranked.iter().take(ENVIRONMENT_WINDOW) {
        for tag in &result.career.work_environments {
            if !work_environments.contains(tag) {
                work_environments.push(tag.clone());
            }
        }
    }

    CareerInsights {
        top_skills,
        growth_outlook,
        work_environments,
    }
}
