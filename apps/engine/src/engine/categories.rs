//! Category Analyzer — aggregates ranked results into a fixed taxonomy
//! of named career categories.

use serde::{Deserialize, Serialize};

use crate::engine::ranking::MatchResult;

/// The fixed category taxonomy. A career belongs to a category iff any
/// keyword appears as a case-insensitive substring of its title; a
/// career may land in zero, one, or several categories.
const CATEGORIES: &[(&str, &[&str])] = &[
    ("Technology", &["software", "data", "cybersecurity", "engineer", "developer"]),
    ("Business", &["marketing", "financial", "product", "manager", "business"]),
    ("Healthcare", &["healthcare", "medical", "health", "clinical"]),
    ("Creative", &["design", "ux", "ui", "creative", "artist"]),
    ("Sciences", &["scientist", "research", "environmental", "biology", "chemistry"]),
];

/// A category's rounded mean compatibility score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: u32,
}

/// Scores each taxonomy category as the rounded mean of its member
/// careers' compatibility scores; empty categories score 0. The output
/// is sorted descending, ties keeping taxonomy declaration order
/// (stable sort).
pub fn analyze_categories(ranked: &[MatchResult]) -> Vec<CategoryScore> {
    let mut scores: Vec<CategoryScore> = CATEGORIES
        .iter()
        .map(|(name, keywords)| {
            let member_scores: Vec<u32> = ranked
                .iter()
                .filter(|result| {
                    let title = result.career.title.to_lowercase();
                    keywords.iter().any(|kw| title.contains(kw))
                })
                .map(|result| result.compatibility_score)
                .collect();

            let score = if member_scores.is_empty() {
                0
            } else {
                let sum: u32 = member_scores.iter().sum();
                (sum as f64 / member_scores.len() as f64).round() as u32
            };

            CategoryScore {
                category: name.to_string(),
                score,
            }
        })
        .collect();

    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores
}
