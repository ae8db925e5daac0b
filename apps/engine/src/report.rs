//! One-shot aggregation of every analysis the engine offers, shaped for
//! the presentation layer to serialize wholesale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::engine::categories::{analyze_categories, CategoryScore};
use crate::engine::gaps::{analyze_skill_gaps, SkillGapResult};
use crate::engine::insights::{generate_insights, CareerInsights};
use crate::engine::ranking::{rank, MatchResult};
use crate::engine::roadmap::{generate_roadmap, LearningRoadmap};
use crate::models::UserProfile;

/// Complete recommendation report for one profile.
///
/// `skill_gaps` and `roadmap` describe the top match only and are
/// `None` when the catalog produced no recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub recommendations: Vec<MatchResult>,
    pub categories: Vec<CategoryScore>,
    pub insights: CareerInsights,
    pub skill_gaps: Option<SkillGapResult>,
    pub roadmap: Option<LearningRoadmap>,
}

/// Runs the full pipeline: rank, then category analysis, insights, and
/// top-match gap/roadmap analysis.
pub fn build_report(profile: &UserProfile, catalog: &Catalog) -> RecommendationReport {
    let recommendations = rank(profile, catalog);
    let categories = analyze_categories(&recommendations);
    let insights = generate_insights(&recommendations);

    let (skill_gaps, roadmap) = match recommendations.first() {
        Some(top) => {
            let gaps = analyze_skill_gaps(top);
            let roadmap = generate_roadmap(top, &gaps);
            (Some(gaps), Some(roadmap))
        }
        None => (None, None),
    };

    info!(
        recommendations = recommendations.len(),
        top = recommendations.first().map(|r| r.career.id.as_str()),
        "recommendation report built"
    );

    RecommendationReport {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        recommendations,
        categories,
        insights,
        skill_gaps,
        roadmap,
    }
}
