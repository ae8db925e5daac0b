//! Waypoint — a deterministic, rule-based career recommendation engine.
//!
//! Matches a student profile (GPA, skills, interests, subjects) against
//! a fixed career catalog and produces a ranked, explained list of
//! matches plus derived analytics: category breakdown, recurring-skill
//! insights, skill gaps for the top match, and a templated learning
//! roadmap.
//!
//! Everything is a pure, synchronous function over immutable inputs; the
//! caller owns validation of form input and persistence of results.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod errors;
pub mod models;
pub mod report;

pub use catalog::{Catalog, INTEREST_OPTIONS, SKILL_OPTIONS, SUBJECT_OPTIONS};
pub use engine::categories::{analyze_categories, CategoryScore};
pub use engine::gaps::{analyze_skill_gaps, SkillGapResult};
pub use engine::insights::{generate_insights, CareerInsights};
pub use engine::ranking::{rank, rank_with_weights, MatchResult};
pub use engine::roadmap::{generate_roadmap, LearningRoadmap};
pub use engine::scoring::{score_compatibility, Compatibility, FactorWeights};
pub use errors::EngineError;
pub use models::{
    AcademicRequirements, CareerRecord, GpaScale, GrowthOutlook, UserProfile,
};
pub use report::{build_report, RecommendationReport};
