//! Career catalog data models.

use serde::{Deserialize, Serialize};

/// Growth outlook label attached to every career record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthOutlook {
    #[serde(rename = "Low")]
    Low,
    #[default]
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl std::fmt::Display for GrowthOutlook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GrowthOutlook::Low => "Low",
            GrowthOutlook::Moderate => "Moderate",
            GrowthOutlook::High => "High",
            GrowthOutlook::VeryHigh => "Very High",
        };
        f.write_str(label)
    }
}

/// Academic requirements for a career: a minimum GPA on the 4.0 scale
/// plus the subjects that feed the subject-match factor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademicRequirements {
    pub min_gpa: f64,
    pub preferred_subjects: Vec<String>,
}

/// One entry of the career catalog. Loaded once at startup and never
/// mutated afterwards.
///
/// List order is meaningful: `required_skills` order drives the
/// skill-gap display cap and the roadmap fallback ladder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub related_interests: Vec<String>,
    pub academic: AcademicRequirements,
    pub salary_range: String,
    pub growth_outlook: GrowthOutlook,
    pub work_environments: Vec<String>,
}
