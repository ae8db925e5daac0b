//! User profile model supplied by the presentation layer.

use serde::{Deserialize, Serialize};

/// Scale on which `UserProfile::academic_performance` was collected.
///
/// The catalog speaks 4.0; a 10.0-scale value is converted with
/// `gpa / 10 * 4`. This is the single declared conversion — no other
/// normalization is supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GpaScale {
    #[default]
    #[serde(rename = "4.0")]
    FourPoint,
    #[serde(rename = "10.0")]
    TenPoint,
}

/// Profile assembled from the upstream form. Minimum selection counts
/// (≥2 skills, ≥1 interest, ≥1 subject) are enforced upstream; the
/// engine degrades gracefully on empty collections instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    pub academic_performance: f64,
    #[serde(default)]
    pub gpa_scale: GpaScale,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

impl UserProfile {
    /// Academic performance on the canonical 4.0 scale, clamped to [0, 4].
    pub fn normalized_gpa(&self) -> f64 {
        let gpa = match self.gpa_scale {
            GpaScale::FourPoint => self.academic_performance,
            GpaScale::TenPoint => self.academic_performance / 10.0 * 4.0,
        };
        gpa.clamp(0.0, 4.0)
    }
}
