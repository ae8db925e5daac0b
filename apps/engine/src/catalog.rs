//! Career catalog: the fixed reference list of career records plus the
//! vocabulary lists the upstream form offers.
//!
//! The catalog is parsed and validated once at startup; malformed
//! records fail here with a descriptive error, never deep inside
//! scoring.

use std::path::Path;

use tracing::info;

use crate::errors::EngineError;
use crate::models::CareerRecord;

/// Builtin reference catalog, embedded at compile time.
const BUILTIN_CATALOG_JSON: &str = include_str!("../data/careers.json");

/// Skills offered by the profile form.
pub const SKILL_OPTIONS: &[&str] = &[
    "Programming",
    "Data Analysis",
    "Communication",
    "Problem Solving",
    "Design",
    "Marketing",
    "Leadership",
    "Project Management",
    "Research",
    "Technical Writing",
    "Mathematics",
    "Statistics",
    "Financial Analysis",
    "Critical Thinking",
    "Teamwork",
    "Public Speaking",
    "Creativity",
    "Organization",
    "Customer Service",
    "Strategic Planning",
];

/// Interests offered by the profile form.
pub const INTEREST_OPTIONS: &[&str] = &[
    "Technology",
    "Business",
    "Science",
    "Art & Design",
    "Healthcare",
    "Finance",
    "Education",
    "Environment",
    "Media & Communication",
    "Social Impact",
    "Engineering",
    "Mathematics",
    "Research",
    "Innovation",
    "Marketing",
    "Data",
    "Psychology",
    "Policy & Government",
    "Writing",
    "Entertainment",
];

/// Academic subjects offered by the profile form.
pub const SUBJECT_OPTIONS: &[&str] = &[
    "Computer Science",
    "Business",
    "Engineering",
    "Mathematics",
    "Statistics",
    "Psychology",
    "Biology",
    "Chemistry",
    "Economics",
    "Communications",
    "Design",
    "Education",
    "Environmental Science",
    "Finance",
    "Healthcare",
    "History",
    "Literature",
    "Marketing",
    "Physics",
    "Political Science",
];

/// Immutable, validated career catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    careers: Vec<CareerRecord>,
}

impl Catalog {
    /// Loads the builtin 10-career reference catalog.
    pub fn builtin() -> Result<Self, EngineError> {
        Self::from_json(BUILTIN_CATALOG_JSON)
    }

    /// Parses and validates a catalog from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let careers: Vec<CareerRecord> = serde_json::from_str(json)?;
        let catalog = Self::new(careers)?;
        info!(careers = catalog.len(), "career catalog loaded");
        Ok(catalog)
    }

    /// Loads a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validates an already-deserialized record list.
    pub fn new(careers: Vec<CareerRecord>) -> Result<Self, EngineError> {
        validate(&careers)?;
        Ok(Self { careers })
    }

    pub fn careers(&self) -> &[CareerRecord] {
        &self.careers
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    /// Looks up a career by its unique id.
    pub fn get(&self, id: &str) -> Option<&CareerRecord> {
        self.careers.iter().find(|c| c.id == id)
    }
}

fn validate(careers: &[CareerRecord]) -> Result<(), EngineError> {
    let mut seen_ids = std::collections::HashSet::new();

    for career in careers {
        if career.id.trim().is_empty() {
            return Err(EngineError::Catalog(
                "career record with empty id".to_string(),
            ));
        }
        if !seen_ids.insert(career.id.as_str()) {
            return Err(EngineError::Catalog(format!(
                "duplicate career id '{}'",
                career.id
            )));
        }
        if career.title.trim().is_empty() {
            return Err(EngineError::Catalog(format!(
                "career '{}' has an empty title",
                career.id
            )));
        }
        if career.required_skills.is_empty() {
            return Err(EngineError::Catalog(format!(
                "career '{}' lists no required skills",
                career.id
            )));
        }
        if !(0.0..=4.0).contains(&career.academic.min_gpa) {
            return Err(EngineError::Catalog(format!(
                "career '{}' has min_gpa {} outside the 4.0 scale",
                career.id, career.academic.min_gpa
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AcademicRequirements, GrowthOutlook};
    use std::io::Write;

    fn record(id: &str, title: &str, min_gpa: f64, skills: &[&str]) -> CareerRecord {
        CareerRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            related_interests: vec![],
            academic: AcademicRequirements {
                min_gpa,
                preferred_subjects: vec![],
            },
            salary_range: String::new(),
            growth_outlook: GrowthOutlook::Moderate,
            work_environments: vec![],
        }
    }

    #[test]
    fn test_builtin_catalog_loads_ten_careers() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 10);
        assert_eq!(
            catalog.get("software-engineer").unwrap().title,
            "Software Engineer"
        );
        assert_eq!(
            catalog.get("hr-specialist").unwrap().growth_outlook,
            GrowthOutlook::Moderate
        );
    }

    #[test]
    fn test_builtin_catalog_preserves_declaration_order() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.careers()[0].id, "software-engineer");
        assert_eq!(catalog.careers()[9].id, "environmental-scientist");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let careers = vec![
            record("dup", "One", 3.0, &["Skill"]),
            record("dup", "Two", 3.0, &["Skill"]),
        ];
        let err = Catalog::new(careers).unwrap_err();
        assert!(err.to_string().contains("duplicate career id"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let careers = vec![record("x", "  ", 3.0, &["Skill"])];
        assert!(Catalog::new(careers).is_err());
    }

    #[test]
    fn test_out_of_scale_min_gpa_rejected() {
        let careers = vec![record("x", "X", 7.5, &["Skill"])];
        let err = Catalog::new(careers).unwrap_err();
        assert!(err.to_string().contains("4.0 scale"));
    }

    #[test]
    fn test_missing_skills_rejected() {
        let careers = vec![record("x", "X", 3.0, &[])];
        assert!(Catalog::new(careers).is_err());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_malformed_json_is_a_load_error() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, EngineError::Json(_)));
    }

    #[test]
    fn test_from_path_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUILTIN_CATALOG_JSON.as_bytes()).unwrap();
        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn test_form_vocabularies_are_nonempty() {
        assert_eq!(SKILL_OPTIONS.len(), 20);
        assert_eq!(INTEREST_OPTIONS.len(), 20);
        assert_eq!(SUBJECT_OPTIONS.len(), 20);
    }
}
