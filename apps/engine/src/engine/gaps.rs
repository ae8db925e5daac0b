//! Skill Gap Analyzer — required skills of the chosen career that none
//! of the user's matched skills satisfy.

use serde::{Deserialize, Serialize};

use crate::engine::matching::terms_match;
use crate::engine::ranking::MatchResult;

/// At most this many missing skills are surfaced for display.
const MISSING_SKILLS_CAP: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGapResult {
    /// Missing required skills, in the career's own list order, capped
    /// at six. Always a subset of the career's `required_skills`.
    pub missing_skills: Vec<String>,
    /// Percentage of required skills not matched, computed from the
    /// uncapped missing set. 0 when everything matched (or nothing was
    /// required), 100 when nothing matched.
    pub skill_gap_score: u32,
}

/// Compares the match's career requirements against the skills the
/// scorer recognized for this user. Works entirely from
/// `MatchResult::matched_skills` — no reason text is ever parsed.
pub fn analyze_skill_gaps(top_match: &MatchResult) -> SkillGapResult {
    let required = &top_match.career.required_skills;
    if required.is_empty() {
        return SkillGapResult {
            missing_skills: vec![],
            skill_gap_score: 0,
        };
    }

    let missing: Vec<&String> = required
        .iter()
        .filter(|req| {
            !top_match
                .matched_skills
                .iter()
                .any(|user_skill| terms_match(user_skill, req))
        })
        .collect();

    let skill_gap_score =
        (missing.len() as f64 / required.len() as f64 * 100.0).round() as u32;

    SkillGapResult {
        missing_skills: missing
            .into_iter()
            .take(MISSING_SKILLS_CAP)
            .cloned()
            .collect(),
        skill_gap_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AcademicRequirements, CareerRecord, GrowthOutlook};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn top_match(required: &[&str], matched: &[&str]) -> MatchResult {
        MatchResult {
            career: CareerRecord {
                id: "fixture".to_string(),
                title: "Fixture".to_string(),
                description: String::new(),
                required_skills: strings(required),
                related_interests: vec![],
                academic: AcademicRequirements {
                    min_gpa: 3.0,
                    preferred_subjects: vec![],
                },
                salary_range: String::new(),
                growth_outlook: GrowthOutlook::Moderate,
                work_environments: vec![],
            },
            compatibility_score: 50,
            matched_skills: strings(matched),
            reasons: vec![],
        }
    }

    #[test]
    fn test_all_matched_scores_zero() {
        let result = analyze_skill_gaps(&top_match(
            &["Programming", "Problem Solving"],
            &["Programming", "Problem Solving"],
        ));
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.skill_gap_score, 0);
    }

    #[test]
    fn test_none_matched_scores_hundred() {
        let result = analyze_skill_gaps(&top_match(&["Statistics", "Modeling"], &[]));
        assert_eq!(result.skill_gap_score, 100);
        assert_eq!(result.missing_skills, strings(&["Statistics", "Modeling"]));
    }

    #[test]
    fn test_partial_gap_percentage() {
        // 2 of 5 required skills missing → 40%.
        let result = analyze_skill_gaps(&top_match(
            &["A", "B", "C", "D", "E"],
            &["A", "B", "C"],
        ));
        assert_eq!(result.skill_gap_score, 40);
        assert_eq!(result.missing_skills, strings(&["D", "E"]));
    }

    #[test]
    fn test_containment_counts_as_matched() {
        // A matched "Design" covers the required "UI Design".
        let result = analyze_skill_gaps(&top_match(&["UI Design", "Prototyping"], &["Design"]));
        assert_eq!(result.missing_skills, strings(&["Prototyping"]));
        assert_eq!(result.skill_gap_score, 50);
    }

    #[test]
    fn test_missing_skills_subset_of_required_in_career_order() {
        let required = &["One", "Two", "Three", "Four"];
        let result = analyze_skill_gaps(&top_match(required, &["Two"]));
        assert_eq!(result.missing_skills, strings(&["One", "Three", "Four"]));
        for skill in &result.missing_skills {
            assert!(required.contains(&skill.as_str()));
        }
    }

    #[test]
    fn test_display_cap_at_six_but_percentage_uncapped() {
        let required = &["A", "B", "C", "D", "E", "F", "G", "H"];
        let result = analyze_skill_gaps(&top_match(required, &[]));
        assert_eq!(result.missing_skills.len(), 6);
        // Percentage uses all 8 missing, not the capped 6.
        assert_eq!(result.skill_gap_score, 100);
    }

    #[test]
    fn test_empty_requirements_score_zero() {
        let result = analyze_skill_gaps(&top_match(&[], &["Anything"]));
        assert_eq!(result.skill_gap_score, 0);
        assert!(result.missing_skills.is_empty());
    }
}
