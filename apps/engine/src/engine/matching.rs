//! Symmetric substring containment — the loose vocabulary match used by
//! every factor in the engine.
//!
//! Two terms match iff either contains the other, case-insensitively.
//! Deliberately tolerant so that form vocabulary and catalog vocabulary
//! do not have to agree exactly ("UI Design" matches "Design").

/// Returns true iff `a` contains `b` or `b` contains `a`, ignoring case.
pub fn terms_match(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Filters `profile_terms` down to those matching at least one career
/// term, preserving profile order.
pub fn matched_terms(profile_terms: &[String], career_terms: &[String]) -> Vec<String> {
    profile_terms
        .iter()
        .filter(|term| career_terms.iter().any(|c| terms_match(term, c)))
        .cloned()
        .collect()
}
