// The recommendation engine proper: scoring, ranking, and the derived
// analytics. Everything here is a pure function of its inputs.

pub mod categories;
pub mod gaps;
pub mod insights;
pub mod matching;
pub mod ranking;
pub mod roadmap;
pub mod scoring;
