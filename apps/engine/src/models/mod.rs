pub mod career;
pub mod profile;

pub use career::{AcademicRequirements, CareerRecord, GrowthOutlook};
pub use profile::{GpaScale, UserProfile};
