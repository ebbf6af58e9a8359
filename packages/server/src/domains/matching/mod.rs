pub mod evaluate;
pub mod models;

pub use evaluate::{evaluate_match, INSURANCE_WILDCARD};
pub use models::MatchOutcome;
