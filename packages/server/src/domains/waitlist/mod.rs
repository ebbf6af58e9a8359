pub mod models;
pub mod query;

pub use models::entry::{Urgency, WaitlistEntry};
pub use query::{query_waitlist, WaitlistFilters};
