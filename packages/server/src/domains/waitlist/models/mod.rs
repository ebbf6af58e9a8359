pub mod entry;

pub use entry::{Urgency, WaitlistEntry};
