// HTTP routes
pub mod health;
pub mod matching;
pub mod notifications;
pub mod schedules;
pub mod waitlist;

pub use health::*;
pub use matching::*;
pub use notifications::*;
pub use schedules::*;
pub use waitlist::*;
