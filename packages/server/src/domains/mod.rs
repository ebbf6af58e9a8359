// Domain modules - one directory per bounded context

pub mod matching;
pub mod notifications;
pub mod patients;
pub mod providers;
pub mod schedules;
pub mod waitlist;
