pub mod availability;
pub mod models;

pub use availability::open_slots;
pub use models::slot::AppointmentSlot;
