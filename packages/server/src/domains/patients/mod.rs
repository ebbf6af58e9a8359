pub mod models;

pub use models::patient::Patient;
