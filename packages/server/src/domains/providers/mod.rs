pub mod models;

pub use models::provider::Provider;
