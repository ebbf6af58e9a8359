pub mod dispatcher;
pub mod models;
pub mod registry;

pub use dispatcher::{
    personalize, validate_recipients, DispatchHandle, DispatchOptions, Dispatcher,
    DispatcherConfig, ProgressCallback,
};
pub use models::dispatch::{
    DispatchError, DispatchProgress, DispatchReport, DispatchStatus, FailedSend, Recipient,
    Strategy,
};
pub use registry::DispatchRegistry;
