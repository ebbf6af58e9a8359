pub mod dispatch;

pub use dispatch::{
    DispatchError, DispatchProgress, DispatchReport, DispatchStatus, FailedSend, Recipient,
    Strategy,
};
