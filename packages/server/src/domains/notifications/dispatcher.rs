//! Notification dispatcher for open-slot outreach.
//!
//! Sends personalized SMS messages to waitlisted patients using one of two
//! strategies:
//!
//! ```text
//! Dispatcher
//!     │
//!     ├─► blast:     all recipients at once, progress as sends complete
//!     └─► waterfall: strict list order, cancellable delay between sends
//! ```
//!
//! The dispatcher is the single writer of dispatch state; observers read
//! immutable `DispatchReport` snapshots through a watch channel. Waterfall
//! runs can be cancelled between steps - the inter-message delay itself is
//! interruptible. Blast runs cannot be cancelled once issued.
//!
//! A failed waterfall send does not abort the remaining queue: the failure
//! is recorded and the run continues. Nothing here observes recipient
//! replies; a future acceptance listener would stop the waterfall through
//! the same cancellation token.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::models::dispatch::{
    DispatchError, DispatchProgress, DispatchReport, DispatchStatus, FailedSend, Recipient,
    Strategy,
};
use crate::common::{CancellationToken, DispatchId};
use crate::kernel::traits::BaseSmsService;

/// Placeholder substituted with the recipient name in message templates.
pub const TEMPLATE_NAME_PLACEHOLDER: &str = "{name}";

/// Render a message template for one recipient.
pub fn personalize(template: &str, name: &str) -> String {
    template.replace(TEMPLATE_NAME_PLACEHOLDER, name)
}

/// Precondition check: every recipient must have a usable phone number.
///
/// Fails with the full list of offending names; no partial send is
/// attempted on violation.
pub fn validate_recipients(recipients: &[Recipient]) -> Result<(), DispatchError> {
    let names: Vec<String> = recipients
        .iter()
        .filter(|recipient| !recipient.has_phone())
        .map(|recipient| recipient.name.clone())
        .collect();

    if names.is_empty() {
        Ok(())
    } else {
        Err(DispatchError::MissingPhoneNumbers { names })
    }
}

/// Configuration for the dispatcher.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Delay between consecutive waterfall sends.
    pub waterfall_interval: Duration,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            waterfall_interval: Duration::from_secs(5 * 60),
        }
    }
}

/// Invoked after each successful send with the running progress.
pub type ProgressCallback = Arc<dyn Fn(DispatchProgress) + Send + Sync>;

/// Per-run options.
#[derive(Clone, Default)]
pub struct DispatchOptions {
    /// Override the configured waterfall interval for this run.
    pub interval: Option<Duration>,
    pub on_progress: Option<ProgressCallback>,
}

/// Sends notification runs against the SMS gateway.
#[derive(Clone)]
pub struct Dispatcher {
    sms: Arc<dyn BaseSmsService>,
    config: DispatcherConfig,
}

impl Dispatcher {
    pub fn new(sms: Arc<dyn BaseSmsService>, config: DispatcherConfig) -> Self {
        Self { sms, config }
    }

    /// Run a dispatch to completion.
    ///
    /// Validates the recipient list, then delivers according to `strategy`.
    /// The returned report is terminal: `sent` when every message went out,
    /// `error` when any recipient failed or the run was cancelled.
    pub async fn dispatch(
        &self,
        recipients: Vec<Recipient>,
        template: &str,
        strategy: Strategy,
        options: &DispatchOptions,
        cancel: &CancellationToken,
    ) -> Result<DispatchReport, DispatchError> {
        validate_recipients(&recipients)?;
        let (tx, _rx) = watch::channel(DispatchReport::pending(recipients.len()));
        Ok(self
            .run(&recipients, template, strategy, options, cancel, &tx)
            .await)
    }

    /// Spawn a dispatch in the background and return a handle for
    /// observation and cancellation.
    ///
    /// Validation happens before the task is spawned so callers get the
    /// precondition failure synchronously.
    pub fn start(
        &self,
        recipients: Vec<Recipient>,
        template: String,
        strategy: Strategy,
        options: DispatchOptions,
    ) -> Result<DispatchHandle, DispatchError> {
        validate_recipients(&recipients)?;

        let id = DispatchId::new();
        let cancel = CancellationToken::new();
        let (tx, rx) = watch::channel(DispatchReport::pending(recipients.len()));

        let dispatcher = self.clone();
        let task_cancel = cancel.clone();
        tokio::spawn(async move {
            let report = dispatcher
                .run(&recipients, &template, strategy, &options, &task_cancel, &tx)
                .await;
            info!(
                dispatch_id = %id,
                status = ?report.status,
                sent = report.progress.sent,
                total = report.progress.total,
                "dispatch finished"
            );
        });

        Ok(DispatchHandle {
            id,
            report: rx,
            cancel,
        })
    }

    async fn run(
        &self,
        recipients: &[Recipient],
        template: &str,
        strategy: Strategy,
        options: &DispatchOptions,
        cancel: &CancellationToken,
        tx: &watch::Sender<DispatchReport>,
    ) -> DispatchReport {
        let sink = ProgressSink {
            tx,
            on_progress: options.on_progress.clone(),
        };
        sink.set_status(DispatchStatus::Sending);

        match strategy {
            Strategy::Blast => self.run_blast(recipients, template, &sink).await,
            Strategy::Waterfall => {
                let interval = options.interval.unwrap_or(self.config.waterfall_interval);
                self.run_waterfall(recipients, template, interval, cancel, &sink)
                    .await;
            }
        }

        sink.finalize();
        tx.borrow().clone()
    }

    async fn run_blast(&self, recipients: &[Recipient], template: &str, sink: &ProgressSink<'_>) {
        let sends = recipients.iter().map(|recipient| {
            let message = personalize(template, &recipient.name);
            async move {
                let Some(phone) = recipient.phone.as_deref() else {
                    sink.record_failed(&recipient.name, "no phone number".to_string());
                    return;
                };
                match self.sms.send_sms(phone, &message).await {
                    Ok(()) => {
                        debug!(recipient = %recipient.name, "blast message sent");
                        sink.record_sent();
                    }
                    Err(error) => {
                        warn!(recipient = %recipient.name, error = %error, "blast send failed");
                        sink.record_failed(&recipient.name, error.to_string());
                    }
                }
            }
        });
        futures::future::join_all(sends).await;
    }

    async fn run_waterfall(
        &self,
        recipients: &[Recipient],
        template: &str,
        interval: Duration,
        cancel: &CancellationToken,
        sink: &ProgressSink<'_>,
    ) {
        let total = recipients.len();
        for (index, recipient) in recipients.iter().enumerate() {
            if cancel.is_cancelled() {
                sink.record_cancelled(&recipients[index..]);
                return;
            }

            let message = personalize(template, &recipient.name);
            match recipient.phone.as_deref() {
                Some(phone) => match self.sms.send_sms(phone, &message).await {
                    Ok(()) => {
                        info!(
                            recipient = %recipient.name,
                            position = index + 1,
                            total,
                            "waterfall message sent"
                        );
                        sink.record_sent();
                    }
                    Err(error) => {
                        warn!(
                            recipient = %recipient.name,
                            error = %error,
                            "waterfall send failed, continuing"
                        );
                        sink.record_failed(&recipient.name, error.to_string());
                    }
                },
                None => sink.record_failed(&recipient.name, "no phone number".to_string()),
            }

            if index + 1 < total {
                tokio::select! {
                    _ = tokio::time::sleep(interval) => {}
                    _ = cancel.cancelled() => {
                        sink.record_cancelled(&recipients[index + 1..]);
                        return;
                    }
                }
            }
        }
    }
}

/// Handle to an in-flight or completed background dispatch.
pub struct DispatchHandle {
    pub id: DispatchId,
    report: watch::Receiver<DispatchReport>,
    cancel: CancellationToken,
}

impl DispatchHandle {
    /// Latest snapshot of the run.
    pub fn report(&self) -> DispatchReport {
        self.report.borrow().clone()
    }

    /// Request cancellation. Waterfall runs stop before their next send;
    /// blast runs are already fully issued and ignore this.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait until the run reaches a terminal status.
    pub async fn wait(&mut self) -> DispatchReport {
        let _ = self
            .report
            .wait_for(|report| report.status.is_terminal())
            .await;
        self.report()
    }
}

/// Single writer of dispatch state; fans updates out to the watch channel
/// and the optional progress callback.
struct ProgressSink<'a> {
    tx: &'a watch::Sender<DispatchReport>,
    on_progress: Option<ProgressCallback>,
}

impl ProgressSink<'_> {
    fn set_status(&self, status: DispatchStatus) {
        self.tx.send_modify(|report| report.status = status);
    }

    fn record_sent(&self) {
        let mut progress = DispatchProgress { sent: 0, total: 0 };
        self.tx.send_modify(|report| {
            report.progress.sent += 1;
            progress = report.progress;
        });
        if let Some(callback) = &self.on_progress {
            callback(progress);
        }
    }

    fn record_failed(&self, name: &str, error: String) {
        self.tx.send_modify(|report| {
            report.failed.push(FailedSend {
                name: name.to_string(),
                error,
            })
        });
    }

    fn record_cancelled(&self, remaining: &[Recipient]) {
        info!(
            remaining = remaining.len(),
            "dispatch cancelled, skipping remaining recipients"
        );
        for recipient in remaining {
            self.record_failed(&recipient.name, "cancelled before send".to_string());
        }
    }

    fn finalize(&self) {
        self.tx.send_modify(|report| {
            report.status = if report.failed.is_empty() {
                DispatchStatus::Sent
            } else {
                DispatchStatus::Error
            };
        });
    }
}
