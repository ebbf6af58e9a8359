use serde::Deserialize;

/// Response from the Twilio Messages API after queuing an outbound SMS.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub sid: String,
    pub status: String,
    pub to: String,
    #[serde(rename = "from")]
    pub from_number: Option<String>,
    pub body: Option<String>,
    pub error_code: Option<i64>,
    pub error_message: Option<String>,
}

impl MessageResponse {
    /// Twilio reports queued/accepted/sending for messages it took ownership of.
    pub fn is_accepted(&self) -> bool {
        matches!(self.status.as_str(), "queued" | "accepted" | "sending" | "sent")
    }
}
