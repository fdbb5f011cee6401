//! Request and response envelopes for the remote queue API.
//!
//! The platform speaks PascalCase JSON; the invoice XML travels inside the
//! `Base64Data` field of the send envelope.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use sovoq::{Invoice, SovoqError};
use uuid::Uuid;

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    #[serde(rename = "Sender")]
    pub sender: String,
    #[serde(rename = "Receiver")]
    pub receiver: String,
    #[serde(rename = "ContentType")]
    pub content_type: String,
    #[serde(rename = "Base64Data")]
    pub base64_data: String,
    #[serde(rename = "MessageId")]
    pub message_id: String,
    #[serde(rename = "Filename")]
    pub filename: String,
}

/// One queued message. The list endpoint returns these without a payload;
/// the detail endpoint fills `Base64Data`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessageBody {
    #[serde(rename = "MessageId")]
    pub id: String,
    #[serde(rename = "Receiver")]
    pub receiver: String,
    #[serde(rename = "Sender")]
    pub sender: String,
    #[serde(rename = "Base64Data", default, skip_serializing_if = "Option::is_none")]
    pub base64_data: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagesResponse {
    #[serde(rename = "ResultData", default)]
    pub result: MessageList,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageList {
    #[serde(rename = "MessageIds", default)]
    pub messages: Vec<MessageBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(rename = "ResultData")]
    pub result: MessageBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessMessageRequest {
    #[serde(rename = "Receiver")]
    pub receiver: String,
    #[serde(rename = "Sender")]
    pub sender: String,
    #[serde(rename = "MessageId")]
    pub message_id: String,
}

// =============================================================================
// ENVELOPE HELPERS
// =============================================================================

/// Build the send envelope for a rendered invoice: fresh UUIDv4 message id,
/// filename stem from the invoice's internal ERP reference.
pub fn build_send_request(
    sender: &str,
    receiver: &str,
    invoice: &Invoice,
    xml: &str,
) -> SendMessageRequest {
    SendMessageRequest {
        sender: sender.to_string(),
        receiver: receiver.to_string(),
        content_type: "application/xml".to_string(),
        base64_data: BASE64.encode(xml.as_bytes()),
        message_id: Uuid::new_v4().to_string(),
        filename: invoice.filename(),
    }
}

/// Decode the Base64 payload of a fetched message into text.
pub fn decode_payload(message: &MessageBody) -> Result<String, SovoqError> {
    let data = message.base64_data.as_deref().unwrap_or_default();
    let bytes = BASE64.decode(data).map_err(|e| SovoqError::PayloadDecode {
        reason: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| SovoqError::PayloadDecode {
        reason: e.to_string(),
    })
}
