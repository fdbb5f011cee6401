//! Authenticated HTTP client for the queue API and the command-level
//! operations built on top of it.

use async_trait::async_trait;
use log::warn;
use reqwest::Method;
use sovoq::{InvoiceDocument, SovoqError};

use super::common::{
    MessageBody, MessageResponse, MessagesResponse, ProcessMessageRequest, build_send_request,
};
use super::config::Config;

/// What `send` hands back for printing: the rendered XML, the generated
/// identifiers, and the raw response text from the platform.
#[derive(Debug, Clone)]
pub struct SendReceipt {
    pub message_id: String,
    pub filename: String,
    pub xml: String,
    pub response_body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClearOutcome {
    pub id: String,
    pub cleared: bool,
}

/// Queue operations the command logic needs. `QueueClient` implements this
/// over HTTP; tests substitute a mock.
#[async_trait]
pub trait QueueApi {
    async fn list_messages(&self) -> Result<MessagesResponse, SovoqError>;
    async fn fetch_message(&self, entry: &MessageBody) -> Result<MessageBody, SovoqError>;
    async fn process_message(&self, entry: &MessageBody) -> Result<(), SovoqError>;
}

pub struct QueueClient {
    inner: reqwest::Client,
    config: Config,
}

impl QueueClient {
    pub fn new(config: Config) -> Self {
        Self {
            inner: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Issue one request and return the raw response body. The platform
    /// reports API-level failures inside an ordinary JSON body, so a
    /// non-success status is logged but the bytes still flow to the caller;
    /// only transport failures are errors here.
    async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
        context: &str,
    ) -> Result<Vec<u8>, SovoqError> {
        let mut request = self
            .inner
            .request(method, url)
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| SovoqError::Transport {
            context: context.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{context} returned HTTP {status}; passing the body through");
        }

        let bytes = response.bytes().await.map_err(|e| SovoqError::Transport {
            context: context.to_string(),
            reason: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }

    /// Render the invoice as XML, wrap it in a send envelope, and POST it
    /// to the receive endpoint.
    pub async fn send_invoice(&self, doc: &InvoiceDocument) -> Result<SendReceipt, SovoqError> {
        let xml = doc.invoice.to_xml()?;
        let envelope =
            build_send_request(&self.config.user_id, &self.config.environment, &doc.invoice, &xml);
        let body = serde_json::to_string(&envelope).map_err(|e| SovoqError::JsonEncode {
            reason: e.to_string(),
        })?;

        let bytes = self
            .request(
                Method::POST,
                &self.config.send_url(),
                Some(body),
                "RECEIVEQUEUEDMESSAGE",
            )
            .await?;

        Ok(SendReceipt {
            message_id: envelope.message_id,
            filename: envelope.filename,
            xml,
            response_body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

#[async_trait]
impl QueueApi for QueueClient {
    async fn list_messages(&self) -> Result<MessagesResponse, SovoqError> {
        let bytes = self
            .request(Method::GET, &self.config.messages_url(), None, "GETQUEUEDMESSAGES")
            .await?;
        serde_json::from_slice(&bytes).map_err(|e| SovoqError::ResponseParse {
            context: "GETQUEUEDMESSAGES".to_string(),
            reason: e.to_string(),
        })
    }

    async fn fetch_message(&self, entry: &MessageBody) -> Result<MessageBody, SovoqError> {
        let bytes = self
            .request(Method::GET, &self.config.message_url(entry), None, "GETMESSAGEDATA")
            .await?;
        let response: MessageResponse =
            serde_json::from_slice(&bytes).map_err(|e| SovoqError::ResponseParse {
                context: "GETMESSAGEDATA".to_string(),
                reason: e.to_string(),
            })?;
        Ok(response.result)
    }

    async fn process_message(&self, entry: &MessageBody) -> Result<(), SovoqError> {
        let payload = ProcessMessageRequest {
            receiver: entry.receiver.clone(),
            sender: entry.sender.clone(),
            message_id: entry.id.clone(),
        };
        let body = serde_json::to_string(&payload).map_err(|e| SovoqError::JsonEncode {
            reason: e.to_string(),
        })?;
        self.request(
            Method::POST,
            &self.config.process_url(),
            Some(body),
            "PROCESSQUEUEDMESSAGE",
        )
        .await?;
        Ok(())
    }
}

// =============================================================================
// COMMAND-LEVEL OPERATIONS
// =============================================================================

/// Enumerate the queue and fetch the message whose id matches. An unmatched
/// id is an empty result, not an error.
pub async fn get_message_by_id(
    api: &dyn QueueApi,
    id: &str,
) -> Result<Option<MessageBody>, SovoqError> {
    let listing = api.list_messages().await?;
    match listing.result.messages.iter().find(|m| m.id == id) {
        Some(entry) => Ok(Some(api.fetch_message(entry).await?)),
        None => Ok(None),
    }
}

/// Enumerate the queue and acknowledge the matching message. Returns false
/// when the id is not on the queue.
pub async fn process_message_by_id(api: &dyn QueueApi, id: &str) -> Result<bool, SovoqError> {
    let listing = api.list_messages().await?;
    match listing.result.messages.iter().find(|m| m.id == id) {
        Some(entry) => {
            api.process_message(entry).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Acknowledge every message currently on the queue, serially. One failed
/// message must not abort the rest of the batch.
pub async fn clear_all_messages(api: &dyn QueueApi) -> Result<Vec<ClearOutcome>, SovoqError> {
    let listing = api.list_messages().await?;
    let mut outcomes = Vec::with_capacity(listing.result.messages.len());
    for entry in &listing.result.messages {
        let cleared = match api.process_message(entry).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to process message {}: {e}", entry.id);
                false
            }
        };
        outcomes.push(ClearOutcome {
            id: entry.id.clone(),
            cleared,
        });
    }
    Ok(outcomes)
}
