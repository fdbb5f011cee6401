//! Environment-derived configuration, built once at startup and handed to
//! every collaborator. No other module reads process-wide state.

use sovoq::SovoqError;

use super::common::MessageBody;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub receive_endpoint: String,
    pub get_messages_endpoint: String,
    pub get_message_endpoint: String,
    pub process_message_endpoint: String,
    /// Identity this client sends as and receives for.
    pub user_id: String,
    /// Remote environment name (e.g. test vs production queue).
    pub environment: String,
    pub api_key: String,
    pub api_secret: String,
}

impl Config {
    /// Read the full configuration from the environment. Every variable is
    /// required; the first missing one is reported by name.
    pub fn from_env() -> Result<Self, SovoqError> {
        Ok(Self {
            base_url: require("SOVOS_BASE_URL")?,
            receive_endpoint: require("SOVOS_RECEIVE_ENDPOINT")?,
            get_messages_endpoint: require("SOVOS_GET_MESSAGES_ENDPOINT")?,
            get_message_endpoint: require("SOVOS_GET_MESSAGE_ENDPOINT")?,
            process_message_endpoint: require("SOVOS_PROCESS_MESSAGE_ENDPOINT")?,
            user_id: require("SOVOS_USER_ID")?,
            environment: require("SOVOS_ENVIRONMENT")?,
            api_key: require("SOVOS_API_KEY")?,
            api_secret: require("SOVOS_API_SECRET")?,
        })
    }

    pub fn send_url(&self) -> String {
        format!("{}{}", self.base_url, self.receive_endpoint)
    }

    pub fn messages_url(&self) -> String {
        format!(
            "{}{}?Receiver={}",
            self.base_url,
            self.get_messages_endpoint,
            urlencoding::encode(&self.user_id)
        )
    }

    pub fn message_url(&self, entry: &MessageBody) -> String {
        format!(
            "{}{}?Receiver={}&Sender={}&MessageID={}",
            self.base_url,
            self.get_message_endpoint,
            urlencoding::encode(&entry.receiver),
            urlencoding::encode(&entry.sender),
            urlencoding::encode(&entry.id)
        )
    }

    pub fn process_url(&self) -> String {
        format!("{}{}", self.base_url, self.process_message_endpoint)
    }
}

fn require(var: &str) -> Result<String, SovoqError> {
    std::env::var(var).map_err(|_| SovoqError::MissingEnv {
        var: var.to_string(),
    })
}
