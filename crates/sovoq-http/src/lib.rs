//! HTTP layer for the Sovos e-invoicing queue client: wire types for the
//! remote API, environment configuration, the reqwest client, and the CLI.

pub mod http;

pub use http::client::{ClearOutcome, QueueApi, QueueClient, SendReceipt};
pub use http::common::{
    MessageBody, MessageResponse, MessagesResponse, ProcessMessageRequest, SendMessageRequest,
};
pub use http::config::Config;
