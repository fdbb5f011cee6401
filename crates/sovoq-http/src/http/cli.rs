//! CLI interface for the queue client.

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use serde::Serialize;
use sovoq::{InvoiceDocument, SovoqError};

use super::client::{
    QueueApi, QueueClient, clear_all_messages, get_message_by_id, process_message_by_id,
};
use super::common::decode_payload;

// =============================================================================
// CLI CONFIGURATION STRUCTS
// =============================================================================

#[derive(Parser)]
#[command(name = "sovoq")]
#[command(about = "Sovos e-invoicing queue client")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an invoice JSON payload to XML and submit it to the queue
    Send {
        /// Payload type; only `invoice` is supported
        payload_type: String,
        /// The invoice document as a JSON string
        json: String,
    },
    /// List the message IDs currently waiting on the queue
    GetMessages,
    /// Fetch one message by ID
    GetMessage {
        id: String,
        /// Print the Base64-decoded payload instead of the JSON envelope
        #[arg(long)]
        decode: bool,
    },
    /// Acknowledge one message so the platform removes it from the queue
    ProcessMessage { id: String },
    /// Acknowledge every message currently on the queue
    ClearMessages {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

// =============================================================================
// CONFIRMATION SEAM
// =============================================================================

/// Yes/no confirmation, injected so batch operations run without a terminal.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Reads a y/N answer from stdin; anything unreadable counts as "no".
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt} [y/N]: ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return false;
        }
        matches!(input.trim(), "y" | "Y" | "yes" | "Yes")
    }
}

// =============================================================================
// COMMAND DISPATCH
// =============================================================================

pub async fn handle_cli_command(
    client: &QueueClient,
    command: Commands,
    confirm: &mut dyn Confirm,
) -> Result<(), SovoqError> {
    match command {
        Commands::Send { payload_type, json } => handle_send(client, &payload_type, &json).await,
        Commands::GetMessages => handle_get_messages(client).await,
        Commands::GetMessage { id, decode } => {
            handle_get_message(client, &id, decode, confirm).await
        }
        Commands::ProcessMessage { id } => handle_process_message(client, &id).await,
        Commands::ClearMessages { yes } => handle_clear_messages(client, yes, confirm).await,
    }
}

async fn handle_send(
    client: &QueueClient,
    payload_type: &str,
    json: &str,
) -> Result<(), SovoqError> {
    if payload_type != "invoice" {
        return Err(SovoqError::UnknownPayloadType {
            payload_type: payload_type.to_string(),
        });
    }
    if json.trim().is_empty() {
        return Err(SovoqError::InvoiceParse {
            reason: "empty JSON payload".to_string(),
        });
    }

    let doc = InvoiceDocument::from_json(json)?;
    let receipt = client.send_invoice(&doc).await?;

    println!("{}", receipt.xml);
    println!(
        "Submitted '{}' as message {}",
        receipt.filename, receipt.message_id
    );
    println!("{}", receipt.response_body);
    Ok(())
}

async fn handle_get_messages(client: &QueueClient) -> Result<(), SovoqError> {
    let listing = client.list_messages().await?;
    println!("{}", to_pretty_json(&listing)?);
    Ok(())
}

async fn handle_get_message(
    client: &QueueClient,
    id: &str,
    decode_flag: bool,
    confirm: &mut dyn Confirm,
) -> Result<(), SovoqError> {
    let decode = decode_flag || confirm.confirm("Return just the Base64-decoded payload?");

    match get_message_by_id(client, id).await? {
        Some(message) => {
            if decode {
                println!("{}", decode_payload(&message)?);
            } else {
                println!("{}", to_pretty_json(&message)?);
            }
        }
        None => println!("No message {id} found on the queue"),
    }
    Ok(())
}

async fn handle_process_message(client: &QueueClient, id: &str) -> Result<(), SovoqError> {
    if process_message_by_id(client, id).await? {
        println!("Message {id} cleared from the queue");
    } else {
        println!("Failed to clear message {id} from the queue");
    }
    Ok(())
}

async fn handle_clear_messages(
    client: &QueueClient,
    yes: bool,
    confirm: &mut dyn Confirm,
) -> Result<(), SovoqError> {
    let prompt = format!(
        "Are you sure? This will clear ALL messages currently on the {} queue",
        client.config().environment
    );
    if !yes && !confirm.confirm(&prompt) {
        println!("Aborted");
        return Ok(());
    }

    for outcome in clear_all_messages(client).await? {
        if outcome.cleared {
            println!("Message {} cleared from the queue", outcome.id);
        } else {
            println!("Failed to clear message {} from the queue", outcome.id);
        }
    }
    Ok(())
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, SovoqError> {
    serde_json::to_string_pretty(value).map_err(|e| SovoqError::JsonEncode {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::config::Config;

    fn offline_client() -> QueueClient {
        QueueClient::new(Config {
            base_url: "https://queue.invalid".to_string(),
            receive_endpoint: "/receive".to_string(),
            get_messages_endpoint: "/messages".to_string(),
            get_message_endpoint: "/message".to_string(),
            process_message_endpoint: "/process".to_string(),
            user_id: "user-1".to_string(),
            environment: "env-test".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
        })
    }

    #[tokio::test]
    async fn test_send_rejects_unknown_payload_types_before_any_request() {
        let client = offline_client();
        let err = handle_send(&client, "receipt", "{}").await.unwrap_err();
        assert_eq!(
            err,
            SovoqError::UnknownPayloadType {
                payload_type: "receipt".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_send_rejects_an_empty_json_argument() {
        let client = offline_client();
        let err = handle_send(&client, "invoice", "   ").await.unwrap_err();
        assert!(matches!(err, SovoqError::InvoiceParse { .. }));
    }

    #[test]
    fn test_closures_satisfy_the_confirm_seam() {
        let mut always_no = |_prompt: &str| false;
        assert!(!always_no.confirm("proceed?"));

        let mut seen = Vec::new();
        let mut recording = |prompt: &str| {
            seen.push(prompt.to_string());
            true
        };
        assert!(recording.confirm("clear everything?"));
        drop(recording);
        assert_eq!(seen, vec!["clear everything?"]);
    }

    #[test]
    fn test_cli_parses_every_subcommand() {
        let cli = Cli::try_parse_from(["sovoq", "send", "invoice", "{}"]).unwrap();
        assert!(matches!(cli.command, Commands::Send { .. }));

        let cli = Cli::try_parse_from(["sovoq", "get-messages"]).unwrap();
        assert!(matches!(cli.command, Commands::GetMessages));

        let cli = Cli::try_parse_from(["sovoq", "get-message", "m-1", "--decode"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::GetMessage { decode: true, .. }
        ));

        let cli = Cli::try_parse_from(["sovoq", "process-message", "m-1"]).unwrap();
        assert!(matches!(cli.command, Commands::ProcessMessage { .. }));

        let cli = Cli::try_parse_from(["sovoq", "clear-messages", "--yes"]).unwrap();
        assert!(matches!(cli.command, Commands::ClearMessages { yes: true }));
    }

    #[test]
    fn test_cli_without_a_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["sovoq"]).is_err());
    }
}
