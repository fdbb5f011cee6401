//! Core library for the Sovos e-invoicing queue client.
//!
//! Holds the invoice schema mapping (JSON input shape to the XML document
//! submitted to the platform), the shared error type, and telemetry
//! initialization. The HTTP wire types and the CLI live in `sovoq-http`.

pub mod error;
pub mod invoice;
pub mod telemetry;

pub use error::SovoqError;
pub use invoice::{Invoice, InvoiceDocument};

// Re-export logging macros for consistent usage across the crates
pub use log::{debug, error, info, trace, warn};
