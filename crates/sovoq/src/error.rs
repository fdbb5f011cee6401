use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SovoqError {
    InvoiceParse {
        reason: String,
    },
    XmlRender {
        reason: String,
    },
    PayloadDecode {
        reason: String,
    },
    UnknownPayloadType {
        payload_type: String,
    },
    JsonEncode {
        reason: String,
    },
    MissingEnv {
        var: String,
    },
    Transport {
        context: String,
        reason: String,
    },
    ResponseParse {
        context: String,
        reason: String,
    },
}

impl fmt::Display for SovoqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SovoqError::InvoiceParse { reason } => {
                write!(f, "Failed to parse invoice document: {reason}")
            }
            SovoqError::XmlRender { reason } => {
                write!(f, "Failed to render invoice XML: {reason}")
            }
            SovoqError::PayloadDecode { reason } => {
                write!(f, "Failed to decode message payload: {reason}")
            }
            SovoqError::UnknownPayloadType { payload_type } => {
                write!(f, "Unknown payload type '{payload_type}'")
            }
            SovoqError::JsonEncode { reason } => {
                write!(f, "Failed to encode JSON: {reason}")
            }
            SovoqError::MissingEnv { var } => {
                write!(f, "Required environment variable '{var}' is not set")
            }
            SovoqError::Transport { context, reason } => {
                write!(f, "Request failed in {context}: {reason}")
            }
            SovoqError::ResponseParse { context, reason } => {
                write!(f, "Failed to parse response in {context}: {reason}")
            }
        }
    }
}

impl std::error::Error for SovoqError {}

impl SovoqError {
    /// Errors caused by the input handed to the CLI rather than by the
    /// remote platform or the transport.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SovoqError::InvoiceParse { .. }
                | SovoqError::UnknownPayloadType { .. }
                | SovoqError::MissingEnv { .. }
        )
    }
}
