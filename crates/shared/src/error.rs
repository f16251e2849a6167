use thiserror::Error;

/// Errors raised while decoding or encoding routed frames.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Malformed routing envelope: {0}")]
    MalformedEnvelope(String),

    #[error("Invalid payload JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Payload is not a JSON object")]
    NotAnObject,

    #[error("Payload missing field '{0}'")]
    MissingField(&'static str),
}
