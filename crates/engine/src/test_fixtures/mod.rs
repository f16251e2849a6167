//! Test doubles and helpers shared by engine unit tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::RecordingTransport;
//!
//! let transport = Arc::new(RecordingTransport::new());
//! // ... hand it to a Connection, then inspect transport.frames()
//! ```

mod transport;

pub use transport::RecordingTransport;

use pictureroom_shared::split_routing;
use serde_json::Value;

/// A sent frame split into its routing prefix, target and parsed JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct SentFrame {
    pub kind: String,
    pub target: String,
    pub body: Value,
}

impl SentFrame {
    /// Parse `kind,target,{json}`.
    ///
    /// # Panics
    ///
    /// Panics if the frame does not have three routing fields or the body is not JSON.
    pub fn parse(frame: &str) -> Self {
        let fields = split_routing(frame);
        assert_eq!(fields.len(), 3, "unexpected frame shape: {frame}");
        Self {
            kind: fields[0].to_string(),
            target: fields[1].to_string(),
            body: serde_json::from_str(fields[2]).expect("frame body is JSON"),
        }
    }

    pub fn bookmark(&self) -> u64 {
        self.body["bookmark"].as_u64().expect("frame carries a bookmark")
    }

    /// The `type` of the event, or of the nested content for `event` frames.
    pub fn event_type(&self) -> &str {
        let outer = self.body["type"].as_str().unwrap_or_default();
        match self.body["content"]["type"].as_str() {
            Some(inner) if outer == "event" => inner,
            _ => outer,
        }
    }
}
