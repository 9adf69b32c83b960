use std::fmt;

use actix_web::web::Bytes;
use serde::Serialize;
use serde_json::Value;

/// Body of an incoming webhook, as far as we could make sense of it.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Any JSON document: object, array or scalar.
    Json(Value),
    /// Bytes that are not JSON, kept verbatim.
    Raw { body: Bytes, reason: String },
}

impl Payload {
    pub fn from_bytes(body: Bytes) -> Self {
        match serde_json::from_slice::<Value>(&body) {
            Ok(value) => Payload::Json(value),
            Err(err) => Payload::Raw { body, reason: err.to_string() },
        }
    }

    pub fn is_json(&self) -> bool { matches!(self, Payload::Json(_)) }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Json(value) => write!(f, "{}", value),
            Payload::Raw { body, .. } => {
                write!(f, "{}", String::from_utf8_lossy(body))
            }
        }
    }
}

/// Response sent back for every webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Acknowledgement {
    pub status:  &'static str,
    pub message: &'static str,
}

impl Acknowledgement {
    pub const fn received() -> Self {
        Self { status: "success", message: "Webhook received!" }
    }
}
