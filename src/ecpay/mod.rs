use std::fmt::Display;

use crate::ecpay::error::CallbackError;

pub mod api;
/// Gateway notification field set
pub mod callback;
mod error;
/// Checksum masking for logged payloads
pub mod mask;

pub type Result<T> = std::result::Result<T, CallbackError>;

/// Plaintext acknowledgment line consumed by the gateway.
///
/// ECPay parses this exact `digit|reason` format to decide whether the
/// notification needs to be redelivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ack {
    Ok,
    Failure(&'static str),
}

impl Display for Ack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ack::Ok => f.write_str("1|OK"),
            Ack::Failure(reason) => write!(f, "0|{reason}"),
        }
    }
}

impl axum::response::IntoResponse for Ack {
    fn into_response(self) -> axum::response::Response {
        (axum::http::StatusCode::OK, self.to_string()).into_response()
    }
}
