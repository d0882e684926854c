use std::fmt::Display;

use axum::extract::rejection::StringRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::ecpay::Ack;
use crate::zoho::error::ZohoError;

/// Everything that can terminate notification handling short of a success ack.
#[derive(Debug)]
pub enum CallbackError {
    MethodNotAllowed,
    UnsupportedContentType,
    MissingFields(Vec<&'static str>),
    Body(StringRejection),
    Decode(serde_urlencoded::de::Error),
    Forward(ZohoError),
}

impl CallbackError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::UnsupportedContentType
            | Self::MissingFields(_)
            | Self::Body(_)
            | Self::Decode(_) => StatusCode::BAD_REQUEST,
            Self::Forward(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The acknowledgment line the gateway receives for this failure.
    fn ack(&self) -> Ack {
        match self {
            Self::MethodNotAllowed => Ack::Failure("Method Not Allowed"),
            Self::UnsupportedContentType => Ack::Failure("Unsupported Content-Type"),
            Self::MissingFields(_) => Ack::Failure("Missing required fields"),
            Self::Body(_) => Ack::Failure("System Error"),
            Self::Decode(_) => Ack::Failure("Parse Error"),
            Self::Forward(ZohoError::Request(_)) => Ack::Failure("Internal Server Error"),
            Self::Forward(ZohoError::Rejected { .. }) => Ack::Failure("Zoho Processing Error"),
        }
    }
}

impl From<serde_urlencoded::de::Error> for CallbackError {
    fn from(value: serde_urlencoded::de::Error) -> Self {
        Self::Decode(value)
    }
}

impl From<ZohoError> for CallbackError {
    fn from(value: ZohoError) -> Self {
        Self::Forward(value)
    }
}

impl std::error::Error for CallbackError {}

impl Display for CallbackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallbackError::MethodNotAllowed => f.write_str("method not allowed"),
            CallbackError::UnsupportedContentType => f.write_str("unsupported content type"),
            CallbackError::MissingFields(fields) => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
            CallbackError::Body(e) => write!(f, "body read: {e}"),
            CallbackError::Decode(e) => write!(f, "form decode: {e}"),
            CallbackError::Forward(e) => write!(f, "forward to zoho: {e}"),
        }
    }
}

impl IntoResponse for CallbackError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let ack = self.ack();
        tracing::error!(%status, %ack, "Notification failed: {self}");
        (status, ack.to_string()).into_response()
    }
}
