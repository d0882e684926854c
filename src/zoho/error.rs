use std::fmt::Display;

#[derive(Debug)]
pub enum ZohoError {
    /// The forward request itself failed (connect, timeout, TLS).
    Request(reqwest::Error),
    /// The Creator endpoint answered with a non-success status.
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl From<reqwest::Error> for ZohoError {
    fn from(value: reqwest::Error) -> Self {
        Self::Request(value)
    }
}

impl std::error::Error for ZohoError {}

impl Display for ZohoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZohoError::Request(e) => write!(f, "http request error: {e}"),
            ZohoError::Rejected { status, body } => {
                write!(f, "zoho response {status}: {body}")
            }
        }
    }
}
