use crate::zoho::ZohoClient;

#[derive(Debug, Clone, axum::extract::FromRef)]
pub struct AppState {
    pub zoho: ZohoClient,
}

impl AppState {
    pub fn new(zoho: ZohoClient) -> Self {
        Self { zoho }
    }
}
