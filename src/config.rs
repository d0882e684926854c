use anyhow::Context;

/// Process-lifetime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Creator custom API endpoint that receives the converted record.
    pub zoho_api_url: String,
    /// Public key the Creator endpoint expects in its query string.
    pub zoho_public_key: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let zoho_api_url = std::env::var("ZOHO_API_URL").context("ZOHO_API_URL is not set")?;
        let zoho_public_key =
            std::env::var("ZOHO_PUBLIC_KEY").context("ZOHO_PUBLIC_KEY is not set")?;
        Ok(Self {
            zoho_api_url,
            zoho_public_key,
        })
    }
}
