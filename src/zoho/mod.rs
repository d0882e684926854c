use std::time::Duration;

use anyhow::Context;

use crate::config::Config;
use crate::ecpay::mask;

pub mod error;
/// Conversions from gateway notification fields into the Creator record
mod from;
pub mod record;

pub type Result<T> = std::result::Result<T, error::ZohoError>;

const FORWARD_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "ECPay-Webhook-Proxy/1.0";

/// Client for the Creator custom API endpoint.
///
/// Holds one connection-pooled [reqwest::Client] and the endpoint URL with
/// the public key already baked into the query string.
#[derive(Debug, Clone)]
pub struct ZohoClient {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl ZohoClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut endpoint =
            reqwest::Url::parse(&config.zoho_api_url).context("invalid ZOHO_API_URL")?;
        endpoint
            .query_pairs_mut()
            .append_pair("publickey", &config.zoho_public_key);
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FORWARD_TIMEOUT)
            .build()
            .context("failed to build http client")?;
        Ok(Self { client, endpoint })
    }

    /// Send one record to the Creator custom API.
    ///
    /// The call is made exactly once; redelivery on failure is the
    /// gateway's responsibility, not ours.
    pub async fn forward(&self, record: &record::Record) -> Result<reqwest::StatusCode> {
        tracing::debug!(data = %mask::secure_serializable(record), "Zoho API record payload");
        let res = self
            .client
            .post(self.endpoint.clone())
            .json(record)
            .send()
            .await?;
        let status = res.status();
        if status.is_success() {
            tracing::debug!(%status, "Zoho API accepted the record");
            Ok(status)
        } else {
            let body = res.text().await.unwrap_or_default();
            tracing::debug!(%status, body = %body, "Zoho API rejected the record");
            Err(error::ZohoError::Rejected { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

    use super::{ZohoClient, error::ZohoError};
    use crate::config::Config;
    use crate::ecpay::callback::CallbackFields;
    use crate::zoho::record::Record;

    fn client_for(uri: &str) -> ZohoClient {
        let config = Config {
            zoho_api_url: format!("{uri}/creator/custom/handle_return"),
            zoho_public_key: "test-key".to_string(),
        };
        ZohoClient::new(&config).unwrap()
    }

    fn sample_record() -> Record {
        let fields: CallbackFields =
            serde_urlencoded::from_str("MerchantTradeNo=ORD123&RtnCode=1&CheckMacValue=ABC")
                .unwrap();
        Record::from(fields)
    }

    #[test]
    fn public_key_is_embedded_in_endpoint() {
        let client = client_for("https://www.zohoapis.com");
        assert_eq!(
            client.endpoint.query(),
            Some("publickey=test-key"),
        );
    }

    #[tokio::test]
    async fn accepted_record_resolves_to_status() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .and(matchers::path("/creator/custom/handle_return"))
            .and(matchers::query_param("publickey", "test-key"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let status = client.forward(&sample_record()).await.unwrap();
        assert_eq!(status, reqwest::StatusCode::OK);
    }

    #[tokio::test]
    async fn rejection_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("workflow failed"))
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let err = client.forward(&sample_record()).await.unwrap_err();
        match err {
            ZohoError::Rejected { status, body } => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "workflow failed");
            }
            other => panic!("expected rejection, got {other}"),
        }
    }

    #[tokio::test]
    async fn refused_connection_is_a_request_error() {
        // Grab a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{addr}"));
        let err = client.forward(&sample_record()).await.unwrap_err();
        assert!(matches!(err, ZohoError::Request(_)));
    }
}
