use axum::extract::{FromRequest, State};
use axum::routing::post;
use axum_extra::headers::{self, HeaderMapExt};
use tracing::instrument;

use crate::ecpay::callback::CallbackFields;
use crate::ecpay::error::CallbackError;
use crate::ecpay::{self, Ack, mask};
use crate::zoho::ZohoClient;
use crate::zoho::record::Record;

#[instrument(skip_all)]
async fn webhook_handler(
    State(zoho): State<ZohoClient>,
    CallbackForm(fields): CallbackForm,
) -> ecpay::Result<Ack> {
    tracing::debug!(data = %mask::secure_serializable(&fields), "Parsed gateway notification");
    let missing = fields.missing_required();
    if !missing.is_empty() {
        return Err(CallbackError::MissingFields(missing));
    }
    let record = Record::from(fields);
    let status = zoho.forward(&record).await?;
    tracing::info!(
        %status,
        merchant_trade_no = %record.merchant_trade_no,
        "Forwarded gateway notification"
    );
    Ok(Ack::Ok)
}

async fn method_not_allowed() -> CallbackError {
    CallbackError::MethodNotAllowed
}

pub fn router() -> axum::Router<crate::state::AppState> {
    axum::Router::new().route("/webhook", post(webhook_handler).fallback(method_not_allowed))
}

/// Form extractor that enforces the gateway content type and rejects in the
/// gateway ack format instead of axum's default plain 4xx.
pub struct CallbackForm(pub CallbackFields);

impl<S> FromRequest<S> for CallbackForm
where
    S: Send + Sync,
{
    type Rejection = CallbackError;

    async fn from_request(
        req: axum::http::Request<axum::body::Body>,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .typed_get::<headers::ContentType>()
            .is_some_and(|content_type| {
                let mime: mime::Mime = content_type.into();
                mime.type_() == mime::APPLICATION && mime.subtype() == mime::WWW_FORM_URLENCODED
            });
        if !is_form {
            return Err(CallbackError::UnsupportedContentType);
        }
        let body = String::from_request(req, state)
            .await
            .map_err(CallbackError::Body)?;
        tracing::trace!(len = body.len(), "Received gateway notification body");
        let fields = serde_urlencoded::from_str(&body)?;
        Ok(Self(fields))
    }
}
