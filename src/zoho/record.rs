use serde::Serialize;
use time::OffsetDateTime;

/// Content type the gateway posted the original notification with.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Flat record shape expected by the Creator custom API.
///
/// Every key is present on every forward; gateway fields that were absent
/// from the notification carry their documented default instead of being
/// dropped.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    #[serde(rename = "MerchantID")]
    pub merchant_id: String,
    pub merchant_trade_no: String,
    pub trade_no: String,
    pub rtn_code: String,
    pub rtn_msg: String,
    pub payment_type: String,
    pub payment_date: String,
    pub trade_amt: String,
    pub payment_type_charge_fee: String,
    pub check_mac_value: String,
    pub custom_field1: String,
    pub custom_field2: String,
    pub custom_field3: String,
    pub custom_field4: String,
    #[serde(rename = "StoreID")]
    pub store_id: String,
    pub simulate_paid: String,
    pub trade_date: String,
    #[serde(with = "time::serde::rfc3339")]
    pub processed_at: OffsetDateTime,
    pub original_content_type: &'static str,
}
