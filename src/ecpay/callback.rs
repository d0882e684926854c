use serde::{Deserialize, Serialize};

fn zero() -> String {
    "0".to_string()
}

/// Server-to-server notification fields posted by the gateway.
///
/// Every field is optional at decode time so a sparse notification still
/// decodes; the required fields are checked separately, which lets the
/// handler answer in the gateway ack format instead of a decode error.
/// Unrecognized keys are ignored.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallbackFields {
    #[serde(rename = "MerchantID", default)]
    pub merchant_id: String,
    #[serde(default)]
    pub merchant_trade_no: String,
    #[serde(default)]
    pub trade_no: String,
    #[serde(default)]
    pub rtn_code: String,
    #[serde(default)]
    pub rtn_msg: String,
    #[serde(default)]
    pub payment_type: String,
    #[serde(default)]
    pub payment_date: String,
    #[serde(default = "zero")]
    pub trade_amt: String,
    #[serde(default = "zero")]
    pub payment_type_charge_fee: String,
    #[serde(default)]
    pub check_mac_value: String,
    #[serde(default)]
    pub custom_field1: String,
    #[serde(default)]
    pub custom_field2: String,
    #[serde(default)]
    pub custom_field3: String,
    #[serde(default)]
    pub custom_field4: String,
    #[serde(rename = "StoreID", default)]
    pub store_id: String,
    #[serde(default = "zero")]
    pub simulate_paid: String,
    #[serde(default)]
    pub trade_date: String,
}

impl CallbackFields {
    /// Names of required notification fields that are absent or empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("MerchantTradeNo", &self.merchant_trade_no),
            ("RtnCode", &self.rtn_code),
            ("CheckMacValue", &self.check_mac_value),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}
