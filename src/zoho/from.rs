use time::OffsetDateTime;

use crate::ecpay::callback::CallbackFields;
use crate::zoho::record::{FORM_CONTENT_TYPE, Record};

impl From<CallbackFields> for Record {
    fn from(
        CallbackFields {
            merchant_id,
            merchant_trade_no,
            trade_no,
            rtn_code,
            rtn_msg,
            payment_type,
            payment_date,
            trade_amt,
            payment_type_charge_fee,
            check_mac_value,
            custom_field1,
            custom_field2,
            custom_field3,
            custom_field4,
            store_id,
            simulate_paid,
            trade_date,
        }: CallbackFields,
    ) -> Self {
        Self {
            merchant_id,
            merchant_trade_no,
            trade_no,
            rtn_code,
            rtn_msg,
            payment_type,
            payment_date,
            trade_amt,
            payment_type_charge_fee,
            check_mac_value,
            custom_field1,
            custom_field2,
            custom_field3,
            custom_field4,
            store_id,
            simulate_paid,
            trade_date,
            processed_at: OffsetDateTime::now_utc(),
            original_content_type: FORM_CONTENT_TYPE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CallbackFields, Record};

    const RECORD_KEYS: [&str; 19] = [
        "MerchantID",
        "MerchantTradeNo",
        "TradeNo",
        "RtnCode",
        "RtnMsg",
        "PaymentType",
        "PaymentDate",
        "TradeAmt",
        "PaymentTypeChargeFee",
        "CheckMacValue",
        "CustomField1",
        "CustomField2",
        "CustomField3",
        "CustomField4",
        "StoreID",
        "SimulatePaid",
        "TradeDate",
        "ProcessedAt",
        "OriginalContentType",
    ];

    fn record_from(query: &str) -> serde_json::Value {
        let fields: CallbackFields = serde_urlencoded::from_str(query).unwrap();
        serde_json::to_value(Record::from(fields)).unwrap()
    }

    #[test]
    fn every_record_key_is_present() {
        let record = record_from("MerchantTradeNo=ORD123&RtnCode=1&CheckMacValue=ABC");
        let map = record.as_object().unwrap();
        for key in RECORD_KEYS {
            assert!(map.contains_key(key), "record is missing key {key}");
        }
        assert_eq!(map.len(), RECORD_KEYS.len());
    }

    #[test]
    fn sparse_notification_maps_with_defaults() {
        let record =
            record_from("MerchantTradeNo=ORD123&RtnCode=1&CheckMacValue=ABC&TradeAmt=500");
        assert_eq!(record["MerchantTradeNo"], "ORD123");
        assert_eq!(record["TradeAmt"], "500");
        assert_eq!(record["RtnMsg"], "");
        assert_eq!(record["StoreID"], "");
        assert_eq!(record["PaymentTypeChargeFee"], "0");
        assert_eq!(record["SimulatePaid"], "0");
    }

    #[test]
    fn generated_fields_are_filled() {
        let record = record_from("MerchantTradeNo=ORD123&RtnCode=1&CheckMacValue=ABC");
        assert_eq!(
            record["OriginalContentType"],
            "application/x-www-form-urlencoded"
        );
        let processed_at = record["ProcessedAt"].as_str().unwrap();
        assert!(
            time::OffsetDateTime::parse(
                processed_at,
                &time::format_description::well_known::Rfc3339
            )
            .is_ok(),
            "ProcessedAt is not RFC 3339: {processed_at}"
        );
    }
}
