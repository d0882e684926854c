use serde::Serialize;

/// Return true if a key name holds the gateway checksum.
fn is_mac_key(key: &str) -> bool {
    key.eq_ignore_ascii_case("checkmacvalue")
}

/// Keep only the last 4 characters of a checksum value.
fn mask(value: &str) -> String {
    let len = value.len();
    if len > 4 {
        "*".repeat(len - 4) + &value[len - 4..]
    } else {
        value.to_string()
    }
}

pub fn secure_serializable(v: impl Serialize) -> serde_json::Value {
    let value = serde_json::to_value(v).expect("serialization is infallible");
    secure_value(&value)
}

pub fn secure_value(v: &serde_json::Value) -> serde_json::Value {
    use serde_json::Value;

    match v {
        Value::Object(map) => {
            let mut new = serde_json::Map::with_capacity(map.len());
            for (k, val) in map {
                let new_val = match val {
                    Value::String(s) if is_mac_key(k) => Value::String(mask(s)),
                    _ => secure_value(val),
                };
                new.insert(k.clone(), new_val);
            }
            Value::Object(new)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(secure_value).collect()),
        other => other.clone(),
    }
}
