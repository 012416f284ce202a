use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Accepts a price as:
/// - a JSON number: `0.12`
/// - a numeric string: `"0.12"` (blank strings count as missing)
/// - `null` or a missing key
///
/// Anything else is logged and read as no price, so only that row is dropped.
pub(crate) fn de_opt_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(deserializer)?;
    match v {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Ok(None)
            } else {
                match s.parse::<f64>() {
                    Ok(price) => Ok(Some(price)),
                    Err(_) => {
                        warn!("ignoring unparsable price {s:?}");
                        Ok(None)
                    }
                }
            }
        }
        Some(other) => {
            warn!("ignoring price of unexpected type: {other}");
            Ok(None)
        }
    }
}
