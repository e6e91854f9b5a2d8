use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::models::Transaction;

/// Envelope keys that may carry the record list, highest priority first.
pub const ENVELOPE_KEYS: [&str; 3] = ["data", "transactions", "results"];

/// Extracts transaction records from a backend response of any known shape.
///
/// See [`normalize_records`].
pub fn normalize(raw: &Value) -> Vec<Transaction> {
    normalize_records(raw)
}

/// Extracts a record list from a backend response.
///
/// Accepts a bare array or an object carrying the array under `data`,
/// `transactions` or `results` (checked in that order). Any other shape yields
/// an empty list. Elements that cannot be read as `T` are skipped.
pub fn normalize_records<T: DeserializeOwned>(raw: &Value) -> Vec<T> {
    let Some(items) = locate_records(raw) else {
        warn!("Response did not contain a recognised record list, treating it as empty");
        return Vec::new();
    };

    items.iter()
        .enumerate()
        .filter_map(|(index, item)| match T::deserialize(item) {
            Ok(record) => Some(record),
            Err(error) => {
                warn!("Skipping record [{index}] that could not be read: {error}");
                None
            }
        })
        .collect()
}

fn locate_records(raw: &Value) -> Option<&Vec<Value>> {
    match raw {
        Value::Array(items) => Some(items),
        Value::Object(envelope) => ENVELOPE_KEYS.iter()
            .find_map(|key| envelope.get(*key).and_then(Value::as_array)),
        _ => None
    }
}
