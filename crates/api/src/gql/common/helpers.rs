use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Decode an upstream response body into its wire model, falling back to the
/// empty-shaped value when the body does not match. Keeps resolvers fail-soft:
/// a malformed upstream payload degrades to absent data, not an error.
pub fn decode<T: DeserializeOwned + Default>(body: Map<String, Value>) -> T {
    serde_json::from_value(Value::Object(body)).unwrap_or_else(|err| {
        tracing::warn!("Discarding malformed upstream body: {err}");
        T::default()
    })
}
