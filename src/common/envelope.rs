use serde::Serialize;
use serde_json::Value;

/// Canonical success envelope. Every JSON endpoint responds with
/// `{"data": ...}`; there is exactly one shape.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
}

pub fn enveloped<T: Serialize>(data: T) -> Envelope<T> {
    Envelope { data }
}

/// Pull a media id out of a payload fragment that may still use one of the
/// legacy backend envelope nestings.
///
/// The old backend wrapped upload responses inconsistently, so clients were
/// unwrapping `response`, `response.data`, `response.data.data` and `.id` in
/// sequence. That defensive chain is collapsed here into one documented
/// probe order; the first defined integer wins:
///
/// 1. the value itself as a number
/// 2. `value.id`
/// 3. `value.mediaId`
/// 4. `value.data.id`
/// 5. `value.data.data.id`
/// 6. `value.response.id`
pub fn extract_id(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }

    let probes = [
        value.get("id"),
        value.get("mediaId"),
        value.get("data").and_then(|d| d.get("id")),
        value
            .get("data")
            .and_then(|d| d.get("data"))
            .and_then(|d| d.get("id")),
        value.get("response").and_then(|r| r.get("id")),
    ];

    probes.into_iter().flatten().find_map(Value::as_i64)
}

/// Normalize a bucket of media references into plain ids.
///
/// Hero payloads may carry either bare ids or `{url, type, mediaId}`
/// objects depending on which API generation produced them. Elements with
/// no recoverable id are dropped rather than guessed at.
pub fn extract_ids(values: &[Value]) -> Vec<i64> {
    values.iter().filter_map(extract_id).collect()
}
