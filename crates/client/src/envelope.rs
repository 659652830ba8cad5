//! Decoding of the backend's response envelopes.
//!
//! Endpoints are not uniform: list responses carry their rows under `data`
//! or under a resource-specific key, and report the row count as `total`,
//! inside `pagination`, or not at all. Single-entity responses may or may
//! not be wrapped in `data`. Any of them may answer `success: false`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use masjid_core::list::Page;

use crate::error::ClientError;

/// Human-readable message carried by an error or rejection body.
pub fn message(body: &Value) -> Option<String> {
    ["message", "error", "msg"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

/// Fail with [`ClientError::Rejected`] when the body says `success: false`.
pub fn ensure_accepted(body: &Value) -> Result<(), ClientError> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ClientError::Rejected(message(body).unwrap_or_default()));
    }
    Ok(())
}

fn as_count(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

fn find_total(body: &Value) -> Option<u64> {
    let pagination = body
        .get("pagination")
        .or_else(|| body.get("data").and_then(|d| d.get("pagination")));
    body.get("total")
        .and_then(as_count)
        .or_else(|| {
            pagination.and_then(|p| {
                ["total", "totalItems", "total_items"]
                    .iter()
                    .find_map(|key| p.get(*key).and_then(as_count))
            })
        })
        .or_else(|| body.get("data").and_then(|d| d.get("total")).and_then(as_count))
}

fn find_rows(body: &Value, collection_key: Option<&str>) -> Option<Value> {
    if body.is_array() {
        return Some(body.clone());
    }
    let keys = ["data"]
        .into_iter()
        .chain(collection_key)
        .chain(["items", "rows"]);
    for key in keys {
        match body.get(key) {
            Some(rows @ Value::Array(_)) => return Some(rows.clone()),
            Some(nested @ Value::Object(_)) => {
                if let Some(rows) = find_rows(nested, collection_key) {
                    return Some(rows);
                }
            }
            _ => {}
        }
    }
    None
}

/// Decode a list response into a [`Page`]. When the backend reports no
/// total, the number of returned rows is used.
pub fn parse_page<T: DeserializeOwned>(
    body: Value,
    collection_key: Option<&str>,
) -> Result<Page<T>, ClientError> {
    ensure_accepted(&body)?;
    let rows = find_rows(&body, collection_key).unwrap_or(Value::Array(Vec::new()));
    let items: Vec<T> = serde_json::from_value(rows)?;
    let total = find_total(&body).unwrap_or(items.len() as u64);
    Ok(Page { items, total })
}

/// Keys that mark a body as a status envelope rather than a record.
const ENVELOPE_KEYS: [&str; 4] = ["success", "message", "error", "msg"];

/// The entity object inside a single-entity response.
///
/// A bare status envelope such as `{"status": "success", "message": ..}`
/// carries no entity and yields `Value::Null`.
pub fn entity_value(body: Value) -> Result<Value, ClientError> {
    ensure_accepted(&body)?;
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data @ Value::Object(_)) => Ok(data),
            Some(_) => Ok(Value::Null),
            None if ENVELOPE_KEYS.iter().any(|key| map.contains_key(*key)) => Ok(Value::Null),
            None => Ok(Value::Object(map)),
        },
        other => Ok(other),
    }
}

pub fn parse_entity<T: DeserializeOwned>(body: Value) -> Result<T, ClientError> {
    Ok(serde_json::from_value(entity_value(body)?)?)
}

/// Overlay the server's fields onto the submitted payload so that fields
/// the server echoes win and fields it omits keep their local value.
pub fn merge_authoritative(local: Value, server: Value) -> Value {
    match (local, server) {
        (Value::Object(mut base), Value::Object(top)) => {
            base.extend(top);
            Value::Object(base)
        }
        (local, Value::Null) => local,
        (_, server) => server,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn rows_under_data_with_total() {
        let page: Page<Row> =
            parse_page(json!({"success": true, "data": [{"id": 1}], "total": 12}), None).unwrap();
        assert_eq!(page.items, vec![Row { id: 1 }]);
        assert_eq!(page.total, 12);
    }

    #[test]
    fn rows_under_collection_key_with_pagination() {
        let body = json!({
            "stakeholders": [{"id": 1}, {"id": 2}],
            "pagination": {"page": 1, "totalItems": "31"}
        });
        let page: Page<Row> = parse_page(body, Some("stakeholders")).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 31);
    }

    #[test]
    fn nested_data_object_is_searched() {
        let body = json!({"data": {"programs": [{"id": 7}], "pagination": {"total": 1}}});
        let page: Page<Row> = parse_page(body, Some("programs")).unwrap();
        assert_eq!(page.items, vec![Row { id: 7 }]);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn bare_array_counts_rows() {
        let page: Page<Row> = parse_page(json!([{"id": 1}, {"id": 2}]), None).unwrap();
        assert_eq!(page.total, 2);
    }

    #[test]
    fn success_false_is_rejected() {
        let result: Result<Page<Row>, _> =
            parse_page(json!({"success": false, "message": "Token tidak valid"}), None);
        assert_matches!(result, Err(ClientError::Rejected(msg)) if msg == "Token tidak valid");
    }

    #[test]
    fn entity_unwraps_data() {
        let row: Row = parse_entity(json!({"success": true, "data": {"id": 3}})).unwrap();
        assert_eq!(row, Row { id: 3 });
        let row: Row = parse_entity(json!({"id": 4})).unwrap();
        assert_eq!(row, Row { id: 4 });
    }

    #[test]
    fn status_envelope_carries_no_entity() {
        let body = json!({"status": "success", "message": "Program berhasil diperbarui"});
        assert_eq!(entity_value(body).unwrap(), Value::Null);
        assert_eq!(
            entity_value(json!({"success": true, "data": null})).unwrap(),
            Value::Null
        );
        assert_eq!(
            entity_value(json!({"id": "req-1", "status": "approved"})).unwrap(),
            json!({"id": "req-1", "status": "approved"})
        );
    }

    #[test]
    fn merge_prefers_server_fields() {
        let merged = merge_authoritative(
            json!({"nama": "lokal", "alamat": "Jl. A"}),
            json!({"id": 1, "nama": "server"}),
        );
        assert_eq!(merged, json!({"id": 1, "nama": "server", "alamat": "Jl. A"}));
    }

    #[test]
    fn merge_with_empty_server_body_keeps_local() {
        assert_eq!(merge_authoritative(json!({"a": 1}), Value::Null), json!({"a": 1}));
    }
}
