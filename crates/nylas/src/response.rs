//! Response envelopes.
//!
//! Every API response is wrapped in one of three shapes: a single-item
//! envelope, a list envelope with an optional forward-pagination cursor,
//! or a bare acknowledgement for deletes. `request_id` is always present
//! and is the provider's correlation token.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// A single-item response envelope: `{request_id, data}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    /// The provider's correlation token for this request.
    pub request_id: String,
    /// The decoded payload.
    pub data: T,
}

impl<T: DeserializeOwned> Response<T> {
    /// Decodes the envelope, requiring both `request_id` and `data`.
    pub fn from_value(value: Value) -> Result<Self> {
        let mut map = into_object(value)?;
        let request_id = take_request_id(&mut map)?;
        let data = map
            .remove("data")
            .ok_or_else(|| Error::Decode("missing data in response envelope".into()))?;
        let data = serde_json::from_value(data)
            .map_err(|e| Error::Decode(format!("invalid response payload: {e}")))?;
        Ok(Self { request_id, data })
    }
}

/// A list response envelope: `{request_id, data: [...], next_cursor?}`.
///
/// An absent `next_cursor` means this is the last page. The cursor is
/// opaque; it is passed back verbatim as the `page_token` query parameter
/// on the next request, never parsed or constructed client-side.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResponse<T> {
    /// The provider's correlation token for this request.
    pub request_id: String,
    /// One page of decoded items.
    pub data: Vec<T>,
    /// Opaque token for the next page, absent on the last page.
    pub next_cursor: Option<String>,
}

impl<T: DeserializeOwned> ListResponse<T> {
    /// Decodes the envelope. Every element of `data` is decoded
    /// independently; if any element fails, the whole call fails rather
    /// than silently returning a partial list.
    pub fn from_value(value: Value) -> Result<Self> {
        let mut map = into_object(value)?;
        let request_id = take_request_id(&mut map)?;

        let data = match map.remove("data") {
            Some(Value::Array(items)) => items,
            Some(_) => return Err(Error::Decode("data in list envelope is not an array".into())),
            None => return Err(Error::Decode("missing data in list envelope".into())),
        };

        let mut decoded = Vec::with_capacity(data.len());
        for (index, item) in data.into_iter().enumerate() {
            let item = serde_json::from_value(item)
                .map_err(|e| Error::Decode(format!("invalid list item at index {index}: {e}")))?;
            decoded.push(item);
        }

        let next_cursor = match map.remove("next_cursor") {
            Some(Value::String(cursor)) => Some(cursor),
            Some(Value::Null) | None => None,
            Some(_) => return Err(Error::Decode("next_cursor is not a string".into())),
        };

        Ok(Self {
            request_id,
            data: decoded,
            next_cursor,
        })
    }
}

/// A delete acknowledgement envelope: `{request_id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResponse {
    /// The provider's correlation token for this request.
    pub request_id: String,
}

impl DeleteResponse {
    pub fn from_value(value: Value) -> Result<Self> {
        let mut map = into_object(value)?;
        let request_id = take_request_id(&mut map)?;
        Ok(Self { request_id })
    }
}

fn into_object(value: Value) -> Result<serde_json::Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::Decode(format!(
            "response envelope is not an object: {other}"
        ))),
    }
}

fn take_request_id(map: &mut serde_json::Map<String, Value>) -> Result<String> {
    match map.remove("request_id") {
        Some(Value::String(id)) => Ok(id),
        Some(_) => Err(Error::Decode("request_id is not a string".into())),
        None => Err(Error::Decode("missing request_id in response envelope".into())),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn single_envelope_decodes() {
        let value = json!({
            "request_id": "req-1",
            "data": {"id": "msg-1", "grant_id": "grant-1", "object": "message"}
        });
        let response: Response<Value> = Response::from_value(value).unwrap();
        assert_eq!(response.request_id, "req-1");
        assert_eq!(response.data["id"], "msg-1");
    }

    #[test]
    fn single_envelope_requires_request_id() {
        let err = Response::<Value>::from_value(json!({"data": {}})).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.to_string().contains("request_id"));
    }

    #[test]
    fn single_envelope_requires_data() {
        let err = Response::<Value>::from_value(json!({"request_id": "r"})).unwrap_err();
        assert!(err.to_string().contains("data"));
    }

    #[test]
    fn list_envelope_with_cursor() {
        let value = json!({
            "request_id": "req-2",
            "data": [{"id": "a"}, {"id": "b"}],
            "next_cursor": "tok1"
        });
        let response: ListResponse<Value> = ListResponse::from_value(value).unwrap();
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.next_cursor.as_deref(), Some("tok1"));
    }

    #[test]
    fn list_envelope_cursor_defaults_to_absent() {
        let value = json!({"request_id": "req-3", "data": []});
        let response: ListResponse<Value> = ListResponse::from_value(value).unwrap();
        assert!(response.data.is_empty());
        assert!(response.next_cursor.is_none());

        let value = json!({"request_id": "req-3", "data": [], "next_cursor": null});
        let response: ListResponse<Value> = ListResponse::from_value(value).unwrap();
        assert!(response.next_cursor.is_none());
    }

    #[test]
    fn list_envelope_fails_on_any_bad_element() {
        #[derive(Debug, serde::Deserialize)]
        struct Item {
            #[allow(dead_code)]
            id: String,
        }
        let value = json!({
            "request_id": "req-4",
            "data": [{"id": "ok"}, {"not_id": true}]
        });
        let err = ListResponse::<Item>::from_value(value).unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn delete_envelope_requires_only_request_id() {
        let response = DeleteResponse::from_value(json!({"request_id": "req-5"})).unwrap();
        assert_eq!(response.request_id, "req-5");

        let err = DeleteResponse::from_value(json!({})).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
