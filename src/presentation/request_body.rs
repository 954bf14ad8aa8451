// JSON request bodies read field by field
use crate::domain::validation::FieldError;
use crate::infrastructure::http_response::detail;
use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::Response};
use serde_json::{Map, Value};

const NOT_AN_OBJECT: &str = "Invalid data. Expected a dictionary.";

/// A JSON object body whose fields are validated one at a time, so every
/// bad field gets its own message instead of the whole body being refused.
pub struct RequestBody(Map<String, Value>);

impl RequestBody {
    /// Accept the extractor result, answering 400 `{"detail": ...}` for
    /// unreadable bodies and bodies that are not objects.
    pub fn from_payload(payload: Result<Json<Value>, JsonRejection>) -> Result<Self, Response> {
        match payload {
            Ok(Json(Value::Object(fields))) => Ok(Self(fields)),
            Ok(Json(_)) => Err(detail(StatusCode::BAD_REQUEST, NOT_AN_OBJECT)),
            Err(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection);
                Err(detail(StatusCode::BAD_REQUEST, &rejection.body_text()))
            }
        }
    }

    /// Trimmed, non-blank string field. `null` counts as missing.
    pub fn required_string(&self, name: &str) -> Result<&str, FieldError> {
        match self.0.get(name) {
            None | Some(Value::Null) => Err(FieldError::Required),
            Some(Value::String(value)) => match value.trim() {
                "" => Err(FieldError::Blank),
                value => Ok(value),
            },
            Some(_) => Err(FieldError::NotAString),
        }
    }

    /// Non-negative integer field; numeric strings are accepted.
    pub fn required_integer(&self, name: &str) -> Result<u64, FieldError> {
        match self.0.get(name) {
            None | Some(Value::Null) => Err(FieldError::Required),
            Some(Value::Number(number)) => number.as_u64().ok_or(FieldError::NotAnInteger),
            Some(Value::String(value)) => {
                value.trim().parse().map_err(|_| FieldError::NotAnInteger)
            }
            Some(_) => Err(FieldError::NotAnInteger),
        }
    }
}
