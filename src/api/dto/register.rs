/*
 * Responsibility
 * - Registration request/response DTO
 * - Lenient body parsing: anything that is not a JSON object counts as `{}`
 * - from_object() is the validation step: typed record, or every missing key
 */
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::AppError;

/// A registration that passed the presence check.
///
/// Only key presence is checked. Values are kept as raw JSON (a `null` name is
/// still "present") and any extra keys ride along in `extra` so the response
/// echoes exactly what the client sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationRequest {
    pub name: Value,
    pub email: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RegistrationRequest {
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        Self::from_object(parse_object(body))
    }

    pub fn from_object(mut obj: Map<String, Value>) -> Result<Self, AppError> {
        match (obj.remove("name"), obj.remove("email")) {
            (Some(name), Some(email)) => Ok(Self {
                name,
                email,
                extra: obj,
            }),
            (name, email) => {
                let mut missing = Vec::with_capacity(2);
                if name.is_none() {
                    missing.push("name");
                }
                if email.is_none() {
                    missing.push("email");
                }
                Err(AppError::MissingFields(missing))
            }
        }
    }
}

/// Empty, malformed or non-object bodies all become an empty object.
fn parse_object(body: &[u8]) -> Map<String, Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub message: &'static str,
    pub user: RegistrationRequest,
}
