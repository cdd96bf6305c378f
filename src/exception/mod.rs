//! HTTP-style exception carrier
//!
//! An [`Exception`] is built where a request fails, optionally enriched with a
//! payload, and rendered once at the boundary with
//! [`Objectifiable::to_object`].

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::contracts::Objectifiable;
use crate::error::SupportError;

/// Default status code for exceptions
pub const DEFAULT_STATUS_CODE: u16 = 500;

/// Error carrying a message, an HTTP status code and structured payload
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct Exception {
    pub message: String,
    pub status_code: u16,
    pub payload: Value,
}

/// Serialized form of an [`Exception`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExceptionObject {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Reason phrase for `status_code`, `None` for unknown codes
    pub error: Option<&'static str>,
    pub message: String,
    pub data: Value,
}

impl Exception {
    /// Exception with status 500 and an empty object payload
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_status(message, DEFAULT_STATUS_CODE)
    }

    pub fn with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
            payload: Value::Object(Map::new()),
        }
    }

    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    /// Replace the payload
    pub fn set_payload(&mut self, payload: Value) -> &mut Self {
        self.payload = payload;
        self
    }

    /// Standard reason phrase for the status code
    pub fn status_text(&self) -> Option<&'static str> {
        StatusCode::from_u16(self.status_code)
            .ok()
            .and_then(|code| code.canonical_reason())
    }
}

impl Objectifiable for Exception {
    type Object = ExceptionObject;

    fn to_object(&self) -> ExceptionObject {
        ExceptionObject {
            status_code: self.status_code,
            error: self.status_text(),
            message: self.message.clone(),
            data: self.payload.clone(),
        }
    }
}

impl From<SupportError> for Exception {
    fn from(error: SupportError) -> Self {
        let status = if error.is_validation_error() { 400 } else { DEFAULT_STATUS_CODE };
        Self::with_status(error.to_string(), status)
    }
}
