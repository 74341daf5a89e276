//! JSON success responses
//!
//! Every JSON body, list or single entity, goes through [`JsonEncoder`] so
//! all endpoints share one indentation style.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Serializes response bodies with a fixed indentation width
#[derive(Debug, Clone)]
pub struct JsonEncoder {
    indent: Vec<u8>,
}

impl JsonEncoder {
    pub fn new(indent_width: usize) -> Self {
        Self {
            indent: vec![b' '; indent_width],
        }
    }

    /// Render `value` as indented JSON followed by a newline
    pub fn to_vec<T: Serialize>(&self, value: &T) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(&self.indent);
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;
        buf.push(b'\n');
        Ok(buf)
    }

    /// Build a 200 response carrying `value`
    pub fn respond<T: Serialize>(&self, value: &T) -> Response {
        match self.to_vec(value) {
            Ok(body) => (
                StatusCode::OK,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Failed to encode response body: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error\n").into_response()
            }
        }
    }
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new(4)
    }
}
