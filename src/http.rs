//! Status-code results for exposing understanding output over HTTP.
//!
//! Each [`HttpResult`] pairs a JSON payload with a fixed status code, so a
//! handler decides *what* happened and the transport only has to write
//! `(body, status)` to the wire. No server lives in this crate.

use crate::error::SummaryError;
use crate::understanding::{Dataset, Locale, generate_metadata};
use log::debug;
use serde_json::{Value, json};

#[derive(Clone, Debug, PartialEq)]
pub enum HttpResult {
    // 2xx
    Ok(Value),
    Created(Value),
    NoContent(Value),
    // 4xx
    BadRequest(Value),
    Unauthorized(Value),
    Forbidden(Value),
    NotFound(Value),
    // 5xx
    InternalServerError(Value),
}

impl HttpResult {
    pub fn status(&self) -> u16 {
        match self {
            Self::Ok(_) => 200,
            Self::Created(_) => 201,
            Self::NoContent(_) => 204,
            Self::BadRequest(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::InternalServerError(_) => 500,
        }
    }

    pub fn body(&self) -> &Value {
        match self {
            Self::Ok(v)
            | Self::Created(v)
            | Self::NoContent(v)
            | Self::BadRequest(v)
            | Self::Unauthorized(v)
            | Self::Forbidden(v)
            | Self::NotFound(v)
            | Self::InternalServerError(v) => v,
        }
    }

    pub fn into_parts(self) -> (Value, u16) {
        let status = self.status();
        let body = match self {
            Self::Ok(v)
            | Self::Created(v)
            | Self::NoContent(v)
            | Self::BadRequest(v)
            | Self::Unauthorized(v)
            | Self::Forbidden(v)
            | Self::NotFound(v)
            | Self::InternalServerError(v) => v,
        };
        (body, status)
    }
}

impl From<&SummaryError> for HttpResult {
    fn from(err: &SummaryError) -> Self {
        let body = json!({ "error": err.to_string() });
        if err.is_client_error() {
            Self::BadRequest(body)
        } else {
            Self::InternalServerError(body)
        }
    }
}

/// The root handler: a fixed sample payload.
pub fn index() -> HttpResult {
    HttpResult::Ok(json!({ "response": ["data", "data", "data", "data"] }))
}

/// Summarizes a request body holding a JSON object of columns.
///
/// Malformed tables and empty datasets are the caller's fault and map to 400;
/// anything else is a 500.
pub fn metadata_response(body: &str, locale: Locale) -> HttpResult {
    let metadata = match Dataset::from_json_str(body).and_then(|ds| generate_metadata(&ds)) {
        Ok(metadata) => metadata,
        Err(err) => {
            debug!("Rejecting metadata request: {err}");
            return HttpResult::from(&err);
        }
    };

    let labels = locale.labels();
    match serde_json::to_value(&metadata) {
        Ok(value) => HttpResult::Ok(json!({
            "description": labels.shape_sentence(metadata.row_count, metadata.column_count),
            "metadata": value,
        })),
        Err(err) => HttpResult::from(&SummaryError::from(err)),
    }
}
