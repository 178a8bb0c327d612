//! Inbound request body for `POST` echoes.
//!
//! The declared `Content-Type` picks the variant: JSON media types are parsed
//! as JSON, `application/x-www-form-urlencoded` is decoded into flat string
//! fields, and anything else carries no form fields at all.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::BodyError;

/// Decoded form fields, sorted by key.
pub type FormFields = BTreeMap<String, String>;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// A request body that has been successfully decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Any JSON value (object, array, scalar or `null`).
    Json(Value),
    /// Flat key/value form fields. For repeated keys, the first value wins.
    Form(FormFields),
}

impl RequestBody {
    /// Decode `bytes` according to the declared content type.
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::InvalidJson`] when the content type announces
    /// JSON but the bytes are not valid JSON (an empty body included), and
    /// [`BodyError::InvalidForm`] when form decoding fails.
    pub fn parse(content_type: Option<&str>, bytes: &[u8]) -> Result<Self, BodyError> {
        let essence = content_type.map(media_type).unwrap_or_default();
        if is_json(&essence) {
            return Ok(Self::Json(serde_json::from_slice(bytes)?));
        }
        if essence == FORM_URLENCODED {
            return Ok(Self::Form(decode_form(bytes)?));
        }
        Ok(Self::Form(FormFields::new()))
    }

    /// Convert into the JSON value echoed back under `data`.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Form(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::String(value)))
                    .collect(),
            ),
        }
    }
}

/// Lower-cased media type with parameters stripped
/// (`Application/JSON; charset=utf-8` → `application/json`).
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn is_json(essence: &str) -> bool {
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

fn decode_form(bytes: &[u8]) -> Result<FormFields, BodyError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(bytes)?;
    let mut fields = FormFields::new();
    for (key, value) in pairs {
        fields.entry(key).or_insert(value);
    }
    Ok(fields)
}
