//! JSON arrays of string tokens.
//!
//! Sequences are always written as arrays of strings (`["34","543"]`) so that
//! consumers whose numbers are IEEE doubles do not round 64-bit integers.
//! Reading accepts that shape first and, for integers, falls back to an array
//! of native numbers (`[34,543]`).

use serde::Deserialize;
use tracing::debug;

use crate::config::CodecConfig;
use crate::error::{Result, SeqError};
use crate::model::ArrayElement;

/// The payload shapes a decode will attempt, in order.
enum JsonShape<T> {
    /// `["34","543"]`: tokens still to be parsed.
    Strings(Vec<String>),
    /// `[34,543]`: already typed.
    Numbers(Vec<T>),
}

/// Render a JSON array of string tokens.
pub fn encode<T: ArrayElement>(items: &[T]) -> Result<String> {
    let tokens: Vec<String> = items.iter().map(ArrayElement::token).collect();
    Ok(serde_json::to_string(&tokens)?)
}

/// Parse a JSON payload.
pub fn decode<T: ArrayElement>(raw: &[u8], config: &CodecConfig) -> Result<Vec<T>> {
    let value: serde_json::Value =
        serde_json::from_slice(raw).map_err(SeqError::UnsupportedJsonShape)?;
    decode_value(&value, config)
}

/// Decode an already parsed JSON value.
///
/// `null` decodes to an empty vector.
pub fn decode_value<T: ArrayElement>(
    value: &serde_json::Value,
    config: &CodecConfig,
) -> Result<Vec<T>> {
    if value.is_null() {
        return Ok(Vec::new());
    }

    let items = match detect_shape::<T>(value, config)? {
        JsonShape::Strings(tokens) => tokens
            .iter()
            .map(|token| T::parse_token(token))
            .collect::<Result<Vec<T>>>()?,
        JsonShape::Numbers(items) => items,
    };

    config
        .check_len(items.len())
        .map_err(SeqError::MalformedLiteral)?;
    Ok(items)
}

fn detect_shape<T: ArrayElement>(
    value: &serde_json::Value,
    config: &CodecConfig,
) -> Result<JsonShape<T>> {
    let strings_err = match Vec::<String>::deserialize(value) {
        Ok(tokens) => return Ok(JsonShape::Strings(tokens)),
        Err(e) => e,
    };

    if !config.json.accept_numbers {
        return Err(SeqError::UnsupportedJsonShape(strings_err));
    }

    debug!(
        "JSON payload is not an array of strings ({}), trying {} numbers",
        strings_err,
        T::KIND
    );
    T::from_json_numbers(value)
        .map(JsonShape::Numbers)
        .map_err(SeqError::UnsupportedJsonShape)
}
