//! PostgreSQL text array literals.
//!
//! Format: `{e1,e2,...,en}`, `{}` for the empty array. When an array's lower
//! bound is not 1 the server prefixes the literal with its bounds, e.g.
//! `[0:2]={7,8,9}`; that decoration is accepted and checked against the
//! element count.

use tracing::trace;

use crate::config::CodecConfig;
use crate::error::{Result, SeqError};
use crate::model::ArrayElement;

/// Render `{e1,...,en}`, or `{}` for an empty slice. Never fails.
pub fn encode<T: ArrayElement>(items: &[T]) -> String {
    let tokens: Vec<String> = items.iter().map(ArrayElement::token).collect();
    format!("{{{}}}", tokens.join(","))
}

/// Parse a text array literal.
///
/// All whitespace is removed before parsing. Empty tokens are skipped, so
/// `{}` and `{,}` both decode to an empty vector.
pub fn decode<T: ArrayElement>(raw: &[u8], config: &CodecConfig) -> Result<Vec<T>> {
    let text = std::str::from_utf8(raw)
        .map_err(|e| SeqError::MalformedLiteral(format!("not valid UTF-8: {}", e)))?;

    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let (bounds, literal) = split_bounds(&compact)?;
    let body = strip_envelope(literal, config.text.strict_envelope)?;

    let mut items = Vec::new();
    for token in body.split(',') {
        if token.is_empty() {
            continue;
        }
        items.push(T::parse_token(token)?);
    }

    if let Some(expected) = bounds {
        if items.len() as i64 != expected {
            return Err(SeqError::MalformedLiteral(format!(
                "dimension decoration declares {} elements, literal has {}",
                expected,
                items.len()
            )));
        }
    }
    config
        .check_len(items.len())
        .map_err(SeqError::MalformedLiteral)?;

    trace!("Decoded {} {} elements from text literal", items.len(), T::KIND);
    Ok(items)
}

/// Split an optional `[lb:ub]=` prefix, returning the declared element count.
fn split_bounds(literal: &str) -> Result<(Option<i64>, &str)> {
    if !literal.starts_with('[') {
        return Ok((None, literal));
    }

    let (decoration, rest) = literal.split_once("]=").ok_or_else(|| {
        SeqError::MalformedLiteral(format!("unterminated dimension decoration in '{}'", literal))
    })?;

    let invalid = || {
        SeqError::MalformedLiteral(format!("invalid dimension decoration '{}]'", decoration))
    };
    let (lower, upper) = decoration[1..].split_once(':').ok_or_else(invalid)?;
    let lower = i64::from(lower.parse::<i32>().map_err(|_| invalid())?);
    let upper = i64::from(upper.parse::<i32>().map_err(|_| invalid())?);
    if upper < lower - 1 {
        return Err(invalid());
    }

    Ok((Some(upper - lower + 1), rest))
}

/// Remove the `{...}` envelope.
///
/// Strict mode requires the braces. Lenient mode drops the first and last
/// character without looking at them.
fn strip_envelope(literal: &str, strict: bool) -> Result<&str> {
    if strict {
        return literal
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or_else(|| {
                SeqError::MalformedLiteral(format!("expected '{{...}}', got '{}'", literal))
            });
    }

    let mut chars = literal.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return Err(SeqError::MalformedLiteral(format!(
            "literal '{}' is too short to carry an envelope",
            literal
        )));
    }
    Ok(chars.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TextConfig;
    use uuid::Uuid;

    fn lenient() -> CodecConfig {
        CodecConfig {
            text: TextConfig {
                strict_envelope: false,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(&[1i64, 2, 3]), "{1,2,3}");
        assert_eq!(encode::<i64>(&[]), "{}");
        assert_eq!(encode(&[-5i64]), "{-5}");
    }

    #[test]
    fn test_decode() {
        let config = CodecConfig::default();
        assert_eq!(decode::<i64>(b"{1,2,3}", &config).unwrap(), vec![1, 2, 3]);
        assert_eq!(decode::<i64>(b"{}", &config).unwrap(), Vec::<i64>::new());
        assert_eq!(decode::<i64>(b"{,}", &config).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_decode_strips_whitespace() {
        let config = CodecConfig::default();
        assert_eq!(
            decode::<i64>(b" { 1, 2 ,\n3 } ", &config).unwrap(),
            vec![1, 2, 3]
        );
        assert_eq!(decode::<i64>(b"{ }", &config).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_decode_bad_token() {
        let err = decode::<i64>(b"{1,two,3}", &CodecConfig::default()).unwrap_err();
        assert!(matches!(err, SeqError::Parse { ref token, .. } if token == "two"));
    }

    #[test]
    fn test_strict_envelope() {
        let config = CodecConfig::default();
        assert!(matches!(
            decode::<i64>(b"[1,2]", &config),
            Err(SeqError::MalformedLiteral(_))
        ));
        assert!(matches!(
            decode::<i64>(b"{1,2", &config),
            Err(SeqError::MalformedLiteral(_))
        ));
        assert!(matches!(
            decode::<i64>(b"", &config),
            Err(SeqError::MalformedLiteral(_))
        ));
    }

    #[test]
    fn test_lenient_envelope() {
        let config = lenient();
        assert_eq!(decode::<i64>(b"(1,2)", &config).unwrap(), vec![1, 2]);
        assert_eq!(decode::<i64>(b"{}", &config).unwrap(), Vec::<i64>::new());
        assert!(matches!(
            decode::<i64>(b"{", &config),
            Err(SeqError::MalformedLiteral(_))
        ));
    }

    #[test]
    fn test_dimension_decoration() {
        let config = CodecConfig::default();
        assert_eq!(
            decode::<i64>(b"[0:2]={7,8,9}", &config).unwrap(),
            vec![7, 8, 9]
        );
        assert_eq!(
            decode::<i64>(b"[-2147483648:-2147483647]={1,2}", &config).unwrap(),
            vec![1, 2]
        );
        assert!(matches!(
            decode::<i64>(b"[0:5]={7,8,9}", &config),
            Err(SeqError::MalformedLiteral(_))
        ));
        assert!(matches!(
            decode::<i64>(b"[1:2][1:1]={{1},{2}}", &config),
            Err(SeqError::MalformedLiteral(_))
        ));
    }

    #[test]
    fn test_max_elements() {
        let config = CodecConfig {
            max_elements: Some(2),
            ..Default::default()
        };
        assert!(decode::<i64>(b"{1,2}", &config).is_ok());
        assert!(matches!(
            decode::<i64>(b"{1,2,3}", &config),
            Err(SeqError::MalformedLiteral(_))
        ));
    }

    #[test]
    fn test_uuid_literal() {
        let a = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let literal = encode(&[a, Uuid::nil()]);
        assert_eq!(
            literal,
            "{550e8400-e29b-41d4-a716-446655440000,00000000-0000-0000-0000-000000000000}"
        );
        assert_eq!(
            decode::<Uuid>(literal.as_bytes(), &CodecConfig::default()).unwrap(),
            vec![a, Uuid::nil()]
        );
    }

    #[test]
    fn test_invalid_utf8() {
        assert!(matches!(
            decode::<i64>(&[b'{', 0xFF, b'}'], &CodecConfig::default()),
            Err(SeqError::MalformedLiteral(_))
        ));
    }
}
