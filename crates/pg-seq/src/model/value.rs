//! Driver-facing value representation.
//!
//! A text-mode driver does not know about sequence types; it hands over
//! whatever it read for the column. [`DriverValue`] models those shapes so
//! the codecs can accept raw text and reject everything else with a typed
//! error.

use std::borrow::Cow;

use uuid::Uuid;

/// Value handed over by (or to) a database driver.
///
/// Uses `Cow` for string and byte data so a scan can borrow straight from the
/// driver's row buffer.
///
/// # Example
///
/// ```rust
/// use pg_seq::{DriverValue, IntSequence};
///
/// let mut seq = IntSequence::default();
/// seq.scan(Some(&DriverValue::bytes_borrowed(b"{1,2,3}"))).unwrap();
/// assert_eq!(seq.as_slice(), &[1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue<'a> {
    /// SQL NULL.
    Null,

    /// Boolean value.
    Bool(bool),

    /// 64-bit signed integer.
    I64(i64),

    /// 64-bit floating point.
    F64(f64),

    /// Text data with zero-copy support.
    Text(Cow<'a, str>),

    /// Raw bytes with zero-copy support. This is what text-mode array columns
    /// arrive as.
    Bytes(Cow<'a, [u8]>),

    /// UUID value.
    Uuid(Uuid),
}

impl<'a> DriverValue<'a> {
    /// Convert to a fully owned value with `'static` lifetime.
    #[must_use]
    pub fn into_owned(self) -> DriverValue<'static> {
        match self {
            DriverValue::Null => DriverValue::Null,
            DriverValue::Bool(v) => DriverValue::Bool(v),
            DriverValue::I64(v) => DriverValue::I64(v),
            DriverValue::F64(v) => DriverValue::F64(v),
            DriverValue::Text(v) => DriverValue::Text(Cow::Owned(v.into_owned())),
            DriverValue::Bytes(v) => DriverValue::Bytes(Cow::Owned(v.into_owned())),
            DriverValue::Uuid(v) => DriverValue::Uuid(v),
        }
    }

    /// Check if this value is NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }

    /// Short name of the variant, used in type mismatch errors.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Bool(_) => "bool",
            DriverValue::I64(_) => "i64",
            DriverValue::F64(_) => "f64",
            DriverValue::Text(_) => "text",
            DriverValue::Bytes(_) => "bytes",
            DriverValue::Uuid(_) => "uuid",
        }
    }

    /// Borrow the raw textual content, if this value carries any.
    #[must_use]
    pub fn as_raw_text(&self) -> Option<&[u8]> {
        match self {
            DriverValue::Bytes(b) => Some(b),
            DriverValue::Text(s) => Some(s.as_bytes()),
            _ => None,
        }
    }
}

// Convenience constructors for common cases
impl<'a> DriverValue<'a> {
    /// Create a text value from a borrowed string slice.
    #[must_use]
    pub fn text_borrowed(s: &'a str) -> Self {
        DriverValue::Text(Cow::Borrowed(s))
    }

    /// Create a bytes value from a borrowed byte slice.
    #[must_use]
    pub fn bytes_borrowed(b: &'a [u8]) -> Self {
        DriverValue::Bytes(Cow::Borrowed(b))
    }

    /// Create a bytes value from an owned Vec<u8>.
    #[must_use]
    pub fn bytes_owned(b: Vec<u8>) -> DriverValue<'static> {
        DriverValue::Bytes(Cow::Owned(b))
    }
}

impl From<bool> for DriverValue<'static> {
    fn from(v: bool) -> Self {
        DriverValue::Bool(v)
    }
}

impl From<i64> for DriverValue<'static> {
    fn from(v: i64) -> Self {
        DriverValue::I64(v)
    }
}

impl From<f64> for DriverValue<'static> {
    fn from(v: f64) -> Self {
        DriverValue::F64(v)
    }
}

impl From<String> for DriverValue<'static> {
    fn from(v: String) -> Self {
        DriverValue::Text(Cow::Owned(v))
    }
}

impl<'a> From<&'a str> for DriverValue<'a> {
    fn from(v: &'a str) -> Self {
        DriverValue::Text(Cow::Borrowed(v))
    }
}

impl From<Vec<u8>> for DriverValue<'static> {
    fn from(v: Vec<u8>) -> Self {
        DriverValue::Bytes(Cow::Owned(v))
    }
}

impl<'a> From<&'a [u8]> for DriverValue<'a> {
    fn from(v: &'a [u8]) -> Self {
        DriverValue::Bytes(Cow::Borrowed(v))
    }
}

impl From<Uuid> for DriverValue<'static> {
    fn from(v: Uuid) -> Self {
        DriverValue::Uuid(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_owned() {
        let raw = b"{1}".to_vec();
        let borrowed = DriverValue::bytes_borrowed(&raw);
        let owned: DriverValue<'static> = borrowed.into_owned();
        drop(raw);
        assert_eq!(owned, DriverValue::Bytes(Cow::Owned(b"{1}".to_vec())));
    }

    #[test]
    fn test_as_raw_text() {
        assert_eq!(
            DriverValue::text_borrowed("{}").as_raw_text(),
            Some(&b"{}"[..])
        );
        assert_eq!(
            DriverValue::bytes_borrowed(b"{1}").as_raw_text(),
            Some(&b"{1}"[..])
        );
        assert_eq!(DriverValue::I64(3).as_raw_text(), None);
        assert_eq!(DriverValue::Null.as_raw_text(), None);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(DriverValue::Null.type_name(), "null");
        assert_eq!(DriverValue::from(1.5f64).type_name(), "f64");
        assert_eq!(DriverValue::from(Uuid::nil()).type_name(), "uuid");
        assert!(DriverValue::Null.is_null());
        assert!(!DriverValue::from(true).is_null());
    }

    #[test]
    fn test_from_implementations() {
        let v: DriverValue<'static> = 42i64.into();
        assert_eq!(v, DriverValue::I64(42));

        let v: DriverValue<'static> = "hello".to_string().into();
        assert_eq!(v, DriverValue::Text(Cow::Owned("hello".to_string())));

        let v: DriverValue<'static> = vec![b'{', b'}'].into();
        assert_eq!(v.as_raw_text(), Some(&b"{}"[..]));
    }
}
