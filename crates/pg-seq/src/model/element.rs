//! Element types an array sequence may hold.
//!
//! Each element type knows its PostgreSQL type OIDs, its fixed binary width,
//! and its textual token form. The trait is sealed: sequences exist only for
//! `i64` and [`Uuid`].

use std::fmt::Debug;
use std::hash::Hash;

use bytes::{Buf, BufMut, BytesMut};
use tokio_postgres::types::Type;
use uuid::Uuid;

use crate::error::{Result, SeqError};

mod sealed {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for uuid::Uuid {}
}

/// A scalar that can be stored in a one-dimensional PostgreSQL array.
pub trait ArrayElement:
    sealed::Sealed + Copy + Debug + Eq + Hash + Send + Sync + 'static
{
    /// Human readable element name used in error messages.
    const KIND: &'static str;

    /// PostgreSQL type of a single element.
    const ELEMENT_TYPE: Type;

    /// PostgreSQL type of the array column.
    const ARRAY_TYPE: Type;

    /// Size in bytes of one element on the binary wire.
    const WIDTH: usize;

    /// Append the big-endian wire form (without length prefix).
    fn put(&self, buf: &mut BytesMut);

    /// Read one element. The caller guarantees `WIDTH` bytes are available.
    fn get(buf: &mut &[u8]) -> Self;

    /// Parse one textual token.
    fn parse_token(token: &str) -> Result<Self>;

    /// Textual token form, as used in literals, clauses and JSON strings.
    fn token(&self) -> String;

    /// Decode the native-number JSON shape, if the element type has one.
    fn from_json_numbers(
        value: &serde_json::Value,
    ) -> std::result::Result<Vec<Self>, serde_json::Error>;
}

impl ArrayElement for i64 {
    const KIND: &'static str = "integer";
    const ELEMENT_TYPE: Type = Type::INT8;
    const ARRAY_TYPE: Type = Type::INT8_ARRAY;
    const WIDTH: usize = 8;

    fn put(&self, buf: &mut BytesMut) {
        buf.put_i64(*self);
    }

    fn get(buf: &mut &[u8]) -> Self {
        buf.get_i64()
    }

    fn parse_token(token: &str) -> Result<Self> {
        token
            .parse::<i64>()
            .map_err(|e| SeqError::parse(token, Self::KIND, e))
    }

    fn token(&self) -> String {
        self.to_string()
    }

    fn from_json_numbers(
        value: &serde_json::Value,
    ) -> std::result::Result<Vec<Self>, serde_json::Error> {
        use serde::Deserialize;
        Vec::<i64>::deserialize(value)
    }
}

impl ArrayElement for Uuid {
    const KIND: &'static str = "uuid";
    const ELEMENT_TYPE: Type = Type::UUID;
    const ARRAY_TYPE: Type = Type::UUID_ARRAY;
    const WIDTH: usize = 16;

    fn put(&self, buf: &mut BytesMut) {
        buf.put_slice(self.as_bytes());
    }

    fn get(buf: &mut &[u8]) -> Self {
        let mut uuid_bytes = [0u8; 16];
        buf.copy_to_slice(&mut uuid_bytes);
        Uuid::from_bytes(uuid_bytes)
    }

    fn parse_token(token: &str) -> Result<Self> {
        Uuid::parse_str(token).map_err(|e| SeqError::parse(token, Self::KIND, e))
    }

    fn token(&self) -> String {
        self.hyphenated().to_string()
    }

    fn from_json_numbers(
        _value: &serde_json::Value,
    ) -> std::result::Result<Vec<Self>, serde_json::Error> {
        Err(<serde_json::Error as serde::de::Error>::custom(
            "uuid arrays have no numeric JSON form",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i64_wire_form() {
        let mut buf = BytesMut::new();
        (-2i64).put(&mut buf);
        assert_eq!(&buf[..], &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE]);

        let mut raw: &[u8] = &buf;
        assert_eq!(i64::get(&mut raw), -2);
        assert!(raw.is_empty());
    }

    #[test]
    fn test_uuid_wire_form() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let mut buf = BytesMut::new();
        uuid.put(&mut buf);
        assert_eq!(buf.len(), Uuid::WIDTH);

        let mut raw: &[u8] = &buf;
        assert_eq!(Uuid::get(&mut raw), uuid);
    }

    #[test]
    fn test_i64_tokens() {
        assert_eq!(i64::parse_token("-42").unwrap(), -42);
        assert_eq!(i64::parse_token("+7").unwrap(), 7);
        assert_eq!(i64::MAX.token(), "9223372036854775807");
        assert!(matches!(
            i64::parse_token("4x"),
            Err(SeqError::Parse { ref token, kind: "integer", .. }) if token == "4x"
        ));
        assert!(i64::parse_token("9223372036854775808").is_err());
    }

    #[test]
    fn test_uuid_tokens() {
        let uuid = Uuid::parse_str("550E8400-E29B-41D4-A716-446655440000").unwrap();
        assert_eq!(uuid.token(), "550e8400-e29b-41d4-a716-446655440000");
        assert!(matches!(
            Uuid::parse_token("not-a-uuid"),
            Err(SeqError::Parse { kind: "uuid", .. })
        ));
    }

    #[test]
    fn test_type_oids() {
        assert_eq!(i64::ELEMENT_TYPE.oid(), 20);
        assert_eq!(i64::ARRAY_TYPE.oid(), 1016);
        assert_eq!(Uuid::ELEMENT_TYPE.oid(), 2950);
        assert_eq!(Uuid::ARRAY_TYPE.oid(), 2951);
    }
}
