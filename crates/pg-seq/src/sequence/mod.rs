//! Ordered sequences that convert to and from every external representation.
//!
//! [`Sequence`] is a thin owned wrapper over `Vec<T>`. The two concrete types
//! are [`IntSequence`] and [`UuidSequence`].
//!
//! Decode operations build a fresh vector and only replace the destination
//! once the whole input parsed; a failed [`Sequence::scan`] leaves the
//! destination empty, never half-filled.

mod pg;
mod serde_impl;

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use bytes::{Bytes, BytesMut};
use tracing::trace;
use uuid::Uuid;

use crate::config::CodecConfig;
use crate::error::{Result, SeqError};
use crate::format::{binary, clause, json, text};
use crate::model::{ArrayElement, DriverValue};

/// Ordered, duplicate-permitting sequence of array elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence<T: ArrayElement>(Vec<T>);

/// Sequence of 64-bit signed integers, stored as `int8[]`.
pub type IntSequence = Sequence<i64>;

/// Sequence of UUIDs, stored as `uuid[]`.
pub type UuidSequence = Sequence<Uuid>;

impl<T: ArrayElement> Sequence<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<T> {
        self.0
    }

    /// Build the `(e1,e2,...)` fragment for an `IN` predicate.
    ///
    /// Fails with [`SeqError::EmptyInput`] on an empty sequence.
    pub fn in_clause(&self) -> Result<String> {
        clause::in_clause(&self.0)
    }

    /// Append the binary array payload using the default lower bound.
    pub fn encode_binary(&self, buf: &mut BytesMut) {
        binary::encode(&self.0, binary::DEFAULT_LOWER_BOUND, buf);
    }

    /// Append the binary array payload using the configured lower bound.
    pub fn encode_binary_with(&self, buf: &mut BytesMut, config: &CodecConfig) {
        binary::encode(&self.0, config.binary.lower_bound, buf);
    }

    /// Binary array payload as a standalone buffer.
    pub fn to_binary(&self) -> Bytes {
        let mut buf = BytesMut::new();
        self.encode_binary(&mut buf);
        buf.freeze()
    }

    pub fn from_binary(raw: &[u8]) -> Result<Self> {
        Self::from_binary_with(raw, &CodecConfig::default())
    }

    pub fn from_binary_with(raw: &[u8], config: &CodecConfig) -> Result<Self> {
        binary::decode(raw, config).map(Self)
    }

    /// Text array literal, `{}` when empty.
    pub fn to_sql_text(&self) -> String {
        text::encode(&self.0)
    }

    /// Text array literal as the raw bytes a text-mode driver sends.
    pub fn value(&self) -> DriverValue<'static> {
        DriverValue::bytes_owned(self.to_sql_text().into_bytes())
    }

    pub fn from_sql_text(raw: &[u8]) -> Result<Self> {
        Self::from_sql_text_with(raw, &CodecConfig::default())
    }

    pub fn from_sql_text_with(raw: &[u8], config: &CodecConfig) -> Result<Self> {
        text::decode(raw, config).map(Self)
    }

    /// Populate from a value read by a text-mode driver.
    ///
    /// `None` and [`DriverValue::Null`] give an empty sequence. Raw bytes and
    /// text are parsed as an array literal; any other shape is a
    /// [`SeqError::TypeMismatch`].
    pub fn scan(&mut self, src: Option<&DriverValue<'_>>) -> Result<()> {
        self.scan_with(src, &CodecConfig::default())
    }

    pub fn scan_with(&mut self, src: Option<&DriverValue<'_>>, config: &CodecConfig) -> Result<()> {
        self.0.clear();

        let raw = match src {
            None | Some(DriverValue::Null) => {
                trace!("Scanned NULL {} array as empty sequence", T::KIND);
                return Ok(());
            }
            Some(value) => value.as_raw_text().ok_or(SeqError::TypeMismatch {
                expected: "bytes",
                found: value.type_name(),
            })?,
        };

        self.0 = text::decode(raw, config)?;
        Ok(())
    }

    /// JSON array of string tokens, `[]` when empty.
    pub fn to_json(&self) -> Result<String> {
        json::encode(&self.0)
    }

    pub fn from_json(raw: &[u8]) -> Result<Self> {
        Self::from_json_with(raw, &CodecConfig::default())
    }

    pub fn from_json_with(raw: &[u8], config: &CodecConfig) -> Result<Self> {
        json::decode(raw, config).map(Self)
    }
}

impl<T: ArrayElement> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ArrayElement> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T: ArrayElement> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T: ArrayElement> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T: ArrayElement> From<Sequence<T>> for Vec<T> {
    fn from(seq: Sequence<T>) -> Self {
        seq.0
    }
}

impl<T: ArrayElement> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: ArrayElement> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: ArrayElement> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Formats as the text array literal.
impl<T: ArrayElement> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql_text())
    }
}

/// Parses a text array literal with the default configuration.
impl<T: ArrayElement> FromStr for Sequence<T> {
    type Err = SeqError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_sql_text(s.as_bytes())
    }
}
