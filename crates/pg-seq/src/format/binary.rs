//! PostgreSQL binary array format.
//!
//! This is the payload `array_send`/`array_recv` exchange for array columns
//! in the binary protocol (and inside COPY BINARY rows).
//!
//! Header: ndim (4 bytes) + has_null flag (4 bytes) + element OID (4 bytes)
//! Each dimension: length (4 bytes) + lower bound (4 bytes)
//! Each element: length (4 bytes, -1 for NULL) + data
//!
//! All integers are big-endian. Only one-dimensional arrays without NULL
//! elements are supported.

use bytes::{Buf, BufMut, BytesMut};
use tracing::trace;

use crate::config::CodecConfig;
use crate::error::{Result, SeqError};
use crate::model::ArrayElement;

/// Fixed header size: ndim (4) + has_null (4) + element OID (4).
pub const HEADER_SIZE: usize = 12;

/// Size of one dimension descriptor: length (4) + lower bound (4).
pub const DIMENSION_SIZE: usize = 8;

/// Lower bound written when the caller does not pick one.
///
/// The minimum representable bound, used as a "default indexing" sentinel.
pub const DEFAULT_LOWER_BOUND: i32 = i32::MIN;

/// Fixed array header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayHeader {
    /// Number of dimensions. Zero for an empty array.
    pub ndim: i32,
    /// 1 if any element is NULL, else 0.
    pub has_null: i32,
    /// OID of the element type.
    pub element_oid: u32,
}

impl ArrayHeader {
    pub fn write(&self, buf: &mut BytesMut) {
        buf.put_i32(self.ndim);
        buf.put_i32(self.has_null);
        buf.put_u32(self.element_oid);
    }

    /// Read the header. The caller guarantees `HEADER_SIZE` bytes.
    pub fn read(buf: &mut &[u8]) -> Self {
        Self {
            ndim: buf.get_i32(),
            has_null: buf.get_i32(),
            element_oid: buf.get_u32(),
        }
    }
}

/// Per-dimension descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionDescriptor {
    /// Number of elements along this dimension.
    pub length: i32,
    /// Index of the first element.
    pub lower_bound: i32,
}

impl DimensionDescriptor {
    pub fn write(&self, buf: &mut BytesMut) {
        buf.put_i32(self.length);
        buf.put_i32(self.lower_bound);
    }

    /// Read the descriptor. The caller guarantees `DIMENSION_SIZE` bytes.
    pub fn read(buf: &mut &[u8]) -> Self {
        Self {
            length: buf.get_i32(),
            lower_bound: buf.get_i32(),
        }
    }
}

/// Safely convert an element count to the i32 carried on the wire.
///
/// Counts this large cannot be stored by PostgreSQL anyway; the value is
/// capped rather than wrapped.
#[inline]
fn safe_length_i32(len: usize) -> i32 {
    if len > i32::MAX as usize {
        debug_assert!(
            false,
            "Array length {} exceeds PostgreSQL limit of {} elements",
            len,
            i32::MAX
        );
        i32::MAX
    } else {
        len as i32
    }
}

/// Encode a one-dimensional array. Never fails.
///
/// An empty slice still gets one dimension, with length 0 and no element
/// bytes.
pub fn encode<T: ArrayElement>(items: &[T], lower_bound: i32, buf: &mut BytesMut) {
    buf.reserve(HEADER_SIZE + DIMENSION_SIZE + items.len() * (4 + T::WIDTH));

    ArrayHeader {
        ndim: 1,
        has_null: 0,
        element_oid: T::ELEMENT_TYPE.oid(),
    }
    .write(buf);

    DimensionDescriptor {
        length: safe_length_i32(items.len()),
        lower_bound,
    }
    .write(buf);

    for item in items {
        buf.put_i32(T::WIDTH as i32);
        item.put(buf);
    }
}

/// Decode a one-dimensional array.
///
/// The payload must match its header exactly: the declared element type,
/// one dimension (or zero for an empty array), no NULL elements, and no
/// bytes after the last element.
pub fn decode<T: ArrayElement>(raw: &[u8], config: &CodecConfig) -> Result<Vec<T>> {
    let mut buf = raw;

    if buf.remaining() < HEADER_SIZE {
        return Err(SeqError::malformed(format!(
            "need {} header bytes, have {}",
            HEADER_SIZE,
            buf.remaining()
        )));
    }
    let header = ArrayHeader::read(&mut buf);
    trace!(?header, "Parsed binary array header");

    if header.has_null != 0 && header.has_null != 1 {
        return Err(SeqError::malformed(format!(
            "invalid has_null flag {}",
            header.has_null
        )));
    }

    let expected_oid = T::ELEMENT_TYPE.oid();
    if header.element_oid != expected_oid {
        return Err(SeqError::malformed(format!(
            "element type OID {} does not match {} ({})",
            header.element_oid,
            expected_oid,
            T::ELEMENT_TYPE.name()
        )));
    }

    let len = match header.ndim {
        0 => 0,
        1 => {
            if buf.remaining() < DIMENSION_SIZE {
                return Err(SeqError::malformed(format!(
                    "need {} dimension bytes, have {}",
                    DIMENSION_SIZE,
                    buf.remaining()
                )));
            }
            let dim = DimensionDescriptor::read(&mut buf);
            if dim.length < 0 {
                return Err(SeqError::malformed(format!(
                    "negative dimension length {}",
                    dim.length
                )));
            }
            dim.length as usize
        }
        n if n > 1 => {
            return Err(SeqError::malformed(format!(
                "{} dimensions declared, only one-dimensional arrays are supported",
                n
            )));
        }
        n => {
            return Err(SeqError::malformed(format!(
                "invalid dimension count {}",
                n
            )));
        }
    };
    config.check_len(len).map_err(SeqError::MalformedPayload)?;

    // Never trust the declared length for the allocation size.
    let mut items = Vec::with_capacity(len.min(buf.remaining() / (4 + T::WIDTH)));
    for index in 0..len {
        if buf.remaining() < 4 {
            return Err(SeqError::malformed(format!(
                "truncated before element {} of {}",
                index, len
            )));
        }
        let field_len = buf.get_i32();
        if field_len == -1 {
            return Err(SeqError::malformed(format!(
                "NULL element at index {}",
                index
            )));
        }
        if field_len != T::WIDTH as i32 {
            return Err(SeqError::malformed(format!(
                "element {} has length {}, expected {}",
                index,
                field_len,
                T::WIDTH
            )));
        }
        if buf.remaining() < T::WIDTH {
            return Err(SeqError::malformed(format!(
                "element {} truncated: need {} bytes, have {}",
                index,
                T::WIDTH,
                buf.remaining()
            )));
        }
        items.push(T::get(&mut buf));
    }

    if buf.has_remaining() {
        return Err(SeqError::malformed(format!(
            "{} trailing bytes after {} elements",
            buf.remaining(),
            len
        )));
    }

    Ok(items)
}
