//! # pg-seq
//!
//! Ordered integer and UUID sequences that convert transparently between
//! their in-memory form and the representations they travel in:
//!
//! - **Membership clauses** for `IN (...)` predicates
//! - **PostgreSQL text arrays** (`{1,2,3}`) for text-mode drivers
//! - **PostgreSQL binary arrays** via `tokio-postgres` `ToSql`/`FromSql`
//! - **JSON arrays of strings** via `serde`, so 64-bit values survive
//!   consumers that only have doubles
//!
//! ## Example
//!
//! ```rust
//! use pg_seq::IntSequence;
//!
//! let ids = IntSequence::from(vec![34, 543, 23, 13]);
//! assert_eq!(ids.in_clause()?, "(34,543,23,13)");
//! assert_eq!(ids.to_sql_text(), "{34,543,23,13}");
//! assert_eq!(ids.to_json()?, r#"["34","543","23","13"]"#);
//!
//! let back = IntSequence::from_json(br#"[34,543,23,13]"#)?;
//! assert_eq!(back, ids);
//! # Ok::<(), pg_seq::SeqError>(())
//! ```

pub mod config;
pub mod model;
pub mod error;
pub mod format;
pub mod sequence;

// Re-exports for convenient access
pub use config::{BinaryConfig, CodecConfig, JsonConfig, TextConfig};
pub use model::{ArrayElement, DriverValue};
pub use error::{Result, SeqError};
pub use sequence::{IntSequence, Sequence, UuidSequence};
