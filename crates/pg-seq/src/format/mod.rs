//! Wire and text formats for one-dimensional arrays.
//!
//! Each submodule is a leaf: it turns a slice of [`ArrayElement`]s into its
//! external representation and back, without knowing about the sequence
//! wrapper types.
//!
//! - [`clause`]: `(e1,e2,...)` membership-clause fragments
//! - [`text`]: PostgreSQL text array literals, `{e1,e2,...}`
//! - [`binary`]: PostgreSQL binary array payloads
//! - [`json`]: JSON arrays of string tokens
//!
//! [`ArrayElement`]: crate::model::ArrayElement

pub mod binary;
pub mod clause;
pub mod json;
pub mod text;
