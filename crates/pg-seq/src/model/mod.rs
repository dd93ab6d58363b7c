//! Core abstractions shared by every codec.
//!
//! - [`value`]: the value shape a database driver hands to a text-mode scan
//! - [`element`]: the element types an array sequence may hold

pub mod element;
pub mod value;

pub use element::ArrayElement;
pub use value::DriverValue;
