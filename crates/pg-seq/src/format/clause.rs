//! Membership-clause fragments for `IN (...)` predicates.

use crate::error::{Result, SeqError};
use crate::model::ArrayElement;

/// Render `(e1,e2,...,en)` in input order.
///
/// An empty slice is an error rather than an always-false `()`.
///
/// ```rust
/// use pg_seq::format::clause::in_clause;
///
/// assert_eq!(in_clause(&[34i64, 543, 23, 13]).unwrap(), "(34,543,23,13)");
/// ```
pub fn in_clause<T: ArrayElement>(items: &[T]) -> Result<String> {
    if items.is_empty() {
        return Err(SeqError::EmptyInput { kind: T::KIND });
    }

    let tokens: Vec<String> = items.iter().map(ArrayElement::token).collect();
    Ok(format!("({})", tokens.join(",")))
}
