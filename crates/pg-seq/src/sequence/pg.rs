//! `tokio-postgres` binary protocol hooks.

use std::error::Error;

use bytes::BytesMut;
use tokio_postgres::types::{to_sql_checked, FromSql, IsNull, ToSql, Type};

use super::Sequence;
use crate::model::ArrayElement;

impl<T: ArrayElement> ToSql for Sequence<T> {
    fn to_sql(
        &self,
        _ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        self.encode_binary(out);
        Ok(IsNull::No)
    }

    fn accepts(ty: &Type) -> bool {
        *ty == T::ARRAY_TYPE
    }

    to_sql_checked!();
}

impl<'a, T: ArrayElement> FromSql<'a> for Sequence<T> {
    fn from_sql(_ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
        Ok(Self::from_binary(raw)?)
    }

    /// A NULL column reads as an empty sequence.
    fn from_sql_null(_ty: &Type) -> Result<Self, Box<dyn Error + Sync + Send>> {
        Ok(Self::new())
    }

    fn accepts(ty: &Type) -> bool {
        *ty == T::ARRAY_TYPE
    }
}
