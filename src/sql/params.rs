//! Typed bind values for the statements produced by the builder.

use crate::model::ColumnKind;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;

/// A nullable value bound to one `$n` placeholder. The variant matches the column type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SqlValue {
    Text(Option<String>),
    BigInt(Option<i64>),
}

impl SqlValue {
    pub fn kind(&self) -> ColumnKind {
        match self {
            SqlValue::Text(_) => ColumnKind::Text,
            SqlValue::BigInt(_) => ColumnKind::BigInt,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SqlValue::Text(s) => s.as_deref(),
            SqlValue::BigInt(_) => None,
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            SqlValue::Text(s) => s.is_none(),
            SqlValue::BigInt(n) => n.is_none(),
        }
    }
}

/// Bind `params` in placeholder order.
pub fn bind_all<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    params: &[SqlValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for p in params {
        query = match p {
            SqlValue::Text(s) => query.bind(s.clone()),
            SqlValue::BigInt(n) => query.bind(*n),
        };
    }
    query
}
