//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from a resource description.

use super::SqlValue;
use crate::model::Resource;

/// Quote identifier for PostgreSQL (safe: only from resource descriptions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqlValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// Column list aliased to the row struct's field names: `"id_app" AS "id", "nm_app" AS "nome", ...`.
fn select_column_list<R: Resource>() -> String {
    std::iter::once(format!("{} AS \"id\"", quoted(R::PK)))
        .chain(
            R::COLUMNS
                .iter()
                .map(|c| format!("{} AS {}", quoted(c.name), quoted(c.field))),
        )
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT by primary key.
pub fn select_by_id<R: Resource>(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(SqlValue::BigInt(Some(id)));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list::<R>(),
        quoted(R::TABLE),
        quoted(R::PK),
        n
    );
    q
}

/// SELECT one page ordered by primary key.
pub fn select_page<R: Resource>(limit: u32, offset: u64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {} LIMIT {} OFFSET {}",
        select_column_list::<R>(),
        quoted(R::TABLE),
        quoted(R::PK),
        limit,
        offset
    );
    q
}

pub fn count<R: Resource>() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT COUNT(*) FROM {}", quoted(R::TABLE));
    q
}

/// INSERT every non-key column; the key is generated by the database.
pub fn insert<R: Resource>(values: Vec<SqlValue>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::with_capacity(R::COLUMNS.len());
    let mut placeholders = Vec::with_capacity(R::COLUMNS.len());
    for (col, v) in R::COLUMNS.iter().zip(values) {
        let n = q.push_param(v);
        cols.push(quoted(col.name));
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(R::TABLE),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list::<R>()
    );
    q
}

/// UPDATE the updatable columns of one row. `values` is aligned with `R::COLUMNS`;
/// entries for create-only columns are dropped.
pub fn update<R: Resource>(id: i64, values: Vec<SqlValue>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut set_parts = Vec::new();
    for (col, v) in R::COLUMNS.iter().zip(values) {
        if !col.updatable {
            continue;
        }
        let n = q.push_param(v);
        set_parts.push(format!("{} = ${}", quoted(col.name), n));
    }
    let id_n = q.push_param(SqlValue::BigInt(Some(id)));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        quoted(R::TABLE),
        set_parts.join(", "),
        quoted(R::PK),
        id_n,
        select_column_list::<R>()
    );
    q
}

/// DELETE by primary key, returning the removed row.
pub fn delete<R: Resource>(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(SqlValue::BigInt(Some(id)));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${} RETURNING {}",
        quoted(R::TABLE),
        quoted(R::PK),
        n,
        select_column_list::<R>()
    );
    q
}
