//! Resource descriptions for the six Sea Kids entities.
//!
//! Each entity is a row struct (decoded with `sqlx::FromRow`, serialized as the API
//! representation) plus a payload struct accepted on create and update. The
//! [`Resource`] impl ties both to the table layout that the SQL builder, validator,
//! handlers and OpenAPI document are generated from.

mod app;
mod cadastro;
mod cliente;
mod curiosidade;
mod login;
mod video;

pub use app::{App, AppPayload};
pub use cadastro::{Cadastro, CadastroPayload};
pub use cliente::{Cliente, ClientePayload};
pub use curiosidade::{Curiosidade, CuriosidadePayload};
pub use login::{Login, LoginPayload};
pub use video::{Video, VideoPayload};

use crate::sql::SqlValue;
use serde::{de::DeserializeOwned, Serialize};
use sqlx::postgres::PgRow;

/// Email pattern applied to every `email` column.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    BigInt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Email,
}

/// Per-column request rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidationRule {
    /// Present, non-null and not blank.
    pub required: bool,
    /// Message reported when a required field is missing or blank.
    pub message: Option<&'static str>,
    pub max_length: Option<usize>,
    pub format: Option<Format>,
}

/// One non-key column: database name, JSON field name, type and rules.
#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub name: &'static str,
    pub field: &'static str,
    pub kind: ColumnKind,
    /// False for foreign keys, which are set on create only.
    pub updatable: bool,
    pub rule: ValidationRule,
}

impl Column {
    pub const fn text(name: &'static str, field: &'static str) -> Self {
        Column {
            name,
            field,
            kind: ColumnKind::Text,
            updatable: true,
            rule: ValidationRule {
                required: false,
                message: None,
                max_length: None,
                format: None,
            },
        }
    }

    pub const fn foreign_key(name: &'static str, field: &'static str) -> Self {
        Column {
            name,
            field,
            kind: ColumnKind::BigInt,
            updatable: false,
            rule: ValidationRule {
                required: false,
                message: None,
                max_length: None,
                format: None,
            },
        }
    }

    pub const fn required(mut self) -> Self {
        self.rule.required = true;
        self
    }

    pub const fn required_msg(mut self, message: &'static str) -> Self {
        self.rule.required = true;
        self.rule.message = Some(message);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.rule.max_length = Some(max);
        self
    }

    pub const fn email(mut self) -> Self {
        self.rule.format = Some(Format::Email);
        self
    }
}

/// Operation summaries used in the OpenAPI document.
#[derive(Clone, Copy, Debug)]
pub struct Docs {
    pub tag: &'static str,
    pub list: &'static str,
    pub get: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

/// A CRUD resource mapped to one table with a `BIGINT` identity key.
pub trait Resource:
    for<'r> sqlx::FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static
{
    type Payload: DeserializeOwned + Send + Sync + 'static;

    const TABLE: &'static str;
    const PK: &'static str;
    /// Non-key columns, in the order [`Resource::values`] yields them.
    const COLUMNS: &'static [Column];
    /// Collection path segment and HAL link relation, e.g. `apps`.
    const PATH: &'static str;
    /// Singular name; the HAL collection embeds items under `{SINGULAR}List`.
    const SINGULAR: &'static str;
    /// Leading words of the not-found message, e.g. `App não encontrado`.
    const NOT_FOUND: &'static str;
    /// Component names of the row and payload schemas.
    const SCHEMA: &'static str;
    const PAYLOAD_SCHEMA: &'static str;
    const DOCS: Docs;

    fn id(&self) -> i64;

    fn values(payload: &Self::Payload) -> Vec<SqlValue>;

    fn not_found_message(id: i64) -> String {
        format!("{} pelo id :: {}", Self::NOT_FOUND, id)
    }

    fn collection_rel() -> String {
        format!("{}List", Self::SINGULAR)
    }
}
