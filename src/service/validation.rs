//! Request validation from per-column rules.

use crate::error::{AppError, FieldError};
use crate::model::{Column, Format, EMAIL_PATTERN};
use crate::sql::SqlValue;
use regex::Regex;
use std::sync::OnceLock;

pub const BLANK_MESSAGE: &str = "não deve estar em branco";
pub const EMAIL_MESSAGE: &str = "Formato de email inválido";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

pub struct RequestValidator;

impl RequestValidator {
    /// Validate `values` (aligned with `columns`) and report every failing field at once.
    pub fn validate(columns: &[Column], values: &[SqlValue]) -> Result<(), AppError> {
        let errors: Vec<FieldError> = columns
            .iter()
            .zip(values)
            .filter_map(|(col, v)| validate_field(col, v).err())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

fn validate_field(col: &Column, v: &SqlValue) -> Result<(), FieldError> {
    let rule = &col.rule;
    let text = v.as_text();
    if rule.required && (v.is_null() || text.is_some_and(|s| s.trim().is_empty())) {
        return Err(FieldError::new(col.field, rule.message.unwrap_or(BLANK_MESSAGE)));
    }
    let Some(s) = text else {
        return Ok(());
    };
    if let Some(max) = rule.max_length {
        if s.chars().count() > max {
            return Err(FieldError::new(
                col.field,
                format!("deve ter no máximo {} caracteres", max),
            ));
        }
    }
    if let Some(Format::Email) = rule.format {
        if !email_regex().is_match(s) {
            return Err(FieldError::new(col.field, EMAIL_MESSAGE));
        }
    }
    Ok(())
}
