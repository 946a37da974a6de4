//! CrudService: generic CRUD over any [`crate::model::Resource`] using the safe SQL builder.

mod crud;
mod validation;
pub use crud::{CrudService, Page, PageRequest};
pub use validation::{RequestValidator, BLANK_MESSAGE, EMAIL_MESSAGE};
