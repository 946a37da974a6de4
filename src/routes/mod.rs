//! Route assembly.

pub mod common;
pub mod docs;
pub mod entity;

pub use common::common_routes;
pub use docs::{api_doc, docs_routes};
pub use entity::{entity_routes, resource_routes};
