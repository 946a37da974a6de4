//! Safe SQL builder: identifiers from resource descriptions only, values as parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
