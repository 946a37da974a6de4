pub mod base_url;
pub mod payload;

pub use base_url::BaseUrl;
pub use payload::Payload;
