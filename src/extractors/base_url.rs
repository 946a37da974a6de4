//! Extract the absolute URL prefix used for HAL links.

use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};

pub const FORWARDED_PROTO_HEADER: &str = "X-Forwarded-Proto";
pub const FORWARDED_HOST_HEADER: &str = "X-Forwarded-Host";

/// `scheme://host[:port]` without trailing slash. `PUBLIC_BASE_URL` wins over request headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(pub String);

impl BaseUrl {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                // Proxies may append a list; the first entry is the client-facing one.
                .and_then(|s| s.split(',').next())
                .map(str::trim)
                .filter(|s| !s.is_empty())
        };
        let scheme = header(FORWARDED_PROTO_HEADER).unwrap_or("http");
        let host = header(FORWARDED_HOST_HEADER)
            .or_else(|| header(axum::http::header::HOST.as_str()))
            .unwrap_or("localhost");
        BaseUrl(format!("{}://{}", scheme, host))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl FromRequestParts<AppState> for BaseUrl {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some(base) = &state.config.public_base_url {
            return Ok(BaseUrl(base.clone()));
        }
        Ok(BaseUrl::from_headers(&parts.headers))
    }
}
