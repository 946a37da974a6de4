//! JSON body extractor whose rejections use the API error envelope.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Like `Json<T>`, but malformed bodies, wrong content types, non-object bodies and
/// type mismatches are all 400.
#[derive(Debug)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => value,
            Err(rejection) => {
                tracing::debug!(status = %rejection.status(), "rejected request body");
                return Err(AppError::BadRequest(rejection.body_text()));
            }
        };
        // Derived payloads would otherwise accept a JSON array as a field sequence.
        if !value.is_object() {
            tracing::debug!("rejected non-object request body");
            return Err(AppError::BadRequest(
                "request body must be a JSON object".into(),
            ));
        }
        serde_json::from_value(value)
            .map(Payload)
            .map_err(|e| AppError::BadRequest(format!("invalid request body: {}", e)))
    }
}
