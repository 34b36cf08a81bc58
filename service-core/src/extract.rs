//! Request extractors that report failures as [`AppError`].

use crate::error::AppError;
use axum::{
    Json,
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

/// JSON body extractor whose rejection is rendered through [`AppError`],
/// so a missing field or malformed body gets the same error envelope as
/// every other failure.
///
/// A request without a `Content-Type` header is still parsed as JSON; a
/// header naming anything other than JSON is rejected with 415.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(JsonRejection::from)?;
        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}

/// Like [`ApiJson`], but a JSON `Content-Type` header is mandatory.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for StrictApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
