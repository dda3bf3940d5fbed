//! JSON body extractor - Maps deserialization failures onto `AppError`.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejection is a `400 BAD_REQUEST` in the standard
/// error body instead of axum's plain-text 415/422 responses.
///
/// # Example
///
/// ```rust,ignore
/// use employee_api::api::extractors::JsonBody;
/// use employee_api::domain::NewEmployee;
///
/// async fn create(JsonBody(payload): JsonBody<NewEmployee>) {
///     // payload has every required field
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
