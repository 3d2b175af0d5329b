//! Validated JSON extractor

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// JSON body extractor that runs `validator` checks after deserialization.
///
/// Handlers take `ValidatedJson<T>` instead of `Json<T>` so malformed bodies
/// and constraint violations both surface as 400s with a structured error.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(reject)?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

fn reject(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(e) => ApiError::invalid_query(e.to_string()),
        JsonRejection::JsonSyntaxError(e) => ApiError::invalid_query(e.to_string()),
        JsonRejection::MissingJsonContentType(e) => ApiError::invalid_query(e.to_string()),
        JsonRejection::BytesRejection(e) => ApiError::invalid_query(e.to_string()),
        _ => ApiError::invalid_query("Invalid JSON body"),
    }
}
