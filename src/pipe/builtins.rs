use crate::error::AppError;
use crate::pipe::{Pipe, PipeError, PipeResult};
use async_trait::async_trait;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::{HeaderMap, header, request::Parts};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

/// A pipe that parses a path segment into a user id
#[derive(Default)]
pub struct ParseIdPipe;

#[async_trait]
impl Pipe for ParseIdPipe {
    type Input = String;
    type Output = i32;

    async fn transform(&self, input: String) -> PipeResult<i32> {
        input
            .trim()
            .parse::<i32>()
            .map_err(|_| PipeError::Validation(format!("Invalid user id '{}'", input)))
    }
}

/// The `:id` path segment, run through [`ParseIdPipe`].
///
/// A segment that cannot be decoded or is not an integer cannot address any
/// stored user, so it is rejected as [`AppError::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i32);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("{}", rejection.body_text());
                AppError::NotFound
            })?;

        match ParseIdPipe.transform(raw).await {
            Ok(id) => Ok(UserId(id)),
            Err(e) => {
                tracing::debug!("{}", e);
                Err(AppError::NotFound)
            }
        }
    }
}

/// A JSON request body that falls back to `T::default()`.
///
/// A body that is empty, or sent without a JSON content type, is read as
/// an empty object so absent fields pass through. A JSON body that does not
/// parse is still rejected.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes).map_err(IntoResponse::into_response)?;
        Ok(JsonBody(value))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}
