use axum::Json;
use axum::extract::{FromRequestParts, Path};
use axum::http::{StatusCode, request::Parts};
use axum::response::{IntoResponse, Response};
use std::num::IntErrorKind;

use crate::error::{BlogError, ErrorDetail};

/// Numeric post id taken from the `{id}` path segment.
///
/// Anything that is not an integer is rejected with 422. An integer too large
/// for `i64` cannot name a stored row, so it is answered with 404 like any
/// other unknown id.
///
/// This runs before the form body is read. A well-formed id is only checked
/// against storage inside the handler, so `POST /edit_post/{id}` with a bad
/// form answers 422 whether or not the post exists. Only an overflowing id
/// short-circuits to 404 ahead of form validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostId(pub i64);

pub fn parse_post_id(raw: &str) -> Result<i64, Response> {
    match raw.trim().parse::<i64>() {
        Ok(id) => Ok(id),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(BlogError::PostNotFound.into_response())
        }
        Err(_) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDetail::new("post id must be an integer")),
        )
            .into_response()),
    }
}

impl<S> FromRequestParts<S> for PostId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;
        parse_post_id(&raw).map(PostId)
    }
}
