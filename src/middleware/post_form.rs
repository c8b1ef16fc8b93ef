use axum::Json;
use axum::extract::{Form, FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::PostForm;
use crate::error::ErrorDetail;

/// Form body of the create and edit routes with both fields present and
/// non-empty. An absent or empty `title`/`content` is rejected with 422.
#[derive(Debug, Clone)]
pub struct ValidPostForm(pub PostForm);

impl<S> FromRequest<S> for ValidPostForm
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(form) = Form::<PostForm>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        if let Some(field) = form.empty_field() {
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDetail::new(format!("{field} is required"))),
            )
                .into_response());
        }
        Ok(Self(form))
    }
}
