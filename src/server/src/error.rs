/* src/server/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_content::ContentError;

/// Newtype wrapper to implement `IntoResponse` for `ContentError`.
/// Required because the orphan rule prevents implementing the trait
/// directly on a type from another crate.
pub(crate) struct HttpError(pub ContentError);

impl IntoResponse for HttpError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": err.code(),
        "message": err.message(),
      }
    });
    (status, axum::Json(body)).into_response()
  }
}

impl From<ContentError> for HttpError {
  fn from(err: ContentError) -> Self {
    Self(err)
  }
}
