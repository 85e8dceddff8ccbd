/* src/server/src/handler/mod.rs */

mod contact;
mod content;
mod page;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{get, get_service, post};
use tower_http::services::ServeDir;

pub(crate) struct AppState {
  pub site_name: String,
  /// Page template shared by every locale; slots are resolved per
  /// request against the locale's view model.
  pub template: String,
  pub submit_delay: Duration,
}

pub(crate) fn build_router(state: AppState, assets_dir: &Path) -> Router {
  Router::new()
    .route("/", get(page::handle_index))
    .route("/{locale}", get(page::handle_locale))
    .route("/api/content", get(content::handle_content))
    .route("/api/contact", post(contact::handle_contact))
    .nest_service("/assets", get_service(ServeDir::new(assets_dir)))
    .with_state(Arc::new(state))
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::body::{Body, to_bytes};
  use axum::http::{Request, StatusCode, header};
  use tower::ServiceExt;

  fn test_router() -> Router {
    let state = AppState {
      site_name: "folio".to_string(),
      template: "<html><head></head><body><h1><!--folio:profile.headline--></h1>\
                 <p><!--folio:captions.projects--></p></body></html>"
        .to_string(),
      submit_delay: Duration::ZERO,
    };
    build_router(state, Path::new("public"))
  }

  async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  #[tokio::test]
  async fn index_renders_the_default_locale() {
    let response = test_router()
      .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<html lang=\"fr\">"));
    assert!(html.contains("Développeur Full-Stack"));
  }

  #[tokio::test]
  async fn locale_prefix_selects_the_table() {
    let response = test_router()
      .oneshot(Request::builder().uri("/en").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("Full-Stack Developer"));
    assert!(html.contains("Projects"));
  }

  #[tokio::test]
  async fn unknown_locale_prefix_is_not_found() {
    let response = test_router()
      .oneshot(Request::builder().uri("/de").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn accept_language_steers_the_index() {
    let request = Request::builder()
      .uri("/")
      .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
      .body(Body::empty())
      .unwrap();
    let html = body_text(test_router().oneshot(request).await.unwrap()).await;
    assert!(html.contains("<html lang=\"en\">"));
  }

  #[tokio::test]
  async fn cookie_beats_accept_language() {
    let request = Request::builder()
      .uri("/")
      .header(header::COOKIE, "folio-locale=en")
      .header(header::ACCEPT_LANGUAGE, "fr")
      .body(Body::empty())
      .unwrap();
    let html = body_text(test_router().oneshot(request).await.unwrap()).await;
    assert!(html.contains("<html lang=\"en\">"));
  }

  #[tokio::test]
  async fn path_prefix_beats_every_header() {
    let request = Request::builder()
      .uri("/en")
      .header(header::COOKIE, "folio-locale=fr")
      .header(header::ACCEPT_LANGUAGE, "fr")
      .body(Body::empty())
      .unwrap();
    let html = body_text(test_router().oneshot(request).await.unwrap()).await;
    assert!(html.contains("<html lang=\"en\">"));
  }

  #[tokio::test]
  async fn content_api_resolves_regional_tags() {
    let response = test_router()
      .oneshot(Request::builder().uri("/api/content?lang=en-US").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let table: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(table["profile"]["headline"], "Full-Stack Developer");
  }

  #[tokio::test]
  async fn content_api_unknown_lang_degrades_to_default() {
    let response = test_router()
      .oneshot(Request::builder().uri("/api/content?lang=xx").body(Body::empty()).unwrap())
      .await
      .unwrap();
    let table: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(table["profile"]["headline"], "Développeur Full-Stack");
  }

  #[tokio::test]
  async fn contact_accepts_a_valid_message() {
    let payload = serde_json::json!({
      "name": "Jane",
      "email": "jane@example.com",
      "subject": "Hi",
      "message": "Nice portfolio",
    });
    let request = Request::builder()
      .method("POST")
      .uri("/api/contact")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(payload.to_string()))
      .unwrap();
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let reply: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(reply["ok"], true);
  }

  #[tokio::test]
  async fn contact_rejects_an_incomplete_message() {
    let payload = serde_json::json!({
      "name": "",
      "email": "jane@example.com",
      "message": "Hello",
    });
    let request = Request::builder()
      .method("POST")
      .uri("/api/contact")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(payload.to_string()))
      .unwrap();
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let reply: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(reply["ok"], false);
    assert_eq!(reply["error"]["code"], "VALIDATION_ERROR");
  }
}
