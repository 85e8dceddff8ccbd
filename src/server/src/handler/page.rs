/* src/server/src/handler/page.rs */

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, header};
use axum::response::Html;
use folio_content::{ContentError, Locale, ResolveContext, resolve_request, view};
use serde_json::{Value, json};

use super::AppState;
use crate::error::HttpError;

/// `GET /` — the page in the request-resolved locale
/// (cookie -> Accept-Language -> default).
pub(super) async fn handle_index(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
) -> Html<String> {
  let ctx = ResolveContext {
    path_locale: None,
    cookie_header: headers.get(header::COOKIE).and_then(|v| v.to_str().ok()),
    accept_language: headers.get(header::ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()),
  };
  render_localized(&state, resolve_request(&ctx))
}

/// `GET /{locale}` — explicit locale prefix. An unknown prefix is a 404;
/// the fuzzy degrade-to-default contract belongs to `Locale::resolve`,
/// not to URLs a crawler can hit.
pub(super) async fn handle_locale(
  State(state): State<Arc<AppState>>,
  Path(code): Path<String>,
) -> Result<Html<String>, HttpError> {
  let Some(locale) = Locale::from_code(&code) else {
    return Err(ContentError::not_found("Unknown locale").into());
  };
  Ok(render_localized(&state, locale))
}

fn render_localized(state: &AppState, locale: Locale) -> Html<String> {
  let mut data = view::page_data(locale);
  if let Value::Object(map) = &mut data {
    map.insert("site".to_string(), json!({ "name": state.site_name }));
    map.insert("motion".to_string(), folio_engine::motion::constants());
  }
  tracing::debug!(locale = locale.code(), "rendering page");
  Html(folio_engine::render_page(&state.template, &data, locale.code()))
}
