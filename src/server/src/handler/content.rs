/* src/server/src/handler/content.rs */

use axum::Json;
use axum::extract::Query;
use folio_content::{Locale, LocaleTable};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct ContentQuery {
  lang: Option<String>,
}

/// `GET /api/content` — the resolved locale table as JSON. An unknown
/// `lang` degrades to the default table, same as everywhere else.
pub(super) async fn handle_content(
  Query(query): Query<ContentQuery>,
) -> Json<&'static LocaleTable> {
  let locale = Locale::resolve(query.lang.as_deref());
  tracing::debug!(locale = locale.code(), "serving content table");
  Json(locale.table())
}
