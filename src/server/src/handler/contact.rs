/* src/server/src/handler/contact.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use folio_content::ContentError;
use serde::Deserialize;
use serde_json::{Value, json};

use super::AppState;
use crate::error::HttpError;

#[derive(Debug, Deserialize)]
pub(super) struct ContactMessage {
  name: String,
  email: String,
  #[serde(default)]
  subject: String,
  message: String,
}

/// `POST /api/contact` — simulated submission. After validation the
/// handler waits the configured delay and reports success; the payload
/// never leaves the process.
pub(super) async fn handle_contact(
  State(state): State<Arc<AppState>>,
  Json(form): Json<ContactMessage>,
) -> Result<Json<Value>, HttpError> {
  validate(&form)?;
  tokio::time::sleep(state.submit_delay).await;
  tracing::info!(subject = %form.subject, "contact submission simulated, nothing sent");
  Ok(Json(json!({ "ok": true })))
}

fn validate(form: &ContactMessage) -> Result<(), ContentError> {
  if form.name.trim().is_empty() {
    return Err(ContentError::validation("name is required"));
  }
  if !plausible_email(&form.email) {
    return Err(ContentError::validation("email does not look deliverable"));
  }
  if form.message.trim().is_empty() {
    return Err(ContentError::validation("message is required"));
  }
  Ok(())
}

fn plausible_email(email: &str) -> bool {
  match email.trim().split_once('@') {
    Some((user, host)) => !user.is_empty() && host.contains('.') && !host.starts_with('.'),
    None => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn form(name: &str, email: &str, message: &str) -> ContactMessage {
    ContactMessage {
      name: name.into(),
      email: email.into(),
      subject: String::new(),
      message: message.into(),
    }
  }

  #[test]
  fn complete_form_passes() {
    validate(&form("Adem", "adem@example.com", "Hello")).unwrap();
  }

  #[test]
  fn blank_fields_are_rejected() {
    assert!(validate(&form("", "adem@example.com", "Hello")).is_err());
    assert!(validate(&form("  ", "adem@example.com", "Hello")).is_err());
    assert!(validate(&form("Adem", "adem@example.com", "")).is_err());
  }

  #[test]
  fn implausible_emails_are_rejected() {
    assert!(validate(&form("Adem", "not-an-email", "Hello")).is_err());
    assert!(validate(&form("Adem", "@example.com", "Hello")).is_err());
    assert!(validate(&form("Adem", "adem@localhost", "Hello")).is_err());
    assert!(validate(&form("Adem", "adem@.com", "Hello")).is_err());
  }
}
