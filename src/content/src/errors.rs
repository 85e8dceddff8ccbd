/* src/content/src/errors.rs */

use std::fmt;

/// Error carried across the HTTP boundary: a stable code, a human
/// message, and the status the adapter should answer with.
///
/// The content layer itself has almost no error paths — unknown locales,
/// labels, and links all degrade to defaults — so this type only shows up
/// at the edges (bad contact payloads, parity violations at boot).
#[derive(Debug)]
pub struct ContentError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "VALIDATION_ERROR" => 400,
    "NOT_FOUND" => 404,
    "PARITY_MISMATCH" => 500,
    "INTERNAL_ERROR" => 500,
    _ => 500,
  }
}

impl ContentError {
  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    Self::with_code("VALIDATION_ERROR", msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn parity(msg: impl Into<String>) -> Self {
    Self::with_code("PARITY_MISMATCH", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl fmt::Display for ContentError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for ContentError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn codes_resolve_statuses() {
    assert_eq!(ContentError::validation("x").status(), 400);
    assert_eq!(ContentError::not_found("x").status(), 404);
    assert_eq!(ContentError::parity("x").status(), 500);
    assert_eq!(ContentError::internal("x").status(), 500);
    assert_eq!(ContentError::with_code("CUSTOM", "x").status(), 500);
  }

  #[test]
  fn display_format() {
    let err = ContentError::validation("name is required");
    assert_eq!(err.to_string(), "VALIDATION_ERROR: name is required");
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert_eq!(err.message(), "name is required");
  }
}
