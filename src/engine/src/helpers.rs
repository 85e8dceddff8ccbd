/* src/engine/src/helpers.rs */

use serde_json::Value;

/// Walk a dot path ("projects.0.name" style keys are not needed here;
/// array items come in through `each` scoping) into the data object.
pub(crate) fn resolve<'a>(path: &str, data: &'a Value) -> Option<&'a Value> {
  let mut current = data;
  for key in path.split('.') {
    current = current.get(key)?;
  }
  Some(current)
}

pub(crate) fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(arr) => !arr.is_empty(),
    Value::Object(_) => true,
  }
}

pub(crate) fn stringify(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::Bool(b) => b.to_string(),
    Value::Number(n) => n.to_string(),
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

pub(crate) fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn resolve_simple_and_nested() {
    let data = json!({"profile": {"name": "Adem"}});
    assert_eq!(resolve("profile.name", &data), Some(&json!("Adem")));
    assert_eq!(resolve("profile", &data), Some(&json!({"name": "Adem"})));
  }

  #[test]
  fn resolve_missing_paths() {
    let data = json!({"a": 1});
    assert_eq!(resolve("b", &data), None);
    assert_eq!(resolve("a.b", &data), None);
  }

  #[test]
  fn truthiness() {
    assert!(is_truthy(&json!(true)));
    assert!(is_truthy(&json!("x")));
    assert!(is_truthy(&json!([1])));
    assert!(is_truthy(&json!({"k": 0})));
    assert!(is_truthy(&json!(0.5)));
    assert!(!is_truthy(&json!(false)));
    assert!(!is_truthy(&json!(null)));
    assert!(!is_truthy(&json!("")));
    assert!(!is_truthy(&json!([])));
    assert!(!is_truthy(&json!(0)));
  }

  #[test]
  fn stringify_kinds() {
    assert_eq!(stringify(&json!(null)), "");
    assert_eq!(stringify(&json!("x")), "x");
    assert_eq!(stringify(&json!(95)), "95");
    assert_eq!(stringify(&json!(true)), "true");
  }

  #[test]
  fn escape_html_special_chars() {
    assert_eq!(escape_html("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;");
    assert_eq!(escape_html("plain"), "plain");
  }
}
