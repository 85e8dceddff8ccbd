/* src/content/src/parity.rs */

use serde_json::Value;

use crate::errors::ContentError;
use crate::model::LocaleTable;

/// Verify structural parity between two locale tables.
///
/// Both tables must expose the same keys, the same value kinds, the same
/// entry counts per list, and the same optional-field presence (an empty
/// string marks an absent optional value, so emptiness must agree on both
/// sides). A mismatch would surface at runtime as a silently missing
/// section in one language, which is why this runs at boot and in tests
/// rather than being left to chance.
pub fn check(a: &LocaleTable, b: &LocaleTable) -> Result<(), ContentError> {
  let a = serde_json::to_value(a).map_err(|e| ContentError::internal(e.to_string()))?;
  let b = serde_json::to_value(b).map_err(|e| ContentError::internal(e.to_string()))?;

  let mismatches = diff_shapes("", &a, &b);
  if mismatches.is_empty() {
    Ok(())
  } else {
    Err(ContentError::parity(mismatches.join("; ")))
  }
}

fn kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "bool",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

fn diff_shapes(path: &str, a: &Value, b: &Value) -> Vec<String> {
  let mut out = Vec::new();
  collect(path, a, b, &mut out);
  out
}

fn collect(path: &str, a: &Value, b: &Value, out: &mut Vec<String>) {
  match (a, b) {
    (Value::Object(left), Value::Object(right)) => {
      for key in left.keys() {
        if !right.contains_key(key) {
          out.push(format!("{path}.{key}: present in only one table"));
        }
      }
      for key in right.keys() {
        if !left.contains_key(key) {
          out.push(format!("{path}.{key}: present in only one table"));
        }
      }
      for (key, lv) in left {
        if let Some(rv) = right.get(key) {
          collect(&format!("{path}.{key}"), lv, rv, out);
        }
      }
    }
    (Value::Array(left), Value::Array(right)) => {
      if left.len() != right.len() {
        out.push(format!("{path}: {} entries vs {}", left.len(), right.len()));
      }
      for (i, (lv, rv)) in left.iter().zip(right).enumerate() {
        collect(&format!("{path}[{i}]"), lv, rv, out);
      }
    }
    (Value::String(left), Value::String(right)) => {
      // Empty string encodes "optional value absent"; presence must agree.
      if left.is_empty() != right.is_empty() {
        out.push(format!("{path}: optional value set in only one table"));
      }
    }
    _ => {
      if kind(a) != kind(b) {
        out.push(format!("{path}: {} vs {}", kind(a), kind(b)));
      }
    }
  }
}
