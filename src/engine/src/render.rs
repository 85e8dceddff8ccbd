/* src/engine/src/render.rs */

use serde_json::Value;

use crate::ast::{AstNode, SlotMode};
use crate::helpers::{escape_html, is_truthy, resolve, stringify};

pub(crate) fn render(nodes: &[AstNode], data: &Value) -> String {
  let mut out = String::new();

  for node in nodes {
    match node {
      AstNode::Text(value) => out.push_str(value),

      AstNode::Slot { path, mode } => {
        let value = resolve(path, data).unwrap_or(&Value::Null);
        match mode {
          SlotMode::Html => out.push_str(&stringify(value)),
          SlotMode::Text => out.push_str(&escape_html(&stringify(value))),
        }
      }

      AstNode::If { path, then_nodes, else_nodes } => {
        if resolve(path, data).is_some_and(is_truthy) {
          out.push_str(&render(then_nodes, data));
        } else {
          out.push_str(&render(else_nodes, data));
        }
      }

      AstNode::Each { path, body_nodes } => {
        if let Some(Value::Array(items)) = resolve(path, data) {
          for item in items {
            out.push_str(&render(body_nodes, &scoped(data, item)));
          }
        }
      }

      AstNode::Match { path, branches } => {
        let key = stringify(resolve(path, data).unwrap_or(&Value::Null));
        for (branch_value, branch_nodes) in branches {
          if *branch_value == key {
            out.push_str(&render(branch_nodes, data));
            break;
          }
        }
      }
    }
  }

  out
}

/// Clone the data object with the loop item bound to `$`; the previous
/// `$` (an enclosing loop's item) moves to `$$`.
fn scoped(data: &Value, item: &Value) -> Value {
  let Value::Object(map) = data else {
    return data.clone();
  };
  let mut map = map.clone();
  if let Some(outer) = map.get("$").cloned() {
    map.insert("$$".to_string(), outer);
  }
  map.insert("$".to_string(), item.clone());
  Value::Object(map)
}
