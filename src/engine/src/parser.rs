/* src/engine/src/parser.rs */

use crate::ast::{AstNode, SlotMode};
use crate::token::Token;

pub(crate) fn parse(tokens: &[Token<'_>]) -> Vec<AstNode> {
  let mut pos = 0;
  parse_until(tokens, &mut pos, &|_| false)
}

fn parse_until(
  tokens: &[Token<'_>],
  pos: &mut usize,
  stop: &dyn Fn(&str) -> bool,
) -> Vec<AstNode> {
  let mut nodes = Vec::new();

  while *pos < tokens.len() {
    match &tokens[*pos] {
      Token::Text(value) => {
        nodes.push(AstNode::Text((*value).to_string()));
        *pos += 1;
      }
      Token::Marker(directive) => {
        if stop(directive) {
          return nodes;
        }
        nodes.push(parse_directive(directive, tokens, pos));
      }
    }
  }

  nodes
}

fn parse_directive(directive: &str, tokens: &[Token<'_>], pos: &mut usize) -> AstNode {
  if let Some(path) = directive.strip_prefix("if:") {
    let path = path.to_string();
    *pos += 1;
    let endif = format!("endif:{path}");
    let then_nodes = parse_until(tokens, pos, &|d| d == "else" || d == endif);

    let mut else_nodes = Vec::new();
    if matches!(tokens.get(*pos), Some(Token::Marker(d)) if *d == "else") {
      *pos += 1;
      else_nodes = parse_until(tokens, pos, &|d| d == endif);
    }
    // Skip the endif marker
    if *pos < tokens.len() {
      *pos += 1;
    }
    return AstNode::If { path, then_nodes, else_nodes };
  }

  if let Some(path) = directive.strip_prefix("each:") {
    let path = path.to_string();
    *pos += 1;
    let body_nodes = parse_until(tokens, pos, &|d| d == "endeach");
    if *pos < tokens.len() {
      *pos += 1;
    }
    return AstNode::Each { path, body_nodes };
  }

  if let Some(path) = directive.strip_prefix("match:") {
    let path = path.to_string();
    *pos += 1;
    let mut branches: Vec<(String, Vec<AstNode>)> = Vec::new();
    while *pos < tokens.len() {
      match &tokens[*pos] {
        Token::Marker(d) if *d == "endmatch" => {
          *pos += 1;
          break;
        }
        Token::Marker(d) => {
          if let Some(value) = d.strip_prefix("when:") {
            let value = value.to_string();
            *pos += 1;
            let body = parse_until(tokens, pos, &|d| d.starts_with("when:") || d == "endmatch");
            branches.push((value, body));
          } else {
            // Stray marker between match and its first when
            *pos += 1;
          }
        }
        Token::Text(_) => {
          *pos += 1;
        }
      }
    }
    return AstNode::Match { path, branches };
  }

  let node = if let Some(path) = directive.strip_suffix(":html") {
    AstNode::Slot { path: path.to_string(), mode: SlotMode::Html }
  } else {
    AstNode::Slot { path: directive.to_string(), mode: SlotMode::Text }
  };
  *pos += 1;
  node
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::token::tokenize;

  fn parse_str(template: &str) -> Vec<AstNode> {
    parse(&tokenize(template))
  }

  #[test]
  fn plain_slot() {
    let ast = parse_str("<!--folio:profile.name-->");
    assert!(
      matches!(&ast[0], AstNode::Slot { path, mode } if path == "profile.name" && *mode == SlotMode::Text)
    );
  }

  #[test]
  fn html_slot() {
    let ast = parse_str("<!--folio:summary:html-->");
    assert!(matches!(&ast[0], AstNode::Slot { path, mode } if path == "summary" && *mode == SlotMode::Html));
  }

  #[test]
  fn if_with_else() {
    let ast = parse_str("<!--folio:if:live-->yes<!--folio:else-->no<!--folio:endif:live-->");
    let AstNode::If { path, then_nodes, else_nodes } = &ast[0] else {
      panic!("expected if node");
    };
    assert_eq!(path, "live");
    assert!(matches!(&then_nodes[0], AstNode::Text(t) if t == "yes"));
    assert!(matches!(&else_nodes[0], AstNode::Text(t) if t == "no"));
  }

  #[test]
  fn if_without_else() {
    let ast = parse_str("<!--folio:if:live-->yes<!--folio:endif:live-->");
    let AstNode::If { then_nodes, else_nodes, .. } = &ast[0] else {
      panic!("expected if node");
    };
    assert_eq!(then_nodes.len(), 1);
    assert!(else_nodes.is_empty());
  }

  #[test]
  fn nested_if_blocks_close_independently() {
    let ast = parse_str(
      "<!--folio:if:a--><!--folio:if:b-->x<!--folio:endif:b--><!--folio:endif:a-->",
    );
    let AstNode::If { path, then_nodes, .. } = &ast[0] else {
      panic!("expected outer if");
    };
    assert_eq!(path, "a");
    assert!(matches!(&then_nodes[0], AstNode::If { path, .. } if path == "b"));
  }

  #[test]
  fn each_block() {
    let ast = parse_str("<!--folio:each:projects--><li><!--folio:$.name--></li><!--folio:endeach-->");
    let AstNode::Each { path, body_nodes } = &ast[0] else {
      panic!("expected each node");
    };
    assert_eq!(path, "projects");
    assert_eq!(body_nodes.len(), 3);
  }

  #[test]
  fn match_with_branches() {
    let ast = parse_str(
      "<!--folio:match:category--><!--folio:when:professional-->P<!--folio:when:academic-->A<!--folio:endmatch-->",
    );
    let AstNode::Match { path, branches } = &ast[0] else {
      panic!("expected match node");
    };
    assert_eq!(path, "category");
    assert_eq!(branches.len(), 2);
    assert_eq!(branches[0].0, "professional");
    assert_eq!(branches[1].0, "academic");
  }
}
