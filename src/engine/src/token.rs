/* src/engine/src/token.rs */

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'a> {
  Text(&'a str),
  /// Directive body, between `<!--folio:` and `-->`.
  Marker(&'a str),
}

pub(crate) const MARKER_OPEN: &str = "<!--folio:";
pub(crate) const MARKER_CLOSE: &str = "-->";

pub(crate) fn tokenize(template: &str) -> Vec<Token<'_>> {
  let mut tokens = Vec::new();
  let mut rest = template;

  while !rest.is_empty() {
    let Some(start) = rest.find(MARKER_OPEN) else {
      tokens.push(Token::Text(rest));
      break;
    };
    if start > 0 {
      tokens.push(Token::Text(&rest[..start]));
    }
    let after_open = &rest[start + MARKER_OPEN.len()..];
    match after_open.find(MARKER_CLOSE) {
      Some(close) => {
        tokens.push(Token::Marker(&after_open[..close]));
        rest = &after_open[close + MARKER_CLOSE.len()..];
      }
      None => {
        // Unclosed marker -- treat the remainder as text
        tokens.push(Token::Text(&rest[start..]));
        break;
      }
    }
  }

  tokens
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_template() {
    assert!(tokenize("").is_empty());
  }

  #[test]
  fn plain_html_is_one_text_token() {
    assert_eq!(tokenize("<p>hello</p>"), vec![Token::Text("<p>hello</p>")]);
  }

  #[test]
  fn single_marker() {
    assert_eq!(tokenize("<!--folio:x-->"), vec![Token::Marker("x")]);
  }

  #[test]
  fn marker_between_text() {
    assert_eq!(
      tokenize("a<!--folio:x-->b"),
      vec![Token::Text("a"), Token::Marker("x"), Token::Text("b")],
    );
  }

  #[test]
  fn adjacent_markers() {
    assert_eq!(
      tokenize("<!--folio:a--><!--folio:b-->"),
      vec![Token::Marker("a"), Token::Marker("b")],
    );
  }

  #[test]
  fn unclosed_marker_degrades_to_text() {
    assert_eq!(tokenize("head<!--folio:x"), vec![Token::Text("head"), Token::Text("<!--folio:x")]);
  }

  #[test]
  fn empty_directive() {
    assert_eq!(tokenize("<!--folio:-->"), vec![Token::Marker("")]);
  }

  #[test]
  fn foreign_comments_are_plain_text() {
    assert_eq!(tokenize("<!-- note -->"), vec![Token::Text("<!-- note -->")]);
  }
}
