/* src/engine/src/page.rs */

use serde_json::Value;

use crate::escape::ascii_escape_json;
use crate::inject_no_script;

/// Script element id for the embedded page data JSON.
pub const DATA_SCRIPT_ID: &str = "__FOLIO_DATA__";

/// Assemble the full HTML document for one locale:
/// inject the view model into the template, stamp the document language,
/// and embed the view model as a JSON script before `</body>`.
pub fn render_page(template: &str, data: &Value, locale: &str) -> String {
  let mut html = inject_no_script(template, data);

  html = html.replacen("<html", &format!("<html lang=\"{locale}\""), 1);

  let json = serde_json::to_string(data).unwrap_or_default();
  let script = format!(
    r#"<script id="{DATA_SCRIPT_ID}" type="application/json">{}</script>"#,
    ascii_escape_json(&json),
  );
  if let Some(pos) = html.rfind("</body>") {
    html.insert_str(pos, &script);
  } else {
    html.push_str(&script);
  }

  html
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn template() -> &'static str {
    "<html><head><title><!--folio:profile.name--></title></head>\
     <body><h1><!--folio:profile.headline--></h1></body></html>"
  }

  #[test]
  fn renders_slots_and_stamps_language() {
    let data = json!({"profile": {"name": "Adem", "headline": "Full-Stack Developer"}});
    let html = render_page(template(), &data, "en");
    assert!(html.starts_with("<html lang=\"en\">"));
    assert!(html.contains("<title>Adem</title>"));
    assert!(html.contains("<h1>Full-Stack Developer</h1>"));
  }

  #[test]
  fn embeds_the_data_script_inside_body() {
    let data = json!({"profile": {"name": "Adem", "headline": "Dev"}});
    let html = render_page(template(), &data, "fr");
    let script_pos = html.find("<script id=\"__FOLIO_DATA__\"").unwrap();
    let body_close = html.rfind("</body>").unwrap();
    assert!(script_pos < body_close);
    assert!(html.contains(r#""name":"Adem""#));
  }

  #[test]
  fn data_script_escapes_non_ascii() {
    let data = json!({"profile": {"name": "Développeur", "headline": "x"}});
    let html = render_page(template(), &data, "fr");
    let script = &html[html.find("<script id=").unwrap()..];
    assert!(script.contains(r"D\u00e9veloppeur"));
  }

  #[test]
  fn template_without_body_still_carries_the_script() {
    let html = render_page("<p><!--folio:x--></p>", &json!({"x": "y"}), "en");
    assert!(html.ends_with("</script>"));
    assert!(html.starts_with("<p>y</p>"));
  }
}
