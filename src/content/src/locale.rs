/* src/content/src/locale.rs */

use crate::data;
use crate::model::LocaleTable;

/// Name of the cookie the language switcher writes.
pub const LOCALE_COOKIE: &str = "folio-locale";

/// A supported content locale.
///
/// French is the designated default: an unknown or absent tag resolves to
/// it, never to an error. That contract is deliberate — locale selection
/// has no failure path anywhere in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
  Fr,
  En,
}

impl Locale {
  pub const DEFAULT: Locale = Locale::Fr;
  pub const ALL: [Locale; 2] = [Locale::Fr, Locale::En];

  pub fn code(self) -> &'static str {
    match self {
      Locale::Fr => "fr",
      Locale::En => "en",
    }
  }

  /// Exact-code lookup, for places that must distinguish "not a locale"
  /// from "the default" (e.g. URL path prefixes).
  pub fn from_code(code: &str) -> Option<Locale> {
    Self::ALL.into_iter().find(|l| l.code() == code)
  }

  /// Resolve a locale tag to a supported locale.
  ///
  /// The tag is normalized to its primary subtag (everything before `-`
  /// or `_`, case-insensitive), so "en-US" and "EN_gb" behave exactly
  /// like "en". Unrecognized or absent tags degrade to the default.
  pub fn resolve(tag: Option<&str>) -> Locale {
    let Some(tag) = tag else {
      return Self::DEFAULT;
    };
    match primary_subtag(tag).as_str() {
      "en" => Locale::En,
      "fr" => Locale::Fr,
      _ => Self::DEFAULT,
    }
  }

  /// The content table for this locale. Same reference on every call;
  /// callers treat it as frozen.
  pub fn table(self) -> &'static LocaleTable {
    data::table(self)
  }
}

fn primary_subtag(tag: &str) -> String {
  let tag = tag.trim();
  let end = tag.find(['-', '_']).unwrap_or(tag.len());
  tag[..end].to_ascii_lowercase()
}

/// Per-request locale inputs, extracted by the HTTP layer.
pub struct ResolveContext<'a> {
  pub path_locale: Option<&'a str>,
  pub cookie_header: Option<&'a str>,
  pub accept_language: Option<&'a str>,
}

/// Resolve chain: path prefix -> cookie("folio-locale") -> Accept-Language
/// -> default locale. Every stage falls through on anything it does not
/// recognize.
pub fn resolve_request(ctx: &ResolveContext<'_>) -> Locale {
  if let Some(loc) = ctx.path_locale {
    return Locale::resolve(Some(loc));
  }

  if let Some(header) = ctx.cookie_header {
    if let Some(locale) = cookie_locale(header, LOCALE_COOKIE) {
      return locale;
    }
  }

  if let Some(header) = ctx.accept_language {
    if let Some(locale) = accept_language_locale(header) {
      return locale;
    }
  }

  Locale::DEFAULT
}

fn cookie_locale(header: &str, name: &str) -> Option<Locale> {
  for pair in header.split(';') {
    let Some((k, v)) = pair.trim().split_once('=') else {
      continue;
    };
    if k.trim() == name {
      // Only an exact supported code counts; anything else falls through
      // to the next stage rather than snapping to the default.
      return Locale::from_code(v.trim());
    }
  }
  None
}

fn accept_language_locale(header: &str) -> Option<Locale> {
  let mut entries: Vec<(&str, f64)> = Vec::new();
  for part in header.split(',') {
    let part = part.trim();
    if part.is_empty() {
      continue;
    }
    let mut segments = part.split(';');
    let lang = segments.next().unwrap_or("").trim();
    let q = segments
      .filter_map(|s| s.trim().strip_prefix("q="))
      .find_map(|v| v.parse::<f64>().ok())
      .unwrap_or(1.0);
    entries.push((lang, q));
  }

  entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

  for (lang, _) in &entries {
    if let Some(locale) = Locale::from_code(lang) {
      return Some(locale);
    }
    // Prefix match: en-US -> en
    if let Some(idx) = lang.find('-') {
      if let Some(locale) = Locale::from_code(&lang[..idx]) {
        return Some(locale);
      }
    }
  }

  None
}
