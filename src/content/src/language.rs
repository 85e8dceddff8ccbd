/* src/content/src/language.rs */

/// Canonical identity for a spoken-language label.
///
/// Labels arrive locale-spelled ("English" in the English table, "Anglais"
/// in the French one, accents included), so display code cannot key on the
/// raw string. Canonicalization maps any spelling to one of this small
/// closed set; anything it does not recognize becomes `Other` with a
/// neutral display configuration — there is no failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageId {
  French,
  English,
  Arabic,
  Other,
}

/// Fixed display configuration for one canonical identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDisplay {
  pub flag: &'static str,
  pub code: &'static str,
  /// Star rating out of five.
  pub stars: u8,
  pub level: &'static str,
}

impl LanguageId {
  /// Map a free-text language label to its canonical identity.
  ///
  /// Matching is tolerant of both supported locales' spellings: prefixes
  /// cover the accented forms ("français", "arabe") and the substring
  /// checks cover cross-locale names appearing mid-string.
  pub fn canonicalize(label: &str) -> LanguageId {
    let name = label.trim().to_lowercase();
    if name.starts_with("fran") || name.contains("french") {
      LanguageId::French
    } else if name.starts_with("engl")
      || name.starts_with("angl")
      || name.contains("english")
      || name.contains("anglais")
    {
      LanguageId::English
    } else if name.starts_with("arab") || name.contains("arabe") || name.contains("arabic") {
      LanguageId::Arabic
    } else {
      LanguageId::Other
    }
  }

  pub fn display(self) -> LanguageDisplay {
    match self {
      LanguageId::French => {
        LanguageDisplay { flag: "\u{1F1EB}\u{1F1F7}", code: "FR", stars: 4, level: "professional" }
      }
      LanguageId::English => {
        LanguageDisplay { flag: "\u{1F1FA}\u{1F1F8}", code: "EN", stars: 5, level: "fluent" }
      }
      LanguageId::Arabic => {
        LanguageDisplay { flag: "\u{1F1F9}\u{1F1F3}", code: "AR", stars: 5, level: "native" }
      }
      LanguageId::Other => {
        LanguageDisplay { flag: "\u{1F30D}", code: "-", stars: 3, level: "intermediate" }
      }
    }
  }
}
