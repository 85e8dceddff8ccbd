/* src/content/src/data/mod.rs */

mod en;
mod fr;

use std::sync::OnceLock;

use crate::locale::Locale;
use crate::model::LocaleTable;

/// The content table for one locale. Built on first use and shared for
/// the life of the process; callers must treat it as frozen.
pub fn table(locale: Locale) -> &'static LocaleTable {
  static FR: OnceLock<LocaleTable> = OnceLock::new();
  static EN: OnceLock<LocaleTable> = OnceLock::new();
  match locale {
    Locale::Fr => FR.get_or_init(fr::table),
    Locale::En => EN.get_or_init(en::table),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn both_tables_carry_every_section() {
    for locale in Locale::ALL {
      let table = table(locale);
      assert_eq!(table.experience.len(), 4, "{:?} experience", locale);
      assert_eq!(table.projects.len(), 6, "{:?} projects", locale);
      assert_eq!(table.skills.len(), 4, "{:?} skill categories", locale);
      assert_eq!(table.education.len(), 2, "{:?} education", locale);
      assert_eq!(table.certifications.len(), 3, "{:?} certifications", locale);
      assert_eq!(table.languages.len(), 3, "{:?} languages", locale);
    }
  }

  #[test]
  fn proper_nouns_match_across_locales() {
    let en = table(Locale::En);
    let fr = table(Locale::Fr);
    assert_eq!(en.profile.name, fr.profile.name);
    assert_eq!(en.contact.email, fr.contact.email);
    for (a, b) in en.projects.iter().zip(&fr.projects) {
      assert_eq!(a.name, b.name);
      assert_eq!(a.repository, b.repository);
      assert_eq!(a.live, b.live);
      assert_eq!(a.category, b.category);
    }
  }

  #[test]
  fn experience_entries_pair_by_organization() {
    let en = table(Locale::En);
    let fr = table(Locale::Fr);
    for (a, b) in en.experience.iter().zip(&fr.experience) {
      assert_eq!(a.organization, b.organization);
      assert_eq!(a.period, b.period);
      assert_eq!(a.tasks.len(), b.tasks.len());
    }
  }

  #[test]
  fn ongoing_flags_match_across_locales() {
    let en = table(Locale::En);
    let fr = table(Locale::Fr);
    for (a, b) in en.education.iter().zip(&fr.education) {
      assert_eq!(a.ongoing, b.ongoing, "{} vs {}", a.institution, b.institution);
    }
  }
}
