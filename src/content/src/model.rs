/* src/content/src/model.rs */

use serde::Serialize;

/// Who the site is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
  pub name: String,
  pub headline: String,
  pub summary: String,
}

/// Contact coordinates. A social link may be empty, which means
/// "no link" rather than an authoring error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
  pub email: String,
  pub phone: String,
  pub location: String,
  pub linkedin: String,
  pub github: String,
  pub portfolio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
  pub title: String,
  pub organization: String,
  pub location: String,
  /// Display-only date range; never parsed.
  pub period: String,
  pub tasks: Vec<String>,
  pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
  Professional,
  Academic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
  pub name: String,
  pub period: String,
  /// Screenshot path; empty falls back to the placeholder image.
  pub image: String,
  /// Repository URL; empty means no repository link.
  pub repository: String,
  /// Live-demo URL; empty means no live deployment.
  pub live: String,
  pub category: ProjectCategory,
  pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
  pub name: String,
  /// Free-text proficiency label in the table's locale ("Pro", "Éducatif").
  pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
  pub name: String,
  pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationEntry {
  pub institution: String,
  pub location: String,
  pub program: String,
  /// Display-only date range; `ongoing` carries the status explicitly.
  pub period: String,
  pub ongoing: bool,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificationEntry {
  pub name: String,
  pub issuer: String,
  pub date: String,
  /// Verification URL; empty means not verifiable online.
  pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSkill {
  /// Locale-spelled display name ("English" / "Anglais").
  pub name: String,
  /// Free-text proficiency label ("Fluent" / "Courant").
  pub level: String,
}

/// The complete content for one locale.
///
/// Exactly two instances exist, one per supported locale, and both must
/// keep structural parity: same sections, same entry counts, same
/// optional-field presence. See `parity::check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleTable {
  pub profile: Profile,
  pub contact: ContactInfo,
  pub experience: Vec<ExperienceEntry>,
  pub projects: Vec<ProjectEntry>,
  pub skills: Vec<SkillCategory>,
  pub education: Vec<EducationEntry>,
  pub certifications: Vec<CertificationEntry>,
  pub languages: Vec<LanguageSkill>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn category_serializes_lowercase() {
    let json = serde_json::to_value(ProjectCategory::Professional).unwrap();
    assert_eq!(json, serde_json::json!("professional"));
    let json = serde_json::to_value(ProjectCategory::Academic).unwrap();
    assert_eq!(json, serde_json::json!("academic"));
  }
}
