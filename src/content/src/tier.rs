/* src/content/src/tier.rs */

use serde::Serialize;

/// Display tier for a technical skill.
///
/// The tables author free-text labels in each locale's spelling; parsing
/// happens once at view-model build time, and an unrecognized label
/// degrades to `Educational` rather than failing the render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyTier {
  Pro,
  Educational,
}

impl ProficiencyTier {
  pub fn from_label(label: &str) -> ProficiencyTier {
    match label.trim().to_lowercase().as_str() {
      "pro" => ProficiencyTier::Pro,
      _ => ProficiencyTier::Educational,
    }
  }
}

/// Display tier for a spoken language, with the meter percentage the
/// rendered card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FluencyTier {
  Native,
  Fluent,
  Competent,
  Basic,
}

impl FluencyTier {
  pub fn from_label(label: &str) -> FluencyTier {
    match label.trim().to_lowercase().as_str() {
      "native" | "langue maternelle" => FluencyTier::Native,
      "fluent" | "courant" => FluencyTier::Fluent,
      "competent" | "compétent" => FluencyTier::Competent,
      _ => FluencyTier::Basic,
    }
  }

  pub fn percent(self) -> u8 {
    match self {
      FluencyTier::Native => 100,
      FluencyTier::Fluent => 95,
      FluencyTier::Competent => 85,
      FluencyTier::Basic => 70,
    }
  }

  /// Badge bucket for styling: native and fluent speakers share the
  /// "advanced" badge, matching the three-way grouping of the cards.
  pub fn badge(self) -> &'static str {
    match self {
      FluencyTier::Native | FluencyTier::Fluent => "advanced",
      FluencyTier::Competent => "intermediate",
      FluencyTier::Basic => "basic",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn proficiency_from_both_locales() {
    assert_eq!(ProficiencyTier::from_label("Pro"), ProficiencyTier::Pro);
    assert_eq!(ProficiencyTier::from_label("pro"), ProficiencyTier::Pro);
    assert_eq!(ProficiencyTier::from_label("Educational"), ProficiencyTier::Educational);
    assert_eq!(ProficiencyTier::from_label("Éducatif"), ProficiencyTier::Educational);
  }

  #[test]
  fn unknown_proficiency_degrades_to_educational() {
    assert_eq!(ProficiencyTier::from_label("Wizard"), ProficiencyTier::Educational);
    assert_eq!(ProficiencyTier::from_label(""), ProficiencyTier::Educational);
  }

  #[test]
  fn fluency_from_both_locales() {
    assert_eq!(FluencyTier::from_label("Native"), FluencyTier::Native);
    assert_eq!(FluencyTier::from_label("Langue maternelle"), FluencyTier::Native);
    assert_eq!(FluencyTier::from_label("Fluent"), FluencyTier::Fluent);
    assert_eq!(FluencyTier::from_label("Courant"), FluencyTier::Fluent);
    assert_eq!(FluencyTier::from_label("Competent"), FluencyTier::Competent);
    assert_eq!(FluencyTier::from_label("Compétent"), FluencyTier::Competent);
  }

  #[test]
  fn unknown_fluency_degrades_to_basic() {
    assert_eq!(FluencyTier::from_label("Conversational"), FluencyTier::Basic);
  }

  #[test]
  fn fluency_meter_percentages() {
    assert_eq!(FluencyTier::Native.percent(), 100);
    assert_eq!(FluencyTier::Fluent.percent(), 95);
    assert_eq!(FluencyTier::Competent.percent(), 85);
    assert_eq!(FluencyTier::Basic.percent(), 70);
  }

  #[test]
  fn fluency_badges() {
    assert_eq!(FluencyTier::Native.badge(), "advanced");
    assert_eq!(FluencyTier::Fluent.badge(), "advanced");
    assert_eq!(FluencyTier::Competent.badge(), "intermediate");
    assert_eq!(FluencyTier::Basic.badge(), "basic");
  }
}
