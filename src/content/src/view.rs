/* src/content/src/view.rs */

use serde::Serialize;
use serde_json::{Value, json};

use crate::language::LanguageId;
use crate::links::{self, PLACEHOLDER_IMAGE, PrimaryAction, RepoHost};
use crate::locale::Locale;
use crate::model::{EducationEntry, LanguageSkill, ProjectCategory, ProjectEntry, SkillCategory};
use crate::tier::{FluencyTier, ProficiencyTier};

/// Localized static strings: section titles, buttons, and badges.
#[derive(Debug, Clone, Serialize)]
pub struct Captions {
  pub about: &'static str,
  pub experience: &'static str,
  pub projects: &'static str,
  pub skills: &'static str,
  pub education: &'static str,
  pub certifications: &'static str,
  pub languages: &'static str,
  pub contact: &'static str,
  pub view_project: &'static str,
  pub code: &'static str,
  pub more_projects: &'static str,
  pub ongoing: &'static str,
  pub completed: &'static str,
  pub professional: &'static str,
  pub academic: &'static str,
  pub live: &'static str,
  pub verify: &'static str,
  pub send: &'static str,
  pub sending: &'static str,
  pub sent: &'static str,
  pub loading: &'static str,
  pub name: &'static str,
  pub email: &'static str,
  pub subject: &'static str,
  pub message: &'static str,
}

pub fn captions(locale: Locale) -> Captions {
  match locale {
    Locale::Fr => Captions {
      about: "À propos",
      experience: "Expérience",
      projects: "Projets",
      skills: "Compétences",
      education: "Formation",
      certifications: "Certifications",
      languages: "Langues",
      contact: "Contact",
      view_project: "Voir le projet",
      code: "Code",
      more_projects: "Voir plus de projets",
      ongoing: "En cours",
      completed: "Terminé",
      professional: "Pro",
      academic: "Académique",
      live: "Live",
      verify: "Vérifier",
      send: "Envoyer",
      sending: "Envoi...",
      sent: "Message envoyé avec succès !",
      loading: "Chargement du portfolio...",
      name: "Nom",
      email: "Email",
      subject: "Sujet",
      message: "Message",
    },
    Locale::En => Captions {
      about: "About",
      experience: "Experience",
      projects: "Projects",
      skills: "Skills",
      education: "Education",
      certifications: "Certifications",
      languages: "Languages",
      contact: "Contact",
      view_project: "View project",
      code: "Code",
      more_projects: "More projects on GitHub",
      ongoing: "Ongoing",
      completed: "Completed",
      professional: "Pro",
      academic: "Academic",
      live: "Live",
      verify: "Verify",
      send: "Send",
      sending: "Sending...",
      sent: "Message sent successfully!",
      loading: "Loading portfolio...",
      name: "Name",
      email: "Email",
      subject: "Subject",
      message: "Message",
    },
  }
}

/// The complete view model for one locale's page: the resolved table
/// decorated for rendering, plus the localized captions. Source order is
/// preserved everywhere — no sorting, filtering, or aggregation.
pub fn page_data(locale: Locale) -> Value {
  let table = locale.table();
  let captions = captions(locale);
  json!({
    "locale": locale.code(),
    "profile": table.profile,
    "contact": table.contact,
    "experience": table.experience,
    "projects": table.projects.iter().map(|p| project_card(p, &captions)).collect::<Vec<_>>(),
    "skills": table.skills.iter().map(skill_category_card).collect::<Vec<_>>(),
    "education": table.education.iter().map(|e| education_card(e, &captions)).collect::<Vec<_>>(),
    "certifications": table.certifications,
    "languages": table.languages.iter().map(language_card).collect::<Vec<_>>(),
    "captions": captions,
  })
}

fn project_card(project: &ProjectEntry, captions: &Captions) -> Value {
  let primary = links::primary_action(project);
  let image =
    if project.image.is_empty() { PLACEHOLDER_IMAGE } else { project.image.as_str() };
  let category_label = match project.category {
    ProjectCategory::Professional => captions.professional,
    ProjectCategory::Academic => captions.academic,
  };
  json!({
    "name": project.name,
    "period": project.period,
    "image": image,
    "category": project.category,
    "category_label": category_label,
    "live_badge": links::normalize_url(&project.live).is_some(),
    "primary": {
      "href": primary.href().unwrap_or_default(),
      "enabled": primary != PrimaryAction::Disabled,
    },
    "repository": project.repository,
    "repo_host": RepoHost::of(&project.repository).as_str(),
    "description": project.description,
  })
}

fn skill_category_card(category: &SkillCategory) -> Value {
  json!({
    "name": category.name,
    "skills": category.skills.iter().map(|s| json!({
      "name": s.name,
      "level": s.level,
      "tier": ProficiencyTier::from_label(&s.level),
    })).collect::<Vec<_>>(),
  })
}

fn education_card(entry: &EducationEntry, captions: &Captions) -> Value {
  let status = if entry.ongoing { captions.ongoing } else { captions.completed };
  json!({
    "institution": entry.institution,
    "location": entry.location,
    "program": entry.program,
    "period": entry.period,
    "description": entry.description,
    "ongoing": entry.ongoing,
    "status": status,
  })
}

fn language_card(language: &LanguageSkill) -> Value {
  let display = LanguageId::canonicalize(&language.name).display();
  let fluency = FluencyTier::from_label(&language.level);
  let stars = usize::from(display.stars);
  json!({
    "name": language.name,
    "level": language.level,
    "flag": display.flag,
    "code": display.code,
    "stars": "★".repeat(stars) + &"☆".repeat(5 - stars),
    "percent": fluency.percent(),
    "badge": fluency.badge(),
  })
}
