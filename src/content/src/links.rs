/* src/content/src/links.rs */

use crate::model::ProjectEntry;

/// Placeholder used when a project ships no screenshot.
pub const PLACEHOLDER_IMAGE: &str = "/assets/images/placeholder.svg";

/// Target of a project card's main call-to-action.
///
/// Live deployment wins over the repository. A project with neither link
/// gets a disabled action — the card renders the button without an href
/// instead of pointing it at a dead anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryAction {
  Live(String),
  Repository(String),
  Disabled,
}

impl PrimaryAction {
  pub fn href(&self) -> Option<&str> {
    match self {
      PrimaryAction::Live(url) | PrimaryAction::Repository(url) => Some(url),
      PrimaryAction::Disabled => None,
    }
  }
}

/// Hosting service of a repository URL, for icon selection only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoHost {
  GitHub,
  GitLab,
}

impl RepoHost {
  pub fn of(repository: &str) -> RepoHost {
    if repository.contains("gitlab.com") { RepoHost::GitLab } else { RepoHost::GitHub }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      RepoHost::GitHub => "github",
      RepoHost::GitLab => "gitlab",
    }
  }
}

/// Loose "looks like a URL" check with scheme normalization: `http://`
/// and `https://` pass through, a bare `www.` host gets `https://`
/// prepended, anything else is not a usable link.
pub fn normalize_url(raw: &str) -> Option<String> {
  let url = raw.trim();
  if url.is_empty() {
    return None;
  }
  if url.starts_with("http://") || url.starts_with("https://") {
    Some(url.to_string())
  } else if url.starts_with("www.") {
    Some(format!("https://{url}"))
  } else {
    None
  }
}

pub fn primary_action(project: &ProjectEntry) -> PrimaryAction {
  if let Some(live) = normalize_url(&project.live) {
    return PrimaryAction::Live(live);
  }
  if let Some(repo) = normalize_url(&project.repository) {
    return PrimaryAction::Repository(repo);
  }
  PrimaryAction::Disabled
}
