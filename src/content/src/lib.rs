/* src/content/src/lib.rs */

mod data;

pub mod errors;
pub mod language;
pub mod links;
pub mod locale;
pub mod model;
pub mod parity;
pub mod tier;
pub mod view;

// Re-exports for ergonomic use
pub use errors::ContentError;
pub use language::{LanguageDisplay, LanguageId};
pub use links::{PLACEHOLDER_IMAGE, PrimaryAction, RepoHost, normalize_url, primary_action};
pub use locale::{LOCALE_COOKIE, Locale, ResolveContext, resolve_request};
pub use model::LocaleTable;
pub use tier::{FluencyTier, ProficiencyTier};
pub use view::page_data;
