//! Ambient configuration with explicit layered resolution
//!
//! A [`FormEnvironment`] plays the role a context provider plays in a
//! component tree: it carries an optional theme and an optional
//! translation catalog shared by every form built against it. Resolution
//! is explicit and happens once at construction: direct prop, then
//! ambient environment, then compiled-in default. There is no hidden
//! global.

use crate::i18n::Translations;
use crate::theme::Theme;

/// Optional ambient theme + translations supplied once at an application
/// root.
///
/// # Examples
///
/// ```
/// use auth_forms::context::FormEnvironment;
/// use auth_forms::Theme;
///
/// let ambient = FormEnvironment::new().with_theme(Theme::dark());
///
/// // No direct prop: the ambient theme wins.
/// assert!(ambient.resolve_theme(None).is_dark);
/// // A direct prop beats the ambient value.
/// assert!(!ambient.resolve_theme(Some(&Theme::light())).is_dark);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormEnvironment {
	theme: Option<Theme>,
	translations: Option<Translations>,
}

impl FormEnvironment {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	pub fn with_translations(mut self, translations: Translations) -> Self {
		self.translations = Some(translations);
		self
	}

	/// Layered theme lookup: direct > ambient > built-in light.
	pub fn resolve_theme(&self, direct: Option<&Theme>) -> Theme {
		direct
			.or(self.theme.as_ref())
			.cloned()
			.unwrap_or_default()
	}

	/// Layered catalog lookup: direct > ambient > built-in English.
	pub fn resolve_translations(&self, direct: Option<&Translations>) -> Translations {
		direct
			.or(self.translations.as_ref())
			.cloned()
			.unwrap_or_default()
	}
}
