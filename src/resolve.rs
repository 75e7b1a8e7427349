//! Legacy/modern configuration merge
//!
//! Several settings accept both a deprecated flat prop (boolean flag or
//! bare callback) and a structured config object. Precedence is strictly
//! explicit structured field > legacy flat field > computed default, and
//! holds per sub-field even when the structured object is present but
//! sparse. The three-tier rule is implemented once here and reused by
//! every call site.

use crate::i18n::{MessageKey, Translations};
use crate::types::{
	AcceptTermsConfig, AuthMode, Callback, CheckboxStyleConfig, ForgotPasswordConfig,
	RememberMeConfig, Style, SubmitButtonConfig,
};

/// Three-tier resolution: structured beats legacy beats default.
///
/// # Examples
///
/// ```
/// use auth_forms::resolve::resolve;
///
/// assert_eq!(resolve(Some(false), Some(true), true), false);
/// assert_eq!(resolve(None, Some(false), true), false);
/// assert_eq!(resolve::<bool>(None, None, true), true);
/// ```
pub fn resolve<T>(structured: Option<T>, legacy: Option<T>, default: T) -> T {
	structured.or(legacy).unwrap_or(default)
}

/// Like [`resolve`] but without a computed default.
pub fn resolve_opt<T>(structured: Option<T>, legacy: Option<T>) -> Option<T> {
	structured.or(legacy)
}

/// Fully resolved forgot-password link settings.
#[derive(Clone)]
pub struct EffectiveForgotPassword {
	pub enabled: bool,
	pub text: String,
	pub on_press: Option<Callback>,
	pub style: Option<Style>,
	pub text_style: Option<Style>,
}

impl EffectiveForgotPassword {
	/// The link renders only when enabled and an actual handler exists.
	pub fn renders(&self) -> bool {
		self.enabled && self.on_press.is_some()
	}
}

/// Merge the structured forgot-password config with the deprecated
/// top-level callback prop.
pub fn effective_forgot_password(
	config: Option<&ForgotPasswordConfig>,
	legacy_handler: Option<&Callback>,
	translations: &Translations,
) -> EffectiveForgotPassword {
	let enabled = resolve(
		config.and_then(|c| c.enabled),
		legacy_handler.map(|_| true),
		true,
	);
	let on_press = resolve_opt(
		config.and_then(|c| c.on_press.clone()),
		legacy_handler.cloned(),
	);
	EffectiveForgotPassword {
		enabled,
		text: resolve(
			config.and_then(|c| c.text.clone()),
			None,
			translations.get(MessageKey::ForgotPassword).to_string(),
		),
		on_press,
		style: config.and_then(|c| c.style.clone()),
		text_style: config.and_then(|c| c.text_style.clone()),
	}
}

/// Fully resolved remember-me checkbox settings.
#[derive(Clone)]
pub struct EffectiveRememberMe {
	pub enabled: bool,
	pub label: String,
	pub style: CheckboxStyleConfig,
}

pub fn effective_remember_me(
	config: Option<&RememberMeConfig>,
	legacy_show: Option<bool>,
	translations: &Translations,
) -> EffectiveRememberMe {
	EffectiveRememberMe {
		enabled: resolve(config.and_then(|c| c.enabled), legacy_show, true),
		label: resolve(
			config.and_then(|c| c.label.clone()),
			None,
			translations.get(MessageKey::RememberMe).to_string(),
		),
		style: config.map(|c| c.style.clone()).unwrap_or_default(),
	}
}

/// Fully resolved accept-terms checkbox settings.
#[derive(Clone)]
pub struct EffectiveAcceptTerms {
	pub enabled: bool,
	pub label: String,
	pub link_text: String,
	pub on_link_press: Option<Callback>,
	pub style: CheckboxStyleConfig,
}

pub fn effective_accept_terms(
	config: Option<&AcceptTermsConfig>,
	legacy_show: Option<bool>,
	translations: &Translations,
) -> EffectiveAcceptTerms {
	EffectiveAcceptTerms {
		enabled: resolve(config.and_then(|c| c.enabled), legacy_show, true),
		label: resolve(
			config.and_then(|c| c.label.clone()),
			None,
			translations.get(MessageKey::IAgreeToThe).to_string(),
		),
		link_text: resolve(
			config.and_then(|c| c.link_text.clone()),
			None,
			translations.get(MessageKey::TermsAndConditions).to_string(),
		),
		on_link_press: config.and_then(|c| c.on_link_press.clone()),
		style: config.map(|c| c.style.clone()).unwrap_or_default(),
	}
}

/// Fully resolved submit-button settings.
#[derive(Clone)]
pub struct EffectiveSubmitButton {
	pub text: String,
	pub on_press: Option<Callback>,
	pub style: Option<Style>,
	pub text_style: Option<Style>,
	pub disabled_style: Option<Style>,
}

pub fn effective_submit_button(
	config: Option<&SubmitButtonConfig>,
	legacy_text: Option<&str>,
	mode: AuthMode,
	translations: &Translations,
) -> EffectiveSubmitButton {
	let mode_default = match mode {
		AuthMode::SignIn => translations.get(MessageKey::SignIn),
		AuthMode::SignUp => translations.get(MessageKey::CreateAccount),
	};
	EffectiveSubmitButton {
		text: resolve(
			config.and_then(|c| c.text.clone()),
			legacy_text.map(str::to_string),
			mode_default.to_string(),
		),
		on_press: config.and_then(|c| c.on_press.clone()),
		style: config.and_then(|c| c.style.clone()),
		text_style: config.and_then(|c| c.text_style.clone()),
		disabled_style: config.and_then(|c| c.disabled_style.clone()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	fn counting_callback() -> (Callback, Arc<AtomicUsize>) {
		let count = Arc::new(AtomicUsize::new(0));
		let captured = Arc::clone(&count);
		let callback: Callback = Arc::new(move || {
			captured.fetch_add(1, Ordering::SeqCst);
		});
		(callback, count)
	}

	#[test]
	fn test_resolve_precedence() {
		assert_eq!(resolve(Some(1), Some(2), 3), 1);
		assert_eq!(resolve(None, Some(2), 3), 2);
		assert_eq!(resolve::<i32>(None, None, 3), 3);
	}

	#[test]
	fn test_sparse_structured_object_falls_through_per_field() {
		// Structured config enables the link but supplies no handler; the
		// legacy callback fills the gap.
		let (legacy, count) = counting_callback();
		let config = ForgotPasswordConfig {
			enabled: Some(true),
			..ForgotPasswordConfig::default()
		};

		let effective =
			effective_forgot_password(Some(&config), Some(&legacy), &Translations::english());

		assert!(effective.enabled);
		let handler = effective.on_press.expect("legacy handler should fill the gap");
		handler();
		assert_eq!(count.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn test_structured_handler_beats_legacy() {
		let (structured, structured_count) = counting_callback();
		let (legacy, legacy_count) = counting_callback();
		let config = ForgotPasswordConfig {
			on_press: Some(structured),
			..ForgotPasswordConfig::default()
		};

		let effective =
			effective_forgot_password(Some(&config), Some(&legacy), &Translations::english());

		effective.on_press.unwrap()();
		assert_eq!(structured_count.load(Ordering::SeqCst), 1);
		assert_eq!(legacy_count.load(Ordering::SeqCst), 0);
	}

	#[test]
	fn test_forgot_password_needs_a_handler_to_render() {
		let config = ForgotPasswordConfig {
			enabled: Some(true),
			..ForgotPasswordConfig::default()
		};

		let effective = effective_forgot_password(Some(&config), None, &Translations::english());

		assert!(effective.enabled);
		assert!(!effective.renders());
	}

	#[test]
	fn test_remember_me_structured_disable_beats_legacy_enable() {
		let config = RememberMeConfig {
			enabled: Some(false),
			..RememberMeConfig::default()
		};

		let effective = effective_remember_me(Some(&config), Some(true), &Translations::english());

		assert!(!effective.enabled);
		assert_eq!(effective.label, "Remember me");
	}

	#[test]
	fn test_accept_terms_defaults() {
		let effective = effective_accept_terms(None, None, &Translations::english());

		assert!(effective.enabled);
		assert_eq!(effective.label, "I agree to the");
		assert_eq!(effective.link_text, "Terms & Conditions");
	}

	#[test]
	fn test_submit_button_text_tiers() {
		let translations = Translations::english();

		let from_default =
			effective_submit_button(None, None, AuthMode::SignUp, &translations);
		assert_eq!(from_default.text, "Create Account");

		let from_legacy =
			effective_submit_button(None, Some("Go"), AuthMode::SignUp, &translations);
		assert_eq!(from_legacy.text, "Go");

		let config = SubmitButtonConfig {
			text: Some("Join".to_string()),
			..SubmitButtonConfig::default()
		};
		let from_structured =
			effective_submit_button(Some(&config), Some("Go"), AuthMode::SignUp, &translations);
		assert_eq!(from_structured.text, "Join");
	}
}
