//! Footer descriptor
//!
//! Two observed behaviors exist for footer text: compute mode-based
//! defaults, or render nothing unless the caller opts in. The
//! `use_default_footer_text` switch on [`FooterConfig`] arbitrates; the
//! stable default is opt-in only.

use crate::i18n::{MessageKey, Translations};
use crate::resolve::resolve_opt;
use crate::types::{AuthMode, FooterConfig};
use serde::{Deserialize, Serialize};

/// What pressing the footer link does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FooterLinkAction {
	/// Caller-supplied handler.
	Custom,
	/// Toggle between sign-in and sign-up.
	ToggleMode,
	/// Static text, no action.
	None,
}

/// Resolved footer: the toggle row plus optional legal links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterElement {
	pub text: String,
	pub link_text: String,
	pub link_action: FooterLinkAction,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub terms_text: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub privacy_text: Option<String>,
}

impl FooterElement {
	/// True when there is anything to draw.
	pub fn has_content(&self) -> bool {
		!self.text.is_empty()
			|| !self.link_text.is_empty()
			|| self.terms_text.is_some()
			|| self.privacy_text.is_some()
	}
}

/// Resolve the footer for the current mode. `can_toggle` reports whether
/// the shell has a mode-change observer wired, which is what makes the
/// default link actionable.
pub(crate) fn footer_element(
	config: Option<&FooterConfig>,
	mode: AuthMode,
	can_toggle: bool,
	translations: &Translations,
) -> Option<FooterElement> {
	let default_config = FooterConfig::default();
	let config = config.unwrap_or(&default_config);
	if config.enabled == Some(false) {
		return None;
	}

	// New simplified fields win over the legacy toggle fields.
	let resolved_text = resolve_opt(config.text.clone(), config.toggle_text.clone());
	let resolved_link = resolve_opt(config.text_link.clone(), config.toggle_link_text.clone());

	let (default_text_key, default_link_key) = match mode {
		AuthMode::SignIn => (MessageKey::DontHaveAccount, MessageKey::SignUp),
		AuthMode::SignUp => (MessageKey::AlreadyHaveAccount, MessageKey::SignIn),
	};
	let text = resolved_text.unwrap_or_else(|| {
		if config.use_default_footer_text {
			translations.get(default_text_key).to_string()
		} else {
			String::new()
		}
	});
	let link_text = resolved_link.unwrap_or_else(|| {
		if config.use_default_footer_text {
			translations.get(default_link_key).to_string()
		} else {
			String::new()
		}
	});

	let link_action = if link_text.is_empty() {
		FooterLinkAction::None
	} else if config.text_link_on_press.is_some() {
		FooterLinkAction::Custom
	} else if can_toggle {
		FooterLinkAction::ToggleMode
	} else {
		FooterLinkAction::None
	};

	let terms_text = config.on_terms_press.as_ref().map(|_| {
		config
			.terms_text
			.clone()
			.unwrap_or_else(|| translations.get(MessageKey::TermsOfService).to_string())
	});
	let privacy_text = config.on_privacy_press.as_ref().map(|_| {
		config
			.privacy_text
			.clone()
			.unwrap_or_else(|| translations.get(MessageKey::PrivacyPolicy).to_string())
	});

	Some(FooterElement {
		text,
		link_text,
		link_action,
		terms_text,
		privacy_text,
	})
}
