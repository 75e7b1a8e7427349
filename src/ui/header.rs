//! Header descriptor

use crate::i18n::{MessageKey, Translations};
use crate::types::{AuthMode, HeaderConfig, LogoConfig};
use serde::{Deserialize, Serialize};

/// Resolved header: title and subtitle fall back to mode-based defaults
/// from the translation catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderElement {
	pub title: String,
	pub subtitle: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub logo: Option<LogoConfig>,
}

pub(crate) fn header_element(
	config: &HeaderConfig,
	mode: AuthMode,
	translations: &Translations,
) -> HeaderElement {
	let (title_key, subtitle_key) = match mode {
		AuthMode::SignIn => (MessageKey::WelcomeBack, MessageKey::SignIn),
		AuthMode::SignUp => (MessageKey::CreateAccount, MessageKey::GetStarted),
	};
	HeaderElement {
		title: config
			.title
			.clone()
			.unwrap_or_else(|| translations.get(title_key).to_string()),
		subtitle: config
			.subtitle
			.clone()
			.unwrap_or_else(|| translations.get(subtitle_key).to_string()),
		logo: config.logo.clone(),
	}
}
