//! Social login button descriptors

use super::icons::{IconGlyph, IconProvider};
use crate::types::{SocialLoginConfig, SocialProvider};
use serde::{Deserialize, Serialize};

/// One social button: provider branding resolved to plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialButtonElement {
	pub provider: SocialProvider,
	pub label: String,
	pub icon: IconGlyph,
	pub disabled: bool,
}

/// Resolve a configured social login into its render descriptor.
pub(crate) fn social_button_element(
	config: &SocialLoginConfig,
	icons: &dyn IconProvider,
	icon_color: &str,
) -> SocialButtonElement {
	SocialButtonElement {
		provider: config.provider,
		label: config
			.label
			.clone()
			.unwrap_or_else(|| config.provider.label().to_string()),
		icon: icons.render_icon(config.provider.icon_name(), 20, icon_color),
		disabled: config.disabled,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::PressHandler;
	use crate::ui::icons::TextGlyphIcons;
	use std::sync::Arc;

	fn noop_handler() -> PressHandler {
		Arc::new(|| Box::pin(async { Ok(()) }))
	}

	#[test]
	fn test_provider_branding_defaults() {
		let config = SocialLoginConfig::new(SocialProvider::Github, noop_handler());

		let element = social_button_element(&config, &TextGlyphIcons, "#24292e");

		assert_eq!(element.label, "GitHub");
		assert_eq!(element.icon.name, "github");
		assert!(!element.disabled);
	}

	#[test]
	fn test_custom_label_wins() {
		let mut config = SocialLoginConfig::new(SocialProvider::Google, noop_handler());
		config.label = Some("Continue with Google".to_string());

		let element = social_button_element(&config, &TextGlyphIcons, "#000");

		assert_eq!(element.label, "Continue with Google");
	}
}
