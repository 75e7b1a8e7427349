//! Biometric prompt button
//!
//! The crate never touches biometric hardware. This is a busy-guarded
//! button around the caller's `on_authenticate` callback: a press while a
//! previous authentication is still settling is ignored, and a failed
//! callback is logged and swallowed; surfacing it is the caller's
//! decision.

use super::icons::{IconGlyph, IconProvider};
use crate::i18n::{MessageKey, Translations};
use crate::types::{BiometricConfig, BiometricKind, HandlerFuture};
use serde::{Deserialize, Serialize};

/// Render descriptor for the biometric button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiometricElement {
	pub kind: BiometricKind,
	pub label: String,
	pub icon: IconGlyph,
	pub authenticating: bool,
}

/// Interactive state for one mounted biometric button.
pub struct BiometricButton {
	config: BiometricConfig,
	authenticating: bool,
}

impl BiometricButton {
	pub fn new(config: BiometricConfig) -> Self {
		Self {
			config,
			authenticating: false,
		}
	}

	pub fn is_authenticating(&self) -> bool {
		self.authenticating
	}

	fn kind(&self) -> BiometricKind {
		self.config.kind.unwrap_or(BiometricKind::Fingerprint)
	}

	/// Dispatch the authentication callback. Returns `None` when the
	/// button is disabled or an authentication is already in flight.
	pub fn press(&mut self) -> Option<HandlerFuture> {
		if !self.config.enabled || self.authenticating {
			return None;
		}
		self.authenticating = true;
		Some((self.config.on_authenticate)())
	}

	/// Feed back the settled callback result and release the busy guard.
	pub fn resolve(&mut self, result: anyhow::Result<()>) {
		self.authenticating = false;
		if let Err(error) = result {
			tracing::error!(%error, "biometric authentication failed");
		}
	}

	/// The render descriptor, or `None` when the button is disabled.
	pub fn element(
		&self,
		icons: &dyn IconProvider,
		icon_color: &str,
		translations: &Translations,
	) -> Option<BiometricElement> {
		if !self.config.enabled {
			return None;
		}
		let kind = self.kind();
		let (icon_name, label_key) = match kind {
			BiometricKind::FaceId => ("face-id", MessageKey::UseFaceId),
			BiometricKind::Fingerprint | BiometricKind::Both => {
				("fingerprint", MessageKey::UseFingerprint)
			}
		};
		let label = self
			.config
			.prompt_message
			.clone()
			.unwrap_or_else(|| translations.get(label_key).to_string());
		Some(BiometricElement {
			kind,
			label,
			icon: icons.render_icon(icon_name, 28, icon_color),
			authenticating: self.authenticating,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::PressHandler;
	use crate::ui::icons::TextGlyphIcons;
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	fn config(enabled: bool, count: Arc<AtomicUsize>) -> BiometricConfig {
		let on_authenticate: PressHandler = Arc::new(move || {
			count.fetch_add(1, Ordering::SeqCst);
			Box::pin(async { Ok(()) })
		});
		BiometricConfig {
			enabled,
			kind: None,
			on_authenticate,
			prompt_message: None,
		}
	}

	#[tokio::test]
	async fn test_press_guards_against_reentry() {
		let count = Arc::new(AtomicUsize::new(0));
		let mut button = BiometricButton::new(config(true, Arc::clone(&count)));

		let task = button.press().expect("first press dispatches");
		assert!(button.is_authenticating());
		// A second press while the first is in flight is a no-op.
		assert!(button.press().is_none());

		button.resolve(task.await);

		assert!(!button.is_authenticating());
		assert_eq!(count.load(Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn test_failure_releases_guard() {
		let on_authenticate: PressHandler =
			Arc::new(|| Box::pin(async { Err(anyhow::anyhow!("sensor unavailable")) }));
		let mut button = BiometricButton::new(BiometricConfig {
			enabled: true,
			kind: Some(BiometricKind::FaceId),
			on_authenticate,
			prompt_message: None,
		});

		let task = button.press().unwrap();
		button.resolve(task.await);

		assert!(!button.is_authenticating());
		assert!(button.press().is_some());
	}

	#[test]
	fn test_disabled_button_renders_nothing() {
		let count = Arc::new(AtomicUsize::new(0));
		let mut button = BiometricButton::new(config(false, Arc::clone(&count)));

		assert!(button.press().is_none());
		assert!(
			button
				.element(&TextGlyphIcons, "#6366f1", &Translations::english())
				.is_none()
		);
	}

	#[test]
	fn test_element_kind_and_label_defaults() {
		let count = Arc::new(AtomicUsize::new(0));
		let button = BiometricButton::new(config(true, count));

		let element = button
			.element(&TextGlyphIcons, "#6366f1", &Translations::english())
			.unwrap();

		assert_eq!(element.kind, BiometricKind::Fingerprint);
		assert_eq!(element.label, "Use Fingerprint");
		assert_eq!(element.icon.name, "fingerprint");
	}
}
