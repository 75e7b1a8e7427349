//! Standalone forgot-password flow
//!
//! A single-field form with its own touched/error state: validates the
//! email locally (required + lenient pattern), dispatches the caller's
//! reset callback, and switches to a terminal "check your email" display
//! once the callback settles successfully and a success message was
//! configured.

use crate::i18n::{MessageKey, Translations};
use crate::rules::EMAIL_REGEX;
use crate::types::{Callback, EmailSubmitHandler, HandlerFuture, Style};
use crate::ui::icons::{IconGlyph, IconProvider, default_icon_provider};
use crate::ui::input::{AutoCapitalize, AutoComplete, InputElement, KeyboardType};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Why a reset press did not dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResetRejection {
	#[error("a request is already in flight")]
	AlreadySubmitting,
	#[error("the form is loading")]
	Loading,
	#[error("the email address is invalid")]
	Invalid,
}

/// Configuration for the secondary entry point.
#[derive(Clone)]
pub struct ForgotPasswordProps {
	/// Receives the validated email address.
	pub on_submit: EmailSubmitHandler,
	/// Optional back-navigation (e.g. return to the sign-in screen).
	pub on_back_to_login: Option<Callback>,
	pub is_loading: bool,
	/// Externally supplied error string; the flow never fabricates one.
	pub api_error: Option<String>,
	/// Enables the terminal success display once a submission settles.
	pub success_message: Option<String>,
	pub translations: Option<Translations>,
	pub style: Option<Style>,
}

impl ForgotPasswordProps {
	pub fn new(on_submit: EmailSubmitHandler) -> Self {
		Self {
			on_submit,
			on_back_to_login: None,
			is_loading: false,
			api_error: None,
			success_message: None,
			translations: None,
			style: None,
		}
	}
}

/// Render snapshot of the flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum ForgotPasswordView {
	/// The email entry form.
	#[serde(rename_all = "camelCase")]
	Entry {
		title: String,
		subtitle: String,
		#[serde(skip_serializing_if = "Option::is_none")]
		api_error: Option<String>,
		input: InputElement,
		submit_title: String,
		is_loading: bool,
		#[serde(skip_serializing_if = "Option::is_none")]
		back_prompt: Option<String>,
		#[serde(skip_serializing_if = "Option::is_none")]
		back_link: Option<String>,
	},
	/// Terminal display after a successful submission.
	#[serde(rename_all = "camelCase")]
	Success {
		title: String,
		message: String,
		icon: IconGlyph,
		#[serde(skip_serializing_if = "Option::is_none")]
		back_title: Option<String>,
	},
}

/// One mounted forgot-password flow.
pub struct ForgotPasswordFlow {
	props: ForgotPasswordProps,
	translations: Translations,
	icons: Arc<dyn IconProvider>,
	email: String,
	error: Option<String>,
	touched: bool,
	submitting: bool,
	submitted: bool,
}

impl ForgotPasswordFlow {
	pub fn new(props: ForgotPasswordProps) -> Self {
		let translations = props.translations.clone().unwrap_or_default();
		Self {
			props,
			translations,
			icons: default_icon_provider(),
			email: String::new(),
			error: None,
			touched: false,
			submitting: false,
			submitted: false,
		}
	}

	pub fn email(&self) -> &str {
		&self.email
	}

	/// Displayed error, gated on touched.
	pub fn visible_error(&self) -> Option<&str> {
		if self.touched {
			self.error.as_deref()
		} else {
			None
		}
	}

	/// True once the flow reached the terminal success display.
	pub fn is_submitted(&self) -> bool {
		self.submitted
	}

	fn validate(&self, value: &str) -> Option<String> {
		if value.is_empty() {
			return Some(self.translations.get(MessageKey::EmailRequired).to_string());
		}
		if !EMAIL_REGEX.is_match(value) {
			return Some(self.translations.get(MessageKey::EmailInvalid).to_string());
		}
		None
	}

	/// Update the email value. Revalidates live once the field has been
	/// touched, so a fixed address clears its error while typing.
	pub fn set_email(&mut self, value: impl Into<String>) {
		self.email = value.into();
		if self.touched {
			self.error = self.validate(&self.email);
		}
	}

	/// The field lost focus.
	pub fn blur(&mut self) {
		self.touched = true;
		self.error = self.validate(&self.email);
	}

	/// Press the reset button: validate, then dispatch the caller's
	/// callback. Feed the result back through [`Self::resolve_submit`].
	pub fn press_submit(&mut self) -> Result<HandlerFuture, ResetRejection> {
		if self.submitting {
			return Err(ResetRejection::AlreadySubmitting);
		}
		if self.props.is_loading {
			return Err(ResetRejection::Loading);
		}
		self.touched = true;
		self.error = self.validate(&self.email);
		if self.error.is_some() {
			return Err(ResetRejection::Invalid);
		}
		self.submitting = true;
		tracing::debug!("password reset dispatched");
		Ok((self.props.on_submit)(self.email.clone()))
	}

	/// Feed back the settled callback result. Success marks the flow
	/// submitted; failure leaves display to the caller's `api_error`.
	pub fn resolve_submit(&mut self, result: anyhow::Result<()>) {
		self.submitting = false;
		match result {
			Ok(()) => {
				tracing::debug!("password reset succeeded");
				self.submitted = true;
			}
			Err(error) => {
				tracing::debug!(%error, "password reset failed");
			}
		}
	}

	/// Validate, dispatch, await, and settle in one call. Returns `true`
	/// when the flow reached the submitted state.
	pub async fn submit(&mut self) -> bool {
		if let Ok(task) = self.press_submit() {
			let result = task.await;
			self.resolve_submit(result);
		}
		self.submitted
	}

	/// Press the back-navigation link, when configured.
	pub fn press_back_to_login(&self) {
		if let Some(on_back) = &self.props.on_back_to_login {
			on_back();
		}
	}

	/// Resolve the current state into a render snapshot.
	pub fn render(&self) -> ForgotPasswordView {
		let t = &self.translations;
		if self.submitted {
			if let Some(message) = &self.props.success_message {
				return ForgotPasswordView::Success {
					title: t.get(MessageKey::CheckYourEmail).to_string(),
					message: message.clone(),
					icon: self.icons.render_icon("check", 48, "#22c55e"),
					back_title: self
						.props
						.on_back_to_login
						.as_ref()
						.map(|_| t.get(MessageKey::BackToSignIn).to_string()),
				};
			}
		}
		ForgotPasswordView::Entry {
			title: t.get(MessageKey::ForgotPassword).to_string(),
			subtitle: t.get(MessageKey::ForgotPasswordSubtitle).to_string(),
			api_error: self.props.api_error.clone(),
			input: InputElement {
				name: "email".to_string(),
				label: t.get(MessageKey::Email).to_string(),
				placeholder: t.get(MessageKey::EmailPlaceholder).to_string(),
				value: self.email.clone(),
				error: self.visible_error().map(str::to_string),
				touched: self.touched,
				secure_text_entry: false,
				keyboard_type: KeyboardType::EmailAddress,
				auto_capitalize: AutoCapitalize::None,
				auto_complete: Some(AutoComplete::Email),
				icon: Some(self.icons.render_icon("mail", 20, "#9ca3af")),
				icon_position: crate::types::IconPosition::Left,
				disabled: false,
				style: self.props.style.clone(),
			},
			submit_title: t.get(MessageKey::SendResetLink).to_string(),
			is_loading: self.props.is_loading || self.submitting,
			back_prompt: self
				.props
				.on_back_to_login
				.as_ref()
				.map(|_| t.get(MessageKey::RememberYourPassword).to_string()),
			back_link: self
				.props
				.on_back_to_login
				.as_ref()
				.map(|_| t.get(MessageKey::SignIn).to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	fn ok_handler() -> (EmailSubmitHandler, Arc<AtomicUsize>) {
		let count = Arc::new(AtomicUsize::new(0));
		let captured = Arc::clone(&count);
		let handler: EmailSubmitHandler = Arc::new(move |_email| {
			captured.fetch_add(1, Ordering::SeqCst);
			Box::pin(async { Ok(()) })
		});
		(handler, count)
	}

	#[test]
	fn test_no_error_flash_before_touch() {
		let (handler, _) = ok_handler();
		let mut flow = ForgotPasswordFlow::new(ForgotPasswordProps::new(handler));

		flow.set_email("not-an-email");

		// Invalid, but untouched: nothing is displayed yet.
		assert_eq!(flow.visible_error(), None);

		flow.blur();
		assert_eq!(flow.visible_error(), Some("Please enter a valid email address"));
	}

	#[test]
	fn test_live_revalidation_after_touch() {
		let (handler, _) = ok_handler();
		let mut flow = ForgotPasswordFlow::new(ForgotPasswordProps::new(handler));
		flow.blur();
		assert_eq!(flow.visible_error(), Some("Email is required"));

		flow.set_email("ada@example.com");

		assert_eq!(flow.visible_error(), None);
	}

	#[tokio::test]
	async fn test_invalid_email_never_dispatches() {
		let (handler, count) = ok_handler();
		let mut flow = ForgotPasswordFlow::new(ForgotPasswordProps::new(handler));
		flow.set_email("nope");

		let submitted = flow.submit().await;

		assert!(!submitted);
		assert_eq!(count.load(Ordering::SeqCst), 0);
		assert_eq!(flow.visible_error(), Some("Please enter a valid email address"));
	}

	#[tokio::test]
	async fn test_success_with_message_reaches_terminal_view() {
		let (handler, count) = ok_handler();
		let mut props = ForgotPasswordProps::new(handler);
		props.success_message = Some("We sent a reset link to your inbox.".to_string());
		props.on_back_to_login = Some(Arc::new(|| {}));
		let mut flow = ForgotPasswordFlow::new(props);
		flow.set_email("ada@example.com");

		assert!(flow.submit().await);
		assert_eq!(count.load(Ordering::SeqCst), 1);

		match flow.render() {
			ForgotPasswordView::Success {
				title,
				message,
				back_title,
				..
			} => {
				assert_eq!(title, "Check Your Email");
				assert_eq!(message, "We sent a reset link to your inbox.");
				assert_eq!(back_title.as_deref(), Some("Back to Sign In"));
			}
			other => panic!("expected success view, got {other:?}"),
		}
	}

	#[tokio::test]
	async fn test_success_without_message_stays_on_entry_view() {
		let (handler, _) = ok_handler();
		let mut flow = ForgotPasswordFlow::new(ForgotPasswordProps::new(handler));
		flow.set_email("ada@example.com");

		assert!(flow.submit().await);

		assert!(matches!(flow.render(), ForgotPasswordView::Entry { .. }));
	}

	#[tokio::test]
	async fn test_failure_releases_lock_and_stays_on_entry() {
		let handler: EmailSubmitHandler =
			Arc::new(|_email| Box::pin(async { Err(anyhow::anyhow!("mail server down")) }));
		let mut flow = ForgotPasswordFlow::new(ForgotPasswordProps::new(handler));
		flow.set_email("ada@example.com");

		let submitted = flow.submit().await;

		assert!(!submitted);
		assert!(flow.press_submit().is_ok());
	}

	#[test]
	fn test_duplicate_press_is_rejected() {
		let (handler, count) = ok_handler();
		let mut flow = ForgotPasswordFlow::new(ForgotPasswordProps::new(handler));
		flow.set_email("ada@example.com");

		let first = flow.press_submit();
		let second = flow.press_submit();

		assert!(first.is_ok());
		assert!(matches!(second, Err(ResetRejection::AlreadySubmitting)));
		assert_eq!(count.load(Ordering::SeqCst), 1);
	}
}
