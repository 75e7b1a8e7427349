//! Form orchestration shell
//!
//! [`AuthForm`] owns one mounted form instance: the mode, the submission
//! sub-state, the active form-state strategy, and the resolved theme and
//! translation catalog. It wires visibility, validation, and the
//! legacy/modern config merge into a renderable [`FormElement`] sequence,
//! and dispatches submission to the caller's async handler.
//!
//! Submission is a press/resolve protocol: [`AuthForm::press_submit`]
//! validates and hands back the caller's future, [`AuthForm::resolve_submit`]
//! feeds the settled result back in. [`AuthForm::submit`] wraps both for
//! hosts that just want to await the whole thing. While a submission is in
//! flight every further press is rejected, so the callback runs exactly
//! once per accepted press.

use crate::context::FormEnvironment;
use crate::i18n::{MessageKey, Translations};
use crate::resolve::{
	effective_accept_terms, effective_forgot_password, effective_remember_me,
	effective_submit_button,
};
use crate::schema::{ValidationSchema, build_schema};
use crate::strategies::{FormStrategy, build_strategy};
use crate::theme::Theme;
use crate::types::{
	AuthFormData, AuthFormProps, AuthMode, FieldKey, HandlerFuture, IconPosition,
};
use crate::ui::checkbox::{CheckboxElement, CheckboxKind};
use crate::ui::footer::footer_element;
use crate::ui::header::header_element;
use crate::ui::icons::{IconProvider, default_icon_provider};
use crate::ui::input::{AutoCapitalize, AutoComplete, InputElement, KeyboardType};
use crate::ui::phone::{CountryPicker, PhoneInputElement};
use crate::ui::social::social_button_element;
use crate::ui::submit_button::SubmitButtonElement;
use crate::ui::{BiometricButton, FormElement};
use crate::visibility::{default_values, initial_state, is_visible};
use serde_json::Value;
use std::sync::Arc;

/// Submission sub-state, orthogonal to the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
	Idle,
	Submitting,
	Succeeded,
	Failed,
}

/// Why a submit press did not dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejection {
	/// A previous submission is still in flight; the press is a no-op.
	#[error("a submission is already in flight")]
	AlreadySubmitting,
	/// The caller's loading flag disables the submit control.
	#[error("the form is loading")]
	Loading,
	/// Whole-record validation failed; errors are now visible.
	#[error("validation failed")]
	Invalid,
}

/// One mounted authentication form.
pub struct AuthForm {
	props: AuthFormProps,
	mode: AuthMode,
	submit_state: SubmitState,
	strategy: Box<dyn FormStrategy>,
	theme: Theme,
	translations: Translations,
	icons: Arc<dyn IconProvider>,
	country_picker: Option<CountryPicker>,
	biometric: Option<BiometricButton>,
}

impl AuthForm {
	/// Build a form with no ambient environment.
	pub fn new(props: AuthFormProps) -> Self {
		Self::with_environment(props, &FormEnvironment::default())
	}

	/// Build a form against an ambient environment. Direct props win over
	/// ambient values, which win over the built-in defaults.
	pub fn with_environment(props: AuthFormProps, environment: &FormEnvironment) -> Self {
		let theme = environment.resolve_theme(props.theme.as_ref());
		let translations = environment.resolve_translations(props.translations.as_ref());
		let mode = props.mode;
		let schema = schema_for(&props, mode);
		let initial = initial_state(mode, &props.fields, &props.initial_values);
		let strategy = build_strategy(props.validation_type, initial, schema);
		let icons = props
			.icon_provider
			.clone()
			.unwrap_or_else(default_icon_provider);
		let country_picker = props
			.fields
			.phone
			.as_ref()
			.map(|phone| CountryPicker::new(phone.country_picker.as_ref()));
		let biometric = props.biometric.clone().map(BiometricButton::new);

		Self {
			props,
			mode,
			submit_state: SubmitState::Idle,
			strategy,
			theme,
			translations,
			icons,
			country_picker,
			biometric,
		}
	}

	pub fn mode(&self) -> AuthMode {
		self.mode
	}

	pub fn submit_state(&self) -> SubmitState {
		self.submit_state
	}

	pub fn theme(&self) -> &Theme {
		&self.theme
	}

	pub fn translations(&self) -> &Translations {
		&self.translations
	}

	/// Current value map (exactly the materialized key set).
	pub fn values(&self) -> &std::collections::HashMap<String, Value> {
		self.strategy.values()
	}

	/// Write a text field value.
	pub fn set_text(&mut self, field: FieldKey, value: impl Into<String>) {
		self.strategy
			.set_value(field.name(), Value::String(value.into()));
	}

	/// Toggle a checkbox value.
	pub fn set_checkbox(&mut self, kind: CheckboxKind, checked: bool) {
		self.strategy.set_value(kind.field(), Value::Bool(checked));
	}

	/// The field lost focus: runs the active strategy's blur validation.
	pub fn blur(&mut self, field: FieldKey) {
		self.strategy.blur(field.name());
	}

	/// Displayed error for a field (gated on touched-or-submitted).
	pub fn visible_error(&self, field: FieldKey) -> Option<&str> {
		self.strategy.visible_error(field.name())
	}

	/// Replace the externally supplied submission error string.
	pub fn set_api_error(&mut self, api_error: Option<String>) {
		self.props.api_error = api_error;
	}

	/// Replace the caller's loading flag.
	pub fn set_loading(&mut self, is_loading: bool) {
		self.props.is_loading = is_loading;
	}

	/// Toggle between sign-in and sign-up.
	///
	/// Rebuilds the default shape, the visible-field set and the schema
	/// for the new mode, retaining entered values for fields common to
	/// both shapes, then notifies the mode observer.
	pub fn toggle_mode(&mut self) {
		let mode = self.mode.toggled();
		tracing::debug!(?mode, "auth form mode toggled");
		self.mode = mode;
		self.strategy.reinitialize(
			default_values(mode, &self.props.fields),
			schema_for(&self.props, mode),
		);
		self.submit_state = SubmitState::Idle;
		if let Some(observer) = &self.props.on_mode_change {
			observer(mode);
		}
	}

	/// Press the submit control.
	///
	/// On success the caller's future is returned for the host to await;
	/// feed the settled result back through [`Self::resolve_submit`]. A
	/// press while a submission is in flight, while the form is loading,
	/// or while the record is invalid dispatches nothing.
	pub fn press_submit(&mut self) -> Result<HandlerFuture, SubmitRejection> {
		if self.submit_state == SubmitState::Submitting {
			tracing::debug!("duplicate submit press ignored");
			return Err(SubmitRejection::AlreadySubmitting);
		}
		if self.props.is_loading {
			return Err(SubmitRejection::Loading);
		}
		if let Some(on_press) = self
			.props
			.submit_button
			.as_ref()
			.and_then(|config| config.on_press.clone())
		{
			on_press();
		}
		if !self.strategy.validate_all() {
			tracing::debug!("submit blocked by validation");
			return Err(SubmitRejection::Invalid);
		}
		let data = AuthFormData::from_values(self.strategy.values());
		self.submit_state = SubmitState::Submitting;
		tracing::debug!(mode = ?self.mode, "submit dispatched");
		Ok((self.props.on_submit)(data))
	}

	/// Feed back the settled submit result: success resets the fields to
	/// their computed defaults, failure releases the lock and leaves the
	/// error display to the caller's `api_error`.
	pub fn resolve_submit(&mut self, result: anyhow::Result<()>) {
		match result {
			Ok(()) => {
				tracing::debug!("submit succeeded");
				self.submit_state = SubmitState::Succeeded;
				self.strategy.reset();
			}
			Err(error) => {
				tracing::debug!(%error, "submit failed");
				self.submit_state = SubmitState::Failed;
			}
		}
	}

	/// Validate, dispatch, await, and settle in one call.
	pub async fn submit(&mut self) -> SubmitState {
		match self.press_submit() {
			Ok(task) => {
				let result = task.await;
				self.resolve_submit(result);
			}
			Err(rejection) => {
				tracing::trace!(%rejection, "submit press rejected");
			}
		}
		self.submit_state
	}

	/// Press the forgot-password link. Only active in sign-in mode and
	/// when the merged configuration enables it with a handler.
	pub fn press_forgot_password(&self) {
		if self.mode != AuthMode::SignIn {
			return;
		}
		let effective = effective_forgot_password(
			self.props.forgot_password.as_ref(),
			self.props.on_forgot_password.as_ref(),
			&self.translations,
		);
		if effective.enabled {
			if let Some(on_press) = effective.on_press {
				on_press();
			}
		}
	}

	/// Press the footer link: a custom handler if configured, otherwise
	/// the mode toggle when an observer is wired.
	pub fn press_footer_link(&mut self) {
		use crate::ui::footer::FooterLinkAction;

		let can_toggle = self.props.on_mode_change.is_some();
		let Some(footer) = footer_element(
			self.props.footer.as_ref(),
			self.mode,
			can_toggle,
			&self.translations,
		) else {
			return;
		};
		match footer.link_action {
			FooterLinkAction::Custom => {
				if let Some(on_press) = self
					.props
					.footer
					.as_ref()
					.and_then(|config| config.text_link_on_press.clone())
				{
					on_press();
				}
			}
			FooterLinkAction::ToggleMode => self.toggle_mode(),
			FooterLinkAction::None => {}
		}
	}

	/// Press a social login button. Returns the provider's future, or
	/// `None` for unknown/disabled providers.
	pub fn press_social(&self, provider: crate::types::SocialProvider) -> Option<HandlerFuture> {
		let config = self
			.props
			.social_logins
			.iter()
			.find(|login| login.provider == provider)?;
		if config.disabled {
			return None;
		}
		Some((config.on_press)())
	}

	/// Press the biometric button (sign-in only). Feed the settled result
	/// back through [`Self::resolve_biometric`].
	pub fn press_biometric(&mut self) -> Option<HandlerFuture> {
		if self.mode != AuthMode::SignIn {
			return None;
		}
		self.biometric.as_mut()?.press()
	}

	pub fn resolve_biometric(&mut self, result: anyhow::Result<()>) {
		if let Some(biometric) = self.biometric.as_mut() {
			biometric.resolve(result);
		}
	}

	/// Background color for the form container: the container style
	/// override wins over the theme token.
	pub fn container_background(&self) -> String {
		self.props
			.styles
			.container
			.as_ref()
			.and_then(|style| style.get("backgroundColor"))
			.and_then(Value::as_str)
			.map(str::to_string)
			.unwrap_or_else(|| self.theme.colors.background.clone())
	}

	/// The phone input's country picker, when a phone field is configured.
	pub fn country_picker(&self) -> Option<&CountryPicker> {
		self.country_picker.as_ref()
	}

	pub fn country_picker_mut(&mut self) -> Option<&mut CountryPicker> {
		self.country_picker.as_mut()
	}

	/// Resolve the current state into the renderable element sequence.
	pub fn render(&self) -> Vec<FormElement> {
		let mut elements = Vec::new();

		if let Some(header) = &self.props.header {
			elements.push(FormElement::Header(header_element(
				header,
				self.mode,
				&self.translations,
			)));
		}
		if let Some(message) = &self.props.api_error {
			elements.push(FormElement::ApiError {
				message: message.clone(),
			});
		}

		for field in [
			FieldKey::FirstName,
			FieldKey::LastName,
			FieldKey::Username,
			FieldKey::Email,
		] {
			if is_visible(field, self.mode, &self.props.fields) {
				elements.push(FormElement::Input(self.input_element(field)));
			}
		}

		if is_visible(FieldKey::Phone, self.mode, &self.props.fields) {
			elements.push(FormElement::Phone(PhoneInputElement {
				input: self.input_element(FieldKey::Phone),
				country: self
					.country_picker
					.as_ref()
					.filter(|picker| picker.is_enabled())
					.map(|picker| picker.selected()),
			}));
		}

		if is_visible(FieldKey::Password, self.mode, &self.props.fields) {
			elements.push(FormElement::Input(self.input_element(FieldKey::Password)));
		}

		if self.mode == AuthMode::SignIn {
			let forgot = effective_forgot_password(
				self.props.forgot_password.as_ref(),
				self.props.on_forgot_password.as_ref(),
				&self.translations,
			);
			if forgot.renders() {
				elements.push(FormElement::ForgotPasswordLink { text: forgot.text });
			}
		}

		if is_visible(FieldKey::ConfirmPassword, self.mode, &self.props.fields) {
			elements.push(FormElement::Input(self.input_element(FieldKey::ConfirmPassword)));
		}

		match self.mode {
			AuthMode::SignIn => {
				let remember = effective_remember_me(
					self.props.remember_me.as_ref(),
					self.props.show_remember_me,
					&self.translations,
				);
				if remember.enabled {
					elements.push(FormElement::Checkbox(CheckboxElement {
						kind: CheckboxKind::RememberMe,
						label: remember.label,
						link_text: None,
						checked: self.checkbox_value(CheckboxKind::RememberMe),
						error: None,
						has_link_handler: false,
						style: remember.style,
					}));
				}
			}
			AuthMode::SignUp => {
				let terms = effective_accept_terms(
					self.props.accept_terms.as_ref(),
					self.props.show_accept_terms,
					&self.translations,
				);
				if terms.enabled {
					elements.push(FormElement::Checkbox(CheckboxElement {
						kind: CheckboxKind::AcceptTerms,
						label: terms.label,
						link_text: Some(terms.link_text),
						checked: self.checkbox_value(CheckboxKind::AcceptTerms),
						error: self
							.strategy
							.visible_error("acceptTerms")
							.map(str::to_string),
						has_link_handler: terms.on_link_press.is_some(),
						style: terms.style,
					}));
				}
			}
		}

		let submit = effective_submit_button(
			self.props.submit_button.as_ref(),
			self.props.submit_button_text.as_deref(),
			self.mode,
			&self.translations,
		);
		let busy = self.props.is_loading || self.submit_state == SubmitState::Submitting;
		elements.push(FormElement::SubmitButton(SubmitButtonElement {
			title: submit.text,
			is_loading: busy,
			disabled: busy,
		}));

		if self.mode == AuthMode::SignIn {
			if let Some(element) = self.biometric.as_ref().and_then(|biometric| {
				biometric.element(
					self.icons.as_ref(),
					&self.theme.colors.primary,
					&self.translations,
				)
			}) {
				elements.push(FormElement::Biometric(element));
			}
		}

		if !self.props.social_logins.is_empty() {
			let buttons = self
				.props
				.social_logins
				.iter()
				.map(|login| {
					social_button_element(login, self.icons.as_ref(), &self.theme.colors.text)
				})
				.collect();
			elements.push(FormElement::SocialButtons { buttons });
		}

		if let Some(footer) = footer_element(
			self.props.footer.as_ref(),
			self.mode,
			self.props.on_mode_change.is_some(),
			&self.translations,
		) {
			elements.push(FormElement::Footer(footer));
		}

		elements
	}

	fn checkbox_value(&self, kind: CheckboxKind) -> bool {
		self.strategy.values().get(kind.field()) == Some(&Value::Bool(true))
	}

	fn input_element(&self, field: FieldKey) -> InputElement {
		let t = &self.translations;
		let (label_key, placeholder_key, icon_name) = match field {
			FieldKey::Email => (MessageKey::Email, MessageKey::EmailPlaceholder, "mail"),
			FieldKey::Password => (MessageKey::Password, MessageKey::PasswordPlaceholder, "lock"),
			FieldKey::ConfirmPassword => (
				MessageKey::ConfirmPassword,
				MessageKey::ConfirmPasswordPlaceholder,
				"lock",
			),
			FieldKey::FirstName => (
				MessageKey::FirstName,
				MessageKey::FirstNamePlaceholder,
				"user",
			),
			FieldKey::LastName => (MessageKey::LastName, MessageKey::LastNamePlaceholder, "user"),
			FieldKey::Username => (MessageKey::Username, MessageKey::UsernamePlaceholder, "user"),
			FieldKey::Phone => (MessageKey::PhoneNumber, MessageKey::PhonePlaceholder, "phone"),
		};
		let keyboard_type = match field {
			FieldKey::Email => KeyboardType::EmailAddress,
			FieldKey::Phone => KeyboardType::Phone,
			_ => KeyboardType::Default,
		};
		let auto_capitalize = match field {
			FieldKey::FirstName | FieldKey::LastName => AutoCapitalize::Words,
			_ => AutoCapitalize::None,
		};
		let auto_complete = match field {
			FieldKey::Email => Some(AutoComplete::Email),
			FieldKey::Password => Some(AutoComplete::Password),
			_ => None,
		};
		let secure = matches!(field, FieldKey::Password | FieldKey::ConfirmPassword);
		let config = self.props.fields.get(field);

		let value = self
			.strategy
			.values()
			.get(field.name())
			.and_then(Value::as_str)
			.unwrap_or_default()
			.to_string();
		let icon_name = config
			.and_then(|c| c.icon.as_deref())
			.unwrap_or(icon_name);

		InputElement {
			name: field.name().to_string(),
			label: config
				.and_then(|c| c.label.clone())
				.unwrap_or_else(|| t.get(label_key).to_string()),
			placeholder: config
				.and_then(|c| c.placeholder.clone())
				.unwrap_or_else(|| t.get(placeholder_key).to_string()),
			value,
			error: self.strategy.visible_error(field.name()).map(str::to_string),
			touched: self.strategy.is_touched(field.name()),
			secure_text_entry: secure,
			keyboard_type,
			auto_capitalize,
			auto_complete,
			icon: Some(self.icons.render_icon(
				icon_name,
				20,
				&self.theme.colors.placeholder,
			)),
			icon_position: config
				.and_then(|c| c.icon_position)
				.unwrap_or(IconPosition::Left),
			disabled: false,
			style: config.and_then(|c| c.style.clone()),
		}
	}
}

fn schema_for(props: &AuthFormProps, mode: AuthMode) -> Arc<dyn ValidationSchema> {
	props.custom_schema.clone().unwrap_or_else(|| {
		build_schema(props.validation_type.schema_syntax(), mode, &props.fields)
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::{SubmitHandler, ValidationType};
	use serde_json::json;
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	fn ok_handler() -> (SubmitHandler, Arc<AtomicUsize>) {
		let count = Arc::new(AtomicUsize::new(0));
		let captured = Arc::clone(&count);
		let handler: SubmitHandler = Arc::new(move |_data| {
			captured.fetch_add(1, Ordering::SeqCst);
			Box::pin(async { Ok(()) })
		});
		(handler, count)
	}

	fn signin_props() -> AuthFormProps {
		let (handler, _) = ok_handler();
		AuthFormProps::new(AuthMode::SignIn, ValidationType::ManagedFieldRules, handler)
	}

	#[test]
	fn test_initial_state_matches_mode_defaults() {
		let form = AuthForm::new(signin_props());

		assert_eq!(form.mode(), AuthMode::SignIn);
		assert_eq!(form.submit_state(), SubmitState::Idle);
		assert_eq!(form.values()["rememberMe"], json!(false));
	}

	#[test]
	fn test_invalid_press_dispatches_nothing_and_reveals_errors() {
		let mut form = AuthForm::new(signin_props());

		let press = form.press_submit();

		assert!(matches!(press, Err(SubmitRejection::Invalid)));
		assert_eq!(form.submit_state(), SubmitState::Idle);
		assert_eq!(form.visible_error(FieldKey::Email), Some("Email is required"));
	}

	#[test]
	fn test_loading_flag_disables_submission() {
		let mut form = AuthForm::new(signin_props());
		form.set_text(FieldKey::Email, "ada@example.com");
		form.set_text(FieldKey::Password, "longenough");
		form.set_loading(true);

		assert!(matches!(form.press_submit(), Err(SubmitRejection::Loading)));
	}

	#[tokio::test]
	async fn test_successful_submit_resets_to_defaults() {
		let (handler, count) = ok_handler();
		let mut form = AuthForm::new(AuthFormProps::new(
			AuthMode::SignIn,
			ValidationType::ManagedFieldRules,
			handler,
		));
		form.set_text(FieldKey::Email, "ada@example.com");
		form.set_text(FieldKey::Password, "longenough");

		let state = form.submit().await;

		assert_eq!(state, SubmitState::Succeeded);
		assert_eq!(count.load(Ordering::SeqCst), 1);
		assert_eq!(form.values()["email"], json!(""));
	}

	#[tokio::test]
	async fn test_failed_submit_releases_lock_and_keeps_values() {
		let handler: SubmitHandler =
			Arc::new(|_data| Box::pin(async { Err(anyhow::anyhow!("server said no")) }));
		let mut form = AuthForm::new(AuthFormProps::new(
			AuthMode::SignIn,
			ValidationType::ResolverFieldRules,
			handler,
		));
		form.set_text(FieldKey::Email, "ada@example.com");
		form.set_text(FieldKey::Password, "longenough");

		let state = form.submit().await;

		assert_eq!(state, SubmitState::Failed);
		assert_eq!(form.values()["email"], json!("ada@example.com"));
		// The lock is released: the next press dispatches again.
		assert!(form.press_submit().is_ok());
	}

	#[test]
	fn test_double_press_invokes_callback_exactly_once() {
		let (handler, count) = ok_handler();
		let mut form = AuthForm::new(AuthFormProps::new(
			AuthMode::SignIn,
			ValidationType::ManagedFieldRules,
			handler,
		));
		form.set_text(FieldKey::Email, "ada@example.com");
		form.set_text(FieldKey::Password, "longenough");

		let first = form.press_submit();
		let second = form.press_submit();

		assert!(first.is_ok());
		assert!(matches!(second, Err(SubmitRejection::AlreadySubmitting)));
		assert_eq!(count.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn test_toggle_mode_notifies_observer_and_rebuilds_shape() {
		let observed = Arc::new(AtomicUsize::new(0));
		let captured = Arc::clone(&observed);
		let mut props = signin_props();
		props.on_mode_change = Some(Arc::new(move |mode| {
			assert_eq!(mode, AuthMode::SignUp);
			captured.fetch_add(1, Ordering::SeqCst);
		}));
		let mut form = AuthForm::new(props);
		form.set_text(FieldKey::Email, "ada@example.com");

		form.toggle_mode();

		assert_eq!(form.mode(), AuthMode::SignUp);
		assert_eq!(observed.load(Ordering::SeqCst), 1);
		// Common fields retained, sign-in-only keys dropped.
		assert_eq!(form.values()["email"], json!("ada@example.com"));
		assert!(!form.values().contains_key("rememberMe"));
		assert_eq!(form.values()["confirmPassword"], json!(""));
	}

	#[test]
	fn test_render_signin_default_sequence() {
		let mut props = signin_props();
		props.header = Some(crate::types::HeaderConfig::default());
		let form = AuthForm::new(props);

		let elements = form.render();
		let kinds: Vec<&str> = elements
			.iter()
			.map(|element| match element {
				FormElement::Header(_) => "header",
				FormElement::ApiError { .. } => "apiError",
				FormElement::Input(input) => input.name.as_str(),
				FormElement::Phone(_) => "phone",
				FormElement::ForgotPasswordLink { .. } => "forgotPassword",
				FormElement::Checkbox(_) => "checkbox",
				FormElement::SubmitButton(_) => "submit",
				FormElement::Biometric(_) => "biometric",
				FormElement::SocialButtons { .. } => "social",
				FormElement::Footer(_) => "footer",
			})
			.collect();

		assert_eq!(
			kinds,
			["header", "email", "password", "checkbox", "submit", "footer"]
		);
	}

	#[test]
	fn test_container_background_prefers_style_override() {
		let mut props = signin_props();
		let form = AuthForm::new(props.clone());
		assert_eq!(form.container_background(), "#ffffff");

		let mut container = crate::types::Style::new();
		container.insert("backgroundColor".to_string(), json!("#0f172a"));
		props.styles.container = Some(container);
		let form = AuthForm::new(props);
		assert_eq!(form.container_background(), "#0f172a");
	}

	#[test]
	fn test_custom_schema_overrides_builtins() {
		use crate::schema::ValidationSchema;
		use std::collections::HashMap;

		struct AcceptEverything;
		impl ValidationSchema for AcceptEverything {
			fn validate_field(&self, _: &str, _: &HashMap<String, Value>) -> Option<String> {
				None
			}
			fn validate(&self, _: &HashMap<String, Value>) -> HashMap<String, String> {
				HashMap::new()
			}
		}

		let mut props = signin_props();
		props.custom_schema = Some(Arc::new(AcceptEverything));
		let mut form = AuthForm::new(props);

		// Empty record everywhere, yet the custom schema passes it.
		assert!(form.press_submit().is_ok());
	}
}
