//! Core data model for the authentication form
//!
//! Everything the caller hands to [`crate::AuthForm`] lives here: the
//! submitted record, the mode and validation-type selectors, and the
//! per-control configuration objects with their deprecated flat
//! counterparts.

use crate::i18n::Translations;
use crate::theme::Theme;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Synchronous press handler (links, toggles, custom buttons).
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Future returned by caller-owned asynchronous handlers.
pub type HandlerFuture = BoxFuture<'static, anyhow::Result<()>>;

/// Submit callback: receives the validated record, settles asynchronously.
pub type SubmitHandler = Arc<dyn Fn(AuthFormData) -> HandlerFuture + Send + Sync>;

/// Social login / biometric press callback.
pub type PressHandler = Arc<dyn Fn() -> HandlerFuture + Send + Sync>;

/// Forgot-password submit callback: receives the entered email address.
pub type EmailSubmitHandler = Arc<dyn Fn(String) -> HandlerFuture + Send + Sync>;

/// Observer notified when the form toggles between sign-in and sign-up.
pub type ModeObserver = Arc<dyn Fn(AuthMode) + Send + Sync>;

/// The record passed to the submit callback.
///
/// `email` and `password` are always present. Every other key appears only
/// when the default-value materializer seeded it for the active mode and
/// field configuration; serialization omits absent keys.
///
/// # Examples
///
/// ```
/// use auth_forms::AuthFormData;
///
/// let data = AuthFormData {
/// 	email: "ada@example.com".to_string(),
/// 	password: "Secret123".to_string(),
/// 	..AuthFormData::default()
/// };
/// let json = serde_json::to_value(&data).unwrap();
/// assert_eq!(json["email"], "ada@example.com");
/// assert!(json.get("confirmPassword").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthFormData {
	pub email: String,
	pub password: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub confirm_password: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub first_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub username: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub remember_me: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub accept_terms: Option<bool>,
}

impl AuthFormData {
	/// Build a record from a form-state value map.
	///
	/// Only keys present in the map make it into the record, which keeps
	/// the submitted shape identical to the materialized default shape.
	pub fn from_values(values: &HashMap<String, serde_json::Value>) -> Self {
		let object: serde_json::Map<String, serde_json::Value> =
			values.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
		serde_json::from_value(serde_json::Value::Object(object)).unwrap_or_default()
	}
}

/// Sign-in vs sign-up. Selects the default visible-field set and the
/// default validation ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
	SignIn,
	SignUp,
}

impl AuthMode {
	/// The other mode.
	///
	/// # Examples
	///
	/// ```
	/// use auth_forms::AuthMode;
	///
	/// assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
	/// assert_eq!(AuthMode::SignUp.toggled(), AuthMode::SignIn);
	/// ```
	pub fn toggled(self) -> Self {
		match self {
			AuthMode::SignIn => AuthMode::SignUp,
			AuthMode::SignUp => AuthMode::SignIn,
		}
	}
}

/// The seven text fields of the form. The two checkboxes are governed by
/// their own config objects, not by [`FieldsConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
	Email,
	Password,
	ConfirmPassword,
	FirstName,
	LastName,
	Username,
	Phone,
}

impl FieldKey {
	/// All text fields, in declaration order.
	pub const ALL: [FieldKey; 7] = [
		FieldKey::Email,
		FieldKey::Password,
		FieldKey::ConfirmPassword,
		FieldKey::FirstName,
		FieldKey::LastName,
		FieldKey::Username,
		FieldKey::Phone,
	];

	/// The camelCase key used in value maps and serialized records.
	pub fn name(self) -> &'static str {
		match self {
			FieldKey::Email => "email",
			FieldKey::Password => "password",
			FieldKey::ConfirmPassword => "confirmPassword",
			FieldKey::FirstName => "firstName",
			FieldKey::LastName => "lastName",
			FieldKey::Username => "username",
			FieldKey::Phone => "phone",
		}
	}
}

/// Selects the form-state strategy and the schema syntax it validates
/// with. A caller-supplied custom schema overrides the built-in schema
/// regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationType {
	/// Managed strategy validating against the field-rules syntax.
	ManagedFieldRules,
	/// Resolver strategy validating against the field-rules syntax.
	ResolverFieldRules,
	/// Resolver strategy validating against the object-schema syntax.
	ResolverObjectSchema,
}

/// Style overrides are opaque pass-through data for the host renderer.
pub type Style = serde_json::Map<String, serde_json::Value>;

/// Which side of the input an icon renders on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconPosition {
	#[default]
	Left,
	Right,
}

/// Per-field override record.
///
/// `visible` is tri-state in effect: `Some(true)`/`Some(false)` always
/// win, `None` falls back to the mode default. `required` only selects
/// the validation branch; it never changes rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
	pub label: Option<String>,
	pub placeholder: Option<String>,
	pub required: Option<bool>,
	pub visible: Option<bool>,
	/// Icon name resolved through the active [`crate::ui::IconProvider`].
	pub icon: Option<String>,
	pub icon_position: Option<IconPosition>,
	pub style: Option<Style>,
}

impl FieldConfig {
	/// Shorthand for a visible field.
	///
	/// # Examples
	///
	/// ```
	/// use auth_forms::FieldConfig;
	///
	/// let config = FieldConfig::visible();
	/// assert_eq!(config.visible, Some(true));
	/// assert_eq!(config.required, None);
	/// ```
	pub fn visible() -> Self {
		Self {
			visible: Some(true),
			..Self::default()
		}
	}

	/// Shorthand for a visible, required field.
	pub fn required() -> Self {
		Self {
			visible: Some(true),
			required: Some(true),
			..Self::default()
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}
}

/// Country-code picker attached to the phone field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CountryPickerConfig {
	pub enabled: bool,
	/// ISO 3166-1 alpha-2 code preselected when the picker opens.
	pub default_country: Option<String>,
	pub style: Option<Style>,
}

impl Default for CountryPickerConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			default_country: None,
			style: None,
		}
	}
}

/// Phone field configuration: the common field record plus the picker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhoneFieldConfig {
	#[serde(flatten)]
	pub field: FieldConfig,
	pub country_picker: Option<CountryPickerConfig>,
}

/// Per-field configuration map. Absent entries fall back to mode defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldsConfig {
	pub email: Option<FieldConfig>,
	pub password: Option<FieldConfig>,
	pub confirm_password: Option<FieldConfig>,
	pub first_name: Option<FieldConfig>,
	pub last_name: Option<FieldConfig>,
	pub phone: Option<PhoneFieldConfig>,
	pub username: Option<FieldConfig>,
}

impl FieldsConfig {
	/// Look up the common field record for a key.
	pub fn get(&self, key: FieldKey) -> Option<&FieldConfig> {
		match key {
			FieldKey::Email => self.email.as_ref(),
			FieldKey::Password => self.password.as_ref(),
			FieldKey::ConfirmPassword => self.confirm_password.as_ref(),
			FieldKey::FirstName => self.first_name.as_ref(),
			FieldKey::LastName => self.last_name.as_ref(),
			FieldKey::Username => self.username.as_ref(),
			FieldKey::Phone => self.phone.as_ref().map(|p| &p.field),
		}
	}
}

/// Supported social login providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
	Google,
	Apple,
	Facebook,
	Twitter,
	Github,
}

impl SocialProvider {
	/// Default button label for the provider.
	pub fn label(self) -> &'static str {
		match self {
			SocialProvider::Google => "Google",
			SocialProvider::Apple => "Apple",
			SocialProvider::Facebook => "Facebook",
			SocialProvider::Twitter => "Twitter",
			SocialProvider::Github => "GitHub",
		}
	}

	/// Icon name resolved through the active icon provider.
	pub fn icon_name(self) -> &'static str {
		match self {
			SocialProvider::Google => "google",
			SocialProvider::Apple => "apple",
			SocialProvider::Facebook => "facebook",
			SocialProvider::Twitter => "twitter",
			SocialProvider::Github => "github",
		}
	}
}

/// One social login button.
#[derive(Clone)]
pub struct SocialLoginConfig {
	pub provider: SocialProvider,
	pub on_press: PressHandler,
	pub disabled: bool,
	pub label: Option<String>,
}

impl SocialLoginConfig {
	pub fn new(provider: SocialProvider, on_press: PressHandler) -> Self {
		Self {
			provider,
			on_press,
			disabled: false,
			label: None,
		}
	}
}

/// Biometric prompt kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BiometricKind {
	Fingerprint,
	FaceId,
	Both,
}

/// Biometric prompt configuration. The crate never touches biometric
/// hardware; it only invokes `on_authenticate`.
#[derive(Clone)]
pub struct BiometricConfig {
	pub enabled: bool,
	pub kind: Option<BiometricKind>,
	pub on_authenticate: PressHandler,
	pub prompt_message: Option<String>,
}

/// Forgot-password link configuration (structured form).
#[derive(Clone, Default)]
pub struct ForgotPasswordConfig {
	pub enabled: Option<bool>,
	pub text: Option<String>,
	pub on_press: Option<Callback>,
	pub style: Option<Style>,
	pub text_style: Option<Style>,
}

/// Checkbox style overrides shared by both checkbox rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckboxStyleConfig {
	pub container_style: Option<Style>,
	pub checkbox_style: Option<Style>,
	pub checkbox_checked_style: Option<Style>,
	pub checkmark_color: Option<String>,
	pub label_style: Option<Style>,
	pub link_style: Option<Style>,
}

/// Remember-me checkbox configuration (structured form).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RememberMeConfig {
	pub enabled: Option<bool>,
	pub label: Option<String>,
	#[serde(flatten)]
	pub style: CheckboxStyleConfig,
}

/// Accept-terms checkbox configuration (structured form).
#[derive(Clone, Default)]
pub struct AcceptTermsConfig {
	pub enabled: Option<bool>,
	pub label: Option<String>,
	pub link_text: Option<String>,
	pub on_link_press: Option<Callback>,
	pub style: CheckboxStyleConfig,
}

/// Submit button configuration (structured form).
#[derive(Clone, Default)]
pub struct SubmitButtonConfig {
	pub text: Option<String>,
	/// Invoked in addition to the form submission when the button is
	/// pressed.
	pub on_press: Option<Callback>,
	pub style: Option<Style>,
	pub text_style: Option<Style>,
	pub disabled_style: Option<Style>,
}

/// Footer configuration.
///
/// `use_default_footer_text` arbitrates two observed behaviors: when
/// `false` (the default) the footer renders only caller-supplied text;
/// when `true`, empty text falls back to mode-computed defaults from the
/// translation catalog.
#[derive(Clone, Default)]
pub struct FooterConfig {
	pub enabled: Option<bool>,
	pub text: Option<String>,
	pub text_link: Option<String>,
	pub text_link_on_press: Option<Callback>,
	/// Deprecated: use `text` instead.
	pub toggle_text: Option<String>,
	/// Deprecated: use `text_link` instead.
	pub toggle_link_text: Option<String>,
	pub terms_text: Option<String>,
	pub privacy_text: Option<String>,
	pub on_terms_press: Option<Callback>,
	pub on_privacy_press: Option<Callback>,
	pub use_default_footer_text: bool,
	pub text_style: Option<Style>,
	pub text_link_style: Option<Style>,
}

/// Logo rendered above the header title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogoConfig {
	/// Asset name resolved by the host renderer.
	pub source: String,
	pub size: Option<u32>,
	pub width: Option<u32>,
	pub height: Option<u32>,
	pub style: Option<Style>,
}

/// Header configuration. Title and subtitle fall back to mode-based
/// defaults from the translation catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderConfig {
	pub title: Option<String>,
	pub subtitle: Option<String>,
	pub logo: Option<LogoConfig>,
}

/// Style override map for the whole form. Every slot is opaque
/// pass-through data for the host renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthFormStyles {
	pub container: Option<Style>,
	pub header: Option<Style>,
	pub header_title: Option<Style>,
	pub header_subtitle: Option<Style>,
	pub logo_container: Option<Style>,
	pub body: Option<Style>,
	pub input_container: Option<Style>,
	pub input: Option<Style>,
	pub input_label: Option<Style>,
	pub input_error: Option<Style>,
	pub input_focused: Option<Style>,
	pub input_blurred: Option<Style>,
	pub button: Option<Style>,
	pub button_text: Option<Style>,
	pub button_disabled: Option<Style>,
	pub footer: Option<Style>,
	pub footer_text: Option<Style>,
	pub footer_link: Option<Style>,
	pub social_buttons_container: Option<Style>,
	pub social_button: Option<Style>,
	pub divider: Option<Style>,
	pub divider_text: Option<Style>,
}

/// Everything the primary entry point accepts.
///
/// Legacy flat props (`show_remember_me`, `show_accept_terms`,
/// `submit_button_text`, `on_forgot_password`) are kept for backward
/// compatibility; the structured config objects take precedence per
/// sub-field.
#[derive(Clone)]
pub struct AuthFormProps {
	pub mode: AuthMode,
	pub validation_type: ValidationType,
	pub on_submit: SubmitHandler,
	pub on_mode_change: Option<ModeObserver>,
	pub header: Option<HeaderConfig>,
	pub footer: Option<FooterConfig>,
	pub fields: FieldsConfig,
	pub social_logins: Vec<SocialLoginConfig>,
	pub biometric: Option<BiometricConfig>,
	pub styles: AuthFormStyles,
	pub is_loading: bool,
	/// Deprecated: use `submit_button.text` instead.
	pub submit_button_text: Option<String>,
	/// Deprecated: use `remember_me.enabled` instead.
	pub show_remember_me: Option<bool>,
	/// Deprecated: use `accept_terms.enabled` instead.
	pub show_accept_terms: Option<bool>,
	pub remember_me: Option<RememberMeConfig>,
	pub accept_terms: Option<AcceptTermsConfig>,
	/// Escape hatch: used verbatim instead of the built-in schema.
	pub custom_schema: Option<Arc<dyn crate::schema::ValidationSchema>>,
	/// Externally supplied submission error, displayed above the fields.
	pub api_error: Option<String>,
	pub initial_values: HashMap<String, serde_json::Value>,
	/// Deprecated: use `forgot_password.on_press` instead.
	pub on_forgot_password: Option<Callback>,
	pub forgot_password: Option<ForgotPasswordConfig>,
	pub submit_button: Option<SubmitButtonConfig>,
	/// Direct theme override; wins over the ambient environment.
	pub theme: Option<Theme>,
	/// Direct translation override; wins over the ambient environment.
	pub translations: Option<Translations>,
	pub icon_provider: Option<Arc<dyn crate::ui::IconProvider>>,
}

impl AuthFormProps {
	/// Minimal props: everything else defaults off/empty.
	pub fn new(mode: AuthMode, validation_type: ValidationType, on_submit: SubmitHandler) -> Self {
		Self {
			mode,
			validation_type,
			on_submit,
			on_mode_change: None,
			header: None,
			footer: None,
			fields: FieldsConfig::default(),
			social_logins: Vec::new(),
			biometric: None,
			styles: AuthFormStyles::default(),
			is_loading: false,
			submit_button_text: None,
			show_remember_me: None,
			show_accept_terms: None,
			remember_me: None,
			accept_terms: None,
			custom_schema: None,
			api_error: None,
			initial_values: HashMap::new(),
			on_forgot_password: None,
			forgot_password: None,
			submit_button: None,
			theme: None,
			translations: None,
			icon_provider: None,
		}
	}

	pub fn with_fields(mut self, fields: FieldsConfig) -> Self {
		self.fields = fields;
		self
	}

	pub fn with_mode_observer(mut self, observer: ModeObserver) -> Self {
		self.on_mode_change = Some(observer);
		self
	}

	pub fn with_initial_values(mut self, values: HashMap<String, serde_json::Value>) -> Self {
		self.initial_values = values;
		self
	}
}
