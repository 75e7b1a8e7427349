//! Themeable, internationalized authentication-form toolkit
//!
//! This crate models a configurable sign-in/sign-up form and resolves its
//! configuration into plain renderable data:
//! - Field visibility and default-value materialization per mode
//! - One declarative validation rule table emitted into two
//!   interchangeable schema syntaxes
//! - Two pluggable form-state strategies (managed and resolver)
//! - Legacy/modern config merge with strict three-tier precedence
//! - Theme and translation resolution with ambient-context layering
//! - Social login, biometric prompt and phone/country-code descriptors
//! - A standalone forgot-password flow
//!
//! The host application owns rendering, networking, credential storage
//! and biometric hardware; the toolkit only invokes caller-supplied
//! callbacks.
//!
//! ```
//! use auth_forms::{AuthForm, AuthFormProps, AuthMode, FieldKey, ValidationType};
//! use std::sync::Arc;
//!
//! let mut form = AuthForm::new(AuthFormProps::new(
//! 	AuthMode::SignIn,
//! 	ValidationType::ManagedFieldRules,
//! 	Arc::new(|data| {
//! 		Box::pin(async move {
//! 			assert_eq!(data.email, "ada@example.com");
//! 			Ok(())
//! 		})
//! 	}),
//! ));
//!
//! form.set_text(FieldKey::Email, "ada@example.com");
//! form.set_text(FieldKey::Password, "longenough");
//! assert!(form.press_submit().is_ok());
//! ```

pub mod context;
pub mod countries;
pub mod forgot_password;
pub mod form;
pub mod i18n;
pub mod resolve;
pub mod rules;
pub mod schema;
pub mod strategies;
pub mod theme;
pub mod types;
pub mod ui;
pub mod visibility;

pub use context::FormEnvironment;
pub use forgot_password::{
	ForgotPasswordFlow, ForgotPasswordProps, ForgotPasswordView, ResetRejection,
};
pub use form::{AuthForm, SubmitRejection, SubmitState};
pub use i18n::{MessageKey, Translations};
pub use rules::{FieldRules, ValidationRule, rule_table};
pub use schema::{FieldRulesSchema, ObjectSchema, SchemaSyntax, ValidationSchema, build_schema};
pub use strategies::{FormStrategy, ManagedForm, ResolverForm};
pub use theme::{Theme, ThemeOverrides};
pub use types::{
	AcceptTermsConfig, AuthFormData, AuthFormProps, AuthFormStyles, AuthMode, BiometricConfig,
	BiometricKind, Callback, CheckboxStyleConfig, CountryPickerConfig, EmailSubmitHandler,
	FieldConfig, FieldKey, FieldsConfig, FooterConfig, ForgotPasswordConfig, HandlerFuture,
	HeaderConfig, IconPosition, LogoConfig, ModeObserver, PhoneFieldConfig, PressHandler,
	RememberMeConfig, SocialLoginConfig, SocialProvider, Style, SubmitButtonConfig,
	SubmitHandler, ValidationType,
};
pub use ui::{FormElement, IconProvider, TextGlyphIcons};
pub use visibility::{default_values, is_visible, visible_fields};
