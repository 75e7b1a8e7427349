//! Field visibility resolution and default-value materialization
//!
//! Visibility is decided per field: an explicit `visible` override always
//! wins; otherwise the mode default applies. Sign-in shows
//! `{email, password}`, sign-up shows `{email, password, confirmPassword}`.
//! The name, username and phone fields never default on in either mode;
//! callers must opt in. That asymmetry is a deliberate product default.
//!
//! The materializer produces the sole initial state for a form-state
//! strategy: exactly the keys a submission may carry, nothing else.

use crate::types::{AuthMode, FieldKey, FieldsConfig};
use serde_json::{Value, json};
use std::collections::HashMap;

/// Whether a field renders for the given mode and configuration.
///
/// # Examples
///
/// ```
/// use auth_forms::visibility::is_visible;
/// use auth_forms::{AuthMode, FieldKey, FieldsConfig};
///
/// let config = FieldsConfig::default();
/// assert!(is_visible(FieldKey::Email, AuthMode::SignIn, &config));
/// assert!(!is_visible(FieldKey::ConfirmPassword, AuthMode::SignIn, &config));
/// assert!(is_visible(FieldKey::ConfirmPassword, AuthMode::SignUp, &config));
/// assert!(!is_visible(FieldKey::Phone, AuthMode::SignUp, &config));
/// ```
pub fn is_visible(field: FieldKey, mode: AuthMode, fields: &FieldsConfig) -> bool {
	match fields.get(field).and_then(|config| config.visible) {
		Some(explicit) => explicit,
		None => match mode {
			AuthMode::SignIn => matches!(field, FieldKey::Email | FieldKey::Password),
			AuthMode::SignUp => matches!(
				field,
				FieldKey::Email | FieldKey::Password | FieldKey::ConfirmPassword
			),
		},
	}
}

/// The visible text fields, in canonical declaration order.
pub fn visible_fields(mode: AuthMode, fields: &FieldsConfig) -> Vec<FieldKey> {
	FieldKey::ALL
		.into_iter()
		.filter(|&field| is_visible(field, mode, fields))
		.collect()
}

/// Materialize the default value map for the given mode and configuration.
///
/// Always seeds `email` and `password`. Seeds the opt-in text fields when
/// explicitly visible; sign-up additionally seeds its whole data shape
/// (`confirmPassword`, names, `phone`, `username`, `acceptTerms`) and
/// sign-in seeds `rememberMe`.
pub fn default_values(mode: AuthMode, fields: &FieldsConfig) -> HashMap<String, Value> {
	let mut values = HashMap::new();
	values.insert("email".to_string(), json!(""));
	values.insert("password".to_string(), json!(""));

	for field in [
		FieldKey::Phone,
		FieldKey::FirstName,
		FieldKey::LastName,
		FieldKey::Username,
	] {
		if fields.get(field).and_then(|config| config.visible) == Some(true) {
			values.insert(field.name().to_string(), json!(""));
		}
	}

	match mode {
		AuthMode::SignUp => {
			for field in [
				FieldKey::ConfirmPassword,
				FieldKey::FirstName,
				FieldKey::LastName,
				FieldKey::Phone,
				FieldKey::Username,
			] {
				values.insert(field.name().to_string(), json!(""));
			}
			values.insert("acceptTerms".to_string(), json!(false));
		}
		AuthMode::SignIn => {
			values.insert("rememberMe".to_string(), json!(false));
		}
	}

	values
}

/// Defaults with caller-supplied initial values merged on top (caller
/// wins). The result is the strategy's initial state; it never omits a
/// key a visible field writes to.
pub fn initial_state(
	mode: AuthMode,
	fields: &FieldsConfig,
	initial_values: &HashMap<String, Value>,
) -> HashMap<String, Value> {
	let mut values = default_values(mode, fields);
	for (key, value) in initial_values {
		values.insert(key.clone(), value.clone());
	}
	values
}
