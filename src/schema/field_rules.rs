//! Field-rules schema syntax
//!
//! Syntax A: every field carries an ordered chain of compiled rules,
//! evaluated until the first failure. Cross-field rules sit inline in the
//! dependent field's chain.

use super::{ValidationSchema, is_absent};
use crate::rules::{EMAIL_REGEX, FieldRules, ValidationRule, rule_table};
use crate::types::{AuthMode, FieldsConfig};
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;

enum CompiledRule {
	Required { message: String },
	MinLength { min: usize, message: String },
	Pattern { regex: Regex, message: String },
	Email { message: String },
	CharClasses {
		lowercase: bool,
		uppercase: bool,
		digit: bool,
		message: String,
	},
	EqualsField { other_field: String, message: String },
	MustBeTrue { message: String },
}

impl CompiledRule {
	fn compile(rule: &ValidationRule) -> Self {
		match rule {
			ValidationRule::Required { message } => CompiledRule::Required {
				message: message.clone(),
			},
			ValidationRule::MinLength { min, message } => CompiledRule::MinLength {
				min: *min,
				message: message.clone(),
			},
			ValidationRule::Pattern { pattern, message } => CompiledRule::Pattern {
				regex: Regex::new(pattern).expect("rule table pattern: invalid regex"),
				message: message.clone(),
			},
			ValidationRule::Email { message } => CompiledRule::Email {
				message: message.clone(),
			},
			ValidationRule::CharClasses {
				lowercase,
				uppercase,
				digit,
				message,
			} => CompiledRule::CharClasses {
				lowercase: *lowercase,
				uppercase: *uppercase,
				digit: *digit,
				message: message.clone(),
			},
			ValidationRule::EqualsField { other_field, message } => CompiledRule::EqualsField {
				other_field: other_field.clone(),
				message: message.clone(),
			},
			ValidationRule::MustBeTrue { message } => CompiledRule::MustBeTrue {
				message: message.clone(),
			},
		}
	}

	/// `None` when the rule passes.
	fn check(
		&self,
		value: Option<&Value>,
		record: &HashMap<String, Value>,
	) -> Option<String> {
		let absent = is_absent(value);
		match self {
			CompiledRule::Required { message } => absent.then(|| message.clone()),
			CompiledRule::MustBeTrue { message } => {
				(value != Some(&Value::Bool(true))).then(|| message.clone())
			}
			// Remaining rules validate content, so absent values pass
			// through to the Required rule (if any).
			_ if absent => None,
			CompiledRule::MinLength { min, message } => match value.and_then(Value::as_str) {
				Some(s) if s.chars().count() >= *min => None,
				_ => Some(message.clone()),
			},
			CompiledRule::Pattern { regex, message } => match value.and_then(Value::as_str) {
				Some(s) if regex.is_match(s) => None,
				_ => Some(message.clone()),
			},
			CompiledRule::Email { message } => match value.and_then(Value::as_str) {
				Some(s) if EMAIL_REGEX.is_match(s) => None,
				_ => Some(message.clone()),
			},
			CompiledRule::CharClasses {
				lowercase,
				uppercase,
				digit,
				message,
			} => match value.and_then(Value::as_str) {
				Some(s) => {
					let ok = (!lowercase || s.chars().any(|c| c.is_ascii_lowercase()))
						&& (!uppercase || s.chars().any(|c| c.is_ascii_uppercase()))
						&& (!digit || s.chars().any(|c| c.is_ascii_digit()));
					(!ok).then(|| message.clone())
				}
				None => Some(message.clone()),
			},
			CompiledRule::EqualsField { other_field, message } => {
				let other = record.get(other_field).cloned().unwrap_or(Value::Null);
				(value != Some(&other)).then(|| message.clone())
			}
		}
	}
}

/// Per-field rule chains compiled from the declarative rule table.
pub struct FieldRulesSchema {
	chains: Vec<(String, Vec<CompiledRule>)>,
}

impl FieldRulesSchema {
	/// Compile the built-in table for a mode and field configuration.
	pub fn for_mode(mode: AuthMode, fields: &FieldsConfig) -> Self {
		Self::from_table(&rule_table(mode, fields))
	}

	/// Compile an arbitrary rule table.
	pub fn from_table(table: &[FieldRules]) -> Self {
		let chains = table
			.iter()
			.map(|entry| {
				let compiled = entry.rules.iter().map(CompiledRule::compile).collect();
				(entry.field.clone(), compiled)
			})
			.collect();
		Self { chains }
	}

	fn chain(&self, field: &str) -> Option<&[CompiledRule]> {
		self.chains
			.iter()
			.find(|(name, _)| name == field)
			.map(|(_, chain)| chain.as_slice())
	}
}

impl ValidationSchema for FieldRulesSchema {
	fn validate_field(&self, field: &str, record: &HashMap<String, Value>) -> Option<String> {
		let chain = self.chain(field)?;
		let value = record.get(field);
		chain.iter().find_map(|rule| rule.check(value, record))
	}

	fn validate(&self, record: &HashMap<String, Value>) -> HashMap<String, String> {
		let mut errors = HashMap::new();
		for (field, _) in &self.chains {
			if let Some(message) = self.validate_field(field, record) {
				errors.insert(field.clone(), message);
			}
		}
		errors
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn record(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.clone()))
			.collect()
	}

	#[rstest]
	fn test_signin_happy_path() {
		// Arrange
		let schema = FieldRulesSchema::for_mode(AuthMode::SignIn, &FieldsConfig::default());
		let values = record(&[
			("email", json!("ada@example.com")),
			("password", json!("longenough")),
			("rememberMe", json!(false)),
		]);

		// Act
		let errors = schema.validate(&values);

		// Assert
		assert!(errors.is_empty(), "unexpected errors: {errors:?}");
	}

	#[rstest]
	fn test_signin_required_and_format_errors() {
		let schema = FieldRulesSchema::for_mode(AuthMode::SignIn, &FieldsConfig::default());
		let values = record(&[("email", json!("not-an-email")), ("password", json!(""))]);

		let errors = schema.validate(&values);

		assert_eq!(errors["email"], "Please enter a valid email address");
		assert_eq!(errors["password"], "Password is required");
	}

	#[rstest]
	#[case("P@ssw0rd", None)]
	#[case("password", Some("Password must contain at least one uppercase letter, one lowercase letter, and one number"))]
	#[case("short1A", Some("Password must be at least 8 characters"))]
	fn test_signup_password_complexity(#[case] password: &str, #[case] expected: Option<&str>) {
		let schema = FieldRulesSchema::for_mode(AuthMode::SignUp, &FieldsConfig::default());
		let values = record(&[("password", json!(password))]);

		let error = schema.validate_field("password", &values);

		assert_eq!(error.as_deref(), expected);
	}

	#[rstest]
	fn test_confirm_password_mismatch() {
		let schema = FieldRulesSchema::for_mode(AuthMode::SignUp, &FieldsConfig::default());
		let values = record(&[
			("password", json!("P@ssw0rd")),
			("confirmPassword", json!("P@ssw0rd!")),
		]);

		let error = schema.validate_field("confirmPassword", &values);

		assert_eq!(error.as_deref(), Some("Passwords must match"));
	}

	#[rstest]
	fn test_confirm_password_empty_reports_required_first() {
		let schema = FieldRulesSchema::for_mode(AuthMode::SignUp, &FieldsConfig::default());
		let values = record(&[("password", json!("P@ssw0rd")), ("confirmPassword", json!(""))]);

		let error = schema.validate_field("confirmPassword", &values);

		assert_eq!(error.as_deref(), Some("Please confirm your password"));
	}

	#[rstest]
	fn test_optional_empty_fields_pass_on_signup() {
		// The sign-up shape seeds empty strings for the opt-in fields;
		// without a required upgrade they must not fail length checks.
		let schema = FieldRulesSchema::for_mode(AuthMode::SignUp, &FieldsConfig::default());
		let values = record(&[
			("email", json!("ada@example.com")),
			("password", json!("P@ssw0rd")),
			("confirmPassword", json!("P@ssw0rd")),
			("firstName", json!("")),
			("lastName", json!("")),
			("phone", json!("")),
			("username", json!("")),
			("acceptTerms", json!(true)),
		]);

		let errors = schema.validate(&values);

		assert!(errors.is_empty(), "unexpected errors: {errors:?}");
	}

	#[rstest]
	fn test_accept_terms_must_be_true() {
		let schema = FieldRulesSchema::for_mode(AuthMode::SignUp, &FieldsConfig::default());

		let unchecked = record(&[("acceptTerms", json!(false))]);
		assert_eq!(
			schema.validate_field("acceptTerms", &unchecked).as_deref(),
			Some("You must accept the terms and conditions")
		);

		let checked = record(&[("acceptTerms", json!(true))]);
		assert_eq!(schema.validate_field("acceptTerms", &checked), None);
	}

	#[rstest]
	fn test_non_string_value_fails_content_rules() {
		let schema = FieldRulesSchema::for_mode(AuthMode::SignIn, &FieldsConfig::default());
		let values = record(&[("password", json!(12345678))]);

		let error = schema.validate_field("password", &values);

		assert_eq!(error.as_deref(), Some("Password must be at least 8 characters"));
	}

	#[rstest]
	fn test_unknown_field_has_no_verdict() {
		let schema = FieldRulesSchema::for_mode(AuthMode::SignIn, &FieldsConfig::default());
		assert_eq!(schema.validate_field("rememberMe", &record(&[])), None);
	}
}
