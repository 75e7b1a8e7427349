//! Declarative validation rule table
//!
//! The semantic ruleset exists exactly once, as serializable
//! [`ValidationRule`] data. Both schema syntaxes are emitted from this
//! table, which is what keeps them behaviorally identical.
//!
//! Evaluation semantics shared by every consumer:
//! - a missing key, JSON null, or empty string counts as *absent*;
//! - `Required` fails on absent values, every other rule skips them;
//! - string rules fail on non-string values with their own message;
//! - length limits count characters, not bytes.

use crate::types::{AuthMode, FieldKey, FieldsConfig};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Lenient email shape: local part, `@`, dotted domain.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// Free-form phone shape: optional `+`, optional parenthesised prefix of
/// up to four digits, then digits and separators.
pub const PHONE_PATTERN: &str = r"^[+]?[(]?[0-9]{1,4}[)]?[-\s./0-9]*$";

/// Letters, digits and underscores only.
pub const USERNAME_PATTERN: &str = r"^[a-zA-Z0-9_]+$";

/// Compiled form of [`EMAIL_PATTERN`].
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN: invalid regex pattern")
});

/// Compiled form of [`PHONE_PATTERN`].
pub static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(PHONE_PATTERN).expect("PHONE_PATTERN: invalid regex pattern")
});

/// Compiled form of [`USERNAME_PATTERN`].
pub static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(USERNAME_PATTERN).expect("USERNAME_PATTERN: invalid regex pattern")
});

/// One declarative validation rule.
///
/// The password complexity requirement is a [`ValidationRule::CharClasses`]
/// rule rather than a pattern: the character-class checks replace the
/// look-ahead construct the shape would otherwise need, which the `regex`
/// crate does not support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationRule {
	/// Value must be present and non-empty.
	Required { message: String },
	/// Minimum length in characters.
	MinLength { min: usize, message: String },
	/// Full-match regex pattern.
	Pattern { pattern: String, message: String },
	/// Lenient email shape.
	Email { message: String },
	/// Must contain at least one character of each enabled class.
	CharClasses {
		lowercase: bool,
		uppercase: bool,
		digit: bool,
		message: String,
	},
	/// Must equal the value of another field.
	EqualsField { other_field: String, message: String },
	/// Boolean that must be literally `true`.
	MustBeTrue { message: String },
}

impl ValidationRule {
	/// The error message this rule produces on failure.
	pub fn message(&self) -> &str {
		match self {
			ValidationRule::Required { message }
			| ValidationRule::MinLength { message, .. }
			| ValidationRule::Pattern { message, .. }
			| ValidationRule::Email { message }
			| ValidationRule::CharClasses { message, .. }
			| ValidationRule::EqualsField { message, .. }
			| ValidationRule::MustBeTrue { message } => message,
		}
	}
}

/// The ordered rule chain for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRules {
	pub field: String,
	pub rules: Vec<ValidationRule>,
}

impl FieldRules {
	fn new(field: &str) -> Self {
		Self {
			field: field.to_string(),
			rules: Vec::new(),
		}
	}

	fn rule(mut self, rule: ValidationRule) -> Self {
		self.rules.push(rule);
		self
	}
}

fn required(message: &str) -> ValidationRule {
	ValidationRule::Required {
		message: message.to_string(),
	}
}

fn min_length(min: usize, message: &str) -> ValidationRule {
	ValidationRule::MinLength {
		min,
		message: message.to_string(),
	}
}

fn pattern(pattern: &str, message: &str) -> ValidationRule {
	ValidationRule::Pattern {
		pattern: pattern.to_string(),
		message: message.to_string(),
	}
}

fn email_rules() -> FieldRules {
	FieldRules::new("email")
		.rule(required("Email is required"))
		.rule(ValidationRule::Email {
			message: "Please enter a valid email address".to_string(),
		})
}

fn phone_rules(is_required: bool) -> FieldRules {
	let mut rules = FieldRules::new("phone");
	if is_required {
		rules = rules.rule(required("Phone number is required"));
	}
	rules.rule(pattern(PHONE_PATTERN, "Please enter a valid phone number"))
}

fn name_rules(field: FieldKey, is_required: bool) -> FieldRules {
	let (key, noun) = match field {
		FieldKey::FirstName => ("firstName", "First name"),
		_ => ("lastName", "Last name"),
	};
	let mut rules = FieldRules::new(key);
	if is_required {
		rules = rules.rule(required(&format!("{noun} is required")));
	}
	rules.rule(min_length(2, &format!("{noun} must be at least 2 characters")))
}

fn username_rules(is_required: bool) -> FieldRules {
	let mut rules = FieldRules::new("username");
	if is_required {
		rules = rules.rule(required("Username is required"));
	}
	rules
		.rule(min_length(3, "Username must be at least 3 characters"))
		.rule(pattern(
			USERNAME_PATTERN,
			"Username can only contain letters, numbers, and underscores",
		))
}

fn field_flag(fields: &FieldsConfig, key: FieldKey, flag: fn(&crate::types::FieldConfig) -> Option<bool>) -> bool {
	fields.get(key).and_then(flag) == Some(true)
}

/// Build the rule table for a mode and field configuration.
///
/// Sign-in carries rules only for fields the caller opted into; sign-up
/// always carries the full data-shape rules, with requiredness upgrades
/// from the field configuration.
///
/// # Examples
///
/// ```
/// use auth_forms::rules::rule_table;
/// use auth_forms::{AuthMode, FieldsConfig};
///
/// let table = rule_table(AuthMode::SignIn, &FieldsConfig::default());
/// let fields: Vec<&str> = table.iter().map(|entry| entry.field.as_str()).collect();
/// assert_eq!(fields, ["email", "password"]);
/// ```
pub fn rule_table(mode: AuthMode, fields: &FieldsConfig) -> Vec<FieldRules> {
	let mut table = vec![email_rules()];
	let visible = |key| field_flag(fields, key, |c| c.visible);
	let required_flag = |key| field_flag(fields, key, |c| c.required);

	match mode {
		AuthMode::SignIn => {
			table.push(
				FieldRules::new("password")
					.rule(required("Password is required"))
					.rule(min_length(8, "Password must be at least 8 characters")),
			);
			if visible(FieldKey::Phone) {
				table.push(phone_rules(required_flag(FieldKey::Phone)));
			}
			for key in [FieldKey::FirstName, FieldKey::LastName] {
				if visible(key) && required_flag(key) {
					table.push(name_rules(key, true));
				}
			}
			if visible(FieldKey::Username) && required_flag(FieldKey::Username) {
				table.push(username_rules(true));
			}
		}
		AuthMode::SignUp => {
			table.push(
				FieldRules::new("password")
					.rule(required("Password is required"))
					.rule(min_length(8, "Password must be at least 8 characters"))
					.rule(ValidationRule::CharClasses {
						lowercase: true,
						uppercase: true,
						digit: true,
						message: "Password must contain at least one uppercase letter, \
						          one lowercase letter, and one number"
							.to_string(),
					}),
			);
			table.push(
				FieldRules::new("confirmPassword")
					.rule(required("Please confirm your password"))
					.rule(ValidationRule::EqualsField {
						other_field: "password".to_string(),
						message: "Passwords must match".to_string(),
					}),
			);
			table.push(name_rules(FieldKey::FirstName, required_flag(FieldKey::FirstName)));
			table.push(name_rules(FieldKey::LastName, required_flag(FieldKey::LastName)));
			table.push(phone_rules(required_flag(FieldKey::Phone)));
			table.push(username_rules(required_flag(FieldKey::Username)));
			table.push(FieldRules::new("acceptTerms").rule(ValidationRule::MustBeTrue {
				message: "You must accept the terms and conditions".to_string(),
			}));
		}
	}

	table
}
