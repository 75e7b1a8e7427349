//! Object-schema syntax
//!
//! Syntax B: the record is described as a whole, as a property list with
//! per-property content checks plus record-level refinements for
//! cross-field rules, each refinement attaching its error to a path.
//! Emitted from the same rule table as the field-rules syntax.

use super::{ValidationSchema, is_absent};
use crate::rules::{EMAIL_REGEX, FieldRules, ValidationRule, rule_table};
use crate::types::{AuthMode, FieldsConfig};
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;

enum Check {
	Length { min: usize, message: String },
	Matches { regex: Regex, message: String },
	EmailShape { message: String },
	Classes {
		lowercase: bool,
		uppercase: bool,
		digit: bool,
		message: String,
	},
	LiteralTrue { message: String },
}

impl Check {
	fn run(&self, value: Option<&Value>) -> Option<String> {
		match self {
			Check::LiteralTrue { message } => {
				(value != Some(&Value::Bool(true))).then(|| message.clone())
			}
			_ if is_absent(value) => None,
			Check::Length { min, message } => match value.and_then(Value::as_str) {
				Some(s) if s.chars().count() >= *min => None,
				_ => Some(message.clone()),
			},
			Check::Matches { regex, message } => match value.and_then(Value::as_str) {
				Some(s) if regex.is_match(s) => None,
				_ => Some(message.clone()),
			},
			Check::EmailShape { message } => match value.and_then(Value::as_str) {
				Some(s) if EMAIL_REGEX.is_match(s) => None,
				_ => Some(message.clone()),
			},
			Check::Classes {
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
		}
	}
}

struct Property {
	name: String,
	/// Required message; `None` marks the property optional.
	required: Option<String>,
	checks: Vec<Check>,
}

impl Property {
	fn run(&self, value: Option<&Value>) -> Option<String> {
		if is_absent(value) {
			if let Some(message) = &self.required {
				return Some(message.clone());
			}
		}
		self.checks.iter().find_map(|check| check.run(value))
	}
}

/// Equality refinement over two fields, reported at `path`.
struct Refinement {
	left: String,
	right: String,
	path: String,
	message: String,
}

impl Refinement {
	fn run(&self, record: &HashMap<String, Value>) -> Option<String> {
		let left = record.get(&self.left).cloned().unwrap_or(Value::Null);
		let right = record.get(&self.right).cloned().unwrap_or(Value::Null);
		(left != right).then(|| self.message.clone())
	}
}

/// Whole-object schema: properties plus cross-field refinements.
pub struct ObjectSchema {
	properties: Vec<Property>,
	refinements: Vec<Refinement>,
}

impl ObjectSchema {
	/// Emit the built-in table for a mode and field configuration.
	pub fn for_mode(mode: AuthMode, fields: &FieldsConfig) -> Self {
		Self::from_table(&rule_table(mode, fields))
	}

	/// Emit an arbitrary rule table into the object representation.
	pub fn from_table(table: &[FieldRules]) -> Self {
		let mut properties = Vec::new();
		let mut refinements = Vec::new();

		for entry in table {
			let mut property = Property {
				name: entry.field.clone(),
				required: None,
				checks: Vec::new(),
			};
			for rule in &entry.rules {
				match rule {
					ValidationRule::Required { message } => {
						property.required = Some(message.clone());
					}
					ValidationRule::MinLength { min, message } => {
						property.checks.push(Check::Length {
							min: *min,
							message: message.clone(),
						});
					}
					ValidationRule::Pattern { pattern, message } => {
						property.checks.push(Check::Matches {
							regex: Regex::new(pattern)
								.expect("rule table pattern: invalid regex"),
							message: message.clone(),
						});
					}
					ValidationRule::Email { message } => {
						property.checks.push(Check::EmailShape {
							message: message.clone(),
						});
					}
					ValidationRule::CharClasses {
						lowercase,
						uppercase,
						digit,
						message,
					} => {
						property.checks.push(Check::Classes {
							lowercase: *lowercase,
							uppercase: *uppercase,
							digit: *digit,
							message: message.clone(),
						});
					}
					ValidationRule::EqualsField { other_field, message } => {
						refinements.push(Refinement {
							left: entry.field.clone(),
							right: other_field.clone(),
							path: entry.field.clone(),
							message: message.clone(),
						});
					}
					ValidationRule::MustBeTrue { message } => {
						property.checks.push(Check::LiteralTrue {
							message: message.clone(),
						});
					}
				}
			}
			properties.push(property);
		}

		Self {
			properties,
			refinements,
		}
	}

	fn property(&self, field: &str) -> Option<&Property> {
		self.properties.iter().find(|p| p.name == field)
	}
}

impl ValidationSchema for ObjectSchema {
	fn validate_field(&self, field: &str, record: &HashMap<String, Value>) -> Option<String> {
		let property = self.property(field)?;
		if let Some(message) = property.run(record.get(field)) {
			return Some(message);
		}
		self.refinements
			.iter()
			.filter(|refinement| refinement.path == field)
			.find_map(|refinement| refinement.run(record))
	}

	fn validate(&self, record: &HashMap<String, Value>) -> HashMap<String, String> {
		let mut errors = HashMap::new();
		for property in &self.properties {
			if let Some(message) = property.run(record.get(&property.name)) {
				errors.insert(property.name.clone(), message);
			}
		}
		// Refinements run after the property pass and never overwrite a
		// property error on the same path.
		for refinement in &self.refinements {
			if errors.contains_key(&refinement.path) {
				continue;
			}
			if let Some(message) = refinement.run(record) {
				errors.insert(refinement.path.clone(), message);
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
	fn test_signup_happy_path() {
		let schema = ObjectSchema::for_mode(AuthMode::SignUp, &FieldsConfig::default());
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
	fn test_refinement_attaches_to_path() {
		let schema = ObjectSchema::for_mode(AuthMode::SignUp, &FieldsConfig::default());
		let values = record(&[
			("password", json!("P@ssw0rd")),
			("confirmPassword", json!("other")),
		]);

		let errors = schema.validate(&values);

		assert_eq!(errors["confirmPassword"], "Passwords must match");
	}

	#[rstest]
	fn test_required_beats_refinement_on_same_path() {
		let schema = ObjectSchema::for_mode(AuthMode::SignUp, &FieldsConfig::default());
		let values = record(&[("password", json!("P@ssw0rd")), ("confirmPassword", json!(""))]);

		let errors = schema.validate(&values);

		assert_eq!(errors["confirmPassword"], "Please confirm your password");
	}

	#[rstest]
	#[case("", Some("Phone number is required"))]
	#[case("+1 555 123 4567", None)]
	#[case("no digits here", Some("Please enter a valid phone number"))]
	fn test_required_phone_scenarios(#[case] phone: &str, #[case] expected: Option<&str>) {
		use crate::types::{FieldConfig, PhoneFieldConfig};

		let fields = FieldsConfig {
			phone: Some(PhoneFieldConfig {
				field: FieldConfig {
					visible: Some(true),
					required: Some(true),
					..FieldConfig::default()
				},
				country_picker: None,
			}),
			..FieldsConfig::default()
		};
		let schema = ObjectSchema::for_mode(AuthMode::SignUp, &fields);
		let values = record(&[("phone", json!(phone))]);

		let error = schema.validate_field("phone", &values);

		assert_eq!(error.as_deref(), expected);
	}

	#[rstest]
	fn test_accept_terms_literal_true() {
		let schema = ObjectSchema::for_mode(AuthMode::SignUp, &FieldsConfig::default());

		let unchecked = record(&[("acceptTerms", json!(false))]);
		assert_eq!(
			schema.validate_field("acceptTerms", &unchecked).as_deref(),
			Some("You must accept the terms and conditions")
		);

		let checked = record(&[("acceptTerms", json!(true))]);
		assert_eq!(schema.validate_field("acceptTerms", &checked), None);
	}

	#[rstest]
	fn test_signin_has_no_refinements() {
		let schema = ObjectSchema::for_mode(AuthMode::SignIn, &FieldsConfig::default());
		assert!(schema.refinements.is_empty());
	}
}
