//! Schema adapter parity tests
//!
//! The two schema syntaxes are emitted from one rule table and must
//! return identical verdicts. These tests drive both adapters over the
//! same record grid in both modes and compare the full error maps.

use auth_forms::schema::{FieldRulesSchema, ObjectSchema, ValidationSchema};
use auth_forms::{AuthMode, FieldConfig, FieldsConfig, PhoneFieldConfig};
use rstest::rstest;
use serde_json::{Value, json};
use std::collections::HashMap;

fn record(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
	pairs
		.iter()
		.map(|(k, v)| (k.to_string(), v.clone()))
		.collect()
}

fn opted_in_fields() -> FieldsConfig {
	FieldsConfig {
		phone: Some(PhoneFieldConfig {
			field: FieldConfig {
				visible: Some(true),
				required: Some(true),
				..FieldConfig::default()
			},
			country_picker: None,
		}),
		first_name: Some(FieldConfig::required()),
		username: Some(FieldConfig::required()),
		..FieldsConfig::default()
	}
}

fn assert_parity(mode: AuthMode, fields: &FieldsConfig, values: &HashMap<String, Value>) {
	let field_rules = FieldRulesSchema::for_mode(mode, fields);
	let object_schema = ObjectSchema::for_mode(mode, fields);

	let a = field_rules.validate(values);
	let b = object_schema.validate(values);
	assert_eq!(a, b, "whole-record verdicts diverged for {values:?} in {mode:?}");

	// Per-field verdicts must agree too, including fields with no entry.
	for field in [
		"email",
		"password",
		"confirmPassword",
		"firstName",
		"lastName",
		"phone",
		"username",
		"acceptTerms",
		"rememberMe",
	] {
		assert_eq!(
			field_rules.validate_field(field, values),
			object_schema.validate_field(field, values),
			"per-field verdicts diverged for {field} in {mode:?}"
		);
	}
}

fn record_grid() -> Vec<HashMap<String, Value>> {
	vec![
		record(&[]),
		record(&[("email", json!("")), ("password", json!(""))]),
		record(&[("email", json!("not-an-email")), ("password", json!("short"))]),
		record(&[("email", json!("ada@example.com")), ("password", json!("longenough"))]),
		record(&[
			("email", json!("ada@example.com")),
			("password", json!("P@ssw0rd")),
			("confirmPassword", json!("P@ssw0rd")),
			("acceptTerms", json!(true)),
		]),
		record(&[
			("email", json!("ada@example.com")),
			("password", json!("password")),
			("confirmPassword", json!("different")),
			("acceptTerms", json!(false)),
		]),
		record(&[
			("email", json!("ada@example.com")),
			("password", json!("P@ssw0rd")),
			("confirmPassword", json!("P@ssw0rd")),
			("firstName", json!("A")),
			("lastName", json!("Lovelace")),
			("phone", json!("not a phone")),
			("username", json!("ada lovelace")),
			("acceptTerms", json!(true)),
		]),
		record(&[
			("email", json!("ada@example.com")),
			("password", json!("P@ssw0rd")),
			("confirmPassword", json!("P@ssw0rd")),
			("firstName", json!("Ada")),
			("lastName", json!("Lovelace")),
			("phone", json!("+44 20 7946 0958")),
			("username", json!("ada_lovelace")),
			("acceptTerms", json!(true)),
			("rememberMe", json!(true)),
		]),
		record(&[("password", json!(12345678))]),
	]
}

#[rstest]
#[case(AuthMode::SignIn)]
#[case(AuthMode::SignUp)]
fn test_adapters_agree_with_default_fields(#[case] mode: AuthMode) {
	let fields = FieldsConfig::default();
	for values in record_grid() {
		assert_parity(mode, &fields, &values);
	}
}

#[rstest]
#[case(AuthMode::SignIn)]
#[case(AuthMode::SignUp)]
fn test_adapters_agree_with_opted_in_fields(#[case] mode: AuthMode) {
	let fields = opted_in_fields();
	for values in record_grid() {
		assert_parity(mode, &fields, &values);
	}
}

#[rstest]
fn test_password_complexity_verdicts_match_exactly() {
	// "P@ssw0rd" passes the sign-up schema; "password" fails it, under
	// both syntaxes identically.
	let fields = FieldsConfig::default();
	let field_rules = FieldRulesSchema::for_mode(AuthMode::SignUp, &fields);
	let object_schema = ObjectSchema::for_mode(AuthMode::SignUp, &fields);

	let strong = record(&[("password", json!("P@ssw0rd"))]);
	assert_eq!(field_rules.validate_field("password", &strong), None);
	assert_eq!(object_schema.validate_field("password", &strong), None);

	let weak = record(&[("password", json!("password"))]);
	let expected = Some(
		"Password must contain at least one uppercase letter, one lowercase letter, \
		 and one number"
			.to_string(),
	);
	assert_eq!(field_rules.validate_field("password", &weak), expected);
	assert_eq!(object_schema.validate_field("password", &weak), expected);
}

#[rstest]
fn test_confirm_password_mismatch_matches_exactly() {
	let fields = FieldsConfig::default();
	let field_rules = FieldRulesSchema::for_mode(AuthMode::SignUp, &fields);
	let object_schema = ObjectSchema::for_mode(AuthMode::SignUp, &fields);
	let values = record(&[
		("password", json!("P@ssw0rd")),
		("confirmPassword", json!("P@ssw0rd2")),
	]);

	let expected = Some("Passwords must match".to_string());
	assert_eq!(field_rules.validate_field("confirmPassword", &values), expected);
	assert_eq!(object_schema.validate_field("confirmPassword", &values), expected);
}

mod phone_pattern_properties {
	use auth_forms::rules::PHONE_PATTERN;
	use proptest::prelude::*;
	use regex::Regex;

	proptest! {
		/// Any digits-and-separators tail after a plausible prefix stays
		/// within the lenient phone shape.
		#[test]
		fn accepts_digit_separator_tails(
			prefix in "[0-9]{1,4}",
			tail in "[-. /0-9]{0,16}",
		) {
			let regex = Regex::new(PHONE_PATTERN).unwrap();
			let candidate = format!("+{prefix}{tail}");
			prop_assert!(regex.is_match(&candidate), "rejected {candidate:?}");
		}

		/// Alphabetic characters are never valid anywhere in the value.
		#[test]
		fn rejects_alphabetic_input(
			prefix in "[0-9]{1,4}",
			letter in "[a-zA-Z]{1,4}",
		) {
			let regex = Regex::new(PHONE_PATTERN).unwrap();
			let candidate = format!("{prefix}{letter}");
			prop_assert!(!regex.is_match(&candidate), "accepted {candidate:?}");
		}
	}
}
