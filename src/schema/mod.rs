//! Validation schemas
//!
//! Two independent schema representations consume the one rule table in
//! [`crate::rules`]: a per-field rule-chain map ([`FieldRulesSchema`]) and
//! a whole-object property/refinement schema ([`ObjectSchema`]). Both
//! implement [`ValidationSchema`] and must return identical verdicts, by
//! construction and enforced by the parity tests.
//!
//! A caller-supplied custom schema is any other [`ValidationSchema`]
//! implementation; it replaces the built-ins wholesale and is never
//! merged with them.

mod field_rules;
mod object_schema;

pub use field_rules::FieldRulesSchema;
pub use object_schema::ObjectSchema;

use crate::types::{AuthMode, FieldsConfig, ValidationType};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A whole-record validator with per-field access.
///
/// Errors are values, never panics: one message per offending field,
/// keyed by the field's camelCase name.
pub trait ValidationSchema: Send + Sync {
	/// Validate a single field against the current record. Cross-field
	/// rules read the rest of the record.
	fn validate_field(&self, field: &str, record: &HashMap<String, Value>) -> Option<String>;

	/// Validate the whole record. Returns the first failing message per
	/// field.
	fn validate(&self, record: &HashMap<String, Value>) -> HashMap<String, String>;
}

/// Which built-in schema representation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaSyntax {
	FieldRules,
	ObjectSchema,
}

impl ValidationType {
	/// The schema syntax this validation type selects.
	pub fn schema_syntax(self) -> SchemaSyntax {
		match self {
			ValidationType::ManagedFieldRules | ValidationType::ResolverFieldRules => {
				SchemaSyntax::FieldRules
			}
			ValidationType::ResolverObjectSchema => SchemaSyntax::ObjectSchema,
		}
	}
}

/// Build the built-in schema for a mode and field configuration.
pub fn build_schema(
	syntax: SchemaSyntax,
	mode: AuthMode,
	fields: &FieldsConfig,
) -> Arc<dyn ValidationSchema> {
	match syntax {
		SchemaSyntax::FieldRules => Arc::new(FieldRulesSchema::for_mode(mode, fields)),
		SchemaSyntax::ObjectSchema => Arc::new(ObjectSchema::for_mode(mode, fields)),
	}
}

/// A missing key, JSON null, or empty string counts as absent.
pub(crate) fn is_absent(value: Option<&Value>) -> bool {
	match value {
		None | Some(Value::Null) => true,
		Some(Value::String(s)) => s.is_empty(),
		Some(_) => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_validation_type_selects_syntax() {
		assert_eq!(
			ValidationType::ManagedFieldRules.schema_syntax(),
			SchemaSyntax::FieldRules
		);
		assert_eq!(
			ValidationType::ResolverFieldRules.schema_syntax(),
			SchemaSyntax::FieldRules
		);
		assert_eq!(
			ValidationType::ResolverObjectSchema.schema_syntax(),
			SchemaSyntax::ObjectSchema
		);
	}

	#[test]
	fn test_absent_classification() {
		use serde_json::json;

		assert!(is_absent(None));
		assert!(is_absent(Some(&Value::Null)));
		assert!(is_absent(Some(&json!(""))));
		assert!(!is_absent(Some(&json!("x"))));
		assert!(!is_absent(Some(&json!(false))));
	}
}
