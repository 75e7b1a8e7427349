//! Resolver form-state strategy
//!
//! Validates through the schema one field at a time: blurring a field
//! resolves only that field's verdict, leaving the rest of the error map
//! untouched until the whole-record pass at submit time.

use super::{FormStrategy, retain_common};
use crate::schema::ValidationSchema;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

pub struct ResolverForm {
	values: HashMap<String, Value>,
	defaults: HashMap<String, Value>,
	errors: HashMap<String, String>,
	touched: HashSet<String>,
	submitted: bool,
	schema: Arc<dyn ValidationSchema>,
}

impl ResolverForm {
	pub fn new(defaults: HashMap<String, Value>, schema: Arc<dyn ValidationSchema>) -> Self {
		Self {
			values: defaults.clone(),
			defaults,
			errors: HashMap::new(),
			touched: HashSet::new(),
			submitted: false,
			schema,
		}
	}
}

impl FormStrategy for ResolverForm {
	fn values(&self) -> &HashMap<String, Value> {
		&self.values
	}

	fn set_value(&mut self, field: &str, value: Value) {
		self.values.insert(field.to_string(), value);
	}

	fn blur(&mut self, field: &str) {
		self.touched.insert(field.to_string());
		match self.schema.validate_field(field, &self.values) {
			Some(message) => {
				tracing::trace!(field, %message, "resolver blur validation failed");
				self.errors.insert(field.to_string(), message);
			}
			None => {
				self.errors.remove(field);
			}
		}
	}

	fn error(&self, field: &str) -> Option<&str> {
		self.errors.get(field).map(String::as_str)
	}

	fn visible_error(&self, field: &str) -> Option<&str> {
		if self.submitted || self.touched.contains(field) {
			self.error(field)
		} else {
			None
		}
	}

	fn is_touched(&self, field: &str) -> bool {
		self.touched.contains(field)
	}

	fn has_submitted(&self) -> bool {
		self.submitted
	}

	fn validate_all(&mut self) -> bool {
		self.submitted = true;
		self.errors = self.schema.validate(&self.values);
		self.errors.is_empty()
	}

	fn reset(&mut self) {
		self.values = self.defaults.clone();
		self.errors.clear();
		self.touched.clear();
		self.submitted = false;
	}

	fn reinitialize(&mut self, defaults: HashMap<String, Value>, schema: Arc<dyn ValidationSchema>) {
		self.values = retain_common(&self.values, &defaults);
		self.defaults = defaults;
		self.schema = schema;
		self.errors.clear();
		self.touched.clear();
		self.submitted = false;
	}
}
