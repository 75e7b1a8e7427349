//! Interchangeable form-state strategies
//!
//! A strategy owns the value map, the touched set, and the error map for
//! one mounted form, and decides *when* validation runs:
//!
//! - [`ManagedForm`] revalidates the whole record every time a field
//!   blurs, in the style of a managed form library;
//! - [`ResolverForm`] revalidates only the blurred field through the
//!   schema resolver, in the style of a registration-based form library.
//!
//! Both gate displayed errors on touched-or-submitted and are driven by
//! the orchestration shell through the [`FormStrategy`] trait.

mod managed;
mod resolver;

pub use managed::ManagedForm;
pub use resolver::ResolverForm;

use crate::schema::ValidationSchema;
use crate::types::ValidationType;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Form-state management seam between the shell and a strategy.
pub trait FormStrategy: Send {
	/// The current value map: always exactly the materialized key set.
	fn values(&self) -> &HashMap<String, Value>;

	/// Write one field value. Never validates; validation timing belongs
	/// to `blur` and `validate_all`.
	fn set_value(&mut self, field: &str, value: Value);

	/// The field lost focus: mark it touched and run the strategy's
	/// blur-time validation.
	fn blur(&mut self, field: &str);

	/// Raw error for a field, regardless of display gating.
	fn error(&self, field: &str) -> Option<&str>;

	/// Error for a field, only once it is touched or the form was
	/// submitted. This is what hosts render.
	fn visible_error(&self, field: &str) -> Option<&str>;

	fn is_touched(&self, field: &str) -> bool;

	/// True once a whole-record validation ran because of a submit.
	fn has_submitted(&self) -> bool;

	/// Whole-record validation; marks the form submitted. Returns `true`
	/// when the record is valid.
	fn validate_all(&mut self) -> bool;

	/// Back to the materialized defaults, clearing errors, touched state
	/// and the submitted marker.
	fn reset(&mut self);

	/// Swap in a new default shape and schema after a mode or
	/// configuration change. Values for keys present in both the old map
	/// and the new defaults are retained; everything else is dropped.
	fn reinitialize(&mut self, defaults: HashMap<String, Value>, schema: Arc<dyn ValidationSchema>);
}

/// Strategy selection for a validation type.
pub fn build_strategy(
	validation_type: ValidationType,
	defaults: HashMap<String, Value>,
	schema: Arc<dyn ValidationSchema>,
) -> Box<dyn FormStrategy> {
	match validation_type {
		ValidationType::ManagedFieldRules => Box::new(ManagedForm::new(defaults, schema)),
		ValidationType::ResolverFieldRules | ValidationType::ResolverObjectSchema => {
			Box::new(ResolverForm::new(defaults, schema))
		}
	}
}

/// Shared retention rule for `reinitialize`: keep old values for keys the
/// new shape still has.
pub(crate) fn retain_common(
	old_values: &HashMap<String, Value>,
	defaults: &HashMap<String, Value>,
) -> HashMap<String, Value> {
	let mut values = defaults.clone();
	for (key, value) in old_values {
		if values.contains_key(key) {
			values.insert(key.clone(), value.clone());
		}
	}
	values
}
