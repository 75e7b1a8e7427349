//! Phone input descriptor and country-code picker state machine

use super::input::InputElement;
use crate::countries::{CountryData, country_by_code, search_countries};
use crate::types::CountryPickerConfig;
use serde::Serialize;

/// Interactive state of the country-code picker: selection, modal
/// visibility and the search query. One instance lives per mounted phone
/// input.
#[derive(Debug, Clone)]
pub struct CountryPicker {
	selected: &'static CountryData,
	open: bool,
	query: String,
	enabled: bool,
}

impl CountryPicker {
	/// Build from configuration; the default country falls back to the
	/// first table entry.
	///
	/// # Examples
	///
	/// ```
	/// use auth_forms::ui::CountryPicker;
	/// use auth_forms::CountryPickerConfig;
	///
	/// let picker = CountryPicker::new(Some(&CountryPickerConfig {
	/// 	default_country: Some("JP".to_string()),
	/// 	..CountryPickerConfig::default()
	/// }));
	/// assert_eq!(picker.selected().code, "JP");
	/// ```
	pub fn new(config: Option<&CountryPickerConfig>) -> Self {
		let selected = config
			.and_then(|c| c.default_country.as_deref())
			.map(country_by_code)
			.unwrap_or_else(|| country_by_code(""));
		Self {
			selected,
			open: false,
			query: String::new(),
			enabled: config.map(|c| c.enabled).unwrap_or(true),
		}
	}

	pub fn selected(&self) -> &'static CountryData {
		self.selected
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	/// Open the picker modal. Clears any previous search. A disabled
	/// picker ignores the request.
	pub fn open(&mut self) {
		if self.enabled {
			self.open = true;
			self.query.clear();
		}
	}

	pub fn close(&mut self) {
		self.open = false;
		self.query.clear();
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	/// Countries matching the current query.
	pub fn filtered(&self) -> Vec<&'static CountryData> {
		search_countries(&self.query)
	}

	/// Select a country and close the modal.
	pub fn select(&mut self, country: &'static CountryData) {
		self.selected = country;
		self.close();
	}
}

/// The phone row: a text input plus the picker's render snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneInputElement {
	#[serde(flatten)]
	pub input: InputElement,
	/// Present when the country picker is enabled.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub country: Option<&'static CountryData>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_to_first_table_entry() {
		let picker = CountryPicker::new(None);
		assert_eq!(picker.selected().code, "US");
		assert!(picker.is_enabled());
	}

	#[test]
	fn test_open_search_select_cycle() {
		let mut picker = CountryPicker::new(None);

		picker.open();
		assert!(picker.is_open());

		picker.set_query("nep");
		let matches = picker.filtered();
		assert_eq!(matches.len(), 1);

		picker.select(matches[0]);
		assert_eq!(picker.selected().dial_code, "+977");
		assert!(!picker.is_open());
		assert!(picker.query().is_empty());
	}

	#[test]
	fn test_reopening_clears_previous_search() {
		let mut picker = CountryPicker::new(None);
		picker.open();
		picker.set_query("jap");
		picker.close();

		picker.open();

		assert!(picker.query().is_empty());
	}

	#[test]
	fn test_disabled_picker_ignores_open() {
		let mut picker = CountryPicker::new(Some(&CountryPickerConfig {
			enabled: false,
			..CountryPickerConfig::default()
		}));

		picker.open();

		assert!(!picker.is_open());
	}
}
