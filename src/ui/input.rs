//! Text input descriptor

use super::icons::IconGlyph;
use crate::types::{IconPosition, Style};
use serde::{Deserialize, Serialize};

/// Soft-keyboard hint for the host platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyboardType {
	#[default]
	Default,
	EmailAddress,
	Phone,
	Numeric,
}

/// Auto-capitalization hint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AutoCapitalize {
	#[default]
	None,
	Words,
	Sentences,
}

/// Autofill hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AutoComplete {
	Email,
	Password,
	NewPassword,
	Name,
	Tel,
	Username,
}

/// One rendered text input: current value, display error, and every
/// presentation hint the host needs. The error is already gated on
/// touched-or-submitted; hosts render it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputElement {
	pub name: String,
	pub label: String,
	pub placeholder: String,
	pub value: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	pub touched: bool,
	/// Masked entry; the host may show a reveal toggle (`eye`/`eye-off`).
	pub secure_text_entry: bool,
	pub keyboard_type: KeyboardType,
	pub auto_capitalize: AutoCapitalize,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub auto_complete: Option<AutoComplete>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub icon: Option<IconGlyph>,
	pub icon_position: IconPosition,
	pub disabled: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub style: Option<Style>,
}

/// Reveal toggle for masked inputs. One instance lives per mounted
/// secure input; the host flips it from the trailing eye icon.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureEntry {
	revealed: bool,
}

impl SecureEntry {
	pub fn new() -> Self {
		Self::default()
	}

	/// True while the value is shown in clear text.
	pub fn is_revealed(self) -> bool {
		self.revealed
	}

	pub fn toggle(&mut self) {
		self.revealed = !self.revealed;
	}

	/// Icon name for the toggle in its current state.
	pub fn icon_name(self) -> &'static str {
		if self.revealed { "eye-off" } else { "eye" }
	}
}
