//! Checkbox row descriptor

use crate::types::CheckboxStyleConfig;
use serde::{Deserialize, Serialize};

/// Which checkbox a row represents, and therefore which value map key it
/// writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckboxKind {
	RememberMe,
	AcceptTerms,
}

impl CheckboxKind {
	/// The value map key this checkbox toggles.
	pub fn field(self) -> &'static str {
		match self {
			CheckboxKind::RememberMe => "rememberMe",
			CheckboxKind::AcceptTerms => "acceptTerms",
		}
	}
}

/// One checkbox row: label, optional trailing link (terms), checked
/// state, and a gated error (accept-terms only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxElement {
	pub kind: CheckboxKind,
	pub label: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub link_text: Option<String>,
	pub checked: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	/// True when the trailing link has a press handler attached.
	pub has_link_handler: bool,
	#[serde(skip)]
	pub style: CheckboxStyleConfig,
}
