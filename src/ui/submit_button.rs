//! Submit button descriptor

use serde::{Deserialize, Serialize};

/// The submit control: title plus the loading/disabled state the shell
/// computed. `is_loading` is the caller's loading flag OR an in-flight
/// submission; a loading button is always disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitButtonElement {
	pub title: String,
	pub is_loading: bool,
	pub disabled: bool,
}
