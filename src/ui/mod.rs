//! Renderable element model
//!
//! The toolkit's render boundary is plain serializable data: the shell
//! resolves configuration, visibility, validation state and theming into
//! a [`FormElement`] sequence the host renderer draws with its own
//! primitives. Nothing here owns pixels.

pub mod biometric;
pub mod checkbox;
pub mod footer;
pub mod header;
pub mod icons;
pub mod input;
pub mod phone;
pub mod social;
pub mod submit_button;

pub use biometric::{BiometricButton, BiometricElement};
pub use checkbox::{CheckboxElement, CheckboxKind};
pub use footer::{FooterElement, FooterLinkAction};
pub use header::HeaderElement;
pub use icons::{IconGlyph, IconProvider, TextGlyphIcons, default_icon_provider};
pub use input::{AutoCapitalize, AutoComplete, InputElement, KeyboardType, SecureEntry};
pub use phone::{CountryPicker, PhoneInputElement};
pub use social::SocialButtonElement;
pub use submit_button::SubmitButtonElement;

use serde::Serialize;

/// One entry of the renderable sequence, in canonical render order.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "element", rename_all = "camelCase")]
pub enum FormElement {
	Header(HeaderElement),
	/// Externally supplied submission error banner.
	ApiError { message: String },
	Input(InputElement),
	Phone(PhoneInputElement),
	ForgotPasswordLink { text: String },
	Checkbox(CheckboxElement),
	SubmitButton(SubmitButtonElement),
	Biometric(BiometricElement),
	SocialButtons { buttons: Vec<SocialButtonElement> },
	Footer(FooterElement),
}
