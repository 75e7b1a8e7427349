//! Translation catalog with built-in English defaults
//!
//! A [`Translations`] value maps typed message keys to display strings.
//! Lookups fall back to the compiled-in English table, so a sparse
//! catalog only needs the strings it actually overrides.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Every display string the toolkit can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKey {
	// Auth modes
	SignIn,
	SignUp,
	CreateAccount,
	WelcomeBack,
	GetStarted,
	// Field labels
	Email,
	Password,
	ConfirmPassword,
	FirstName,
	LastName,
	Phone,
	PhoneNumber,
	Username,
	// Placeholders
	EmailPlaceholder,
	PasswordPlaceholder,
	ConfirmPasswordPlaceholder,
	FirstNamePlaceholder,
	LastNamePlaceholder,
	PhonePlaceholder,
	UsernamePlaceholder,
	// Buttons
	SignInButton,
	SignUpButton,
	SubmitButton,
	ContinueButton,
	// Forgot password
	ForgotPassword,
	SendResetLink,
	ResetPassword,
	BackToSignIn,
	RememberYourPassword,
	CheckYourEmail,
	ForgotPasswordSubtitle,
	// Checkboxes
	RememberMe,
	KeepMeSignedIn,
	AcceptTerms,
	IAgreeToThe,
	TermsAndConditions,
	PrivacyPolicy,
	And,
	// Social login
	ContinueWith,
	OrContinueWith,
	Or,
	// Footer
	DontHaveAccount,
	AlreadyHaveAccount,
	TermsOfService,
	// Biometric
	AuthenticateWithBiometrics,
	UseFingerprint,
	UseFaceId,
	// Validation messages
	EmailRequired,
	EmailInvalid,
	PasswordRequired,
	PasswordTooShort,
	PasswordMustMatch,
	FirstNameRequired,
	LastNameRequired,
	PhoneRequired,
	PhoneInvalid,
	UsernameRequired,
	UsernameTooShort,
	AcceptTermsRequired,
	// Country picker
	SelectCountry,
	SearchCountry,
	// Misc
	Loading,
	Success,
	Error,
}

static ENGLISH: LazyLock<HashMap<MessageKey, &'static str>> = LazyLock::new(|| {
	use MessageKey::*;
	HashMap::from([
		(SignIn, "Sign In"),
		(SignUp, "Sign Up"),
		(CreateAccount, "Create Account"),
		(WelcomeBack, "Welcome Back"),
		(GetStarted, "Get Started"),
		(Email, "Email"),
		(Password, "Password"),
		(ConfirmPassword, "Confirm Password"),
		(FirstName, "First Name"),
		(LastName, "Last Name"),
		(Phone, "Phone"),
		(PhoneNumber, "Phone Number"),
		(Username, "Username"),
		(EmailPlaceholder, "Enter your email"),
		(PasswordPlaceholder, "Enter your password"),
		(ConfirmPasswordPlaceholder, "Confirm your password"),
		(FirstNamePlaceholder, "Enter your first name"),
		(LastNamePlaceholder, "Enter your last name"),
		(PhonePlaceholder, "Enter your phone number"),
		(UsernamePlaceholder, "Choose a username"),
		(SignInButton, "Sign In"),
		(SignUpButton, "Sign Up"),
		(SubmitButton, "Submit"),
		(ContinueButton, "Continue"),
		(ForgotPassword, "Forgot Password?"),
		(SendResetLink, "Send Reset Link"),
		(ResetPassword, "Reset Password"),
		(BackToSignIn, "Back to Sign In"),
		(RememberYourPassword, "Remember your password?"),
		(CheckYourEmail, "Check Your Email"),
		(
			ForgotPasswordSubtitle,
			"Enter your email address and we'll send you a link to reset your password.",
		),
		(RememberMe, "Remember me"),
		(KeepMeSignedIn, "Keep me signed in"),
		(AcceptTerms, "Accept Terms"),
		(IAgreeToThe, "I agree to the"),
		(TermsAndConditions, "Terms & Conditions"),
		(PrivacyPolicy, "Privacy Policy"),
		(And, "and"),
		(ContinueWith, "Continue with"),
		(OrContinueWith, "Or continue with"),
		(Or, "or"),
		(DontHaveAccount, "Don't have an account?"),
		(AlreadyHaveAccount, "Already have an account?"),
		(TermsOfService, "Terms of Service"),
		(AuthenticateWithBiometrics, "Authenticate with biometrics"),
		(UseFingerprint, "Use Fingerprint"),
		(UseFaceId, "Use Face ID"),
		(EmailRequired, "Email is required"),
		(EmailInvalid, "Please enter a valid email address"),
		(PasswordRequired, "Password is required"),
		(PasswordTooShort, "Password must be at least 8 characters"),
		(PasswordMustMatch, "Passwords must match"),
		(FirstNameRequired, "First name is required"),
		(LastNameRequired, "Last name is required"),
		(PhoneRequired, "Phone number is required"),
		(PhoneInvalid, "Please enter a valid phone number"),
		(UsernameRequired, "Username is required"),
		(UsernameTooShort, "Username must be at least 3 characters"),
		(AcceptTermsRequired, "You must accept the terms and conditions"),
		(SelectCountry, "Select Country"),
		(SearchCountry, "Search country..."),
		(Loading, "Loading..."),
		(Success, "Success"),
		(Error, "Error"),
	])
});

/// A translation catalog for one locale.
///
/// # Examples
///
/// ```
/// use auth_forms::i18n::{MessageKey, Translations};
///
/// let catalog = Translations::new("fr")
/// 	.with(MessageKey::Email, "Adresse e-mail")
/// 	.with(MessageKey::SignIn, "Connexion");
///
/// assert_eq!(catalog.get(MessageKey::Email), "Adresse e-mail");
/// // Keys without an override fall back to English.
/// assert_eq!(catalog.get(MessageKey::Password), "Password");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translations {
	locale: String,
	messages: HashMap<MessageKey, String>,
}

impl Translations {
	/// Create an empty catalog for the given locale. Every lookup falls
	/// back to English until overrides are added.
	pub fn new(locale: impl Into<String>) -> Self {
		Self {
			locale: locale.into(),
			messages: HashMap::new(),
		}
	}

	/// The built-in English catalog.
	pub fn english() -> Self {
		Self::new("en")
	}

	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add or replace one message.
	pub fn with(mut self, key: MessageKey, message: impl Into<String>) -> Self {
		self.messages.insert(key, message.into());
		self
	}

	/// Add or replace one message in place.
	pub fn add(&mut self, key: MessageKey, message: impl Into<String>) {
		self.messages.insert(key, message.into());
	}

	/// Look up a message, falling back to the English table.
	pub fn get(&self, key: MessageKey) -> &str {
		if let Some(message) = self.messages.get(&key) {
			return message;
		}
		ENGLISH
			.get(&key)
			.copied()
			.unwrap_or("")
	}

	/// True when the catalog overrides the given key.
	pub fn overrides(&self, key: MessageKey) -> bool {
		self.messages.contains_key(&key)
	}
}

impl Default for Translations {
	fn default() -> Self {
		Self::english()
	}
}
