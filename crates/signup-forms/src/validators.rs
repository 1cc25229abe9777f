//! Single-value validators used by the registration schema
//!
//! Each validator carries an optional custom message; when it is absent the
//! validator falls back to a generic message.

use regex::Regex;
use std::sync::LazyLock;

// Local part of letters, digits and `_'+-.`, then dotted domain labels that
// start with a letter or digit, then an alphabetic TLD of two or more letters.
// Leading dots and `..` are rejected separately in `is_email`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
		.expect("EMAIL_REGEX: invalid regex pattern")
});

fn is_email(value: &str) -> bool {
	!value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
}

/// Validates that a string looks like an email address
///
/// # Examples
///
/// ```
/// use signup_forms::validators::EmailValidator;
///
/// let validator = EmailValidator::new().with_message("Correo inválido");
/// assert!(validator.validate("ana@example.com").is_ok());
/// assert_eq!(validator.validate("not-an-email").unwrap_err(), "Correo inválido");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailValidator {
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, value: &str) -> Result<(), String> {
		if is_email(value) {
			Ok(())
		} else {
			Err(self
				.message
				.clone()
				.unwrap_or_else(|| "Enter a valid email address".to_string()))
		}
	}
}

/// Validates that a string has at least `min` characters
///
/// Length is measured in UTF-16 code units, the way browsers report
/// `value.length`: `"ñandú"` counts as five and `"🔒"` as two.
///
/// # Examples
///
/// ```
/// use signup_forms::validators::MinLengthValidator;
///
/// let validator = MinLengthValidator::new(6);
/// assert!(validator.validate("secret").is_ok());
/// assert!(validator.validate("abc").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
	min: usize,
	message: Option<String>,
}

impl MinLengthValidator {
	pub fn new(min: usize) -> Self {
		Self { min, message: None }
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn min(&self) -> usize {
		self.min
	}

	pub fn validate(&self, value: &str) -> Result<(), String> {
		if value.encode_utf16().count() >= self.min {
			Ok(())
		} else {
			Err(self.message.clone().unwrap_or_else(|| {
				format!("This field must be at least {} characters long", self.min)
			}))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("user@example.com")]
	#[case("first.last+tag@sub.example.org")]
	#[case("O'Brien@Example.COM")]
	#[case("a_b-c@my-host.io")]
	fn test_email_validator_valid(#[case] email: &str) {
		assert!(EmailValidator::new().validate(email).is_ok());
	}

	#[rstest]
	#[case("")]
	#[case("not-an-email")]
	#[case("@example.com")]
	#[case("user@")]
	#[case("user@example")]
	#[case("us er@example.com")]
	#[case("user@@example.com")]
	#[case("a@b.c")]
	#[case("a@b..com")]
	#[case(".ana@example.com")]
	#[case("ana..p@example.com")]
	#[case("<x>@y.zz")]
	#[case("a,b@c.de")]
	#[case("ana.@example.com")]
	#[case("ana@-example.com")]
	fn test_email_validator_invalid(#[case] email: &str) {
		assert!(EmailValidator::new().validate(email).is_err());
	}

	#[rstest]
	fn test_email_validator_default_message() {
		assert_eq!(
			EmailValidator::new().validate("nope").unwrap_err(),
			"Enter a valid email address"
		);
	}

	#[rstest]
	fn test_min_length_boundary() {
		let validator = MinLengthValidator::new(6);

		assert!(validator.validate("12345").is_err());
		assert!(validator.validate("123456").is_ok());
	}

	#[rstest]
	fn test_min_length_counts_characters() {
		let validator = MinLengthValidator::new(6);

		// six characters, seven bytes
		assert!(validator.validate("contrñ").is_ok());
		assert!(validator.validate("ñññññ").is_err());
	}

	#[rstest]
	fn test_min_length_counts_utf16_units() {
		let validator = MinLengthValidator::new(6);

		// three characters, six UTF-16 code units
		assert!(validator.validate("🔒🔒🔒").is_ok());
		assert!(validator.validate("🔒🔒a").is_err());
	}

	#[rstest]
	fn test_min_length_messages() {
		assert_eq!(
			MinLengthValidator::new(3).validate("a").unwrap_err(),
			"This field must be at least 3 characters long"
		);
		assert_eq!(
			MinLengthValidator::new(1)
				.with_message("El nombre es obligatorio")
				.validate("")
				.unwrap_err(),
			"El nombre es obligatorio"
		);
	}
}
