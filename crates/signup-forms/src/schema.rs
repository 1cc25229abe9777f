//! Declarative validation schema for the registration form
//!
//! A [`Schema`] is an ordered list of [`ValidationRule`]s. Validation walks
//! the list once and attaches each failure to the rule's target path; the
//! first failure recorded for a path is the one the user sees.
//!
//! ```text
//! FormValues ──▶ Schema::validate ──▶ Ok(FormValues)
//!                     │
//!                     └──────────────▶ Err(ValidationErrors)
//!                                       path → message
//! ```
//!
//! The password confirmation check compares two fields but reports only on
//! `confirmPassword`, so the password input stays clean while the user is
//! still typing the confirmation.

use crate::errors::{FormResult, ValidationErrors};
use crate::field::{FieldName, FieldPath};
use crate::validators::{EmailValidator, MinLengthValidator};
use crate::values::FormValues;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const NAME_REQUIRED: &str = "El nombre es obligatorio";
pub const EMAIL_INVALID: &str = "Correo inválido";
pub const EMAIL_REQUIRED: &str = "El correo es obligatorio";
pub const PASSWORD_TOO_SHORT: &str = "La contraseña debe tener al menos 6 caracteres";
pub const CONFIRMATION_TOO_SHORT: &str = "La confirmación debe tener al menos 6 caracteres";
pub const PASSWORDS_DIFFER: &str = "Las contraseñas son diferentes";

/// Minimum length of both password fields
pub const PASSWORD_MIN_LENGTH: usize = 6;

static REGISTRATION: LazyLock<Schema> = LazyLock::new(Schema::registration);

/// A single validation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationRule {
	/// Field must have at least `min` characters
	MinLength {
		field: FieldName,
		min: usize,
		error_message: String,
	},
	/// Field must be a well-formed email address
	Email {
		field: FieldName,
		error_message: String,
	},
	/// All `field_names` must hold the same value; failures go to `target_field`
	FieldsEqual {
		field_names: Vec<FieldName>,
		error_message: String,
		target_field: FieldName,
	},
}

impl ValidationRule {
	/// Field the rule reports its failure on
	pub fn target(&self) -> FieldName {
		match self {
			ValidationRule::MinLength { field, .. } | ValidationRule::Email { field, .. } => *field,
			ValidationRule::FieldsEqual { target_field, .. } => *target_field,
		}
	}

	/// Run the rule against a value set
	pub fn check(&self, values: &FormValues) -> Result<(), String> {
		match self {
			ValidationRule::MinLength {
				field,
				min,
				error_message,
			} => MinLengthValidator::new(*min)
				.with_message(error_message.as_str())
				.validate(values.get(*field)),
			ValidationRule::Email {
				field,
				error_message,
			} => EmailValidator::new()
				.with_message(error_message.as_str())
				.validate(values.get(*field)),
			ValidationRule::FieldsEqual {
				field_names,
				error_message,
				..
			} => {
				let mut fields = field_names.iter().map(|field| values.get(*field));
				match fields.next() {
					Some(first) if fields.any(|other| other != first) => {
						Err(error_message.clone())
					}
					_ => Ok(()),
				}
			}
		}
	}
}

/// Ordered set of validation rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
	rules: Vec<ValidationRule>,
}

impl Schema {
	/// Create a schema with no rules
	pub fn new() -> Self {
		Self::default()
	}

	/// Load a schema from its JSON form
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FieldName, FormValues, Schema};
	///
	/// let schema = Schema::from_json(
	///     r#"{"rules":[{"type":"email","field":"email","error_message":"bad"}]}"#,
	/// )
	/// .unwrap();
	/// let errors = schema.validate(&FormValues::default()).unwrap_err();
	/// assert_eq!(errors.get(FieldName::Email), Some("bad"));
	/// ```
	pub fn from_json(json: &str) -> FormResult<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Rules of the registration form
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FieldName, FormValues, Schema};
	///
	/// let schema = Schema::registration();
	/// let values = FormValues::new("Ana", "ana@example.com", "secret1", "secret1");
	/// assert_eq!(schema.validate(&values), Ok(values.clone()));
	/// ```
	pub fn registration() -> Self {
		let mut schema = Self::new();
		schema.add_min_length_validator(FieldName::Name, 1, NAME_REQUIRED);
		schema.add_email_validator(FieldName::Email, EMAIL_INVALID);
		schema.add_min_length_validator(FieldName::Email, 1, EMAIL_REQUIRED);
		schema.add_min_length_validator(
			FieldName::Password,
			PASSWORD_MIN_LENGTH,
			PASSWORD_TOO_SHORT,
		);
		schema.add_min_length_validator(
			FieldName::ConfirmPassword,
			PASSWORD_MIN_LENGTH,
			CONFIRMATION_TOO_SHORT,
		);
		schema.add_fields_equal_validator(
			vec![FieldName::Password, FieldName::ConfirmPassword],
			PASSWORDS_DIFFER,
			FieldName::ConfirmPassword,
		);
		schema
	}

	pub fn add_min_length_validator(
		&mut self,
		field: FieldName,
		min: usize,
		error_message: impl Into<String>,
	) {
		self.rules.push(ValidationRule::MinLength {
			field,
			min,
			error_message: error_message.into(),
		});
	}

	pub fn add_email_validator(&mut self, field: FieldName, error_message: impl Into<String>) {
		self.rules.push(ValidationRule::Email {
			field,
			error_message: error_message.into(),
		});
	}

	/// Add a cross-field equality check
	///
	/// The failure is reported on `target_field` only, even though every
	/// field in `field_names` takes part in the comparison.
	pub fn add_fields_equal_validator(
		&mut self,
		field_names: Vec<FieldName>,
		error_message: impl Into<String>,
		target_field: FieldName,
	) {
		self.rules.push(ValidationRule::FieldsEqual {
			field_names,
			error_message: error_message.into(),
			target_field,
		});
	}

	pub fn rules(&self) -> &[ValidationRule] {
		&self.rules
	}

	/// Rules that report on the given path
	pub fn rules_for<'a>(
		&'a self,
		path: &'a FieldPath,
	) -> impl Iterator<Item = &'a ValidationRule> + 'a {
		self.rules
			.iter()
			.filter(move |rule| *path == rule.target())
	}

	/// Validate a complete value set
	///
	/// Returns the validated values, or every failing path with the first
	/// message recorded for it.
	pub fn validate(&self, values: &FormValues) -> Result<FormValues, ValidationErrors> {
		let mut errors = ValidationErrors::new();
		for rule in &self.rules {
			if let Err(message) = rule.check(values) {
				errors.add(rule.target().path(), message);
			}
		}

		if errors.is_empty() {
			Ok(values.clone())
		} else {
			tracing::debug!(failed = errors.len(), %errors, "form values failed validation");
			Err(errors)
		}
	}

	/// Validate the full value set and keep only the message for `field`
	///
	/// Cross-field rules still see every value, so blurring
	/// `confirmPassword` reports a mismatch with the current password.
	pub fn validate_field(&self, field: FieldName, values: &FormValues) -> Option<String> {
		let message = match self.validate(values) {
			Ok(_) => None,
			Err(errors) => errors.get(field).map(str::to_string),
		};
		tracing::debug!(field = %field, error = ?message, "field validated");
		message
	}
}

/// Validate values against the registration schema
///
/// # Examples
///
/// ```
/// use signup_forms::{FieldName, FormValues, validate};
///
/// let values = FormValues::new("Ana", "ana@example.com", "secret1", "secret2");
/// let errors = validate(&values).unwrap_err();
/// assert_eq!(errors.get(FieldName::ConfirmPassword), Some("Las contraseñas son diferentes"));
/// assert!(!errors.contains(FieldName::Password));
/// ```
pub fn validate(values: &FormValues) -> Result<FormValues, ValidationErrors> {
	REGISTRATION.validate(values)
}

/// Shared registration schema
pub fn registration_schema() -> &'static Schema {
	&REGISTRATION
}
