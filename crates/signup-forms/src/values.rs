//! Form values record

use crate::field::FieldName;
use serde::{Deserialize, Serialize};

/// Values of the four registration fields
///
/// Starts empty when the form is mounted and is mutated one keystroke at a
/// time. Serialized with camelCase keys (`confirmPassword`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
	pub name: String,
	pub email: String,
	pub password: String,
	pub confirm_password: String,
}

impl FormValues {
	/// Build a value set from the four fields
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FieldName, FormValues};
	///
	/// let values = FormValues::new("Ana", "ana@example.com", "secret1", "secret1");
	/// assert_eq!(values.get(FieldName::ConfirmPassword), "secret1");
	/// ```
	pub fn new(
		name: impl Into<String>,
		email: impl Into<String>,
		password: impl Into<String>,
		confirm_password: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			email: email.into(),
			password: password.into(),
			confirm_password: confirm_password.into(),
		}
	}

	pub fn get(&self, field: FieldName) -> &str {
		match field {
			FieldName::Name => &self.name,
			FieldName::Email => &self.email,
			FieldName::Password => &self.password,
			FieldName::ConfirmPassword => &self.confirm_password,
		}
	}

	pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
		let slot = match field {
			FieldName::Name => &mut self.name,
			FieldName::Email => &mut self.email,
			FieldName::Password => &mut self.password,
			FieldName::ConfirmPassword => &mut self.confirm_password,
		};
		*slot = value.into();
	}

	/// Builder-style variant of [`FormValues::set`]
	pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
		self.set(field, value);
		self
	}

	/// True when every field is empty
	pub fn is_empty(&self) -> bool {
		FieldName::ALL.iter().all(|field| self.get(*field).is_empty())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_is_empty() {
		assert!(FormValues::default().is_empty());
	}

	#[rstest]
	fn test_set_and_get_each_field() {
		let mut values = FormValues::default();
		for field in FieldName::ALL {
			values.set(field, field.as_str());
		}

		assert_eq!(values.name, "name");
		assert_eq!(values.email, "email");
		assert_eq!(values.password, "password");
		assert_eq!(values.confirm_password, "confirmPassword");
		assert!(!values.is_empty());
	}

	#[rstest]
	fn test_camel_case_json() {
		let values = FormValues::new("Ana", "ana@example.com", "secret1", "secret1");
		let json = serde_json::to_value(&values).unwrap();

		assert_eq!(json["confirmPassword"], "secret1");
		assert!(json.get("confirm_password").is_none());
	}

	#[rstest]
	fn test_missing_keys_deserialize_empty() {
		let values: FormValues = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
		assert_eq!(values.name, "Ana");
		assert_eq!(values.confirm_password, "");
	}
}
