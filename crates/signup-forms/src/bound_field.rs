use crate::field::{FieldName, Widget};

/// BoundField represents one field bound to its current value and error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundField<'a> {
	field: FieldName,
	label: &'a str,
	value: &'a str,
	error: Option<&'a str>,
	prefix: &'a str,
}

impl<'a> BoundField<'a> {
	/// Bind a field to its value and optional error
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{BoundField, FieldName};
	///
	/// let bound = BoundField::new(FieldName::Email, "Email", "ana@", Some("Correo inválido"));
	/// assert_eq!(bound.name(), "email");
	/// assert_eq!(bound.value(), "ana@");
	/// assert!(bound.has_error());
	/// ```
	pub fn new(field: FieldName, label: &'a str, value: &'a str, error: Option<&'a str>) -> Self {
		Self {
			field,
			label,
			value,
			error,
			prefix: "",
		}
	}

	/// Namespace the HTML name and id with a prefix
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{BoundField, FieldName};
	///
	/// let bound = BoundField::new(FieldName::Name, "Name", "", None).with_prefix("signup");
	/// assert_eq!(bound.html_name(), "signup-name");
	/// assert_eq!(bound.id_for_label(), "signup-name");
	/// ```
	pub fn with_prefix(mut self, prefix: &'a str) -> Self {
		self.prefix = prefix;
		self
	}

	pub fn field(&self) -> FieldName {
		self.field
	}

	pub fn name(&self) -> &'static str {
		self.field.as_str()
	}

	/// Get the HTML name attribute (with prefix)
	pub fn html_name(&self) -> String {
		if self.prefix.is_empty() {
			self.field.as_str().to_string()
		} else {
			format!("{}-{}", self.prefix, self.field.as_str())
		}
	}

	/// Id shared by the input and its label's `for` attribute
	pub fn id_for_label(&self) -> String {
		self.html_name()
	}

	pub fn label(&self) -> &str {
		self.label
	}

	pub fn widget(&self) -> Widget {
		self.field.widget()
	}

	pub fn input_type(&self) -> &'static str {
		self.field.widget().input_type()
	}

	pub fn value(&self) -> &str {
		self.value
	}

	pub fn error(&self) -> Option<&str> {
		self.error
	}

	pub fn has_error(&self) -> bool {
		self.error.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_bound_field_basic() {
		let bound = BoundField::new(FieldName::Name, "Name", "Ana", None);

		assert_eq!(bound.name(), "name");
		assert_eq!(bound.html_name(), "name");
		assert_eq!(bound.id_for_label(), "name");
		assert_eq!(bound.value(), "Ana");
		assert_eq!(bound.input_type(), "text");
		assert!(!bound.has_error());
	}

	#[rstest]
	fn test_bound_field_with_error() {
		let bound = BoundField::new(
			FieldName::ConfirmPassword,
			"Confirm Password",
			"secret2",
			Some("Las contraseñas son diferentes"),
		);

		assert!(bound.has_error());
		assert_eq!(bound.error(), Some("Las contraseñas son diferentes"));
		assert_eq!(bound.widget(), Widget::PasswordInput);
		assert_eq!(bound.name(), "confirmPassword");
	}
}
