//! Validation errors keyed by field path, and the crate's error type

use crate::field::{FieldName, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Unknown form field: {0}")]
	UnknownField(String),
	#[error("Invalid field path: {0:?}")]
	InvalidPath(String),
	#[error("Invalid form settings: {message}")]
	Settings { message: String },
	#[error("Invalid validation schema: {0}")]
	Schema(#[from] serde_json::Error),
	#[error("Failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

pub type FormResult<T> = Result<T, FormError>;

/// Field path to user-facing message, at most one message per path
///
/// The first message recorded for a path wins; later failures for the same
/// path are dropped so the input shows a single, stable message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
	errors: BTreeMap<FieldPath, String>,
}

impl ValidationErrors {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a message for `path` unless one is already present
	///
	/// Returns `true` if the message was recorded.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FieldName, ValidationErrors};
	///
	/// let mut errors = ValidationErrors::new();
	/// assert!(errors.add(FieldName::Email.path(), "Correo inválido"));
	/// assert!(!errors.add(FieldName::Email.path(), "El correo es obligatorio"));
	/// assert_eq!(errors.get(FieldName::Email), Some("Correo inválido"));
	/// ```
	pub fn add(&mut self, path: FieldPath, message: impl Into<String>) -> bool {
		if self.errors.contains_key(&path) {
			return false;
		}
		self.errors.insert(path, message.into());
		true
	}

	/// Message attached to a field, if any
	pub fn get(&self, field: FieldName) -> Option<&str> {
		self.get_path(&field.path())
	}

	pub fn get_path(&self, path: &FieldPath) -> Option<&str> {
		self.errors.get(path).map(String::as_str)
	}

	pub fn contains(&self, field: FieldName) -> bool {
		self.errors.contains_key(&field.path())
	}

	/// Replace the message for a single field
	///
	/// `None` clears the field's error. Used when only one field is
	/// re-validated and the others must keep their current messages.
	pub fn set(&mut self, field: FieldName, message: Option<String>) {
		match message {
			Some(message) => {
				self.errors.insert(field.path(), message);
			}
			None => {
				self.errors.remove(&field.path());
			}
		}
	}

	pub fn remove(&mut self, field: FieldName) -> Option<String> {
		self.errors.remove(&field.path())
	}

	pub fn clear(&mut self) {
		self.errors.clear();
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	/// Paths carrying an error, in path order
	pub fn paths(&self) -> impl Iterator<Item = &FieldPath> {
		self.errors.keys()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &str)> {
		self.errors.iter().map(|(path, msg)| (path, msg.as_str()))
	}
}

impl fmt::Display for ValidationErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for (path, message) in &self.errors {
			if !first {
				f.write_str("; ")?;
			}
			write!(f, "{}: {}", path, message)?;
			first = false;
		}
		Ok(())
	}
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_first_message_wins() {
		let mut errors = ValidationErrors::new();
		errors.add(FieldName::ConfirmPassword.path(), "first");
		errors.add(FieldName::ConfirmPassword.path(), "second");

		assert_eq!(errors.len(), 1);
		assert_eq!(errors.get(FieldName::ConfirmPassword), Some("first"));
	}

	#[rstest]
	fn test_set_replaces_and_clears() {
		let mut errors = ValidationErrors::new();
		errors.add(FieldName::Name.path(), "old");

		errors.set(FieldName::Name, Some("new".to_string()));
		assert_eq!(errors.get(FieldName::Name), Some("new"));

		errors.set(FieldName::Name, None);
		assert!(errors.is_empty());
	}

	#[rstest]
	fn test_serializes_as_flat_object() {
		let mut errors = ValidationErrors::new();
		errors.add(FieldName::Name.path(), "El nombre es obligatorio");
		errors.add(
			FieldName::ConfirmPassword.path(),
			"Las contraseñas son diferentes",
		);

		let json = serde_json::to_value(&errors).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"confirmPassword": "Las contraseñas son diferentes",
				"name": "El nombre es obligatorio",
			})
		);
	}

	#[rstest]
	fn test_display_lists_every_path() {
		let mut errors = ValidationErrors::new();
		errors.add(FieldName::Email.path(), "Correo inválido");
		errors.add(FieldName::Name.path(), "El nombre es obligatorio");

		assert_eq!(
			errors.to_string(),
			"email: Correo inválido; name: El nombre es obligatorio"
		);
	}
}
