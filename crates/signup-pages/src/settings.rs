//! Form settings.
//!
//! Supports TOML configuration files. Every key is optional; missing keys
//! keep the defaults, which reproduce the stock registration form
//! (validation on blur, Bootstrap-style class names, English labels).
//!
//! ```toml
//! mode = "on_blur"
//! revalidate_mode = "on_change"
//! submit_label = "Crear cuenta"
//!
//! [classes]
//! invalid = "has-error"
//!
//! [labels]
//! confirmPassword = "Repite la contraseña"
//! ```

use serde::{Deserialize, Serialize};
use signup_forms::{FieldName, FormError, FormResult};
use std::collections::BTreeMap;
use std::path::Path;

/// When field validation runs before the first submit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
	/// On every blur
	#[default]
	OnBlur,
	/// On every keystroke
	OnChange,
	/// Only when the form is submitted
	OnSubmit,
	/// On the first blur, then on every keystroke of that field
	OnTouched,
	/// On both blur and keystroke
	All,
}

/// When field validation runs after a submit attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevalidateMode {
	OnBlur,
	#[default]
	OnChange,
	OnSubmit,
}

/// Kind of field interaction, as seen by the validation trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
	Change,
	Blur,
}

/// CSS class names used by the field component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssClasses {
	/// Wrapper around label, input and error
	pub group: String,
	pub input: String,
	/// Added to the input when the field has an error
	pub invalid: String,
	/// Paragraph holding the error message
	pub error: String,
}

impl Default for CssClasses {
	fn default() -> Self {
		Self {
			group: "form-group".to_string(),
			input: "form-control".to_string(),
			invalid: "is-invalid".to_string(),
			error: "error".to_string(),
		}
	}
}

/// Settings of a registration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	pub mode: ValidationMode,
	pub revalidate_mode: RevalidateMode,
	/// Prefix for input names and ids (empty = none)
	pub prefix: String,
	pub submit_label: String,
	pub classes: CssClasses,
	/// Label overrides keyed by field path
	pub labels: BTreeMap<FieldName, String>,
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			mode: ValidationMode::default(),
			revalidate_mode: RevalidateMode::default(),
			prefix: String::new(),
			submit_label: "Submit".to_string(),
			classes: CssClasses::default(),
			labels: BTreeMap::new(),
		}
	}
}

impl FormSettings {
	pub fn with_mode(mut self, mode: ValidationMode) -> Self {
		self.mode = mode;
		self
	}

	pub fn with_revalidate_mode(mut self, mode: RevalidateMode) -> Self {
		self.revalidate_mode = mode;
		self
	}

	pub fn with_label(mut self, field: FieldName, label: impl Into<String>) -> Self {
		self.labels.insert(field, label.into());
		self
	}

	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Load settings from a TOML file.
	///
	/// # Errors
	///
	/// Returns error if file cannot be read or parsed.
	pub fn from_file(path: impl AsRef<Path>) -> FormResult<Self> {
		let content = std::fs::read_to_string(path.as_ref()).map_err(|e| FormError::Io {
			path: path.as_ref().to_path_buf(),
			source: e,
		})?;

		Self::from_toml(&content)
	}

	/// Parse settings from TOML string.
	pub fn from_toml(content: &str) -> FormResult<Self> {
		toml::from_str(content).map_err(|e| FormError::Settings {
			message: e.to_string(),
		})
	}

	/// Label for a field, falling back to the built-in one
	pub fn label_for(&self, field: FieldName) -> &str {
		self.labels
			.get(&field)
			.map(String::as_str)
			.unwrap_or_else(|| field.default_label())
	}

	/// Whether a field interaction should run validation
	///
	/// `touched` is whether the field has been blurred before, `submitted`
	/// whether the form has been submitted at least once. After the first
	/// submit the revalidation mode takes over from the validation mode.
	///
	/// # Examples
	///
	/// ```
	/// use signup_pages::settings::{FormSettings, Trigger};
	///
	/// let settings = FormSettings::default();
	/// assert!(settings.should_validate(Trigger::Blur, false, false));
	/// assert!(!settings.should_validate(Trigger::Change, true, false));
	/// // after a submit, keystrokes re-validate
	/// assert!(settings.should_validate(Trigger::Change, true, true));
	/// ```
	pub fn should_validate(&self, trigger: Trigger, touched: bool, submitted: bool) -> bool {
		let is_blur = trigger == Trigger::Blur;

		if self.mode == ValidationMode::All {
			return true;
		}
		if !submitted && self.mode == ValidationMode::OnTouched {
			return touched || is_blur;
		}

		let on_blur = if submitted {
			self.revalidate_mode == RevalidateMode::OnBlur
		} else {
			self.mode == ValidationMode::OnBlur
		};
		if on_blur {
			return is_blur;
		}

		let on_change = if submitted {
			self.revalidate_mode == RevalidateMode::OnChange
		} else {
			self.mode == ValidationMode::OnChange
		};
		if on_change {
			return !is_blur;
		}

		false
	}
}
