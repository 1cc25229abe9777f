//! Field identity: the four registration fields, their dotted paths and widgets

use crate::errors::{FormError, FormResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Input widget used to render a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
	TextInput,
	EmailInput,
	PasswordInput,
}

impl Widget {
	/// HTML `type` attribute for this widget
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::Widget;
	///
	/// assert_eq!(Widget::EmailInput.input_type(), "email");
	/// assert_eq!(Widget::PasswordInput.input_type(), "password");
	/// ```
	pub fn input_type(&self) -> &'static str {
		match self {
			Widget::TextInput => "text",
			Widget::EmailInput => "email",
			Widget::PasswordInput => "password",
		}
	}
}

/// One of the four fields of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
	Name,
	Email,
	Password,
	ConfirmPassword,
}

impl FieldName {
	/// All fields in render order
	pub const ALL: [FieldName; 4] = [
		FieldName::Name,
		FieldName::Email,
		FieldName::Password,
		FieldName::ConfirmPassword,
	];

	/// Path segment used to address this field in the error map
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::FieldName;
	///
	/// assert_eq!(FieldName::ConfirmPassword.as_str(), "confirmPassword");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			FieldName::Name => "name",
			FieldName::Email => "email",
			FieldName::Password => "password",
			FieldName::ConfirmPassword => "confirmPassword",
		}
	}

	/// Field path for this field
	pub fn path(&self) -> FieldPath {
		FieldPath::from(*self)
	}

	/// Default label shown next to the input
	pub fn default_label(&self) -> &'static str {
		match self {
			FieldName::Name => "Name",
			FieldName::Email => "Email",
			FieldName::Password => "Password",
			FieldName::ConfirmPassword => "Confirm Password",
		}
	}

	pub fn widget(&self) -> Widget {
		match self {
			FieldName::Name => Widget::TextInput,
			FieldName::Email => Widget::EmailInput,
			FieldName::Password | FieldName::ConfirmPassword => Widget::PasswordInput,
		}
	}

	/// Resolve a field from its path
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{FieldName, FieldPath};
	///
	/// let path = FieldPath::parse("confirmPassword").unwrap();
	/// assert_eq!(FieldName::from_path(&path).unwrap(), FieldName::ConfirmPassword);
	/// ```
	pub fn from_path(path: &FieldPath) -> FormResult<Self> {
		match path.segments() {
			[single] => single.parse(),
			_ => Err(FormError::UnknownField(path.to_string())),
		}
	}
}

impl FromStr for FieldName {
	type Err = FormError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		FieldName::ALL
			.into_iter()
			.find(|field| field.as_str() == s)
			.ok_or_else(|| FormError::UnknownField(s.to_string()))
	}
}

impl fmt::Display for FieldName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Dot-addressable path naming the field an error belongs to
///
/// Serialized as its dotted string form, so a map keyed by `FieldPath`
/// becomes a plain JSON object.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath {
	segments: Vec<String>,
}

impl FieldPath {
	/// Parse a dotted path
	///
	/// Empty paths and empty segments (`"a..b"`, `".a"`) are rejected.
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::FieldPath;
	///
	/// let path = FieldPath::parse("account.email").unwrap();
	/// assert_eq!(path.segments(), ["account", "email"]);
	/// assert_eq!(path.to_string(), "account.email");
	///
	/// assert!(FieldPath::parse("").is_err());
	/// assert!(FieldPath::parse("a..b").is_err());
	/// ```
	pub fn parse(path: &str) -> FormResult<Self> {
		let segments: Vec<String> = path.split('.').map(str::to_string).collect();
		if segments.iter().any(|s| s.is_empty()) {
			return Err(FormError::InvalidPath(path.to_string()));
		}
		Ok(Self { segments })
	}

	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// Append a segment, producing a nested path
	pub fn join(&self, segment: impl Into<String>) -> Self {
		let mut segments = self.segments.clone();
		segments.push(segment.into());
		Self { segments }
	}
}

impl From<FieldName> for FieldPath {
	fn from(field: FieldName) -> Self {
		Self {
			segments: vec![field.as_str().to_string()],
		}
	}
}

impl FromStr for FieldPath {
	type Err = FormError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.segments.join("."))
	}
}

impl PartialEq<FieldName> for FieldPath {
	fn eq(&self, other: &FieldName) -> bool {
		matches!(self.segments.as_slice(), [single] if single == other.as_str())
	}
}

impl Serialize for FieldPath {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for FieldPath {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		FieldPath::parse(&raw).map_err(serde::de::Error::custom)
	}
}
