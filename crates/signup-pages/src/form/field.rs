//! Field component props

use crate::callback::Callback;
use crate::events::FormEvent;
use signup_forms::{BoundField, FieldName};

/// Everything needed to render one labeled input
///
/// The value and error come from the owning form; `on_change` and `on_blur`
/// turn user interaction into events for the form to apply.
#[derive(Debug, Clone)]
pub struct FieldProps {
	pub field: FieldName,
	/// HTML `name` and `id` of the input
	pub html_name: String,
	pub label: String,
	pub input_type: &'static str,
	pub value: String,
	pub error: Option<String>,
	pub on_change: Callback<String, FormEvent>,
	pub on_blur: Callback<(), FormEvent>,
}

impl FieldProps {
	/// Build props from a bound field, wiring the callbacks to its field name
	///
	/// # Examples
	///
	/// ```
	/// use signup_forms::{BoundField, FieldName};
	/// use signup_pages::{FieldProps, FormEvent};
	///
	/// let bound = BoundField::new(FieldName::Email, "Email", "ana@", None);
	/// let props = FieldProps::from_bound(&bound);
	///
	/// assert_eq!(
	///     props.on_change.call("ana@example.com".to_string()),
	///     FormEvent::Input { field: FieldName::Email, value: "ana@example.com".to_string() },
	/// );
	/// assert_eq!(props.on_blur.call(()), FormEvent::Blur { field: FieldName::Email });
	/// ```
	pub fn from_bound(bound: &BoundField<'_>) -> Self {
		let field = bound.field();
		Self {
			field,
			html_name: bound.html_name(),
			label: bound.label().to_string(),
			input_type: bound.input_type(),
			value: bound.value().to_string(),
			error: bound.error().map(str::to_string),
			on_change: Callback::new(move |value: String| FormEvent::Input { field, value }),
			on_blur: Callback::new(move |_: ()| FormEvent::Blur { field }),
		}
	}

	pub fn is_invalid(&self) -> bool {
		self.error.is_some()
	}
}
