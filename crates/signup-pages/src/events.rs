//! Events emitted by the field components and applied by the form

use serde::{Deserialize, Serialize};
use signup_forms::FieldName;

/// User interaction with the registration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
	/// The text of a field changed (one keystroke, paste, autofill)
	Input { field: FieldName, value: String },
	/// A field lost focus
	Blur { field: FieldName },
	/// The submit button was pressed
	Submit,
}

impl FormEvent {
	/// Short name of the event, safe to log (never includes typed text)
	pub fn kind(&self) -> &'static str {
		match self {
			FormEvent::Input { .. } => "input",
			FormEvent::Blur { .. } => "blur",
			FormEvent::Submit => "submit",
		}
	}

	/// Field the event refers to, if any
	pub fn field(&self) -> Option<FieldName> {
		match self {
			FormEvent::Input { field, .. } | FormEvent::Blur { field } => Some(*field),
			FormEvent::Submit => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_event_json_shape() {
		let event = FormEvent::Input {
			field: FieldName::ConfirmPassword,
			value: "secret1".to_string(),
		};

		let json = serde_json::to_value(&event).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"event": "input",
				"field": "confirmPassword",
				"value": "secret1",
			})
		);
		assert_eq!(event.field(), Some(FieldName::ConfirmPassword));
		assert_eq!(event.kind(), "input");
	}

	#[rstest]
	fn test_submit_has_no_field() {
		let event: FormEvent = serde_json::from_str(r#"{"event":"submit"}"#).unwrap();
		assert_eq!(event, FormEvent::Submit);
		assert_eq!(event.field(), None);
	}
}
