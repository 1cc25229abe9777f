//! Per-field and whole-form state machines
//!
//! ```text
//! field: Pristine ──blur──▶ Touched ──validate──▶ Valid | Invalid
//! form:  Idle ──submit──▶ Validating ──▶ Submitted | Rejected
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldState {
	/// Never blurred, never validated
	#[default]
	Pristine,
	/// Blurred, but no validation has run for it yet
	Touched,
	Valid,
	Invalid,
}

impl FieldState {
	/// State after a validation run with the given outcome
	pub fn validated(has_error: bool) -> Self {
		if has_error {
			FieldState::Invalid
		} else {
			FieldState::Valid
		}
	}

	/// State after a blur that did not trigger validation
	///
	/// A field that already has a validation outcome keeps it.
	pub fn blurred(self) -> Self {
		match self {
			FieldState::Pristine => FieldState::Touched,
			other => other,
		}
	}

	pub fn is_pristine(&self) -> bool {
		*self == FieldState::Pristine
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
	#[default]
	Idle,
	Validating,
	/// The last submit passed validation and reached the handler
	Submitted,
	/// The last submit failed validation
	Rejected,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(FieldState::Pristine, FieldState::Touched)]
	#[case(FieldState::Touched, FieldState::Touched)]
	#[case(FieldState::Valid, FieldState::Valid)]
	#[case(FieldState::Invalid, FieldState::Invalid)]
	fn test_blurred(#[case] from: FieldState, #[case] to: FieldState) {
		assert_eq!(from.blurred(), to);
	}

	#[rstest]
	fn test_validated() {
		assert_eq!(FieldState::validated(true), FieldState::Invalid);
		assert_eq!(FieldState::validated(false), FieldState::Valid);
	}
}
