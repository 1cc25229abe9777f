//! Submission handlers
//!
//! The form hands validated values to a [`SubmitHandler`] supplied by the
//! embedding application. Network submission is the application's concern.

use signup_forms::FormValues;

/// Receives the values of a form that passed validation
pub trait SubmitHandler {
	fn handle(&mut self, values: FormValues);
}

impl<F> SubmitHandler for F
where
	F: FnMut(FormValues),
{
	fn handle(&mut self, values: FormValues) {
		self(values)
	}
}

/// Placeholder handler: logs the submitted values and does nothing else
///
/// Passwords are not logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmit;

impl SubmitHandler for LogSubmit {
	fn handle(&mut self, values: FormValues) {
		tracing::info!(
			name = %values.name,
			email = %values.email,
			"registration form submitted"
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_closure_handler() {
		let mut received = Vec::new();
		let mut handler = |values: FormValues| received.push(values);

		handler.handle(FormValues::new("Ana", "ana@example.com", "secret1", "secret1"));

		assert_eq!(received.len(), 1);
		assert_eq!(received[0].name, "Ana");
	}
}
