//! Callback type used by field components to report user interaction.
//!
//! A field never mutates the form directly. Its callbacks turn raw input
//! (the new text, or a blur) into a [`FormEvent`](crate::events::FormEvent)
//! that the owning form applies with `dispatch`.

use std::sync::Arc;

/// Shared closure a field component calls on user interaction
///
/// Field props hold one per interaction kind: `on_change` receives the new
/// text, `on_blur` receives `()`, and both return the [`FormEvent`] to
/// dispatch. Clones point at the same closure, so props can be rebuilt on
/// every render without re-wiring.
///
/// [`FormEvent`]: crate::events::FormEvent
///
/// # Examples
///
/// ```
/// use signup_forms::FieldName;
/// use signup_pages::{Callback, FormEvent};
///
/// let on_blur = Callback::new(|_: ()| FormEvent::Blur { field: FieldName::Email });
/// assert_eq!(on_blur.clone().call(()), FormEvent::Blur { field: FieldName::Email });
/// ```
pub struct Callback<Args, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Wrap a closure
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Run the closure on one interaction
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_clone_shares_function() {
		let double = Callback::new(|n: u32| n * 2);
		let cloned = double.clone();

		assert_eq!(double.call(2), 4);
		assert_eq!(cloned.call(21), 42);
	}

	#[rstest]
	fn test_change_callback_builds_input_event() {
		use crate::events::FormEvent;
		use signup_forms::FieldName;

		let on_change = Callback::new(|value: String| FormEvent::Input {
			field: FieldName::Name,
			value,
		});

		assert_eq!(
			on_change.call("Ana".to_string()),
			FormEvent::Input {
				field: FieldName::Name,
				value: "Ana".to_string(),
			}
		);
	}

	#[rstest]
	fn test_debug_hides_function() {
		let cb: Callback<()> = Callback::new(|_| {});
		assert_eq!(format!("{:?}", cb), r#"Callback { inner: "<function>" }"#);
	}
}
