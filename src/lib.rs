//! # Signup
//!
//! A registration form with four fields (name, email, password and its
//! confirmation), validated field by field as each input loses focus.
//!
//! The workspace is split in two crates, both re-exported here:
//!
//! - [`forms`]: field names, values, the declarative validation schema and
//!   the error map keyed by field path
//! - [`pages`]: the form container, the field component props, HTML
//!   rendering and settings loaded from TOML
//!
//! ## Quick Example
//!
//! ```
//! use signup::prelude::*;
//!
//! let mut form = SignupForm::new();
//! for (field, text) in [
//!     (FieldName::Name, "Ana"),
//!     (FieldName::Email, "ana@example.com"),
//!     (FieldName::Password, "secret1"),
//!     (FieldName::ConfirmPassword, "secret2"),
//! ] {
//!     let props = form.field_props(field);
//!     form.dispatch(props.on_change.call(text.to_string()));
//!     form.dispatch(props.on_blur.call(()));
//! }
//!
//! assert_eq!(form.error(FieldName::ConfirmPassword), Some("Las contraseñas son diferentes"));
//! assert_eq!(form.error(FieldName::Password), None);
//! ```

pub use signup_forms as forms;
pub use signup_pages as pages;

/// Everything needed to build and drive the registration form
pub mod prelude {
	pub use signup_forms::{
		BoundField, FieldName, FieldPath, FormError, FormResult, FormValues, Schema,
		ValidationErrors, ValidationRule, registration_schema, validate,
	};
	pub use signup_pages::{
		Callback, CssClasses, FieldProps, FieldState, FormEvent, FormSettings, FormStatus,
		LogSubmit, RevalidateMode, SignupForm, SubmitHandler, ValidationMode, render_field,
		render_form,
	};
}
