//! Signup Pages - registration form container and field component
//!
//! Renders the registration form described by `signup-forms` and keeps its
//! state between user interactions.
//!
//! ## Modules
//!
//! - [`form`](mod@form): [`SignupForm`] container, [`FieldProps`] and HTML rendering
//! - [`events`]: [`FormEvent`]s emitted by field callbacks
//! - [`callback`]: cloneable [`Callback`] wrapper
//! - [`settings`]: [`FormSettings`] (validation mode, class names, labels) loaded from TOML
//!
//! ## Example
//!
//! ```
//! use signup_forms::FieldName;
//! use signup_pages::{FormEvent, SignupForm, render_form};
//!
//! let mut form = SignupForm::new();
//! let props = form.field_props(FieldName::Email);
//!
//! form.dispatch(props.on_change.call("not-an-email".to_string()));
//! form.dispatch(props.on_blur.call(()));
//!
//! let html = render_form(&form);
//! assert!(html.contains(r#"<p class="error">Correo inválido</p>"#));
//! ```

pub mod callback;
pub mod events;
pub mod form;
pub mod settings;

pub use callback::Callback;
pub use events::FormEvent;
pub use form::{
	FieldProps, FieldState, FormStatus, LogSubmit, SignupForm, SubmitHandler, html_escape,
	render_field, render_form,
};
pub use settings::{CssClasses, FormSettings, RevalidateMode, ValidationMode};
