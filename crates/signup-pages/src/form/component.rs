//! Form container for the registration form
//!
//! `SignupForm` owns the field values, the error set, the per-field state and
//! the form status. Field components only read from it through
//! [`FieldProps`] and write to it through [`FormEvent`]s.
//!
//! ## Example
//!
//! ```
//! use signup_forms::{FieldName, FormValues};
//! use signup_pages::{FormEvent, SignupForm};
//!
//! let mut submitted = Vec::new();
//! let mut form = SignupForm::with_handler(|values: FormValues| submitted.push(values));
//!
//! form.dispatch(FormEvent::Input { field: FieldName::Name, value: "Ana".into() });
//! form.dispatch(FormEvent::Blur { field: FieldName::Name });
//! assert!(form.error(FieldName::Name).is_none());
//!
//! // submitting an incomplete form reports every failing field
//! form.dispatch(FormEvent::Submit);
//! assert_eq!(form.error(FieldName::Email), Some("Correo inválido"));
//! drop(form);
//! assert!(submitted.is_empty());
//! ```

use crate::events::FormEvent;
use crate::form::field::FieldProps;
use crate::form::state::{FieldState, FormStatus};
use crate::form::submit::{LogSubmit, SubmitHandler};
use crate::settings::{FormSettings, Trigger};
use signup_forms::{BoundField, FieldName, FormValues, Schema, ValidationErrors};
use std::collections::BTreeMap;

/// Registration form container
pub struct SignupForm<H = LogSubmit> {
	values: FormValues,
	initial: FormValues,
	errors: ValidationErrors,
	fields: BTreeMap<FieldName, FieldState>,
	status: FormStatus,
	submit_count: u32,
	schema: Schema,
	settings: FormSettings,
	handler: H,
}

impl SignupForm<LogSubmit> {
	/// Create an empty form that logs accepted submissions
	///
	/// # Examples
	///
	/// ```
	/// use signup_pages::{FormStatus, SignupForm};
	///
	/// let form = SignupForm::new();
	/// assert!(form.values().is_empty());
	/// assert_eq!(form.status(), FormStatus::Idle);
	/// ```
	pub fn new() -> Self {
		Self::with_handler(LogSubmit)
	}

	pub fn with_settings(settings: FormSettings) -> Self {
		Self::new().settings(settings)
	}
}

impl Default for SignupForm<LogSubmit> {
	fn default() -> Self {
		Self::new()
	}
}

impl<H: SubmitHandler> SignupForm<H> {
	/// Create an empty form that hands accepted submissions to `handler`
	pub fn with_handler(handler: H) -> Self {
		Self {
			values: FormValues::default(),
			initial: FormValues::default(),
			errors: ValidationErrors::new(),
			fields: FieldName::ALL
				.into_iter()
				.map(|field| (field, FieldState::Pristine))
				.collect(),
			status: FormStatus::Idle,
			submit_count: 0,
			schema: Schema::registration(),
			settings: FormSettings::default(),
			handler,
		}
	}

	/// Replace the settings
	pub fn settings(mut self, settings: FormSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Replace the validation schema
	pub fn schema(mut self, schema: Schema) -> Self {
		self.schema = schema;
		self
	}

	/// Start from pre-filled values instead of empty ones
	pub fn with_initial(mut self, initial: FormValues) -> Self {
		self.values = initial.clone();
		self.initial = initial;
		self
	}

	/// Apply a field or submit event
	///
	/// Returns the submit outcome for [`FormEvent::Submit`] and `None` for
	/// field events. Either way the outcome is also kept in `status()` and
	/// `errors()`.
	pub fn dispatch(
		&mut self,
		event: FormEvent,
	) -> Option<Result<FormValues, ValidationErrors>> {
		tracing::debug!(kind = event.kind(), field = ?event.field(), "form event");
		match event {
			FormEvent::Input { field, value } => {
				self.set_value(field, value);
				None
			}
			FormEvent::Blur { field } => {
				self.blur(field);
				None
			}
			FormEvent::Submit => Some(self.submit()),
		}
	}

	/// Update a field's value (one keystroke)
	///
	/// Validation runs only when the settings ask for change-level
	/// validation; in the default blur mode the error is left as is until
	/// the field loses focus.
	pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) {
		self.values.set(field, value);
		if self.settings.should_validate(
			Trigger::Change,
			self.is_touched(field),
			self.is_submitted(),
		) {
			self.validate_field(field);
		}
	}

	/// Handle a field losing focus
	pub fn blur(&mut self, field: FieldName) {
		let touched = self.is_touched(field);
		self.set_state(field, self.field_state(field).blurred());
		if self
			.settings
			.should_validate(Trigger::Blur, touched, self.is_submitted())
		{
			self.validate_field(field);
		}
	}

	/// Validate one field against the full value set
	///
	/// Only this field's error is updated; the others keep theirs.
	pub fn validate_field(&mut self, field: FieldName) -> Option<&str> {
		let message = self.schema.validate_field(field, &self.values);
		self.set_state(field, FieldState::validated(message.is_some()));
		self.errors.set(field, message);
		self.errors.get(field)
	}

	/// Validate every field and submit if they all pass
	///
	/// On success the handler receives exactly the four values and the error
	/// set is cleared. On failure the error set is replaced and the handler
	/// is not called.
	pub fn submit(&mut self) -> Result<FormValues, ValidationErrors> {
		self.status = FormStatus::Validating;
		self.submit_count += 1;

		let result = self.schema.validate(&self.values);
		match &result {
			Ok(values) => {
				self.errors.clear();
				self.mark_all(|_| false);
				self.status = FormStatus::Submitted;
				self.handler.handle(values.clone());
			}
			Err(errors) => {
				tracing::warn!(
					fields = %errors.paths().map(ToString::to_string).collect::<Vec<_>>().join(","),
					"registration form rejected"
				);
				self.errors = errors.clone();
				self.mark_all(|field| errors.contains(field));
				self.status = FormStatus::Rejected;
			}
		}
		result
	}

	/// Back to the initial values with no errors, as if just mounted
	pub fn reset(&mut self) {
		self.values = self.initial.clone();
		self.errors.clear();
		for state in self.fields.values_mut() {
			*state = FieldState::Pristine;
		}
		self.status = FormStatus::Idle;
		self.submit_count = 0;
	}

	pub fn values(&self) -> &FormValues {
		&self.values
	}

	pub fn value(&self, field: FieldName) -> &str {
		self.values.get(field)
	}

	pub fn errors(&self) -> &ValidationErrors {
		&self.errors
	}

	pub fn error(&self, field: FieldName) -> Option<&str> {
		self.errors.get(field)
	}

	pub fn field_state(&self, field: FieldName) -> FieldState {
		self.fields.get(&field).copied().unwrap_or_default()
	}

	/// Whether the field has been blurred or validated
	pub fn is_touched(&self, field: FieldName) -> bool {
		!self.field_state(field).is_pristine()
	}

	/// Whether the field differs from its initial value
	pub fn is_dirty(&self, field: FieldName) -> bool {
		self.values.get(field) != self.initial.get(field)
	}

	pub fn status(&self) -> FormStatus {
		self.status
	}

	pub fn submit_count(&self) -> u32 {
		self.submit_count
	}

	pub fn is_submitted(&self) -> bool {
		self.submit_count > 0
	}

	/// Whether the current values pass the schema
	pub fn is_valid(&self) -> bool {
		self.schema.validate(&self.values).is_ok()
	}

	pub fn form_settings(&self) -> &FormSettings {
		&self.settings
	}

	pub fn handler(&self) -> &H {
		&self.handler
	}

	/// One field bound to its current value and error
	pub fn bound_field(&self, field: FieldName) -> BoundField<'_> {
		BoundField::new(
			field,
			self.settings.label_for(field),
			self.values.get(field),
			self.errors.get(field),
		)
		.with_prefix(&self.settings.prefix)
	}

	/// Props for the field component of `field`
	pub fn field_props(&self, field: FieldName) -> FieldProps {
		FieldProps::from_bound(&self.bound_field(field))
	}

	fn set_state(&mut self, field: FieldName, state: FieldState) {
		self.fields.insert(field, state);
	}

	fn mark_all(&mut self, has_error: impl Fn(FieldName) -> bool) {
		for (field, state) in self.fields.iter_mut() {
			*state = FieldState::validated(has_error(*field));
		}
	}
}
