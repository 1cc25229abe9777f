//! Registration form values and validation
//!
//! This crate holds everything about the registration form that does not
//! depend on how it is displayed:
//! - The four-field [`FormValues`] record and the [`FieldName`]/[`FieldPath`] identifiers
//! - A declarative [`Schema`] with single-field and cross-field rules
//! - [`ValidationErrors`], one user-facing message per field path
//! - [`BoundField`], a field bound to its value and error for rendering
//!
//! ## Example
//!
//! ```
//! use signup_forms::{FieldName, FormValues, validate};
//!
//! let values = FormValues::new("", "not-an-email", "abc", "abc");
//! let errors = validate(&values).unwrap_err();
//!
//! assert_eq!(errors.get(FieldName::Name), Some("El nombre es obligatorio"));
//! assert_eq!(errors.get(FieldName::Email), Some("Correo inválido"));
//! ```

pub mod bound_field;
pub mod errors;
pub mod field;
pub mod schema;
pub mod validators;
pub mod values;

pub use bound_field::BoundField;
pub use errors::{FormError, FormResult, ValidationErrors};
pub use field::{FieldName, FieldPath, Widget};
pub use schema::{Schema, ValidationRule, registration_schema, validate};
pub use values::FormValues;
