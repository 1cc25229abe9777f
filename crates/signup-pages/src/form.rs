//! Registration form container and field component
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐  FormEvent   ┌──────────────┐  validate  ┌────────┐
//! │ FieldProps │ ───────────▶ │  SignupForm  │ ─────────▶ │ Schema │
//! │ on_change  │              │  values      │ ◀───────── │        │
//! │ on_blur    │ ◀─────────── │  errors      │   errors   └────────┘
//! └────────────┘ value, error │  status      │
//!       │                     └──────────────┘
//!       ▼                            │ submit (valid)
//!  render_field()                    ▼
//!                             SubmitHandler
//! ```
//!
//! Data flows one way: the form owns the values and errors, hands each field
//! its value and error as props, and receives [`FormEvent`](crate::events::FormEvent)s
//! back from the field callbacks.

pub mod component;
pub mod field;
pub mod rendering;
pub mod state;
pub mod submit;

pub use component::SignupForm;
pub use field::FieldProps;
pub use rendering::{html_escape, render_field, render_form};
pub use state::{FieldState, FormStatus};
pub use submit::{LogSubmit, SubmitHandler};
