//! HTML rendering of the field component and the form
//!
//! Rendering is pure: the same props and settings always give the same
//! markup, and nothing here touches form state.

use crate::form::component::SignupForm;
use crate::form::field::FieldProps;
use crate::form::submit::SubmitHandler;
use crate::settings::CssClasses;
use signup_forms::FieldName;

/// Escape typed text, labels and messages for element content and
/// double-quoted attribute values
pub fn html_escape(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			other => escaped.push(other),
		}
	}
	escaped
}

/// Render one labeled input with its error message
///
/// The input gets the invalid class and a message paragraph follows it only
/// when the props carry an error.
///
/// # Examples
///
/// ```
/// use signup_forms::{BoundField, FieldName};
/// use signup_pages::settings::CssClasses;
/// use signup_pages::{FieldProps, render_field};
///
/// let bound = BoundField::new(FieldName::Name, "Name", "", Some("El nombre es obligatorio"));
/// let html = render_field(&FieldProps::from_bound(&bound), &CssClasses::default());
///
/// assert!(html.contains(r#"class="form-control is-invalid""#));
/// assert!(html.contains(r#"<p class="error">El nombre es obligatorio</p>"#));
/// ```
pub fn render_field(props: &FieldProps, classes: &CssClasses) -> String {
	let id = html_escape(&props.html_name);

	let mut html = format!(r#"<div class="{}">"#, html_escape(&classes.group));
	html.push_str(&format!(
		r#"<label for="{}">{}</label>"#,
		id,
		html_escape(&props.label)
	));

	let input_class = match props.error {
		Some(_) => format!("{} {}", classes.input, classes.invalid),
		None => classes.input.clone(),
	};
	html.push_str(&format!(
		r#"<input id="{id}" name="{id}" type="{}" value="{}" class="{}" />"#,
		props.input_type,
		html_escape(&props.value),
		html_escape(input_class.trim())
	));

	if let Some(ref error) = props.error {
		html.push_str(&format!(
			r#"<p class="{}">{}</p>"#,
			html_escape(&classes.error),
			html_escape(error)
		));
	}

	html.push_str("</div>");
	html
}

/// Render the whole form: the four fields in order and the submit button
pub fn render_form<H: SubmitHandler>(form: &SignupForm<H>) -> String {
	let settings = form.form_settings();

	let mut html = String::from("<form>");
	for field in FieldName::ALL {
		html.push_str(&render_field(&form.field_props(field), &settings.classes));
	}
	html.push_str(&format!(
		r#"<button type="submit">{}</button>"#,
		html_escape(&settings.submit_label)
	));
	html.push_str("</form>");
	html
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use signup_forms::BoundField;

	#[rstest]
	fn test_valid_field_markup() {
		let bound = BoundField::new(FieldName::Email, "Email", "ana@example.com", None);

		let html = render_field(&FieldProps::from_bound(&bound), &CssClasses::default());

		assert_eq!(
			html,
			concat!(
				r#"<div class="form-group">"#,
				r#"<label for="email">Email</label>"#,
				r#"<input id="email" name="email" type="email" value="ana@example.com" class="form-control" />"#,
				"</div>",
			)
		);
	}

	#[rstest]
	fn test_invalid_field_markup() {
		let bound = BoundField::new(
			FieldName::ConfirmPassword,
			"Confirm Password",
			"secret2",
			Some("Las contraseñas son diferentes"),
		);

		let html = render_field(&FieldProps::from_bound(&bound), &CssClasses::default());

		assert_eq!(
			html,
			concat!(
				r#"<div class="form-group">"#,
				r#"<label for="confirmPassword">Confirm Password</label>"#,
				r#"<input id="confirmPassword" name="confirmPassword" type="password" value="secret2" class="form-control is-invalid" />"#,
				r#"<p class="error">Las contraseñas son diferentes</p>"#,
				"</div>",
			)
		);
	}

	#[rstest]
	fn test_value_is_escaped() {
		let bound = BoundField::new(FieldName::Name, "Name", r#""><script>"#, None);

		let html = render_field(&FieldProps::from_bound(&bound), &CssClasses::default());

		assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
		assert!(!html.contains("<script>"));
	}

	#[rstest]
	fn test_empty_input_class_has_no_stray_space() {
		let classes = CssClasses {
			input: String::new(),
			..CssClasses::default()
		};
		let bound = BoundField::new(FieldName::Name, "Name", "", Some("x"));

		let html = render_field(&FieldProps::from_bound(&bound), &classes);

		assert!(html.contains(r#"class="is-invalid""#));
	}

	#[rstest]
	fn test_html_escape() {
		assert_eq!(html_escape("<b>"), "&lt;b&gt;");
		assert_eq!(html_escape("A & B"), "A &amp; B");
		assert_eq!(html_escape("it's"), "it&#x27;s");
		assert_eq!(html_escape(r#"say "hola""#), "say &quot;hola&quot;");
		assert_eq!(html_escape("contraseña<6"), "contraseña&lt;6");
	}
}
