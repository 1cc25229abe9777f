//! End-to-end registration flow through the facade crate

use rstest::rstest;
use signup::prelude::*;

fn type_into<H: SubmitHandler>(form: &mut SignupForm<H>, field: FieldName, text: &str) {
	let props = form.field_props(field);
	form.dispatch(props.on_change.call(text.to_string()));
	let props = form.field_props(field);
	form.dispatch(props.on_blur.call(()));
}

#[rstest]
fn test_blur_then_fix_then_submit() {
	// Arrange
	let mut submitted = Vec::new();
	let mut form = SignupForm::with_handler(|values: FormValues| submitted.push(values));

	// Act
	type_into(&mut form, FieldName::Name, "Ana");
	type_into(&mut form, FieldName::Email, "ana@");
	let email_error = form.error(FieldName::Email).map(str::to_string);
	type_into(&mut form, FieldName::Email, "ana@example.com");
	type_into(&mut form, FieldName::Password, "secret1");
	type_into(&mut form, FieldName::ConfirmPassword, "secret1");
	form.dispatch(FormEvent::Submit);

	// Assert
	assert_eq!(email_error.as_deref(), Some("Correo inválido"));
	assert_eq!(form.status(), FormStatus::Submitted);
	assert!(form.errors().is_empty());
	drop(form);
	assert_eq!(
		submitted,
		vec![FormValues::new("Ana", "ana@example.com", "secret1", "secret1")]
	);
}

#[rstest]
fn test_configured_form_from_toml() {
	// Arrange
	let settings = FormSettings::from_toml(
		r#"
submit_label = "Crear cuenta"

[classes]
invalid = "has-error"

[labels]
confirmPassword = "Repite la contraseña"
"#,
	)
	.unwrap();
	let mut form = SignupForm::with_settings(settings);

	// Act
	type_into(&mut form, FieldName::ConfirmPassword, "abc");
	let html = render_form(&form);

	// Assert
	assert!(html.contains(r#"<label for="confirmPassword">Repite la contraseña</label>"#));
	assert!(html.contains(r#"class="form-control has-error""#));
	assert!(html.contains("La confirmación debe tener al menos 6 caracteres"));
	assert!(html.ends_with(r#"<button type="submit">Crear cuenta</button></form>"#));
}
