use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ana@tienda.mx  ", "secreta1"),
        Ok(("ana@tienda.mx".to_owned(), "secreta1".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "secreta1"),
        Err("Ingresa tu correo y contraseña.")
    );
    assert_eq!(
        validate_login_input("ana@tienda.mx", ""),
        Err("Ingresa tu correo y contraseña.")
    );
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    assert_eq!(
        validate_login_input("ana.tienda.mx", "secreta1"),
        Err("Ingresa un correo electrónico válido.")
    );
}

#[test]
fn validate_register_input_accepts_matching_passwords() {
    assert_eq!(
        validate_register_input("ana@tienda.mx", "secreta1", "secreta1"),
        Ok(("ana@tienda.mx".to_owned(), "secreta1".to_owned()))
    );
}

#[test]
fn validate_register_input_rejects_short_password() {
    assert_eq!(
        validate_register_input("ana@tienda.mx", "corta", "corta"),
        Err("La contraseña debe tener al menos 6 caracteres.")
    );
}

#[test]
fn validate_register_input_rejects_mismatched_confirmation() {
    assert_eq!(
        validate_register_input("ana@tienda.mx", "secreta1", "secreta2"),
        Err("Las contraseñas no coinciden. Asegúrate de que ambos campos sean iguales.")
    );
}

#[test]
fn validate_register_input_rejects_bad_email_first() {
    assert_eq!(
        validate_register_input("   ", "secreta1", "secreta2"),
        Err("Ingresa un correo electrónico válido.")
    );
}

#[test]
fn password_length_counts_characters_not_bytes() {
    // Six accented characters are more than six bytes but still valid.
    assert!(validate_register_input("ana@tienda.mx", "ññññññ", "ññññññ").is_ok());
}
