use super::*;

fn token_with_claims(claims: serde_json::Value) -> TokenInfo {
    TokenInfo {
        id_token: "tok".to_owned(),
        claims,
        email_verified: true,
    }
}

#[test]
fn flag_is_true_only_for_literal_true() {
    let token = token_with_claims(serde_json::json!({
        "isBusinessOwner": true,
        "hasActiveSubscription": "true",
        "other": 1
    }));
    assert!(token.flag("isBusinessOwner"));
    // A present-but-non-boolean claim must never read as authorized.
    assert!(!token.flag("hasActiveSubscription"));
    assert!(!token.flag("other"));
    assert!(!token.flag("missing"));
}

#[test]
fn flag_rejects_literal_false_and_null() {
    let token = token_with_claims(serde_json::json!({
        "isBusinessOwner": false,
        "hasActiveSubscription": null
    }));
    assert!(!token.flag("isBusinessOwner"));
    assert!(!token.flag("hasActiveSubscription"));
}

#[test]
fn token_info_deserializes_without_email_verified() {
    let token: TokenInfo = serde_json::from_value(serde_json::json!({
        "id_token": "abc",
        "claims": {}
    }))
    .expect("token should deserialize");
    assert!(!token.email_verified);
    assert_eq!(token.id_token, "abc");
}

#[test]
fn auth_error_message_maps_credential_codes() {
    assert_eq!(
        auth_error_message("invalid-credential"),
        "Correo electrónico o contraseña incorrectos."
    );
    assert_eq!(
        auth_error_message("wrong-password"),
        "Correo electrónico o contraseña incorrectos."
    );
    assert_eq!(auth_error_message("user-disabled"), "Tu cuenta ha sido deshabilitada.");
}

#[test]
fn auth_error_message_maps_registration_codes() {
    assert!(auth_error_message("email-already-in-use").contains("ya está registrado"));
    assert!(auth_error_message("weak-password").contains("al menos 6 caracteres"));
}

#[test]
fn auth_error_message_falls_back_for_unknown_codes() {
    let message = auth_error_message("quota-exceeded");
    assert!(message.contains("inténtalo de nuevo"));
}

#[test]
fn provider_error_from_body_reads_error_code() {
    let err = provider_error_from_body(r#"{"error":{"code":"user-disabled","message":"x"}}"#);
    assert_eq!(err, AuthError::Provider("Tu cuenta ha sido deshabilitada.".to_owned()));
}

#[test]
fn provider_error_from_body_tolerates_garbage() {
    let err = provider_error_from_body("<html>502</html>");
    let AuthError::Provider(message) = err else {
        panic!("expected provider error");
    };
    assert!(message.contains("inténtalo de nuevo"));
}
