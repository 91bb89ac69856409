use super::*;

#[test]
fn accepts_valid_input_and_trims_name_and_email() {
    assert_eq!(
        validate_register_input(" Ana Pop ", " ana@example.com ", "longenough", "longenough"),
        Ok((
            "Ana Pop".to_owned(),
            "ana@example.com".to_owned(),
            "longenough".to_owned()
        ))
    );
}

#[test]
fn rejects_empty_name() {
    assert_eq!(
        validate_register_input("  ", "ana@example.com", "longenough", "longenough"),
        Err("Enter your name.")
    );
}

#[test]
fn rejects_invalid_email() {
    assert_eq!(
        validate_register_input("Ana", "not-an-email", "longenough", "longenough"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn rejects_short_password() {
    assert_eq!(
        validate_register_input("Ana", "ana@example.com", "short", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn rejects_mismatched_confirmation() {
    assert_eq!(
        validate_register_input("Ana", "ana@example.com", "longenough", "different"),
        Err("Passwords do not match.")
    );
}
