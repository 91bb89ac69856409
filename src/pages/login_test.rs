use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ana@example.com  ", "hunter2"),
        Ok(("ana@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_rejects_missing_email() {
    assert_eq!(
        validate_login_input("   ", "hunter2"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_login_input_rejects_email_without_at_sign() {
    assert_eq!(
        validate_login_input("ana.example.com", "hunter2"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_login_input_rejects_empty_password() {
    assert_eq!(
        validate_login_input("ana@example.com", ""),
        Err("Enter your password.")
    );
}

#[test]
fn validate_login_input_keeps_password_untouched() {
    // Leading/trailing whitespace can be part of a password.
    assert_eq!(
        validate_login_input("ana@example.com", "  spaced  "),
        Ok(("ana@example.com".to_owned(), "  spaced  ".to_owned()))
    );
}
