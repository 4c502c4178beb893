use super::*;

#[test]
fn valid_input_is_trimmed() {
    let result = validate_login_input("  dana@clinic.example  ", "hunter2");
    assert_eq!(result, Ok(("dana@clinic.example".to_owned(), "hunter2".to_owned())));
}

#[test]
fn email_is_required() {
    assert_eq!(validate_login_input("   ", "hunter2"), Err("Please enter your email"));
}

#[test]
fn password_is_required() {
    assert_eq!(validate_login_input("dana@clinic.example", ""), Err("Please enter your password"));
}

#[test]
fn password_whitespace_is_preserved() {
    let result = validate_login_input("dana@clinic.example", " pass word ");
    assert_eq!(result, Ok(("dana@clinic.example".to_owned(), " pass word ".to_owned())));
}
