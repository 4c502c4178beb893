use super::*;

#[test]
fn valid_input_passes_through() {
    let result = validate_register_input(" Dana ", " dana@clinic.example ", "hunter2", "PM");
    assert_eq!(
        result,
        Ok(RegisterInput {
            name: "Dana".to_owned(),
            email: "dana@clinic.example".to_owned(),
            password: "hunter2".to_owned(),
            role: "PM".to_owned(),
        })
    );
}

#[test]
fn name_is_optional() {
    let result = validate_register_input("", "dana@clinic.example", "hunter2", "Developer");
    assert!(result.is_ok());
    assert_eq!(result.map(|input| input.name), Ok(String::new()));
}

#[test]
fn email_is_required() {
    let result = validate_register_input("Dana", "  ", "hunter2", "PM");
    assert_eq!(result, Err("Please enter your email"));
}

#[test]
fn password_is_required() {
    let result = validate_register_input("Dana", "dana@clinic.example", "", "PM");
    assert_eq!(result, Err("Please enter your password"));
}

#[test]
fn role_is_required() {
    let result = validate_register_input("Dana", "dana@clinic.example", "hunter2", "");
    assert_eq!(result, Err("Please select a role"));
}
