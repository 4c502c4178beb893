use super::*;

#[test]
fn valid_input_is_trimmed_and_parsed() {
    let result = validate_new_project("  Griffin OBGYN Migration  ", "u1", "athenahealth");
    assert_eq!(
        result,
        Ok(("Griffin OBGYN Migration".to_owned(), "u1".to_owned(), SourceSystem::Athenahealth))
    );
}

#[test]
fn title_is_required() {
    assert_eq!(validate_new_project("   ", "u1", "Epic"), Err("Please enter a project name"));
}

#[test]
fn pm_is_required() {
    assert_eq!(validate_new_project("Migration", "", "Epic"), Err("Please select a PM"));
}

#[test]
fn system_must_be_a_known_option() {
    assert_eq!(validate_new_project("Migration", "u1", ""), Err("Please select a system"));
    assert_eq!(validate_new_project("Migration", "u1", "Meditech"), Err("Please select a system"));
}
