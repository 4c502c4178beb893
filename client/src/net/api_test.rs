use super::*;

// =============================================================================
// ENDPOINT BUILDERS
// =============================================================================

#[test]
fn users_endpoint_targets_auth_listing() {
    assert_eq!(users_endpoint(), "/api/auth/users");
}

#[test]
fn user_by_id_endpoint_passes_id_as_query() {
    assert_eq!(user_by_id_endpoint("42"), "/api/auth/users?id=42");
}

#[test]
fn project_endpoint_embeds_id_in_path() {
    assert_eq!(project_endpoint("7"), "/api/projects/7");
}

#[test]
fn pages_are_filtered_by_project_query() {
    assert_eq!(pages_by_project_endpoint("7"), "/api/pages?projectId=7");
}

#[test]
fn page_endpoint_embeds_id_in_path() {
    assert_eq!(page_endpoint("31"), "/api/pages/31");
}

#[test]
fn workflows_are_filtered_by_project_query() {
    assert_eq!(workflows_by_project_endpoint("7"), "/api/workflows?projectId=7");
}

#[test]
fn workflow_endpoint_embeds_id_in_path() {
    assert_eq!(workflow_endpoint("9"), "/api/workflows/9");
}

#[test]
fn comments_are_filtered_by_page_query() {
    assert_eq!(comments_by_page_endpoint("31"), "/api/comments?pageId=31");
}

// =============================================================================
// AUTH HEADER
// =============================================================================

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header_value("abc123"), "Bearer abc123");
}

#[test]
fn gateway_without_token_stays_anonymous() {
    let api = Api::new(None);
    assert!(api.token.is_none());
}

#[test]
fn gateway_keeps_provided_token() {
    let api = Api::new(Some("abc123".to_owned()));
    assert_eq!(api.token.as_deref(), Some("abc123"));
}

// =============================================================================
// PAYLOAD SHAPES
// =============================================================================

#[test]
fn project_create_uses_pascal_case_fields() {
    let payload = create_project_payload("Intake", "Dana", SourceSystem::Epic);
    assert_eq!(
        payload,
        serde_json::json!({ "Title": "Intake", "CreatedBy": "Dana", "System": "Epic" })
    );
}

#[test]
fn project_create_spells_athenahealth_lowercase() {
    let payload = create_project_payload("Intake", "Dana", SourceSystem::Athenahealth);
    assert_eq!(payload["System"], "athenahealth");
}

#[test]
fn page_create_uses_camel_case_fields() {
    let payload = create_page_payload("7", "Login Screen", Some("/shots/a.png"), 3);
    assert_eq!(
        payload,
        serde_json::json!({
            "projectId": "7",
            "title": "Login Screen",
            "screenshotPath": "/shots/a.png",
            "order": 3,
        })
    );
}

#[test]
fn blank_page_sends_empty_screenshot_path() {
    let payload = create_page_payload("7", "Blank Screen 1", None, 4);
    assert_eq!(payload["screenshotPath"], "");
}

#[test]
fn workflow_create_uses_camel_case_fields() {
    let payload = create_workflow_payload("1", "2", Some("submits to"));
    assert_eq!(
        payload,
        serde_json::json!({ "fromPageId": "1", "toPageId": "2", "label": "submits to" })
    );
}

#[test]
fn unlabeled_workflow_sends_null_label() {
    let payload = create_workflow_payload("1", "2", None);
    assert!(payload["label"].is_null());
}

#[test]
fn position_update_uses_pascal_case_fields() {
    let payload = position_payload(220.0, 145.5);
    assert_eq!(payload, serde_json::json!({ "PositionX": 220.0, "PositionY": 145.5 }));
}
