use serde_json::json;

use super::*;

// =============================================================================
// PROJECT
// =============================================================================

#[test]
fn project_deserializes_pascal_case_fields() {
    let project: Project = serde_json::from_value(json!({
        "ProjectID": "p1",
        "Title": "Griffin OBGYN",
        "CreatedBy": "u9",
        "System": "Epic",
        "Status": "Working",
        "Description": "Intake flows",
        "CreatedAt": "2025-02-11T09:30:00Z"
    }))
    .expect("project should parse");

    assert_eq!(project.id, "p1");
    assert_eq!(project.title, "Griffin OBGYN");
    assert_eq!(project.created_by, "u9");
    assert_eq!(project.system, SourceSystem::Epic);
    assert_eq!(project.status, ProjectStatus::Working);
    assert_eq!(project.description.as_deref(), Some("Intake flows"));
}

#[test]
fn project_accepts_numeric_identifier() {
    let project: Project = serde_json::from_value(json!({
        "ProjectID": 42,
        "Title": "T",
        "CreatedBy": 7,
        "System": "Cerner",
        "Status": "Review"
    }))
    .expect("project should parse");

    assert_eq!(project.id, "42");
    assert_eq!(project.created_by, "7");
    assert_eq!(project.created_at, "");
}

#[test]
fn project_serializes_back_to_wire_names() {
    let project = Project {
        id: "p1".to_owned(),
        title: "T".to_owned(),
        created_by: "u1".to_owned(),
        system: SourceSystem::Athenahealth,
        status: ProjectStatus::Ready,
        description: None,
        created_at: String::new(),
    };
    let value = serde_json::to_value(&project).expect("serialize");
    assert_eq!(value["ProjectID"], "p1");
    assert_eq!(value["System"], "athenahealth");
    assert_eq!(value["Status"], "Ready");
}

// =============================================================================
// ENUMS
// =============================================================================

#[test]
fn legacy_status_spelling_parses() {
    let status: ProjectStatus =
        serde_json::from_value(json!("Developer Ready")).expect("status should parse");
    assert_eq!(status, ProjectStatus::DeveloperReady);
    assert_eq!(status.as_str(), "Developer Ready");
}

#[test]
fn selectable_statuses_exclude_legacy() {
    assert!(!ProjectStatus::SELECTABLE.contains(&ProjectStatus::DeveloperReady));
}

#[test]
fn system_parse_round_trips_all_variants() {
    for system in SourceSystem::ALL {
        assert_eq!(SourceSystem::parse(system.as_str()), Some(system));
    }
    assert_eq!(SourceSystem::parse("Meditech"), None);
}

// =============================================================================
// PAGE
// =============================================================================

#[test]
fn page_fills_canvas_defaults() {
    let page: Page = serde_json::from_value(json!({
        "PageID": 3,
        "Title": null,
        "ScreenshotPath": "",
        "PositionX": null
    }))
    .expect("page should parse");

    assert_eq!(page.id, "3");
    assert_eq!(page.title, "Untitled");
    assert_eq!(page.screenshot_path, None);
    assert!((page.position_x - 0.0).abs() < f64::EPSILON);
    assert!((page.position_y - 0.0).abs() < f64::EPSILON);
    assert_eq!(page.order, 0);
}

#[test]
fn page_keeps_present_values() {
    let page: Page = serde_json::from_value(json!({
        "PageID": "pg1",
        "ProjectID": "p1",
        "Title": "Intake",
        "ScreenshotPath": "https://cdn.example/shot.png",
        "PositionX": 220.5,
        "PositionY": 100.0,
        "Order": 2
    }))
    .expect("page should parse");

    assert_eq!(page.title, "Intake");
    assert_eq!(page.screenshot_path.as_deref(), Some("https://cdn.example/shot.png"));
    assert!((page.position_x - 220.5).abs() < f64::EPSILON);
    assert_eq!(page.order, 2);
}

// =============================================================================
// WORKFLOW + COMMENT
// =============================================================================

#[test]
fn workflow_normalizes_numeric_page_refs() {
    let workflow: Workflow = serde_json::from_value(json!({
        "WorkflowID": 12,
        "FromPageID": 3,
        "ToPageID": "4",
        "Label": ""
    }))
    .expect("workflow should parse");

    assert_eq!(workflow.id, "12");
    assert_eq!(workflow.from_page_id, "3");
    assert_eq!(workflow.to_page_id, "4");
    assert_eq!(workflow.label, None);
}

#[test]
fn comment_tolerates_missing_join_fields() {
    let comment: Comment = serde_json::from_value(json!({
        "CommentID": "c1",
        "Content": "verify insurance step"
    }))
    .expect("comment should parse");

    assert_eq!(comment.user_name, None);
    assert_eq!(comment.page_id, "");
    assert_eq!(comment.content, "verify insurance step");
}

// =============================================================================
// USER
// =============================================================================

#[test]
fn user_display_name_prefers_name() {
    let user: User = serde_json::from_value(json!({
        "UserID": "u1",
        "Name": "Dana R",
        "Email": "dana@example.com"
    }))
    .expect("user should parse");
    assert_eq!(user.display_name(), "Dana R");
}

#[test]
fn user_display_name_falls_back_to_email() {
    let user: User = serde_json::from_value(json!({
        "UserID": "u1",
        "Name": "",
        "Email": "dana@example.com"
    }))
    .expect("user should parse");
    assert_eq!(user.display_name(), "dana@example.com");
}

#[test]
fn auth_session_parses_user_and_token() {
    let session: AuthSession = serde_json::from_value(json!({
        "user": { "UserID": 1, "Name": "Dana R", "Email": "dana@example.com", "Role": "PM" },
        "token": "jwt-abc"
    }))
    .expect("session should parse");
    assert_eq!(session.token, "jwt-abc");
    assert_eq!(session.user.role.as_deref(), Some("PM"));
}
