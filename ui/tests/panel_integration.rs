//! Integration tests for the admin panel UI against a mock backend.
//!
//! Grid buttons are clicked directly; form inputs are filled through the app
//! state because typing into a specific field is brittle under kittest.

#![cfg(not(target_arch = "wasm32"))]

mod common;

use common::{TestCtx, mount_get, mount_lists};
use kittest::Queryable;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_page_load_renders_all_lists() {
    let mut ctx = TestCtx::new_app().await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert!(
        harness.query_by_label_contains("alice").is_some(),
        "users table should list alice"
    );
    assert!(
        harness.query_by_label_contains("github").is_some(),
        "users table should show the login provider"
    );
    assert!(
        harness.query_by_label("/img/a.png").is_some(),
        "point config table should list the configured file"
    );
    assert!(
        harness.query_by_label("+50分").is_some(),
        "credit should render with a plus sign"
    );
    assert!(
        harness.query_by_label("-20分").is_some(),
        "debit should render with its minus sign"
    );
    assert!(
        harness.query_by_label("1 - /img/a.png").is_some(),
        "log item without description should fall back to the file path"
    );
    assert!(
        harness.query_by_label("2 - refund").is_some(),
        "log item should show its description"
    );
}

#[tokio::test]
async fn test_grant_action_fills_username() {
    let mut ctx = TestCtx::new_app().await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    let bob_action = harness.query_all_by_label("积分操作").nth(1);
    assert!(bob_action.is_some(), "every user row should have an action");
    if let Some(button) = bob_action {
        button.click();
    }
    harness.step();
    harness.step();

    assert_eq!(harness.state().state.panel.forms.grant.username, "bob");
}

#[tokio::test]
async fn test_config_submission_clears_form_and_toasts() {
    let mock_server = MockServer::start().await;
    mount_lists(&mock_server).await;
    Mock::given(method("POST"))
        .and(path("/api/configurePoints"))
        .and(body_json(
            json!({"fileUrl": "/img/b.png", "points": 3, "description": "new"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::with_server(mock_server);
    ctx.settle().await;

    {
        let form = &mut ctx.harness_mut().state_mut().state.panel.forms.points_config;
        form.file_url = "/img/b.png".to_owned();
        form.points = "3".to_owned();
        form.description = "new".to_owned();
    }

    let harness = ctx.harness_mut();
    harness.step();
    let save = harness.query_by_label("保存配置");
    assert!(save.is_some(), "save button should be present");
    if let Some(button) = save {
        button.click();
    }
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(
        harness.query_by_label("配置保存成功").is_some(),
        "success toast should be visible"
    );
    assert!(
        harness
            .state()
            .state
            .panel
            .forms
            .points_config
            .file_url
            .is_empty(),
        "form should be cleared after success"
    );
}

#[tokio::test]
async fn test_rejected_grant_keeps_form_and_shows_error() {
    let mock_server = MockServer::start().await;
    mount_lists(&mock_server).await;
    Mock::given(method("POST"))
        .and(path("/api/adminGrantPoints"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad", "code": 400})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::with_server(mock_server);
    ctx.settle().await;

    {
        let form = &mut ctx.harness_mut().state_mut().state.panel.forms.grant;
        form.username = "alice".to_owned();
        form.points = "abc".to_owned();
    }

    let harness = ctx.harness_mut();
    harness.step();
    if let Some(button) = harness.query_by_label("提交") {
        button.click();
    }
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(
        harness.query_by_label("积分操作失败").is_some(),
        "fixed failure toast should be visible"
    );
    assert_eq!(harness.state().state.panel.forms.grant.username, "alice");
    assert_eq!(harness.state().state.panel.forms.grant.points, "abc");
}

#[tokio::test]
async fn test_failed_log_load_shows_single_placeholder() {
    let mock_server = MockServer::start().await;
    mount_get(&mock_server, "getUsersList", json!({"users": []})).await;
    mount_get(&mock_server, "getPointsList", json!({"data": []})).await;
    Mock::given(method("GET"))
        .and(path("/api/getPointsLog"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "db down", "code": 500})))
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::with_server(mock_server);
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert_eq!(
        harness.query_all_by_label_contains("加载失败：").count(),
        1,
        "only the failed list should show a placeholder"
    );
    assert!(
        harness.query_by_label("加载失败：db down").is_some(),
        "placeholder should carry the backend message"
    );
}
