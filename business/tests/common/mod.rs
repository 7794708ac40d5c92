//! Shared helpers for exercising [`AdminPanel`] against a mock backend.

#![allow(dead_code)]

use std::time::Duration;

use chrono::Utc;
use points_admin_business::{AdminPanel, BusinessConfig};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// A mock backend and a panel pointed at it.
pub struct TestContext {
    pub mock_server: MockServer,
    pub panel: AdminPanel,
}

impl TestContext {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let panel = AdminPanel::new(&BusinessConfig::new(mock_server.uri()));
        Self { mock_server, panel }
    }

    /// Sync until nothing is in flight, including refreshes triggered by
    /// submissions applied along the way.
    pub async fn settle(&mut self) {
        settle(&mut self.panel).await;
    }

    pub async fn mock_get(&self, endpoint: &str, body: Value, times: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/api/{endpoint}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(times)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_post(&self, endpoint: &str, status: u16, times: u64) {
        Mock::given(method("POST"))
            .and(path(format!("/api/{endpoint}")))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({"code": status})))
            .expect(times)
            .mount(&self.mock_server)
            .await;
    }
}

pub async fn settle(panel: &mut AdminPanel) {
    for _ in 0..200 {
        panel.sync(Utc::now());
        if !panel.has_pending_requests() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("panel did not settle: {panel:?}");
}

pub fn sample_users() -> Value {
    json!({
        "users": [
            {"username": "alice", "provider": "github", "createdAt": "2024-05-01T08:00:00Z", "points": 120},
            {"username": "bob", "provider": "google", "createdAt": "2024-05-02T09:30:00Z", "points": 0}
        ]
    })
}

pub fn sample_point_configs() -> Value {
    json!({
        "data": [
            {"fileUrl": "/img/a.png", "points": 10, "description": "promo"},
            {"fileUrl": "/doc/b.pdf", "points": 5}
        ]
    })
}

pub fn sample_points_log() -> Value {
    json!({
        "code": 200,
        "logs": [
            {"userId": 1, "fileUrl": "/img/a.png", "description": "", "points": 50, "createdAt": "2024-05-01T08:00:00Z", "type": "file_access"},
            {"userId": "2", "fileUrl": "", "description": "refund", "points": -20, "createdAt": "2024-05-01T09:00:00Z", "type": "admin_grant"}
        ]
    })
}
