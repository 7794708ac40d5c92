#![allow(dead_code)]

use std::time::Duration;

use egui_kittest::Harness;
use points_admin_ui::PointsAdminApp;
use points_admin_ui::state::State;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Time given to the mock server between frames.
pub const NETWORK_WAIT_MS: u64 = 20;

pub struct TestCtx<'a> {
    pub mock_server: MockServer,
    harness: Harness<'a, PointsAdminApp>,
}

impl<'a> TestCtx<'a> {
    /// App against a backend serving the sample lists.
    pub async fn new_app() -> Self {
        let mock_server = MockServer::start().await;
        mount_lists(&mock_server).await;
        Self::with_server(mock_server)
    }

    /// App against a backend whose mocks the caller mounts.
    pub fn with_server(mock_server: MockServer) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let app = PointsAdminApp::new(State::test(mock_server.uri()));
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, PointsAdminApp> {
        &mut self.harness
    }

    /// Step frames until the panel has nothing in flight.
    pub async fn settle(&mut self) {
        for _ in 0..100 {
            self.harness.step();
            if !self.harness.state().state.panel.has_pending_requests() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(NETWORK_WAIT_MS)).await;
        }
        self.harness.step();
    }
}

pub async fn mount_get(server: &MockServer, endpoint: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/{endpoint}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_lists(server: &MockServer) {
    mount_get(
        server,
        "getUsersList",
        json!({"users": [
            {"username": "alice", "provider": "github", "createdAt": "2024-05-01T08:00:00Z", "points": 120},
            {"username": "bob", "provider": "google", "createdAt": "2024-05-02T09:30:00Z", "points": 0}
        ]}),
    )
    .await;
    mount_get(
        server,
        "getPointsList",
        json!({"data": [{"fileUrl": "/img/a.png", "points": 10, "description": "promo"}]}),
    )
    .await;
    mount_get(
        server,
        "getPointsLog",
        json!({"logs": [
            {"userId": 1, "fileUrl": "/img/a.png", "description": "", "points": 50, "createdAt": "2024-05-01T08:00:00Z"},
            {"userId": 2, "fileUrl": "", "description": "refund", "points": -20, "createdAt": "2024-05-01T09:00:00Z"}
        ]}),
    )
    .await;
}
