use std::sync::Arc;

use axum_test::TestServer;
use defensesync_api::{ApiState, app, middleware::auth::AdminCredentials, service::SubmissionService};
use defensesync_core::{models::judge::Judge, roster::Roster, store::ResponseStore};
use defensesync_db::MemoryStore;
use fake::{Fake, faker::name::en::Name};

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "s3cret:with-colon";
pub const BASE_URL: &str = "https://defense.example.org";

pub fn test_roster() -> Roster {
    Roster::new(
        ["J1", "J2"]
            .into_iter()
            .map(|id| Judge {
                id: id.to_string(),
                name: Name().fake(),
                role: "reader".to_string(),
            })
            .collect(),
    )
    .expect("test roster is valid")
}

pub struct TestContext {
    pub store: Arc<dyn ResponseStore>,
    pub admin: Option<AdminCredentials>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<dyn ResponseStore>) -> Self {
        Self { store, admin: None }
    }

    pub fn with_admin(mut self) -> Self {
        self.admin = Some(AdminCredentials::new(ADMIN_USER, ADMIN_PASS).expect("hashing works"));
        self
    }

    pub fn service(&self) -> SubmissionService {
        SubmissionService::new(Arc::clone(&self.store), Arc::new(test_roster()))
    }

    pub fn build_state(&self) -> Arc<ApiState> {
        Arc::new(ApiState::new(
            Arc::clone(&self.store),
            test_roster(),
            self.admin.clone(),
            BASE_URL,
        ))
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(app(self.build_state())).expect("router builds")
    }
}

pub fn ids(slot_ids: &[&str]) -> Vec<String> {
    slot_ids.iter().map(|id| id.to_string()).collect()
}
