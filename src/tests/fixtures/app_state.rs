// AppState wired with in-memory adapters for inbound handler tests.

use crate::modules::portfolio::adapters::outbound::assistant_in_memory::ScriptedAssistant;
use crate::modules::portfolio::core::session::{OperatorIdentity, Session, WriteToken};
use crate::modules::portfolio::core::store::ProjectStore;
use crate::shared::core::primitives::FixedClock;
use crate::shared::infrastructure::file_store::in_memory::InMemoryFileStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::projects::logo_and_poster;
use std::sync::Arc;

pub const USERNAME: &str = "operator";
pub const PASSWORD: &str = "s3cret";
pub const TOKEN: &str = "ghp_operator";
pub const MAX_IMAGE_BYTES: usize = 1024;

pub struct TestApp {
    pub state: AppState,
    pub file_store: Arc<InMemoryFileStore>,
    pub assistant: Arc<ScriptedAssistant>,
}

pub fn make_test_app() -> TestApp {
    make_test_app_with(InMemoryFileStore::new().accept_only(TOKEN), ScriptedAssistant::new())
}

pub fn make_test_app_with(file_store: InMemoryFileStore, assistant: ScriptedAssistant) -> TestApp {
    let file_store = Arc::new(file_store);
    let assistant = Arc::new(assistant);
    let state = AppState::new(
        ProjectStore::from_projects(logo_and_poster()),
        OperatorIdentity {
            username: USERNAME.into(),
            password: PASSWORD.into(),
        },
        file_store.clone(),
        assistant.clone(),
        Arc::new(FixedClock::at_millis(1_700_000_000_000)),
        MAX_IMAGE_BYTES,
    );
    TestApp {
        state,
        file_store,
        assistant,
    }
}

pub async fn sign_in(state: &AppState) {
    state.portfolio.write().await.begin_session(Session {
        username: USERNAME.into(),
        write_token: WriteToken::new(TOKEN),
    });
}
