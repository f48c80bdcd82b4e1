use crate::modules::portfolio::adapters::outbound::assistant::Assistant;
use crate::modules::portfolio::core::session::OperatorIdentity;
use crate::modules::portfolio::core::state::PortfolioState;
use crate::modules::portfolio::core::store::ProjectStore;
use crate::modules::portfolio::use_cases::ask_assistant::handler::AskAssistantHandler;
use crate::modules::portfolio::use_cases::save_snapshot::handler::SaveSnapshotHandler;
use crate::modules::portfolio::use_cases::save_snapshot::sync_client::SyncClient;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::file_store::FileStore;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: Arc<RwLock<PortfolioState>>,
    pub operator: Arc<OperatorIdentity>,
    pub sync_client: Arc<SyncClient<dyn FileStore>>,
    pub save_handler: Arc<SaveSnapshotHandler<dyn FileStore>>,
    pub chat_handler: Arc<AskAssistantHandler<dyn Assistant>>,
    pub clock: Arc<dyn Clock>,
    pub max_image_bytes: usize,
}

impl AppState {
    pub fn new(
        store: ProjectStore,
        operator: OperatorIdentity,
        file_store: Arc<dyn FileStore>,
        assistant: Arc<dyn Assistant>,
        clock: Arc<dyn Clock>,
        max_image_bytes: usize,
    ) -> Self {
        let sync_client = Arc::new(SyncClient::new(file_store, clock.clone()));
        Self {
            portfolio: Arc::new(RwLock::new(PortfolioState::new(store))),
            operator: Arc::new(operator),
            save_handler: Arc::new(SaveSnapshotHandler::new(
                sync_client.clone(),
                clock.clone(),
            )),
            sync_client,
            chat_handler: Arc::new(AskAssistantHandler::new(assistant)),
            clock,
            max_image_bytes,
        }
    }
}
