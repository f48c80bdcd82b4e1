use crate::modules::portfolio::core::session::Session;
use crate::modules::portfolio::core::store::ProjectStore;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved {
        at: DateTime<Utc>,
        revision: Option<String>,
    },
    Failed {
        message: String,
    },
}

impl SaveStatus {
    /// Text for the admin status banner, `None` when there is nothing to show.
    pub fn banner(&self) -> Option<String> {
        match self {
            SaveStatus::Idle => None,
            SaveStatus::Saving => Some("Connecting to GitHub...".to_string()),
            SaveStatus::Saved { .. } => Some("Saved! Live site will update in ~2 mins.".to_string()),
            SaveStatus::Failed { message } => Some(format!("Error: {message}")),
        }
    }
}

/// Everything the running site holds in memory: the project list shared by the
/// public and admin views, the operator session if any, and the last save outcome.
#[derive(Debug, Clone, Default)]
pub struct PortfolioState {
    pub store: ProjectStore,
    pub session: Option<Session>,
    pub save_status: SaveStatus,
}

impl PortfolioState {
    pub fn new(store: ProjectStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn begin_session(&mut self, session: Session) {
        self.session = Some(session);
        self.save_status = SaveStatus::Idle;
    }

    /// Drops the session and its token. Local edits stay in the store.
    pub fn end_session(&mut self) -> Option<Session> {
        self.save_status = SaveStatus::Idle;
        self.session.take()
    }
}

#[cfg(test)]
mod portfolio_state_tests {
    use super::*;
    use crate::modules::portfolio::core::session::WriteToken;
    use crate::tests::fixtures::projects::logo_and_poster;
    use rstest::rstest;

    fn session() -> Session {
        Session {
            username: "operator".into(),
            write_token: WriteToken::new("ghp_abc"),
        }
    }

    #[rstest]
    fn it_should_start_signed_out_and_idle() {
        let state = PortfolioState::default();
        assert!(state.session.is_none());
        assert_eq!(state.save_status, SaveStatus::Idle);
        assert!(state.store.is_empty());
    }

    #[rstest]
    fn it_should_clear_the_session_but_keep_projects_on_sign_out() {
        let mut state = PortfolioState::new(ProjectStore::from_projects(logo_and_poster()));
        state.begin_session(session());
        state.save_status = SaveStatus::Failed {
            message: "Bad credentials".into(),
        };
        let ended = state.end_session();
        assert_eq!(ended, Some(session()));
        assert!(state.session.is_none());
        assert_eq!(state.save_status, SaveStatus::Idle);
        assert_eq!(state.store.len(), 2);
    }

    #[rstest]
    #[case(SaveStatus::Idle, None)]
    #[case(SaveStatus::Saving, Some("Connecting to GitHub..."))]
    #[case(SaveStatus::Failed { message: "Bad credentials".into() }, Some("Error: Bad credentials"))]
    fn it_should_render_the_banner(#[case] status: SaveStatus, #[case] expected: Option<&str>) {
        assert_eq!(status.banner().as_deref(), expected);
    }

    #[rstest]
    fn it_should_tag_the_serialized_status() {
        let json = serde_json::to_value(SaveStatus::Failed {
            message: "x".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"state": "failed", "message": "x"}));
    }
}
