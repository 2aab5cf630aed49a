//! Application state for API handlers

use crate::config::ServerConfig;
use crate::error::ServerResult;
use mergelab_engine::{AttributeStore, MergeEngine, MergePolicy, RecordRegistry};
use mergelab_service::{CredentialStore, FileStore, MessageBoard, ProfileService, SessionStore};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Profile workflows (register, update, view, authorize)
    pub profile: Arc<ProfileService>,

    /// Live sessions, token to username
    pub sessions: Arc<SessionStore>,

    /// Password digests backing login
    pub credentials: Arc<CredentialStore>,

    /// Guestbook log
    pub messages: Arc<MessageBoard>,

    /// Upload byte storage
    pub files: Arc<FileStore>,

    /// The shared default store, exposed for the search endpoint
    pub store: Arc<AttributeStore>,

    /// Merge engine shared with the profile service
    pub engine: MergeEngine,

    /// Deployment-wide merge policy
    pub policy: MergePolicy,

    /// Daemon version
    pub version: String,

    /// Daemon start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Build the full state graph from configuration.
    ///
    /// Everything stateful is constructed here, exactly once, and shared by
    /// `Arc`: no module-level globals anywhere means two states in one test
    /// process stay fully isolated.
    pub fn new(config: &ServerConfig) -> ServerResult<Self> {
        let registry = Arc::new(RecordRegistry::new());
        let store = Arc::new(AttributeStore::new());
        let engine = MergeEngine::new();
        let profile = Arc::new(ProfileService::with_engine(
            registry,
            Arc::clone(&store),
            engine.clone(),
        ));
        let files = Arc::new(FileStore::new(&config.uploads_dir)?);

        Ok(Self {
            profile,
            sessions: Arc::new(SessionStore::new()),
            credentials: Arc::new(CredentialStore::new()),
            messages: Arc::new(MessageBoard::new()),
            files,
            store,
            engine,
            policy: config.policy,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: chrono::Utc::now(),
        })
    }

    /// Get uptime as a human-readable string
    pub fn uptime(&self) -> String {
        let duration = chrono::Utc::now() - self.started_at;
        let secs = duration.num_seconds();

        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        }
    }
}
