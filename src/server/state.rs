use axum::extract::FromRef;

use crate::library_store::LibraryStore;
use crate::query::QueryService;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedQueryService = Arc<QueryService>;
pub type OptionalLibraryStore = Option<Arc<dyn LibraryStore>>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub query_service: GuardedQueryService,
    pub library_store: OptionalLibraryStore,
    pub hash: String,
}

impl FromRef<ServerState> for GuardedQueryService {
    fn from_ref(input: &ServerState) -> Self {
        input.query_service.clone()
    }
}

impl FromRef<ServerState> for OptionalLibraryStore {
    fn from_ref(input: &ServerState) -> Self {
        input.library_store.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
