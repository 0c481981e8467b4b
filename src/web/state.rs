use std::sync::Arc;

use crate::upstream::UpstreamClient;

use super::config::Config;

/// Read-only after startup, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: UpstreamClient,
}
