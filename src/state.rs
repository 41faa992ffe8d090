use std::sync::Arc;

use crate::data::DataDir;
use crate::models::StatusBadge;
use crate::theme::PrefStore;

/// Shared application state injected into route handlers.
#[derive(Clone)]
pub struct AppState {
    pub data: DataDir,
    pub theme: Arc<dyn PrefStore>,
    pub status: StatusBadge,
}
