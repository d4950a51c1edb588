use std::path::PathBuf;
use std::sync::Arc;

use revcycle_analytics::AnalyticsEngine;
use tokio::sync::{Mutex, RwLock};

use crate::config::RevcycleConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Mutex<AnalyticsEngine>>,
    pub config: Arc<RwLock<RevcycleConfig>>,
    /// Where settings changes are persisted. `None` keeps them in memory.
    pub config_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(engine: AnalyticsEngine, config: RevcycleConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            config: Arc::new(RwLock::new(config)),
            config_path,
        }
    }
}
