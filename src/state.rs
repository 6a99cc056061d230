use sqlx::PgPool;
use std::sync::Arc;

use crate::recommend::gateway::ScoringGateway;

#[derive(Clone)]
pub struct AppState {
    pub postgres: PgPool,
    pub scoring: Arc<dyn ScoringGateway>,
}
