use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::utils::email::Mailer;

/// Shared application state handed to every handler.
///
/// The mailer sits behind a trait object so tests can swap the SMTP
/// transport for a mock.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            pool,
            config,
            mailer,
        }
    }
}
