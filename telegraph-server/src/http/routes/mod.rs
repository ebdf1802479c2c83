//! Route handlers organized by resource

pub mod articles;
pub mod health;
pub mod spa;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::config::DbConfig;
    use crate::db::create_pool;
    use crate::http::server::AppState;

    fn closed_port() -> DbConfig {
        DbConfig {
            host: "127.0.0.1".into(),
            port: 1,
            ..DbConfig::default()
        }
    }

    /// State whose pool points at a closed port, for degraded-mode tests.
    pub fn unreachable_state() -> Arc<AppState> {
        let pool = create_pool(&DbConfig {
            acquire_timeout: Duration::from_secs(1),
            ..closed_port()
        });

        Arc::new(AppState::new(pool))
    }

    /// Same, but with the production acquire timeout.
    pub fn default_unreachable_state() -> Arc<AppState> {
        Arc::new(AppState::new(create_pool(&closed_port())))
    }
}
