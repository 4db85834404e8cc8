//! Connection pool bounds and startup connect.

use crate::config::DbConfig;
use crate::error::StoreError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Pool bounds: 25 open connections, 5 minute lifetime per connection. Idle connections are closed after `idle_timeout`.
#[derive(Clone, Debug)]
pub struct PoolConfig {
    pub max_open: u32,
    pub max_lifetime: Duration,
    pub idle_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            max_open: 25,
            max_lifetime: Duration::from_secs(5 * 60),
            idle_timeout: Duration::from_secs(5 * 60),
        }
    }
}

impl PoolConfig {
    pub fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_open)
            .min_connections(0)
            .max_lifetime(Some(self.max_lifetime))
            .idle_timeout(Some(self.idle_timeout))
    }

    /// Open the pool and ping once so an unreachable database fails startup.
    pub async fn connect(&self, db: &DbConfig) -> Result<PgPool, StoreError> {
        let pool = self.options().connect_with(db.connect_options()).await?;
        sqlx::query("SELECT 1").execute(&pool).await?;
        tracing::info!(host = %db.host, port = db.port, database = %db.name, "connected to database");
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds() {
        let cfg = PoolConfig::default();
        assert_eq!(cfg.max_open, 25);
        assert_eq!(cfg.max_lifetime, Duration::from_secs(300));

        let opts = cfg.options();
        assert_eq!(opts.get_max_connections(), 25);
        assert_eq!(opts.get_max_lifetime(), Some(Duration::from_secs(300)));
    }
}
