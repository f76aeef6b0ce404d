use crate::{
    MIGRATOR,
    database::infrastructure::postgres::{
        PostgresSessionsRepository, PostgresThemePreferencesRepository,
        PostgresUsersRepository,
    },
    error::Result,
};
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{fmt, time::Duration};
use tracing::info;

/// Statistics about the connection pool
#[derive(Debug, Clone)]
pub struct PoolStats {
    pub size: u32,
    pub idle: u32,
    pub max_size: u32,
}

#[derive(Clone)]
pub struct PostgresDatabase {
    pool: PgPool,
    max_connections: u32,
}

impl fmt::Debug for PostgresDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresDatabase")
            .field("pool_size", &self.pool.size())
            .field("idle_connections", &self.pool.num_idle())
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl PostgresDatabase {
    pub async fn new(connection_string: &str) -> Result<Self> {
        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(10);

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(connection_string)
            .await?;

        info!(max_connections, "connected to PostgreSQL");
        Ok(Self {
            pool,
            max_connections,
        })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        let max_connections = pool.options().get_max_connections();
        Self {
            pool,
            max_connections,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Applies every pending migration.
    pub async fn initialize_schema(&self) -> Result<()> {
        MIGRATOR.run(&self.pool).await?;
        info!("database migrations applied");
        Ok(())
    }

    /// Reverts the most recently applied migration.
    pub async fn rollback_latest(&self) -> Result<Option<i64>> {
        let applied: Option<i64> = sqlx::query_scalar(
            "SELECT MAX(version) FROM _sqlx_migrations WHERE success = TRUE",
        )
        .fetch_one(&self.pool)
        .await?;

        let Some(latest) = applied else {
            return Ok(None);
        };

        let target = MIGRATOR
            .iter()
            .map(|migration| migration.version)
            .filter(|version| *version < latest)
            .max()
            .unwrap_or(0);

        MIGRATOR.undo(&self.pool, target).await?;
        info!(reverted = latest, target, "database migration rolled back");
        Ok(Some(latest))
    }

    pub fn users(&self) -> PostgresUsersRepository {
        PostgresUsersRepository::new(self.pool.clone())
    }

    pub fn sessions(&self) -> PostgresSessionsRepository {
        PostgresSessionsRepository::new(self.pool.clone())
    }

    pub fn themes(&self) -> PostgresThemePreferencesRepository {
        PostgresThemePreferencesRepository::new(self.pool.clone())
    }

    pub fn pool_stats(&self) -> PoolStats {
        PoolStats {
            size: self.pool.size(),
            idle: self.pool.num_idle() as u32,
            max_size: self.max_connections,
        }
    }
}
