use crate::errors::RobotsError;
use crate::models::Robot;
use crate::MIGRATOR;
use sqlx::PgPool;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies any pending schema migrations.
    pub async fn migrate(&self) -> Result<(), RobotsError> {
        MIGRATOR.run(&self.pool).await?;
        tracing::debug!("Migrations applied");
        Ok(())
    }

    /// Returns every robot in insertion order.
    pub async fn list_robots(&self) -> Result<Vec<Robot>, RobotsError> {
        let robots: Vec<Robot> = sqlx::query_as(
            r#"
            SELECT id, name, year, type, created_at, updated_at
            FROM robots
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(robots)
    }

    pub async fn count_robots(&self) -> Result<i64, RobotsError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM robots")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
