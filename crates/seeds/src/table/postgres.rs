use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use super::{InsertBuilder, Row, StorageError, TableHandle, Value, validate_identifier};

/// A Postgres table reached through a shared pool.
#[derive(Debug, Clone)]
pub struct PgTable {
    pool: PgPool,
    name: String,
}

impl PgTable {
    /// Creates a handle for `name`. The table itself is not checked.
    pub fn new(pool: PgPool, name: &str) -> Result<Self, StorageError> {
        validate_identifier(name)?;
        Ok(Self {
            pool,
            name: name.to_string(),
        })
    }

    /// Removes every row and resets the id sequence.
    ///
    /// **WARNING**: This deletes all data from the table.
    pub async fn truncate(&self) -> Result<(), StorageError> {
        info!("Truncating {}...", self.name);

        sqlx::query(&format!("TRUNCATE TABLE \"{}\" RESTART IDENTITY", self.name))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TableHandle for PgTable {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert(&self, row: &Row) -> Result<(), StorageError> {
        let mut builder = InsertBuilder::new(&self.name)?;
        builder.add_columns(row.columns())?;
        let sql = builder.build();

        let mut query = sqlx::query(&sql);
        for value in row.values() {
            query = match value {
                Value::Text(s) => query.bind(s.as_str()),
                Value::Integer(i) => query.bind(*i),
                Value::Timestamp(t) => query.bind(*t),
            };
        }

        query.execute(&self.pool).await?;
        Ok(())
    }
}
