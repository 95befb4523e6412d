//! Postgres repository implementation using Diesel.
//!
//! ## Features
//!
//! - Connection pooling with r2d2
//! - Retry with backoff when no pooled connection can be checked out
//! - Automatic migration execution (creates the `contacts` table)
//!
//! ## Configuration
//!
//! Environment variables:
//! - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
//! - `PG_POOL_MAX`: Maximum pool size (default: 10)
//! - `PG_POOL_MIN`: Minimum pool size (default: 1)
//! - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
//! - `PG_IDLE_TIMEOUT_SEC`: Idle connection timeout in seconds (default: 600)
//! - `PG_MAX_RETRIES`: Maximum retry attempts for connection checkout (default: 3)
//! - `PG_RETRY_DELAY_MS`: Initial retry delay in milliseconds (default: 100)

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::{debug, warn};
use std::time::Duration;
use tokio::task;

use crate::api::{Contact, ContactFields, ContactId};
use crate::db::repository::{ContactRepository, ErrorContext, RepositoryError, RepositoryResult};

mod models;
mod schema;

use models::{ContactFieldsRow, ContactRow};
use schema::contacts;

type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("src/db/repositories/postgres/migrations");

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_pool_size: u32,
    /// Minimum number of connections in the pool
    pub min_pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_sec: u64,
    /// Idle connection timeout in seconds
    pub idle_timeout_sec: u64,
    /// Maximum number of retry attempts when checking out a connection
    pub max_retries: u32,
    /// Initial retry delay in milliseconds (doubles with each retry)
    pub retry_delay_ms: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_pool_size: 10,
            min_pool_size: 1,
            connection_timeout_sec: 30,
            idle_timeout_sec: 600,
            max_retries: 3,
            retry_delay_ms: 100,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

impl PostgresConfig {
    /// Create configuration from environment variables.
    ///
    /// See the module documentation for the recognised variables.
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("PG_DATABASE_URL"))
            .map_err(|_| "DATABASE_URL or PG_DATABASE_URL must be set".to_string())?;

        let defaults = Self::default();
        Ok(Self {
            database_url,
            max_pool_size: env_or("PG_POOL_MAX", defaults.max_pool_size),
            min_pool_size: env_or("PG_POOL_MIN", defaults.min_pool_size),
            connection_timeout_sec: env_or("PG_CONN_TIMEOUT_SEC", defaults.connection_timeout_sec),
            idle_timeout_sec: env_or("PG_IDLE_TIMEOUT_SEC", defaults.idle_timeout_sec),
            max_retries: env_or("PG_MAX_RETRIES", defaults.max_retries),
            retry_delay_ms: env_or("PG_RETRY_DELAY_MS", defaults.retry_delay_ms),
        })
    }

    /// Create a new configuration with a database URL.
    pub fn with_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }
}

/// Diesel-backed repository for Postgres.
#[derive(Clone, Debug)]
pub struct PostgresRepository {
    pool: PgPool,
    config: PostgresConfig,
}

impl PostgresRepository {
    /// Create a new repository and run pending migrations.
    ///
    /// # Returns
    /// * `Ok(PostgresRepository)` on success
    /// * `Err(RepositoryError)` if connection or migration fails
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .min_idle(Some(config.min_pool_size))
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout_sec)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("create_pool")
                        .with_details(format!("max_size={}", config.max_pool_size)),
                )
            })?;

        {
            let mut conn = pool.get().map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("get_connection_for_migrations"),
                )
            })?;
            Self::run_migrations(&mut conn)?;
        }

        Ok(Self { pool, config })
    }

    fn run_migrations(conn: &mut PgConnection) -> RepositoryResult<()> {
        let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Migration failed: {}", e),
                ErrorContext::new("run_migrations"),
            )
        })?;
        debug!("applied {} pending migration(s)", applied.len());

        Ok(())
    }

    /// Execute a database operation on a pooled connection.
    ///
    /// Checking a connection out of the pool is retried up to `max_retries`
    /// times with exponential backoff. The operation itself runs exactly once.
    async fn with_conn<T, F>(&self, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        let max_retries = self.config.max_retries;
        let retry_delay = Duration::from_millis(self.config.retry_delay_ms);

        task::spawn_blocking(move || {
            let mut conn = checkout_with_retry(|| pool.get(), max_retries, retry_delay)?;
            f(&mut conn)
        })
        .await
        .map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Task join error: {}", e),
                ErrorContext::new("spawn_blocking"),
            )
        })?
    }
}

/// Acquire a connection, retrying failed checkouts with exponential backoff.
fn checkout_with_retry<C, E, A>(
    mut acquire: A,
    max_retries: u32,
    retry_delay: Duration,
) -> RepositoryResult<C>
where
    E: std::fmt::Display,
    A: FnMut() -> Result<C, E>,
{
    let mut delay = retry_delay;
    let mut attempt = 0;

    loop {
        match acquire() {
            Ok(conn) => return Ok(conn),
            Err(e) => {
                let err = RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("get_connection")
                        .with_details(format!("attempt={}", attempt + 1)),
                );
                if attempt >= max_retries {
                    return Err(err);
                }
                warn!("{}", err);
                std::thread::sleep(delay);
                delay *= 2;
                attempt += 1;
            }
        }
    }
}

fn map_diesel_error(
    err: diesel::result::Error,
    operation: &str,
    id: Option<ContactId>,
) -> RepositoryError {
    let err = RepositoryError::from(err).with_operation(operation);
    match (err, id) {
        (RepositoryError::NotFound { .. }, Some(id)) => {
            RepositoryError::contact_not_found(operation, id)
        }
        (err, _) => err,
    }
}

#[async_trait]
impl ContactRepository for PostgresRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn(|conn| {
            sql_query("SELECT 1")
                .execute(conn)
                .map_err(|e| map_diesel_error(e, "health_check", None))?;
            Ok(true)
        })
        .await
    }

    async fn list_contacts(&self) -> RepositoryResult<Vec<Contact>> {
        self.with_conn(|conn| {
            let rows = contacts::table
                .order(contacts::id.asc())
                .select(ContactRow::as_select())
                .load(conn)
                .map_err(|e| map_diesel_error(e, "list_contacts", None))?;
            Ok(rows.into_iter().map(Contact::from).collect())
        })
        .await
    }

    async fn get_contact(&self, id: ContactId) -> RepositoryResult<Option<Contact>> {
        self.with_conn(move |conn| {
            let row = contacts::table
                .find(id.value())
                .select(ContactRow::as_select())
                .first(conn)
                .optional()
                .map_err(|e| map_diesel_error(e, "get_contact", Some(id)))?;
            Ok(row.map(Contact::from))
        })
        .await
    }

    async fn create_contact(&self, fields: &ContactFields) -> RepositoryResult<Contact> {
        let values = ContactFieldsRow::from(fields);
        self.with_conn(move |conn| {
            let row = diesel::insert_into(contacts::table)
                .values(&values)
                .returning(ContactRow::as_returning())
                .get_result(conn)
                .map_err(|e| map_diesel_error(e, "create_contact", None))?;
            Ok(Contact::from(row))
        })
        .await
    }

    async fn update_contact(
        &self,
        id: ContactId,
        fields: &ContactFields,
    ) -> RepositoryResult<Contact> {
        let changes = ContactFieldsRow::from(fields);
        self.with_conn(move |conn| {
            let row = diesel::update(contacts::table.find(id.value()))
                .set(&changes)
                .returning(ContactRow::as_returning())
                .get_result(conn)
                .optional()
                .map_err(|e| map_diesel_error(e, "update_contact", Some(id)))?;
            row.map(Contact::from)
                .ok_or_else(|| RepositoryError::contact_not_found("update_contact", id))
        })
        .await
    }

    async fn delete_contact(&self, id: ContactId) -> RepositoryResult<()> {
        self.with_conn(move |conn| {
            let deleted = diesel::delete(contacts::table.find(id.value()))
                .execute(conn)
                .map_err(|e| map_diesel_error(e, "delete_contact", Some(id)))?;
            if deleted == 0 {
                return Err(RepositoryError::contact_not_found("delete_contact", id));
            }
            Ok(())
        })
        .await
    }
}
