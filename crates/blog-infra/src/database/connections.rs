#[cfg(feature = "sqlite")]
use std::time::Duration;

#[cfg(feature = "sqlite")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Log every SQL statement through `tracing`.
    pub log_statements: bool,
}

impl DatabaseConfig {
    /// `blog.db` next to the working directory, created on first open.
    pub const DEFAULT_URL: &'static str = "sqlite://blog.db?mode=rwc";

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 1,
            min_connections: 1,
            log_statements: false,
        }
    }

    /// A private in-memory database. Only usable with a single connection,
    /// since every SQLite connection gets its own in-memory database.
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_URL)
    }
}

/// Open the database described by `config`.
#[cfg(feature = "sqlite")]
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!(url = %config.url, "Opening database...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(config.log_statements)
        .to_owned();

    let db = Database::connect(opts).await?;
    tracing::info!(
        "Connected to SQLite database (pool: {})",
        config.max_connections
    );

    Ok(db)
}

/// Open the database and make sure the schema exists.
#[cfg(feature = "sqlite")]
pub async fn open(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    let db = connect(config).await?;
    super::schema::ensure_schema(&db).await?;
    Ok(db)
}

/// Close the connection pool, waiting for in-flight statements to finish.
#[cfg(feature = "sqlite")]
pub async fn close(db: DbConn) -> Result<(), DbErr> {
    db.close().await?;
    tracing::info!("Database connection closed");
    Ok(())
}
