use crate::config::DatabaseConfig;
use sea_orm::sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sea_orm::{ConnectionTrait, DatabaseConnection, SqlxPostgresConnector};

const CREATE_USERS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100),
        email VARCHAR(100)
    )
";

fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
}

/// Build the Postgres connection pool.
///
/// Credentials are passed as separate fields, never rendered into a
/// connection string. The pool connects lazily, so an unreachable server
/// does not stop the process from starting.
pub fn connect(config: &DatabaseConfig) -> DatabaseConnection {
    tracing::info!(
        "📦 Database: Initializing connection pool for {}:{}/{}",
        config.host,
        config.port,
        config.name
    );

    let pool = PgPoolOptions::new().connect_lazy_with(connect_options(config));
    let conn = SqlxPostgresConnector::from_sqlx_postgres_pool(pool);

    tracing::info!("✅ Database: Connection pool initialized");
    conn
}

/// Create the `users` table if it does not exist yet.
///
/// Failures are logged and swallowed; the service keeps running and each
/// request reports the backend error on its own.
pub async fn ensure_schema(conn: &DatabaseConnection) {
    match conn.execute_unprepared(CREATE_USERS_TABLE).await {
        Ok(_) => tracing::info!("✅ Database: users table ready"),
        Err(e) => tracing::error!("Table creation error: {}", e),
    }
}
