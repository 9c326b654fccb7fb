use crate::error::DbError;
use configuration::DbSettings;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};

/// Establishes a single connection to the MySQL database.
///
/// One session is opened directly, no pool: the tool issues exactly one
/// query per invocation. Any failure here (bad credentials, unreachable
/// host, unknown schema) is fatal to the run.
pub async fn connect(settings: &DbSettings) -> Result<MySqlConnection, DbError> {
    let options = MySqlConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.username)
        .password(&settings.password)
        .database(&settings.database);

    let conn = options.connect().await.map_err(DbError::Connect)?;

    tracing::debug!(host = %settings.host, database = %settings.database, "database session opened");
    Ok(conn)
}

/// Asks the server for its version string, used in the connection
/// confirmation line.
pub async fn server_version(conn: &mut MySqlConnection) -> Result<String, DbError> {
    let (version,): (String,) = sqlx::query_as("SELECT VERSION()")
        .fetch_one(conn)
        .await
        .map_err(DbError::Query)?;

    Ok(version)
}

/// Closes the session cleanly, sending the protocol's quit message.
pub async fn close(conn: MySqlConnection) -> Result<(), DbError> {
    conn.close().await.map_err(DbError::Close)
}
