use once_cell::sync::OnceCell;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Открыть файл БД, создать схему и сохранить глобальное подключение
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database {}", absolute_path.display());
    let conn = connect(&db_url, None).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Подключение с минимальным bootstrap схемы.
/// Для `sqlite::memory:` нужен `max_connections = Some(1)`: у каждого соединения своя память.
pub async fn connect(
    db_url: &str,
    max_connections: Option<u32>,
) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(db_url.to_string());
    options.sqlx_logging(false);
    if let Some(max) = max_connections {
        options.max_connections(max).min_connections(1);
    }
    let conn = Database::connect(options).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let check_table = r#"
        SELECT name FROM sqlite_master WHERE type='table' AND name='lifecycle_records';
    "#;
    let existing = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            check_table.to_string(),
        ))
        .await?;

    if !existing.is_empty() {
        return Ok(());
    }

    tracing::info!("Creating lifecycle_records table");
    let create_table = r#"
        CREATE TABLE lifecycle_records (
            kind TEXT NOT NULL,
            id TEXT NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            current_stage TEXT NOT NULL,
            subject TEXT NOT NULL DEFAULT '{}',
            stage_flags TEXT NOT NULL DEFAULT '{}',
            reason TEXT,
            attributes TEXT NOT NULL DEFAULT '{}',
            notes TEXT NOT NULL DEFAULT '[]',
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (kind, id)
        );
    "#;
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        create_table.to_string(),
    ))
    .await?;

    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        "CREATE INDEX idx_lifecycle_records_stage ON lifecycle_records (kind, current_stage);"
            .to_string(),
    ))
    .await?;

    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
