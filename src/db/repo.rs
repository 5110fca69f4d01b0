use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;

use crate::db::models::User;

pub const SEED_USERS: [(i64, &str); 3] = [(1, "alice"), (2, "bob"), (3, "charlie")];

pub async fn connect(db_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    // LIKE must match case exactly, as a substring test would.
    let options = SqliteConnectOptions::from_str(db_url)?.pragma("case_sensitive_like", "ON");

    // Connections are never recycled so a `sqlite::memory:` database lives
    // as long as the pool.
    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

pub async fn create_user_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn seed_users(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for (id, username) in SEED_USERS {
        sqlx::query("INSERT OR REPLACE INTO users (id, username) VALUES (?, ?)")
            .bind(id)
            .bind(username)
            .execute(pool)
            .await?;
    }

    Ok(())
}

pub async fn init(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    create_user_table(pool).await?;
    seed_users(pool).await
}

pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, username FROM users ORDER BY id")
        .fetch_all(pool)
        .await
}

/// LIKE wildcards inside `q` are escaped so they match literally.
pub async fn search_users(pool: &SqlitePool, q: &str) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r"SELECT id, username FROM users WHERE username LIKE ? ESCAPE '\' ORDER BY id",
    )
    .bind(format!("%{}%", escape_like(q)))
    .fetch_all(pool)
    .await
}

/// Substring search with `q` pasted straight into the SQL text.
///
/// This is injectable on purpose: `' OR '1'='1` turns the predicate into
/// `LIKE '%' OR '1'='1%'`, which matches every row.
pub async fn search_users_unsafe(pool: &SqlitePool, q: &str) -> Result<Vec<User>, sqlx::Error> {
    let sql = format!("SELECT id, username FROM users WHERE username LIKE '%{q}%' ORDER BY id");
    sqlx::query_as::<_, User>(&sql).fetch_all(pool).await
}

fn escape_like(q: &str) -> String {
    let mut escaped = String::with_capacity(q.len());
    for c in q.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
