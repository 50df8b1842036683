use sqlx::{Connection, SqliteConnection};
use tracing::{debug, warn};

use crate::config::Mode;
use crate::db::models::UserRow;
use crate::error::ApiError;

/// Rows inserted into every fresh table.
pub const SEED_USERS: [(i64, &str, &str); 2] = [(1, "foo", "bar"), (2, "admin", "hunter2")];

/// Each call gets its own private in-memory database.
pub async fn open_ephemeral() -> Result<SqliteConnection, sqlx::Error> {
    SqliteConnection::connect("sqlite::memory:").await
}

pub async fn create_user_table(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE users (
            id INTEGER PRIMARY KEY,
            username TEXT,
            password TEXT
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}

pub async fn seed_users(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    for (id, username, password) in SEED_USERS {
        sqlx::query("INSERT INTO users (id, username, password) VALUES (?, ?, ?)")
            .bind(id)
            .bind(username)
            .bind(password)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}

/// VULNERABLE: `raw_id` is pasted into the SQL text as-is.
///
/// `"1 OR 1=1"` turns the filter into a tautology and returns every row.
/// Kept on purpose as the injection example; see [`find_user`] for the fix.
pub async fn find_user_unsafe(
    conn: &mut SqliteConnection,
    raw_id: &str,
) -> Result<Vec<UserRow>, sqlx::Error> {
    let sql = format!("SELECT id, username, password FROM users WHERE id = {raw_id}");
    warn!(%sql, "running string-built query");

    sqlx::query_as::<_, UserRow>(&sql).fetch_all(&mut *conn).await
}

/// Parameterized lookup, `id` is bound as an integer.
pub async fn find_user(conn: &mut SqliteConnection, id: i64) -> Result<Vec<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>("SELECT id, username, password FROM users WHERE id = ?")
        .bind(id)
        .fetch_all(&mut *conn)
        .await
}

/// Runs one `/user` lookup end to end: open, create, seed, query, close.
///
/// In safe mode the id is validated before any database work happens.
pub async fn lookup(raw_id: Option<&str>, mode: Mode) -> Result<Vec<UserRow>, ApiError> {
    let typed_id = match mode {
        Mode::Safe => {
            let raw = raw_id.ok_or(ApiError::MissingId)?;
            let id = raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ApiError::InvalidId(raw.to_string()))?;
            Some(id)
        }
        Mode::Vulnerable => None,
    };

    let mut conn = open_ephemeral().await?;
    create_user_table(&mut conn).await?;
    seed_users(&mut conn).await?;

    let rows = match typed_id {
        Some(id) => find_user(&mut conn, id).await,
        // A missing id leaves the WHERE clause dangling and the query fails.
        None => find_user_unsafe(&mut conn, raw_id.unwrap_or_default()).await,
    };

    conn.close().await?;
    let rows = rows?;
    debug!(rows = rows.len(), %mode, "user lookup finished");

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> SqliteConnection {
        let mut conn = open_ephemeral().await.unwrap();
        create_user_table(&mut conn).await.unwrap();
        seed_users(&mut conn).await.unwrap();
        conn
    }

    #[tokio::test]
    async fn test_find_user_by_id() {
        let mut conn = seeded().await;
        let rows = find_user(&mut conn, 1).await.unwrap();
        assert_eq!(rows, vec![UserRow(1, "foo".into(), "bar".into())]);
    }

    #[tokio::test]
    async fn test_find_user_unknown_id() {
        let mut conn = seeded().await;
        assert!(find_user(&mut conn, 999).await.unwrap().is_empty());
        assert!(find_user_unsafe(&mut conn, "999").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unsafe_lookup_is_injectable() {
        let mut conn = seeded().await;
        let rows = find_user_unsafe(&mut conn, "1 OR 1=1").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].username(), "foo");
        assert_eq!(rows[1].username(), "admin");
    }

    #[tokio::test]
    async fn test_unsafe_lookup_plain_id() {
        let mut conn = seeded().await;
        let rows = find_user_unsafe(&mut conn, "2").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id(), 2);
    }

    #[tokio::test]
    async fn test_tables_do_not_outlive_connection() {
        let mut first = seeded().await;
        sqlx::query("DELETE FROM users").execute(&mut first).await.unwrap();
        first.close().await.unwrap();

        let rows = lookup(Some("1"), Mode::Safe).await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_lookup_is_idempotent() {
        let first = lookup(Some("1 OR 1=1"), Mode::Vulnerable).await.unwrap();
        let second = lookup(Some("1 OR 1=1"), Mode::Vulnerable).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_safe_lookup_rejects_injection() {
        let err = lookup(Some("1 OR 1=1"), Mode::Safe).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidId(_)));

        let err = lookup(None, Mode::Safe).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingId));
    }

    #[tokio::test]
    async fn test_vulnerable_lookup_without_id_fails() {
        let err = lookup(None, Mode::Vulnerable).await.unwrap_err();
        assert!(matches!(err, ApiError::Database(_)));
    }
}
