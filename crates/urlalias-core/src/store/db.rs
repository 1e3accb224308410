//! SQLite-backed store implementation.
//!
//! Handles connection, migrations, and the CTE capability probe. Article and
//! preference operations live in the sibling modules.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Row, Sqlite};
use std::path::Path;

/// Percent-encode a path for use in a sqlite:// URI so spaces and special chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Handle to the SQLite-backed alias store.
///
/// The default database file is stored under the XDG state directory:
/// `~/.local/state/urlalias/alias.db`.
#[derive(Clone)]
pub struct AliasDb {
    pub(crate) pool: Pool<Sqlite>,
}

impl AliasDb {
    /// Open (or create) the default store and run migrations.
    pub async fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("urlalias")?;
        let state_dir = xdg_dirs.get_state_home().join("urlalias");
        let db_path = state_dir.join("alias.db");

        // Ensure parent directory exists.
        tokio::fs::create_dir_all(&state_dir).await?;

        let uri = path_to_sqlite_uri(&db_path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect(&uri)
            .await?;

        let db = AliasDb { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Open (or create) the store at a specific path. Creates parent dirs if
    /// needed. Used when config overrides the DB location, and by tests.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect(&uri)
            .await?;
        let db = AliasDb { pool };
        db.migrate().await?;
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        // Articles carry ten fixed alias slots as plain text columns; an
        // alias exists when a slot is non-empty. `url` is the canonical URL
        // (permlink) redirects point at.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS articles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL DEFAULT '',
                status TEXT NOT NULL DEFAULT 'draft',
                url TEXT NOT NULL,
                custom_1 TEXT NOT NULL DEFAULT '',
                custom_2 TEXT NOT NULL DEFAULT '',
                custom_3 TEXT NOT NULL DEFAULT '',
                custom_4 TEXT NOT NULL DEFAULT '',
                custom_5 TEXT NOT NULL DEFAULT '',
                custom_6 TEXT NOT NULL DEFAULT '',
                custom_7 TEXT NOT NULL DEFAULT '',
                custom_8 TEXT NOT NULL DEFAULT '',
                custom_9 TEXT NOT NULL DEFAULT '',
                custom_10 TEXT NOT NULL DEFAULT ''
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Flat key/value preference rows, host-preference-store style.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS prefs (
                name TEXT PRIMARY KEY,
                val TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Whether the engine can run the unioned-CTE diagnostics queries.
    /// SQLite grew CTE support in 3.8.3; diagnostics soft-degrade when the
    /// probe fails rather than erroring.
    pub async fn supports_cte(&self) -> bool {
        let version: Option<String> = sqlx::query("SELECT sqlite_version()")
            .fetch_optional(&self.pool)
            .await
            .ok()
            .flatten()
            .map(|row| row.get(0));

        let Some(version) = version else {
            return false;
        };

        let mut parts = version.split('.').map(|p| p.parse::<u32>().unwrap_or(0));
        let (maj, min, patch) = (
            parts.next().unwrap_or(0),
            parts.next().unwrap_or(0),
            parts.next().unwrap_or(0),
        );
        (maj, min, patch) >= (3, 8, 3)
    }
}

#[cfg(test)]
/// Open an in-memory store for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<AliasDb> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let db = AliasDb { pool };
    db.migrate().await?;
    Ok(db)
}
