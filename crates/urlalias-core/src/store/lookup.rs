//! Alias resolution: exact-match lookup and permlink fetch.

use anyhow::Result;
use sqlx::Row;

use super::db::AliasDb;
use super::types::ArticleId;
use crate::prefs::AliasFieldSet;

impl AliasDb {
    /// Find the first live article whose designated alias field equals
    /// `path` exactly (case-sensitive, byte-for-byte).
    ///
    /// Fixed storage order: when duplicate aliases exist across articles the
    /// lowest article id wins, every time. Duplicates themselves are only
    /// surfaced by diagnostics, never prevented.
    ///
    /// No configured fields short-circuits to no match without a query —
    /// the expected pre-configuration state.
    pub async fn find_alias(
        &self,
        path: &str,
        fields: &AliasFieldSet,
    ) -> Result<Option<ArticleId>> {
        if path.is_empty() || fields.is_empty() {
            return Ok(None);
        }

        let clauses: Vec<String> = fields
            .iter()
            .map(|field| format!("custom_{field} = ?"))
            .collect();
        let sql = format!(
            "SELECT id FROM articles WHERE ({}) AND status = 'live' ORDER BY id ASC LIMIT 1",
            clauses.join(" OR ")
        );

        let mut query = sqlx::query(&sql);
        for _ in fields.iter() {
            query = query.bind(path);
        }

        let row = query.fetch_optional(&self.pool).await?;
        Ok(row.map(|r| r.get("id")))
    }

    /// Canonical URL (permlink) for an article id.
    pub async fn permlink(&self, id: ArticleId) -> Result<Option<String>> {
        let row = sqlx::query("SELECT url FROM articles WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get("url")))
    }
}
