//! Article maintenance: add, fetch, set/clear alias fields.

use anyhow::{ensure, Result};
use sqlx::Row;

use super::db::AliasDb;
use super::types::{Article, ArticleId, ArticleStatus};
use crate::prefs::MAX_ALIAS_FIELD;

/// Column name for a validated slot number. Callers must range-check first;
/// slot numbers never come from untrusted strings.
fn custom_col(field: u8) -> String {
    format!("custom_{field}")
}

impl AliasDb {
    /// Insert a new article with empty alias slots.
    pub async fn add_article(
        &self,
        title: &str,
        status: ArticleStatus,
        url: &str,
    ) -> Result<ArticleId> {
        let row_id = sqlx::query(
            r#"
            INSERT INTO articles (title, status, url)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(title)
        .bind(status.as_str())
        .bind(url)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(row_id)
    }

    /// Fetch a single article with all alias slots.
    pub async fn get_article(&self, id: ArticleId) -> Result<Option<Article>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, status, url,
                   custom_1, custom_2, custom_3, custom_4, custom_5,
                   custom_6, custom_7, custom_8, custom_9, custom_10
            FROM articles
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let status_str: String = row.get("status");
        let mut custom = Vec::with_capacity(MAX_ALIAS_FIELD as usize);
        for field in 1..=MAX_ALIAS_FIELD {
            custom.push(row.get::<String, _>(custom_col(field).as_str()));
        }

        Ok(Some(Article {
            id: row.get("id"),
            title: row.get("title"),
            status: ArticleStatus::from_str(&status_str),
            url: row.get("url"),
            custom,
        }))
    }

    /// Set one alias slot on an article. An empty value removes the alias.
    pub async fn set_custom_field(&self, id: ArticleId, field: u8, value: &str) -> Result<()> {
        ensure!(
            (1..=MAX_ALIAS_FIELD).contains(&field),
            "alias field number {field} is out of range (1..=10)"
        );

        let sql = format!("UPDATE articles SET {} = ?1 WHERE id = ?2", custom_col(field));
        let result = sqlx::query(&sql)
            .bind(value)
            .bind(id)
            .execute(&self.pool)
            .await?;
        ensure!(result.rows_affected() == 1, "no article with id {id}");
        Ok(())
    }

    /// Bulk multi-edit "remove alias": wipe each selected (article, slot)
    /// pair. Returns the number of cleared entries. Pairs referencing a
    /// missing article are counted as not cleared, not as errors.
    pub async fn clear_aliases(&self, selected: &[(ArticleId, u8)]) -> Result<u64> {
        let mut cleared = 0;
        for &(id, field) in selected {
            ensure!(
                (1..=MAX_ALIAS_FIELD).contains(&field),
                "alias field number {field} is out of range (1..=10)"
            );
            let sql = format!("UPDATE articles SET {} = '' WHERE id = ?1", custom_col(field));
            let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
            cleared += result.rows_affected();
        }
        Ok(cleared)
    }
}
