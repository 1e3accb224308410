//! CTE-backed alias queries: the admin listing and the diagnostics scans.
//!
//! All of these flatten the configured alias slots into one unioned result
//! set `aliases (id, n, c)` — article id, slot number, alias value — via a
//! common table expression, then select over it.

use anyhow::Result;
use sqlx::Row;

use super::db::AliasDb;
use super::types::{AliasQuery, AliasRow, ArticleId};
use crate::prefs::AliasFieldSet;

/// Build the unioned CTE over the configured slots, one SELECT per slot,
/// skipping empty values. None when no slots are configured.
pub(crate) fn alias_cte(fields: &AliasFieldSet) -> Option<String> {
    if fields.is_empty() {
        return None;
    }
    let selects: Vec<String> = fields
        .iter()
        .map(|field| {
            format!(
                "SELECT id, {field}, custom_{field} FROM articles WHERE custom_{field} <> ''"
            )
        })
        .collect();
    Some(format!(
        "WITH aliases (id, n, c) AS ({})",
        selects.join(" UNION ALL ")
    ))
}

impl AliasDb {
    /// List aliases for the admin surface: sorted, filtered, paginated.
    /// Returns the page rows plus the total row count for the pager.
    pub async fn list_aliases(
        &self,
        fields: &AliasFieldSet,
        query: &AliasQuery,
    ) -> Result<(Vec<AliasRow>, u64)> {
        let Some(cte) = alias_cte(fields) else {
            return Ok((Vec::new(), 0));
        };

        // Filter matches alias or title as a substring; an all-digit filter
        // additionally matches the article id exactly.
        let filter = query.filter.as_deref().filter(|f| !f.is_empty());
        let id_filter: Option<i64> = filter.and_then(|f| f.parse().ok());
        let where_sql = match (filter, id_filter) {
            (Some(_), Some(_)) => "WHERE (a.c LIKE ?1 OR b.title LIKE ?1 OR a.id = ?2)",
            (Some(_), None) => "WHERE (a.c LIKE ?1 OR b.title LIKE ?1)",
            _ => "",
        };
        let pattern = filter.map(|f| format!("%{f}%"));

        // Total count; without a filter the join is unnecessary.
        let count_sql = if filter.is_some() {
            format!(
                "{cte} SELECT COUNT(*) AS total FROM aliases AS a \
                 INNER JOIN articles AS b ON a.id = b.id {where_sql}"
            )
        } else {
            format!("{cte} SELECT COUNT(*) AS total FROM aliases")
        };
        let mut count_query = sqlx::query(&count_sql);
        if let Some(p) = &pattern {
            count_query = count_query.bind(p);
        }
        if let Some(id) = id_filter {
            count_query = count_query.bind(id);
        }
        let total: i64 = count_query.fetch_one(&self.pool).await?.get("total");

        let rows_sql = format!(
            "{cte} SELECT a.id, a.n, a.c, b.title FROM aliases AS a \
             INNER JOIN articles AS b ON a.id = b.id {where_sql} \
             ORDER BY {} LIMIT {} OFFSET {}",
            query.order_by(),
            query.per_page as i64,
            query.offset(),
        );
        let mut rows_query = sqlx::query(&rows_sql);
        if let Some(p) = &pattern {
            rows_query = rows_query.bind(p);
        }
        if let Some(id) = id_filter {
            rows_query = rows_query.bind(id);
        }
        let rows = rows_query.fetch_all(&self.pool).await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let field: i64 = row.get("n");
            out.push(AliasRow {
                article_id: row.get("id"),
                field: field as u8,
                title: row.get("title"),
                alias: row.get("c"),
            });
        }

        Ok((out, total.max(0) as u64))
    }

    /// Aliases used by more than one article: every (article, value) pair
    /// that shares its value with a different article, ordered by article id.
    /// Callers should gate on [`AliasDb::supports_cte`].
    pub async fn duplicate_aliases(
        &self,
        fields: &AliasFieldSet,
    ) -> Result<Vec<(ArticleId, String)>> {
        let Some(cte) = alias_cte(fields) else {
            return Ok(Vec::new());
        };

        let sql = format!(
            "{cte} SELECT DISTINCT a.id, a.c FROM aliases AS a \
             INNER JOIN aliases AS b ON a.c = b.c AND a.id <> b.id \
             ORDER BY a.id ASC"
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.get("id"), row.get("c")))
            .collect())
    }

    /// Every distinct (article, alias value) pair across the configured
    /// slots, ordered by article id. Used by the validity diagnostic, which
    /// runs the pattern check on the Rust side.
    pub async fn all_aliases(&self, fields: &AliasFieldSet) -> Result<Vec<(ArticleId, String)>> {
        let Some(cte) = alias_cte(fields) else {
            return Ok(Vec::new());
        };

        let sql = format!("{cte} SELECT DISTINCT id, c FROM aliases ORDER BY id ASC");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.get("id"), row.get("c")))
            .collect())
    }
}
