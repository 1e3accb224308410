//! Installation diagnostics: duplicate and malformed aliases.
//!
//! Informational only — nothing here blocks writes or redirects. The
//! duplicate and validity scans need the unioned-CTE queries; when the
//! engine lacks CTE support those checks are skipped entirely rather than
//! reported as failures.

use anyhow::Result;

use crate::prefs::Preferences;
use crate::store::AliasDb;
use crate::validate::is_valid_alias;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagLevel {
    Error,
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagEntry {
    pub level: DiagLevel,
    pub message: String,
}

/// Ordered diagnostics report.
#[derive(Debug, Clone, Default)]
pub struct DiagReport {
    pub entries: Vec<DiagEntry>,
}

impl DiagReport {
    fn push(&mut self, level: DiagLevel, message: String) {
        self.entries.push(DiagEntry { level, message });
    }

    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.level == DiagLevel::Error)
            .count()
    }
}

/// Run all diagnostics against the store.
pub async fn run_diagnostics(db: &AliasDb, prefs: &Preferences) -> Result<DiagReport> {
    let mut report = DiagReport::default();

    if prefs.alias_fields.is_empty() {
        report.push(
            DiagLevel::Error,
            "no alias fields configured; see the plugin preferences".to_string(),
        );
        return Ok(report);
    }

    if !db.supports_cte().await {
        tracing::debug!("engine lacks CTE support; skipping alias scans");
        return Ok(report);
    }

    let duplicates = db.duplicate_aliases(&prefs.alias_fields).await?;
    if duplicates.is_empty() {
        report.push(DiagLevel::Success, "no duplicate aliases found".to_string());
    } else {
        for (id, alias) in duplicates {
            report.push(
                DiagLevel::Error,
                format!("article {id}: alias \"{alias}\" is also used by another article"),
            );
        }
    }

    let mut invalid = 0;
    for (id, alias) in db.all_aliases(&prefs.alias_fields).await? {
        if !is_valid_alias(&alias) {
            invalid += 1;
            report.push(
                DiagLevel::Error,
                format!("article {id}: alias \"{alias}\" is not a valid alias path"),
            );
        }
    }
    if invalid == 0 {
        report.push(
            DiagLevel::Success,
            "no invalid alias values found".to_string(),
        );
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::AliasFieldSet;
    use crate::store::db::open_memory;
    use crate::store::ArticleStatus;

    #[tokio::test]
    async fn unconfigured_fields_is_a_single_error() {
        let db = open_memory().await.unwrap();
        let prefs = Preferences::default();
        let report = run_diagnostics(&db, &prefs).await.unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].level, DiagLevel::Error);
        assert!(report.entries[0].message.contains("no alias fields"));
    }

    #[tokio::test]
    async fn clean_store_reports_two_successes() {
        let db = open_memory().await.unwrap();
        let id = db
            .add_article("A", ArticleStatus::Live, "https://example.com/a")
            .await
            .unwrap();
        db.set_custom_field(id, 1, "products/widget-1").await.unwrap();

        let prefs = Preferences {
            alias_fields: AliasFieldSet::new([1]).unwrap(),
            ..Default::default()
        };
        let report = run_diagnostics(&db, &prefs).await.unwrap();
        assert_eq!(report.error_count(), 0);
        let successes: Vec<_> = report
            .entries
            .iter()
            .filter(|e| e.level == DiagLevel::Success)
            .collect();
        assert_eq!(successes.len(), 2);
    }

    #[tokio::test]
    async fn duplicates_reported_once_per_article() {
        let db = open_memory().await.unwrap();
        let a = db
            .add_article("A", ArticleStatus::Live, "https://example.com/a")
            .await
            .unwrap();
        let b = db
            .add_article("B", ArticleStatus::Live, "https://example.com/b")
            .await
            .unwrap();
        db.set_custom_field(a, 1, "same/path").await.unwrap();
        db.set_custom_field(b, 1, "same/path").await.unwrap();

        let prefs = Preferences {
            alias_fields: AliasFieldSet::new([1]).unwrap(),
            ..Default::default()
        };
        let report = run_diagnostics(&db, &prefs).await.unwrap();
        let dup_errors: Vec<_> = report
            .entries
            .iter()
            .filter(|e| e.level == DiagLevel::Error && e.message.contains("also used"))
            .collect();
        assert_eq!(dup_errors.len(), 2);
        assert!(dup_errors[0].message.contains(&format!("article {a}")));
        assert!(dup_errors[1].message.contains(&format!("article {b}")));
    }

    #[tokio::test]
    async fn invalid_values_flagged() {
        let db = open_memory().await.unwrap();
        let id = db
            .add_article("A", ArticleStatus::Live, "https://example.com/a")
            .await
            .unwrap();
        db.set_custom_field(id, 1, "/leading-slash").await.unwrap();
        db.set_custom_field(id, 2, "has#fragment").await.unwrap();
        db.set_custom_field(id, 3, "fine/path").await.unwrap();

        let prefs = Preferences {
            alias_fields: AliasFieldSet::new([1, 2, 3]).unwrap(),
            ..Default::default()
        };
        let report = run_diagnostics(&db, &prefs).await.unwrap();
        let invalid: Vec<_> = report
            .entries
            .iter()
            .filter(|e| e.message.contains("not a valid alias path"))
            .collect();
        assert_eq!(invalid.len(), 2);
    }
}
