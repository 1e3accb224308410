//! End-to-end flow against an on-disk store: install, seed articles,
//! configure preferences, resolve, diagnose, uninstall.

use tempfile::tempdir;

use urlalias_core::config::ProductionStatus;
use urlalias_core::diagnostics::{run_diagnostics, DiagLevel};
use urlalias_core::plugin::UrlAlias;
use urlalias_core::prefs::PrefsForm;
use urlalias_core::redirect::Outcome;
use urlalias_core::store::{AliasDb, AliasQuery, ArticleStatus};

#[tokio::test]
async fn full_alias_lifecycle_on_disk() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("state dir").join("alias.db");
    let db = AliasDb::open_at(&db_path).await.unwrap();

    let plugin = UrlAlias::new(db.clone(), ProductionStatus::Live);
    plugin.install().await.unwrap();

    // Seed two articles; the second shares an alias value with the first.
    let first = db
        .add_article("Widget page", ArticleStatus::Live, "https://example.com/articles/1")
        .await
        .unwrap();
    let second = db
        .add_article("Widget copy", ArticleStatus::Live, "https://example.com/articles/2")
        .await
        .unwrap();
    db.set_custom_field(first, 2, "products/widget-1").await.unwrap();
    db.set_custom_field(second, 5, "products/widget-1").await.unwrap();
    db.set_custom_field(second, 7, "bad#alias").await.unwrap();

    // Configure fields {2, 5, 7} through the host save path.
    plugin
        .on_prefs_save(PrefsForm {
            alias_fields: Some(vec![2, 5, 7]),
            redirect_permanent: None,
            show_field_validity: None,
        })
        .await
        .unwrap();

    // Reopen from the same file: preference round-trip survives the pool.
    let reopened = AliasDb::open_at(&db_path).await.unwrap();
    let prefs = reopened.load_preferences().await.unwrap();
    let configured: Vec<u8> = prefs.alias_fields.iter().collect();
    assert_eq!(configured, vec![2, 5, 7]);

    // Duplicate alias resolves deterministically to the lower article id.
    let out = plugin
        .on_incoming_request("/products/widget-1?ref=x")
        .await
        .unwrap();
    match out {
        Outcome::Redirect(r) => {
            assert_eq!(r.status, 302);
            assert_eq!(r.location, "https://example.com/articles/1?ref=x");
        }
        _ => panic!("expected redirect"),
    }

    // Diagnostics see both the duplicate pair and the malformed value.
    let report = run_diagnostics(&db, &prefs).await.unwrap();
    let errors: Vec<_> = report
        .entries
        .iter()
        .filter(|e| e.level == DiagLevel::Error)
        .collect();
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().any(|e| e.message.contains("bad#alias")));

    // Listing sees all three alias entries.
    let (rows, total) = db
        .list_aliases(&prefs.alias_fields, &AliasQuery::default())
        .await
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(rows.len(), 3);

    // Clearing the duplicate on the second article fixes resolution reports.
    db.clear_aliases(&[(second, 5)]).await.unwrap();
    let report = run_diagnostics(&db, &prefs).await.unwrap();
    assert!(!report
        .entries
        .iter()
        .any(|e| e.message.contains("also used")));

    plugin.uninstall().await.unwrap();
    let prefs = db.load_preferences().await.unwrap();
    assert!(prefs.alias_fields.is_empty());
}
