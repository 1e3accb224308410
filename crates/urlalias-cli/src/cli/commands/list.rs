//! `urlalias list` – list configured aliases.

use anyhow::Result;
use urlalias_core::prefs::{PREF_ALIASES_SORT_COL, PREF_ALIASES_SORT_DIR};
use urlalias_core::store::{AliasDb, AliasQuery, SortCol, SortDir};

pub async fn run_list(
    db: &AliasDb,
    sort: Option<&str>,
    dir: Option<&str>,
    filter: Option<String>,
    page: u32,
    per_page: u32,
) -> Result<()> {
    // Sort state: explicit flags win and are persisted for the next run,
    // otherwise the persisted preference (or the default) applies.
    let sort = match sort {
        Some(s) => {
            let col = SortCol::from_str(s);
            db.set_pref(PREF_ALIASES_SORT_COL, col.as_str()).await?;
            col
        }
        None => SortCol::from_str(&db.get_pref(PREF_ALIASES_SORT_COL, "alias").await?),
    };
    let dir = match dir {
        Some(d) => {
            let dir = SortDir::from_str(d);
            db.set_pref(PREF_ALIASES_SORT_DIR, dir.as_str()).await?;
            dir
        }
        None => SortDir::from_str(&db.get_pref(PREF_ALIASES_SORT_DIR, "desc").await?),
    };

    let prefs = db.load_preferences().await?;
    if prefs.alias_fields.is_empty() {
        println!("No alias fields configured; run `urlalias prefs set --fields ...` first.");
        return Ok(());
    }

    let query = AliasQuery {
        sort,
        dir,
        filter,
        page,
        per_page,
    };
    let (rows, total) = db.list_aliases(&prefs.alias_fields, &query).await?;

    if rows.is_empty() {
        println!("No aliases found.");
        return Ok(());
    }

    println!("{:<8} {:<6} {:<30} {}", "ARTICLE", "FIELD", "TITLE", "ALIAS");
    for row in &rows {
        println!(
            "{:<8} {:<6} {:<30} {}",
            row.article_id, row.field, row.title, row.alias
        );
    }
    let pages = total.div_ceil(per_page.max(1) as u64);
    println!("page {page} of {pages} ({total} aliases)");

    Ok(())
}
