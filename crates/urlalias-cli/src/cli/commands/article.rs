//! `urlalias article add|set-field` – article maintenance for seeding.

use anyhow::{Context, Result};
use urlalias_core::store::{AliasDb, ArticleId, ArticleStatus};

pub async fn run_article_add(db: &AliasDb, title: &str, url: &str, status: &str) -> Result<()> {
    // The canonical URL must be absolute; redirects point at it verbatim.
    url::Url::parse(url).with_context(|| format!("canonical URL {url:?} is not absolute"))?;

    let status = ArticleStatus::from_str(status);
    let id = db.add_article(title, status, url).await?;
    println!("Added article {id} ({}): {url}", status.as_str());
    Ok(())
}

pub async fn run_article_set_field(
    db: &AliasDb,
    id: ArticleId,
    field: u8,
    value: &str,
) -> Result<()> {
    db.set_custom_field(id, field, value).await?;
    if value.is_empty() {
        println!("Cleared alias slot {field} on article {id}");
    } else {
        println!("Set alias slot {field} on article {id} to {value:?}");
    }
    Ok(())
}
