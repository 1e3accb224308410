//! `urlalias clear <id:field>...` – bulk-remove selected aliases.

use anyhow::{Context, Result};
use urlalias_core::store::{AliasDb, ArticleId};

/// Parse an "ID:FIELD" selection pair.
fn parse_selection(raw: &str) -> Result<(ArticleId, u8)> {
    let (id, field) = raw
        .split_once(':')
        .with_context(|| format!("invalid selection {raw:?}, expected ID:FIELD"))?;
    let id: ArticleId = id
        .parse()
        .with_context(|| format!("invalid article id in {raw:?}"))?;
    let field: u8 = field
        .parse()
        .with_context(|| format!("invalid field number in {raw:?}"))?;
    Ok((id, field))
}

pub async fn run_clear(db: &AliasDb, selected: &[String]) -> Result<()> {
    let mut pairs = Vec::with_capacity(selected.len());
    for raw in selected {
        pairs.push(parse_selection(raw)?);
    }

    let cleared = db.clear_aliases(&pairs).await?;
    println!("Removed {cleared} alias(es).");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_pairs() {
        assert_eq!(parse_selection("42:3").unwrap(), (42, 3));
        assert_eq!(parse_selection("1:10").unwrap(), (1, 10));
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(parse_selection("42").is_err());
        assert!(parse_selection("x:3").is_err());
        assert!(parse_selection("42:y").is_err());
        assert!(parse_selection("42:300").is_err());
    }
}
