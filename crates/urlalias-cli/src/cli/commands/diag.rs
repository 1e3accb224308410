//! `urlalias diag` – installation diagnostics.

use anyhow::Result;
use urlalias_core::diagnostics::{run_diagnostics, DiagLevel};
use urlalias_core::store::AliasDb;

pub async fn run_diag(db: &AliasDb) -> Result<()> {
    let prefs = db.load_preferences().await?;
    let report = run_diagnostics(db, &prefs).await?;

    if report.entries.is_empty() {
        println!("diagnostics skipped (engine lacks CTE support)");
        return Ok(());
    }

    for entry in &report.entries {
        let tag = match entry.level {
            DiagLevel::Error => "error",
            DiagLevel::Warning => "warn",
            DiagLevel::Info => "info",
            DiagLevel::Success => "ok",
        };
        println!("[{tag}] {}", entry.message);
    }

    if report.error_count() > 0 {
        println!("{} problem(s) found", report.error_count());
    }
    Ok(())
}
