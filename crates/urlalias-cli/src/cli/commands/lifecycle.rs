//! `urlalias install|uninstall` – plugin lifecycle.

use anyhow::Result;
use urlalias_core::config;
use urlalias_core::plugin::UrlAlias;
use urlalias_core::store::AliasDb;

pub async fn run_install(db: &AliasDb) -> Result<()> {
    let plugin = UrlAlias::new(db.clone(), config::ProductionStatus::Live);
    plugin.install().await?;
    println!("Installed: default preferences seeded.");
    Ok(())
}

pub async fn run_uninstall(db: &AliasDb) -> Result<()> {
    let plugin = UrlAlias::new(db.clone(), config::ProductionStatus::Live);
    plugin.uninstall().await?;
    println!("Uninstalled: preferences removed.");
    Ok(())
}
