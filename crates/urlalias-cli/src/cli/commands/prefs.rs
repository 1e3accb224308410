//! `urlalias prefs show|set` – inspect and update preferences.

use anyhow::{Context, Result};
use urlalias_core::config;
use urlalias_core::plugin::UrlAlias;
use urlalias_core::prefs::PrefsForm;
use urlalias_core::store::AliasDb;

pub async fn run_prefs_show(db: &AliasDb) -> Result<()> {
    let prefs = db.load_preferences().await?;
    let fields = if prefs.alias_fields.is_empty() {
        "(none)".to_string()
    } else {
        prefs.alias_fields.encode()
    };
    println!("alias fields:        {fields}");
    println!(
        "redirect type:       {}",
        if prefs.redirect_permanent {
            "permanent (301 when live)"
        } else {
            "temporary (302)"
        }
    );
    println!(
        "show validity hint:  {}",
        if prefs.show_field_validity { "yes" } else { "no" }
    );
    Ok(())
}

pub async fn run_prefs_set(
    db: &AliasDb,
    fields: Option<&str>,
    permanent: Option<String>,
    validity_hint: Option<String>,
) -> Result<()> {
    let alias_fields = fields
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(|p| {
                    p.parse::<u8>()
                        .with_context(|| format!("invalid field number {p:?}"))
                })
                .collect::<Result<Vec<u8>>>()
        })
        .transpose()?;

    let form = PrefsForm {
        alias_fields,
        redirect_permanent: permanent,
        show_field_validity: validity_hint,
    };

    // Production status is irrelevant to the save path.
    let plugin = UrlAlias::new(db.clone(), config::ProductionStatus::Live);
    plugin.on_prefs_save(form).await?;

    println!("Preferences saved.");
    run_prefs_show(db).await
}
