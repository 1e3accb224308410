//! Host-facing interface.
//!
//! The host owns routing and calls exactly two operations: the public-side
//! request hook and the admin preferences save. Install/uninstall cover the
//! plugin lifecycle. Preferences are loaded once per request call and cached
//! only for that call's scope.

use anyhow::Result;

use crate::config::ProductionStatus;
use crate::error::PrefsSaveError;
use crate::prefs::{
    encode_flag, PrefsForm, PREF_ALIAS_FIELDS, PREF_REDIRECT_PERMANENT, PREF_SHOW_FIELD_VALIDITY,
};
use crate::redirect::{build_outcome, Outcome};
use crate::request::RequestContext;
use crate::store::AliasDb;

pub struct UrlAlias {
    db: AliasDb,
    production: ProductionStatus,
}

impl UrlAlias {
    pub fn new(db: AliasDb, production: ProductionStatus) -> Self {
        Self { db, production }
    }

    /// Public-side request hook. Returns the outcome for a matched alias, or
    /// `None` when the host pipeline should continue unmodified: empty path,
    /// unconfigured fields, no match — and any store failure, which is
    /// logged and deliberately swallowed so the end user never sees an error.
    pub async fn on_incoming_request(&self, request_uri: &str) -> Option<Outcome> {
        let ctx = RequestContext::new(request_uri);
        if ctx.is_empty() {
            return None;
        }

        let prefs = match self.db.load_preferences().await {
            Ok(prefs) => prefs,
            Err(err) => {
                tracing::warn!("preference load failed, skipping alias lookup: {err:#}");
                return None;
            }
        };
        if prefs.alias_fields.is_empty() {
            return None;
        }

        let id = match self.db.find_alias(&ctx.path, &prefs.alias_fields).await {
            Ok(Some(id)) => id,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!("alias lookup failed for {:?}: {err:#}", ctx.path);
                return None;
            }
        };

        let url = match self.db.permlink(id).await {
            Ok(Some(url)) if !url.is_empty() => url,
            Ok(_) => return None,
            Err(err) => {
                tracing::warn!("permlink lookup failed for article {id}: {err:#}");
                return None;
            }
        };

        tracing::debug!("alias {:?} -> article {id}", ctx.path);
        Some(build_outcome(
            &url,
            &ctx.query,
            prefs.redirect_permanent,
            self.production,
        ))
    }

    /// Admin preferences save. Validates the whole form first; on success
    /// only the keys whose values actually changed are written.
    pub async fn on_prefs_save(&self, form: PrefsForm) -> Result<(), PrefsSaveError> {
        let current = self.db.load_preferences().await?;
        let next = form.validate(&current)?;

        if next.alias_fields != current.alias_fields {
            self.db
                .set_pref(PREF_ALIAS_FIELDS, &next.alias_fields.encode())
                .await?;
        }
        if next.redirect_permanent != current.redirect_permanent {
            self.db
                .set_pref(PREF_REDIRECT_PERMANENT, encode_flag(next.redirect_permanent))
                .await?;
        }
        if next.show_field_validity != current.show_field_validity {
            self.db
                .set_pref(PREF_SHOW_FIELD_VALIDITY, encode_flag(next.show_field_validity))
                .await?;
        }

        tracing::info!("preferences saved: fields={}", next.alias_fields.encode());
        Ok(())
    }

    /// Lifecycle: seed default preference rows.
    pub async fn install(&self) -> Result<()> {
        self.db.seed_default_prefs().await?;
        tracing::info!("urlalias installed (default preferences seeded)");
        Ok(())
    }

    /// Lifecycle: wipe preference rows to leave the store clean.
    pub async fn uninstall(&self) -> Result<()> {
        let removed = self.db.remove_all_prefs().await?;
        tracing::info!("urlalias uninstalled ({removed} preference rows removed)");
        Ok(())
    }

    pub fn db(&self) -> &AliasDb {
        &self.db
    }
}
