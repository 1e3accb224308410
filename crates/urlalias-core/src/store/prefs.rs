//! Preference rows: flat key/value strings with typed load on top.

use anyhow::Result;
use sqlx::Row;

use super::db::AliasDb;
use crate::prefs::{
    stored_flag, AliasFieldSet, Preferences, DEFAULT_ALIAS_FIELDS, DEFAULT_REDIRECT_PERMANENT,
    DEFAULT_SHOW_FIELD_VALIDITY, PREF_ALIAS_FIELDS, PREF_REDIRECT_PERMANENT,
    PREF_SHOW_FIELD_VALIDITY,
};

impl AliasDb {
    /// Read one preference, falling back to `default` when unset.
    pub async fn get_pref(&self, name: &str, default: &str) -> Result<String> {
        let row = sqlx::query("SELECT val FROM prefs WHERE name = ?1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row
            .map(|r| r.get("val"))
            .unwrap_or_else(|| default.to_string()))
    }

    /// Write one preference, inserting or replacing.
    pub async fn set_pref(&self, name: &str, val: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO prefs (name, val) VALUES (?1, ?2)
            ON CONFLICT(name) DO UPDATE SET val = excluded.val
            "#,
        )
        .bind(name)
        .bind(val)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Seed the default preference rows, leaving existing values alone.
    /// Called on install.
    pub async fn seed_default_prefs(&self) -> Result<()> {
        let defaults = [
            (PREF_ALIAS_FIELDS, DEFAULT_ALIAS_FIELDS),
            (PREF_REDIRECT_PERMANENT, DEFAULT_REDIRECT_PERMANENT),
            (PREF_SHOW_FIELD_VALIDITY, DEFAULT_SHOW_FIELD_VALIDITY),
        ];
        for (name, val) in defaults {
            sqlx::query("INSERT OR IGNORE INTO prefs (name, val) VALUES (?1, ?2)")
                .bind(name)
                .bind(val)
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }

    /// Remove every preference row. Called on uninstall so the store is left
    /// clean. Returns the number of rows removed.
    pub async fn remove_all_prefs(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM prefs").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Load the typed preference view. Stored garbage degrades to defaults;
    /// this never fails on content, only on store errors.
    pub async fn load_preferences(&self) -> Result<Preferences> {
        let fields = self
            .get_pref(PREF_ALIAS_FIELDS, DEFAULT_ALIAS_FIELDS)
            .await?;
        let permanent = self
            .get_pref(PREF_REDIRECT_PERMANENT, DEFAULT_REDIRECT_PERMANENT)
            .await?;
        let validity = self
            .get_pref(PREF_SHOW_FIELD_VALIDITY, DEFAULT_SHOW_FIELD_VALIDITY)
            .await?;

        Ok(Preferences {
            alias_fields: AliasFieldSet::parse(&fields),
            redirect_permanent: stored_flag(&permanent),
            show_field_validity: stored_flag(&validity),
        })
    }
}
