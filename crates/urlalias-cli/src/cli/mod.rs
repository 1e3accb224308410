//! CLI for the urlalias redirect engine.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use urlalias_core::config;
use urlalias_core::store::AliasDb;

use commands::{
    run_article_add, run_article_set_field, run_clear, run_diag, run_install, run_list,
    run_prefs_set, run_prefs_show, run_resolve, run_uninstall,
};

/// Top-level CLI for the urlalias redirect engine.
#[derive(Debug, Parser)]
#[command(name = "urlalias")]
#[command(about = "urlalias: map request paths to canonical article URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a request URI and print the redirect that would be issued.
    Resolve {
        /// Request URI including any query string, e.g. "/blog/old-post?ref=x".
        request_uri: String,
    },

    /// List configured aliases.
    List {
        /// Sort column: id, title, or alias. Persisted for later runs.
        #[arg(long)]
        sort: Option<String>,
        /// Sort direction: asc or desc. Persisted for later runs.
        #[arg(long)]
        dir: Option<String>,
        /// Substring filter on alias or title; a number also matches an article id.
        #[arg(long)]
        filter: Option<String>,
        /// 1-based page number.
        #[arg(long, default_value = "1")]
        page: u32,
        /// Rows per page (default from config).
        #[arg(long)]
        per_page: Option<u32>,
    },

    /// Bulk-remove aliases by article and slot, e.g. "42:3".
    Clear {
        /// Selected entries as ID:FIELD pairs.
        #[arg(required = true, value_name = "ID:FIELD")]
        selected: Vec<String>,
    },

    /// Show or change preferences.
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },

    /// Run installation diagnostics (duplicate and malformed aliases).
    Diag,

    /// Article maintenance for seeding and testing.
    Article {
        #[command(subcommand)]
        action: ArticleAction,
    },

    /// Seed default preferences.
    Install,

    /// Remove all plugin preferences.
    Uninstall,
}

#[derive(Debug, Subcommand)]
pub enum PrefsAction {
    /// Print the current preferences.
    Show,

    /// Update preferences; omitted flags keep their current values.
    Set {
        /// Comma-separated alias field slots (1..=10), e.g. "2,5,7".
        #[arg(long)]
        fields: Option<String>,
        /// Permanent redirects: "1" for 301 (when live), "0" for 302.
        #[arg(long)]
        permanent: Option<String>,
        /// Show validity hints on article fields: "1" or "0".
        #[arg(long)]
        validity_hint: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ArticleAction {
    /// Add an article with its canonical URL.
    Add {
        title: String,
        /// Canonical (absolute) URL of the article.
        url: String,
        /// Publication status: live, hidden, pending, draft, or sticky.
        #[arg(long, default_value = "live")]
        status: String,
    },

    /// Set one alias slot on an article (empty value removes the alias).
    SetField {
        id: i64,
        /// Slot number 1..=10.
        field: u8,
        value: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let db = match &cfg.db_path {
            Some(path) => AliasDb::open_at(path).await?,
            None => AliasDb::open_default().await?,
        };

        match cli.command {
            CliCommand::Resolve { request_uri } => {
                run_resolve(&db, cfg.production_status, &request_uri).await?
            }
            CliCommand::List {
                sort,
                dir,
                filter,
                page,
                per_page,
            } => {
                let per_page = per_page.unwrap_or(cfg.default_per_page);
                run_list(&db, sort.as_deref(), dir.as_deref(), filter, page, per_page).await?
            }
            CliCommand::Clear { selected } => run_clear(&db, &selected).await?,
            CliCommand::Prefs { action } => match action {
                PrefsAction::Show => run_prefs_show(&db).await?,
                PrefsAction::Set {
                    fields,
                    permanent,
                    validity_hint,
                } => run_prefs_set(&db, fields.as_deref(), permanent, validity_hint).await?,
            },
            CliCommand::Diag => run_diag(&db).await?,
            CliCommand::Article { action } => match action {
                ArticleAction::Add { title, url, status } => {
                    run_article_add(&db, &title, &url, &status).await?
                }
                ArticleAction::SetField { id, field, value } => {
                    run_article_set_field(&db, id, field, &value).await?
                }
            },
            CliCommand::Install => run_install(&db).await?,
            CliCommand::Uninstall => run_uninstall(&db).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
