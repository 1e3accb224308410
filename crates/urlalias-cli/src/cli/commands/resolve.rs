//! `urlalias resolve <request-uri>` – print the redirect for a request.

use anyhow::Result;
use urlalias_core::config::ProductionStatus;
use urlalias_core::plugin::UrlAlias;
use urlalias_core::redirect::Outcome;
use urlalias_core::store::AliasDb;

pub async fn run_resolve(
    db: &AliasDb,
    production: ProductionStatus,
    request_uri: &str,
) -> Result<()> {
    let plugin = UrlAlias::new(db.clone(), production);
    match plugin.on_incoming_request(request_uri).await {
        Some(Outcome::Redirect(r)) => {
            println!("{} {}", r.status, r.status_text);
            println!("Location: {}", r.location);
        }
        Some(Outcome::Debug(location)) => {
            println!("[urlalias] redirect to {location}");
        }
        None => println!("no alias match"),
    }
    Ok(())
}
