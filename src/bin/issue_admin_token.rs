//! Issue a bearer token for the /admin routes.
//!
//! Usage: `issue-admin-token <operator>`. Reads `ADMIN_JWT_SECRET` and
//! `ADMIN_JWT_EXPIRATION_HOURS` (default 12).

use anyhow::{bail, Context};
use greeting_catalog::domain::auth::JwtManager;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let Some(subject) = std::env::args().nth(1).filter(|s| !s.trim().is_empty()) else {
        bail!("usage: issue-admin-token <operator>");
    };

    let secret =
        std::env::var("ADMIN_JWT_SECRET").context("Missing environment variable ADMIN_JWT_SECRET")?;
    let expiration_hours = match std::env::var("ADMIN_JWT_EXPIRATION_HOURS") {
        Ok(hours) => hours
            .parse()
            .context("ADMIN_JWT_EXPIRATION_HOURS must be a whole number of hours")?,
        Err(_) => 12,
    };

    let token = JwtManager::new(secret, expiration_hours).generate_token(subject.trim())?;
    println!("{}", token);

    Ok(())
}
