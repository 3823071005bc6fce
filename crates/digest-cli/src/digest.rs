//! `run` and `recent` command handlers.

use anyhow::Context;

use digest_db::OwnerRow;
use digest_pipeline::{build_daily_digest, DigestConfig};

/// Build today's digest and upsert it under `(owner, title)`.
///
/// Configuration problems are fatal here, before any network call. Source
/// and enrichment failures are recovered inside the pipeline; only a
/// persistence failure (or a missing owner) aborts the run.
///
/// # Errors
///
/// Returns an error if config is incomplete, the owner cannot be resolved,
/// or the database write fails.
pub(crate) async fn run(dry_run: bool) -> anyhow::Result<()> {
    let config = DigestConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;

    if dry_run {
        let digest = build_daily_digest(&config).await?;
        println!("{}", digest.body);
        return Ok(());
    }

    let pool = digest_db::connect_pool_from_env().await?;
    let owner = resolve_owner(&pool, &config.owner_email).await?;

    let digest = build_daily_digest(&config).await?;
    let outcome = digest_db::upsert_digest(&pool, owner.id, &digest.title, &digest.body).await?;

    println!(
        "{}: {} ({} ideas)",
        digest.title,
        outcome.as_str(),
        digest.idea_count
    );
    Ok(())
}

/// List the configured owner's recent digests, newest first.
///
/// # Errors
///
/// Returns an error if config is incomplete, the owner cannot be resolved,
/// or the query fails.
pub(crate) async fn recent(limit: i64) -> anyhow::Result<()> {
    let config = DigestConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let pool = digest_db::connect_pool_from_env().await?;
    let owner = resolve_owner(&pool, &config.owner_email).await?;

    let rows = digest_db::list_digests(&pool, owner.id, limit).await?;
    if rows.is_empty() {
        println!("no digests yet");
        return Ok(());
    }
    for row in rows {
        println!(
            "{}  (updated {})",
            row.title,
            row.updated_at.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

async fn resolve_owner(pool: &sqlx::PgPool, email: &str) -> anyhow::Result<OwnerRow> {
    digest_db::find_owner_by_email(pool, email)
        .await?
        .with_context(|| format!("no owner found for email {email}"))
}
