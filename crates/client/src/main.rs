//! `masjid-admin` -- export one page of a dashboard list as CSV.
//!
//! ```text
//! masjid-admin <program|stakeholders|beneficiaries|employee> [search] [page]
//! ```
//!
//! Reads the signed-in session from `SESSION_FILE` and prints the rows to
//! stdout. See [`masjid_client::config::ClientConfig::from_env`] for the
//! environment variables.

use std::sync::Arc;

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use masjid_client::config::ClientConfig;
use masjid_client::notify::TracingNotifier;
use masjid_client::session::MemorySession;
use masjid_client::{ClientContext, ListController};
use masjid_core::export::{to_csv, Tabular};
use masjid_core::list::ListQuery;
use masjid_core::models::{Beneficiary, Employee, Program, Stakeholder};
use masjid_core::pagination::item_range;
use masjid_core::resource::Resource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "masjid_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let resource = args.next().unwrap_or_else(|| Program::PATH.to_string());
    let search = args.next().unwrap_or_default();
    let page: u32 = match args.next() {
        Some(raw) => raw.parse().with_context(|| format!("invalid page: {raw}"))?,
        None => 1,
    };

    let config = ClientConfig::from_env();
    let session = MemorySession::from_file(&config.session_file)
        .with_context(|| format!("reading session from {}", config.session_file.display()))?;
    let ctx = ClientContext::from_config(&config, Arc::new(session), Arc::new(TracingNotifier))?;

    tracing::info!(resource = %resource, search = %search, page, "Exporting list");

    let csv = if resource == Program::PATH {
        export::<Program>(ctx, search, page).await?
    } else if resource == Stakeholder::PATH {
        export::<Stakeholder>(ctx, search, page).await?
    } else if resource == Beneficiary::PATH {
        export::<Beneficiary>(ctx, search, page).await?
    } else if resource == Employee::PATH {
        export::<Employee>(ctx, search, page).await?
    } else {
        bail!("unknown resource: {resource}");
    };
    print!("{csv}");
    Ok(())
}

async fn export<R: Resource + Tabular>(
    ctx: ClientContext,
    search: String,
    page: u32,
) -> anyhow::Result<String> {
    let query = ListQuery {
        search,
        page: page.max(1),
        ..ListQuery::with_limit(ctx.page_size)
    };
    let mut list = ListController::<R>::with_query(ctx, query);
    list.refetch().await?;

    match item_range(list.query().page, list.query().limit, list.total()) {
        Some((first, last)) => tracing::info!(
            first,
            last,
            total = list.total(),
            pages = list.total_pages(),
            "{} rows fetched",
            R::LABEL
        ),
        None => tracing::info!("No {} rows", R::LABEL),
    }
    Ok(to_csv(list.items()))
}
