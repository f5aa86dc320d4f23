pub mod cli;
pub mod connect;
pub mod error;
pub mod inventory;
pub mod output;
pub mod session;
pub mod vsphere;

use crate::cli::Cli;
use crate::connect::{resolve, CredentialOverride, ENV_URL};
use crate::error::ScoutError;
use crate::inventory::fetcher::fetch_inventory;
use crate::output::{print_table, render_rows};
use crate::session::acquire_client;

/// Runs one invocation: resolve credentials, acquire a session, fetch the
/// requested kinds and print the table.
pub async fn run(cli: Cli) -> Result<(), ScoutError> {
    let kinds = cli.command.kinds();

    let raw_url = cli
        .url
        .as_deref()
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ScoutError::Usage(format!("url must be set (--url or {ENV_URL})")))?;

    let overrides = CredentialOverride::from_env();
    let target = resolve(raw_url, &overrides, cli.insecure_tls())?;

    let client = acquire_client(&target).await?;
    let inventory = fetch_inventory(&client, kinds).await?;

    let rows = render_rows(&inventory, kinds, &cli.name);
    print_table(&mut std::io::stdout().lock(), &rows)?;

    Ok(())
}
