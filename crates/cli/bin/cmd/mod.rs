use eyre::Result;
use std::sync::Arc;
use waveportal::Portal;
use waveportal_cli::{alert::TerminalAlert, opts::PortalOpts};
use waveportal_config::Config;

pub mod connect;
pub mod count;
pub mod list;
pub mod send;
pub mod watch;

/// Loads the config and mounts a portal on it.
pub async fn mount(opts: &PortalOpts) -> Result<(Config, Portal)> {
    let config = opts.load_config()?;
    let backend = opts.backend(&config)?;
    let portal = Portal::mount(backend, Arc::new(TerminalAlert), config.gas_limit).await;
    Ok((config, portal))
}

/// Draws the portal on stdout.
pub fn render(portal: &Portal) {
    anstream::println!("{}", portal.view());
}
