use crate::cmd::send::SendArgs;
use clap::{Parser, Subcommand};
use waveportal_cli::opts::PortalOpts;

/// Wave at a wave portal contract from your terminal.
#[derive(Debug, Parser)]
#[command(name = "wave", version, next_display_order = None)]
pub struct WaveArgs {
    #[command(flatten)]
    pub portal: PortalOpts,

    #[command(subcommand)]
    pub cmd: WaveSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum WaveSubcommand {
    /// Ask the wallet to connect an account, then show the portal.
    Connect,

    /// Show the portal and every wave received so far.
    #[command(visible_alias = "ls")]
    List,

    /// Send a wave with a message.
    Send(SendArgs),

    /// Show the portal and redraw it whenever a wave arrives, until interrupted.
    Watch,

    /// Print the total number of waves.
    Count,
}
