#[macro_use]
extern crate tracing;

use clap::Parser;
use eyre::Result;
use waveportal_cli::{handler, utils};

mod args;
mod cmd;

use args::{WaveArgs, WaveSubcommand};

fn main() -> Result<()> {
    handler::install();
    utils::subscriber();
    utils::enable_paint();
    let args = WaveArgs::parse();
    main_args(args)
}

#[tokio::main]
async fn main_args(args: WaveArgs) -> Result<()> {
    let WaveArgs { portal, cmd } = args;
    match cmd {
        WaveSubcommand::Connect => cmd::connect::run(&portal).await,
        WaveSubcommand::List => cmd::list::run(&portal).await,
        WaveSubcommand::Send(cmd) => cmd.run(&portal).await,
        WaveSubcommand::Watch => cmd::watch::run(&portal).await,
        WaveSubcommand::Count => cmd::count::run(&portal).await,
    }
}
