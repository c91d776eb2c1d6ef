use clap::Parser;
use eyre::Result;
use std::time::Duration;
use waveportal::Portal;
use waveportal_cli::opts::PortalOpts;
use yansi::Paint;

/// CLI arguments for `wave send`.
#[derive(Clone, Debug, Parser)]
pub struct SendArgs {
    /// The message to send. It is sent as-is, even if empty.
    pub message: String,
}

impl SendArgs {
    pub async fn run(self, opts: &PortalOpts) -> Result<()> {
        let (config, mut portal) = super::mount(opts).await?;
        submit(&mut portal, self.message, config.poll_interval() * 2).await;
        super::render(&portal);
        portal.unmount();
        Ok(())
    }
}

/// Connects if needed and sends `message`, then waits up to `wait` for its notification.
///
/// A wave that isn't sent is only logged.
pub async fn submit(portal: &mut Portal, message: String, wait: Duration) {
    if !portal.session().is_connected() {
        portal.connect().await;
    }
    portal.set_draft(message);

    let mut changes = portal.waves().changes();
    let Some(outcome) = portal.wave().await else {
        warn!("the wave was not sent");
        return;
    };

    anstream::println!("Mined {}", outcome.tx_hash);
    if outcome.won_reward() {
        anstream::println!("{}", "You won some ETH!".green());
    }
    anstream::println!("Total waves: {}", outcome.total_waves);

    if tokio::time::timeout(wait, changes.changed()).await.is_err() {
        debug!(?wait, "NewWave not received yet");
    }
}
