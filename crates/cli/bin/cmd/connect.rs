use eyre::Result;
use waveportal_cli::opts::PortalOpts;

/// Runs `wave connect`.
pub async fn run(opts: &PortalOpts) -> Result<()> {
    let (_, mut portal) = super::mount(opts).await?;
    if !portal.session().is_connected() {
        portal.connect().await;
    }
    super::render(&portal);
    portal.unmount();
    Ok(())
}
