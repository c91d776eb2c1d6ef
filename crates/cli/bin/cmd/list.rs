use eyre::Result;
use waveportal_cli::opts::PortalOpts;

/// Runs `wave list`.
pub async fn run(opts: &PortalOpts) -> Result<()> {
    let (_, portal) = super::mount(opts).await?;
    super::render(&portal);
    portal.unmount();
    Ok(())
}
