use eyre::Result;
use waveportal_cli::opts::PortalOpts;

/// Runs `wave watch`.
pub async fn run(opts: &PortalOpts) -> Result<()> {
    let (_, portal) = super::mount(opts).await?;
    if !portal.is_subscribed() {
        warn!("not subscribed to new waves, the portal won't update");
    }

    let mut changes = portal.waves().changes();
    super::render(&portal);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                super::render(&portal);
            }
        }
    }

    portal.unmount();
    Ok(())
}
