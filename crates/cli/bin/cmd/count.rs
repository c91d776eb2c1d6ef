use eyre::Result;
use waveportal::ContractGateway;
use waveportal_cli::opts::PortalOpts;

/// Runs `wave count`.
pub async fn run(opts: &PortalOpts) -> Result<()> {
    let config = opts.load_config()?;
    let Some(backend) = opts.backend(&config)? else {
        warn!("make sure you have a wallet provider configured, can't read the wave count");
        return Ok(());
    };
    let gateway = ContractGateway::new(backend.contract, config.gas_limit);
    match gateway.fetch_wave_count().await {
        Ok(count) => anstream::println!("{count}"),
        Err(err) => error!(%err, "failed to read the wave count"),
    }
    Ok(())
}
