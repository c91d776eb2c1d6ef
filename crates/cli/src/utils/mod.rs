use eyre::Result;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use waveportal::LocalWallet;

/// Initializes a tracing Subscriber for logging
pub fn subscriber() {
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Colors the output only when it goes to a terminal that supports it.
pub fn enable_paint() {
    let enable = yansi::Condition::os_support() && yansi::Condition::tty_and_color_live();
    yansi::whenever(yansi::Condition::cached(enable));
}

/// Creates a local wallet from a hex encoded private key.
pub fn local_wallet(private_key: &str) -> Result<LocalWallet> {
    let private_key = private_key.trim();
    match LocalWallet::from_private_key(private_key) {
        Ok(wallet) => Ok(wallet),
        Err(err) => {
            ensure_pk_not_env(private_key)?;
            Err(err.into())
        }
    }
}

/// Catches the name of an environment variable passed where its value was meant.
fn ensure_pk_not_env(pk: &str) -> Result<()> {
    if !pk.starts_with("0x") && std::env::var(pk).is_ok() {
        eyre::bail!(
            "failed to decode private key: `{pk}` is an environment variable, use `${pk}` instead"
        );
    }
    Ok(())
}
