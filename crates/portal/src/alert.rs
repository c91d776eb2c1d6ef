//! User facing alerts.

/// Shown when a connection is requested and no wallet provider is available.
pub const NO_PROVIDER_ALERT: &str =
    "Get a wallet: no Ethereum provider is configured (set --rpc-url or ETH_RPC_URL)";

/// A blocking, user visible notification.
///
/// This is the only path by which a failure reaches the user; everything else is logged.
pub trait Alert: Send + Sync {
    /// Shows `message` and returns once the user has acknowledged it.
    fn alert(&self, message: &str);
}

impl<F> Alert for F
where
    F: Fn(&str) + Send + Sync,
{
    fn alert(&self, message: &str) {
        self(message)
    }
}
