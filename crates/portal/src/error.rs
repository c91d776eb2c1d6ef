use alloy_primitives::{TxHash, U256};
use alloy_provider::PendingTransactionError;
use alloy_transport::TransportError;

/// Errors raised while talking to the wallet or the wave portal contract.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("the wallet rejected the request: {0}")]
    Rejected(String),
    #[error("invalid RPC url {url:?}: {source}")]
    InvalidRpcUrl { url: String, source: url::ParseError },
    #[error("failed to decode private key")]
    InvalidPrivateKey,
    #[error("wave timestamp {0} is out of range")]
    TimestampOutOfRange(U256),
    #[error("total wave count {0} does not fit in 64 bits")]
    CountOutOfRange(U256),
    #[error("transaction {0} was reverted")]
    Reverted(TxHash),
    #[error(transparent)]
    Contract(#[from] alloy_contract::Error),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    PendingTransaction(#[from] PendingTransactionError),
}

/// Alias for results returned by this crate.
pub type Result<T, E = PortalError> = std::result::Result<T, E>;

impl PortalError {
    /// What the user can change to get past this error, if anything.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidRpcUrl { .. } => Some("check --rpc-url or ETH_RPC_URL"),
            Self::InvalidPrivateKey => Some("check --private-key or ETH_PRIVATE_KEY"),
            Self::Transport(_) | Self::Contract(alloy_contract::Error::TransportError(_)) => {
                Some("make sure the node behind --rpc-url is reachable")
            }
            Self::Contract(_) => Some("make sure --contract points at a wave portal deployment"),
            Self::Rejected(_)
            | Self::TimestampOutOfRange(_)
            | Self::CountOutOfRange(_)
            | Self::Reverted(_)
            | Self::PendingTransaction(_) => None,
        }
    }
}
