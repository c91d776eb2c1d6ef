//! Wallet providers and the [`ConnectionManager`].
//!
//! A wallet provider is the subset of an [EIP-1193](https://eips.ethereum.org/EIPS/eip-1193)
//! provider the portal needs: a silent `eth_accounts` query and a prompting
//! `eth_requestAccounts` query, each answering with a list of addresses.

use crate::{
    alert::{Alert, NO_PROVIDER_ALERT},
    error::{PortalError, Result},
};
use alloy_primitives::{Address, B256, hex::FromHex};
use alloy_provider::{DynProvider, Provider};
use alloy_signer_local::PrivateKeySigner;
use alloy_transport::TransportError;
use async_trait::async_trait;
use std::{fmt, sync::Arc};

/// JSON-RPC error code for an unknown method.
const METHOD_NOT_FOUND: i64 = -32601;

/// The account queries of an EIP-1193 provider.
#[async_trait]
pub trait WalletProvider: Send + Sync + fmt::Debug {
    /// `eth_accounts`: accounts already authorized, without prompting the user.
    async fn accounts(&self) -> Result<Vec<Address>>;

    /// `eth_requestAccounts`: asks the user to authorize accounts.
    async fn request_accounts(&self) -> Result<Vec<Address>>;
}

/// Accounts managed by the node itself, queried over JSON-RPC.
#[derive(Clone)]
pub struct RpcWallet {
    provider: DynProvider,
}

impl RpcWallet {
    /// Creates a wallet backed by `provider`.
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

impl fmt::Debug for RpcWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcWallet").finish_non_exhaustive()
    }
}

#[async_trait]
impl WalletProvider for RpcWallet {
    async fn accounts(&self) -> Result<Vec<Address>> {
        Ok(self.provider.get_accounts().await?)
    }

    async fn request_accounts(&self) -> Result<Vec<Address>> {
        match self.provider.raw_request::<_, Vec<Address>>("eth_requestAccounts".into(), ()).await
        {
            Ok(accounts) => Ok(accounts),
            // dev nodes only know the silent variant
            Err(err) if is_method_not_found(&err) => {
                debug!("eth_requestAccounts is not supported by the node, using eth_accounts");
                self.accounts().await
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn is_method_not_found(err: &TransportError) -> bool {
    err.as_error_resp().is_some_and(|payload| payload.code == METHOD_NOT_FOUND)
}

/// A wallet holding a single private key. Its own address is always authorized.
#[derive(Clone, Debug)]
pub struct LocalWallet {
    signer: PrivateKeySigner,
}

impl LocalWallet {
    /// Creates a wallet from a signer.
    pub fn new(signer: PrivateKeySigner) -> Self {
        Self { signer }
    }

    /// Creates a wallet from a hex encoded private key, with or without `0x` prefix.
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        let bytes = B256::from_hex(private_key.trim()).map_err(|_| PortalError::InvalidPrivateKey)?;
        let signer =
            PrivateKeySigner::from_bytes(&bytes).map_err(|_| PortalError::InvalidPrivateKey)?;
        Ok(Self::new(signer))
    }

    /// The wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// The signer used to sign transactions.
    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }
}

#[async_trait]
impl WalletProvider for LocalWallet {
    async fn accounts(&self) -> Result<Vec<Address>> {
        Ok(vec![self.address()])
    }

    async fn request_accounts(&self) -> Result<Vec<Address>> {
        Ok(vec![self.address()])
    }
}

/// Detects the wallet provider and asks it for authorized accounts.
///
/// Failures never propagate: they are logged, except for a connection request without any
/// provider, which raises an [`Alert`].
#[derive(Clone)]
pub struct ConnectionManager {
    wallet: Option<Arc<dyn WalletProvider>>,
    alert: Arc<dyn Alert>,
}

impl fmt::Debug for ConnectionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionManager").field("wallet", &self.wallet).finish_non_exhaustive()
    }
}

impl ConnectionManager {
    /// Creates a manager. `wallet` is `None` when no provider is available.
    pub fn new(wallet: Option<Arc<dyn WalletProvider>>, alert: Arc<dyn Alert>) -> Self {
        Self { wallet, alert }
    }

    /// Whether a wallet provider is available.
    pub fn has_provider(&self) -> bool {
        self.wallet.is_some()
    }

    /// Returns the first already-authorized account, without prompting.
    pub async fn check_existing_authorization(&self) -> Option<Address> {
        let Some(wallet) = &self.wallet else {
            warn!("make sure you have a wallet provider configured");
            return None;
        };
        debug!(?wallet, "found a wallet provider");

        match wallet.accounts().await {
            Ok(accounts) => match accounts.first().copied() {
                Some(account) => {
                    info!(%account, "found an authorized account");
                    Some(account)
                }
                None => {
                    info!("no authorized account found");
                    None
                }
            },
            Err(err) => {
                error!(%err, "failed to query authorized accounts");
                None
            }
        }
    }

    /// Asks the wallet to authorize an account and returns the first one granted.
    pub async fn request_connection(&self) -> Option<Address> {
        let Some(wallet) = &self.wallet else {
            self.alert.alert(NO_PROVIDER_ALERT);
            return None;
        };

        match wallet.request_accounts().await {
            Ok(accounts) => {
                let account = accounts.first().copied();
                match account {
                    Some(account) => info!(%account, "connected"),
                    None => warn!("the wallet granted no accounts"),
                }
                account
            }
            Err(err) => {
                error!(%err, "connection request failed");
                None
            }
        }
    }
}
