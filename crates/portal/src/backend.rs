//! The wallet and contract pair standing in for an injected provider.

use crate::{
    connection::{LocalWallet, RpcWallet, WalletProvider},
    error::{PortalError, Result},
    gateway::WavePortalApi,
    rpc::RpcWavePortal,
};
use alloy_network::EthereumWallet;
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use std::sync::Arc;
use url::Url;
use waveportal_config::Config;

/// A wallet provider together with the contract it signs for.
#[derive(Clone, Debug)]
pub struct Backend {
    /// Account queries.
    pub wallet: Arc<dyn WalletProvider>,
    /// The wave portal contract.
    pub contract: Arc<dyn WavePortalApi>,
}

impl Backend {
    /// Pairs a wallet with a contract.
    pub fn new(wallet: Arc<dyn WalletProvider>, contract: Arc<dyn WavePortalApi>) -> Self {
        Self { wallet, contract }
    }

    /// Connects to the node configured in `config`.
    ///
    /// Returns `Ok(None)` when no RPC endpoint is configured, which the portal treats as an
    /// absent provider. With a `wallet`, transactions are signed locally; otherwise the
    /// node's own accounts are used.
    pub fn from_config(config: &Config, wallet: Option<LocalWallet>) -> Result<Option<Self>> {
        let Some(rpc_url) = config.rpc_url() else {
            debug!("no RPC endpoint configured");
            return Ok(None);
        };
        let url = Url::parse(rpc_url)
            .map_err(|source| PortalError::InvalidRpcUrl { url: rpc_url.to_string(), source })?;
        debug!(%url, contract = %config.contract_address, "connecting");

        let (provider, wallet): (DynProvider, Arc<dyn WalletProvider>) = match wallet {
            Some(wallet) => {
                let signer = EthereumWallet::from(wallet.signer().clone());
                let provider = ProviderBuilder::new().wallet(signer).connect_http(url).erased();
                (provider, Arc::new(wallet))
            }
            None => {
                let provider = ProviderBuilder::new().connect_http(url).erased();
                (provider.clone(), Arc::new(RpcWallet::new(provider)))
            }
        };

        let contract = RpcWavePortal::new(config.contract_address, provider)
            .with_poll_interval(config.poll_interval());

        Ok(Some(Self::new(wallet, Arc::new(contract))))
    }
}
