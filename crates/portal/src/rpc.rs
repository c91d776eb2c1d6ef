//! [`WavePortalApi`] over JSON-RPC.

use crate::{
    abi::WavePortal::{self, WavePortalInstance},
    error::{PortalError, Result},
    events::{NewWaveHandler, Subscription},
    gateway::WavePortalApi,
};
use alloy_network::ReceiptResponse;
use alloy_primitives::{Address, TxHash, U256};
use alloy_provider::{DynProvider, Provider};
use async_trait::async_trait;
use futures::StreamExt;
use std::{fmt, time::Duration};

/// The deployed wave portal, reached through an alloy provider.
#[derive(Clone)]
pub struct RpcWavePortal {
    contract: WavePortalInstance<DynProvider>,
    poll_interval: Option<Duration>,
}

impl RpcWavePortal {
    /// Binds the contract deployed at `address`.
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self { contract: WavePortal::new(address, provider), poll_interval: None }
    }

    /// Sets how often the `NewWave` filter is polled.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = Some(poll_interval);
        self
    }
}

impl fmt::Debug for RpcWavePortal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcWavePortal")
            .field("address", self.contract.address())
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

#[async_trait]
impl WavePortalApi for RpcWavePortal {
    fn address(&self) -> Address {
        *self.contract.address()
    }

    async fn total_waves(&self) -> Result<U256> {
        Ok(self.contract.getTotalWaves().call().await?)
    }

    async fn all_waves(&self) -> Result<Vec<WavePortal::Wave>> {
        Ok(self.contract.getAllWaves().call().await?)
    }

    async fn contract_balance(&self) -> Result<U256> {
        Ok(self.contract.provider().get_balance(self.address()).await?)
    }

    async fn send_wave(&self, from: Address, message: String, gas_limit: u64) -> Result<TxHash> {
        let pending = self.contract.wave(message).from(from).gas(gas_limit).send().await?;
        let tx_hash = *pending.tx_hash();
        info!(%tx_hash, "mining");

        let receipt = pending.get_receipt().await?;
        ensure_success(&receipt)
    }

    async fn watch_new_waves(&self, handler: NewWaveHandler) -> Result<Subscription> {
        let mut poller = self.contract.NewWave_filter().watch().await?;
        if let Some(poll_interval) = self.poll_interval {
            poller.poller = poller.poller.with_poll_interval(poll_interval);
        }

        let task = tokio::spawn(async move {
            let mut events = poller.into_stream();
            while let Some(event) = events.next().await {
                match event {
                    Ok((event, log)) => {
                        trace!(tx_hash = ?log.transaction_hash, "NewWave log");
                        handler(event);
                    }
                    Err(err) => warn!(%err, "failed to decode NewWave log"),
                }
            }
            debug!("NewWave stream ended");
        });

        Ok(Subscription::from_task(task))
    }
}

/// Returns the hash of an included transaction, or [`PortalError::Reverted`] if it failed.
fn ensure_success<R: ReceiptResponse>(receipt: &R) -> Result<TxHash> {
    let tx_hash = receipt.transaction_hash();
    if !receipt.status() {
        warn!(%tx_hash, "wave transaction reverted");
        return Err(PortalError::Reverted(tx_hash));
    }
    debug!(%tx_hash, block = ?receipt.block_number(), gas_used = receipt.gas_used(), "included");
    Ok(tx_hash)
}
