//! The [`WavePortalApi`] seam and the [`ContractGateway`] built on it.

use crate::{
    abi::WavePortal,
    error::{PortalError, Result},
    events::{NewWaveHandler, Subscription},
    wave::Wave,
};
use alloy_primitives::{Address, TxHash, U256, utils::format_ether};
use async_trait::async_trait;
use std::{fmt, sync::Arc};

/// Operations exposed by the remote wave portal contract.
#[async_trait]
pub trait WavePortalApi: Send + Sync + fmt::Debug {
    /// Address of the contract.
    fn address(&self) -> Address;

    /// `getTotalWaves()`
    async fn total_waves(&self) -> Result<U256>;

    /// `getAllWaves()`
    async fn all_waves(&self) -> Result<Vec<WavePortal::Wave>>;

    /// Balance held by the contract, in wei.
    async fn contract_balance(&self) -> Result<U256>;

    /// `wave(message)` sent from `from` with at most `gas_limit` gas. Resolves once the
    /// transaction is included, with its hash.
    async fn send_wave(&self, from: Address, message: String, gas_limit: u64) -> Result<TxHash>;

    /// Registers `handler` for `NewWave` notifications until the returned handle is released.
    async fn watch_new_waves(&self, handler: NewWaveHandler) -> Result<Subscription>;
}

/// What happened to a submitted wave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaveOutcome {
    /// Hash of the included transaction.
    pub tx_hash: TxHash,
    /// Total number of waves after inclusion.
    pub total_waves: u64,
    /// Contract balance before submission.
    pub balance_before: U256,
    /// Contract balance after inclusion.
    pub balance_after: U256,
}

impl WaveOutcome {
    /// Whether the contract paid the sender: its balance went down.
    pub fn won_reward(&self) -> bool {
        self.balance_after < self.balance_before
    }
}

/// Reads and submits waves through a [`WavePortalApi`].
#[derive(Clone, Debug)]
pub struct ContractGateway {
    api: Arc<dyn WavePortalApi>,
    gas_limit: u64,
}

impl ContractGateway {
    /// Gas ceiling used by [`ContractGateway::new`] callers that have no configuration.
    pub const DEFAULT_GAS_LIMIT: u64 = 300_000;

    /// Creates a gateway submitting waves with at most `gas_limit` gas.
    pub fn new(api: Arc<dyn WavePortalApi>, gas_limit: u64) -> Self {
        Self { api, gas_limit }
    }

    /// The underlying contract.
    pub fn api(&self) -> &Arc<dyn WavePortalApi> {
        &self.api
    }

    /// The gas ceiling of submitted waves.
    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    /// Returns the total number of waves stored by the contract.
    pub async fn fetch_wave_count(&self) -> Result<u64> {
        let raw = self.api.total_waves().await?;
        let count = u64::try_from(raw).map_err(|_| PortalError::CountOutOfRange(raw))?;
        info!(count, "retrieved total wave count");
        Ok(count)
    }

    /// Returns every stored wave, in storage order.
    ///
    /// Entries that can't be represented are skipped, the same way malformed `NewWave`
    /// notifications are.
    pub async fn fetch_all_waves(&self) -> Result<Vec<Wave>> {
        let waves = self.api.all_waves().await?;
        debug!(count = waves.len(), "retrieved all waves");
        Ok(waves
            .into_iter()
            .enumerate()
            .filter_map(|(index, wave)| {
                Wave::try_from(wave)
                    .inspect_err(|err| warn!(index, %err, "skipping malformed wave"))
                    .ok()
            })
            .collect())
    }

    /// Sends a wave from `from` and waits for it to be included.
    ///
    /// The count and the contract balance are read before and after; whether the balance
    /// went down is logged and reported in the outcome. The new wave itself only reaches the
    /// local list through the `NewWave` notification.
    pub async fn submit_wave(&self, from: Address, message: &str) -> Result<WaveOutcome> {
        self.fetch_wave_count().await?;
        let balance_before = self.api.contract_balance().await?;
        info!(balance = %format_ether(balance_before), "contract balance");
        debug!(%from, gas_limit = self.gas_limit, "sending wave");

        let tx_hash = self.api.send_wave(from, message.to_string(), self.gas_limit).await?;
        info!(%tx_hash, "mined");

        let total_waves = self.fetch_wave_count().await?;
        let balance_after = self.api.contract_balance().await?;
        let outcome = WaveOutcome { tx_hash, total_waves, balance_before, balance_after };

        if outcome.won_reward() {
            info!("sender won ETH!");
        } else {
            info!("sender didn't win ETH");
        }
        info!(balance = %format_ether(balance_after), "contract balance after wave");

        Ok(outcome)
    }
}
