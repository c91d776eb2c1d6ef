use crate::utils;
use alloy_primitives::Address;
use clap::Parser;
use eyre::Result;
use serde::Serialize;
use waveportal::Backend;
use waveportal_config::{
    Config,
    figment::{
        self, Metadata, Profile,
        error::Kind::InvalidType,
        value::{Dict, Map, Value},
    },
};

/// Options selecting the node, the wallet and the contract.
#[derive(Clone, Debug, Default, Serialize, Parser)]
#[command(next_help_heading = "Portal options")]
pub struct PortalOpts {
    /// The RPC endpoint of the node backing the wallet.
    ///
    /// Without an endpoint no wallet provider is available.
    #[arg(
        long = "rpc-url",
        short = 'r',
        visible_alias = "url",
        env = "ETH_RPC_URL",
        value_name = "URL",
        global = true
    )]
    #[serde(rename = "eth_rpc_url", skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,

    /// The address of the wave portal contract.
    #[arg(long, value_name = "ADDRESS", global = true)]
    #[serde(rename = "contract_address", skip_serializing_if = "Option::is_none")]
    pub contract: Option<Address>,

    /// Gas limit of wave transactions.
    #[arg(long, value_name = "GAS", global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<u64>,

    /// How often to poll the node for new waves, in milliseconds.
    #[arg(long = "poll-interval", value_name = "MILLIS", global = true)]
    #[serde(rename = "poll_interval_ms", skip_serializing_if = "Option::is_none")]
    pub poll_interval: Option<u64>,

    /// Sign with this private key instead of the node's unlocked accounts.
    #[arg(
        long,
        env = "ETH_PRIVATE_KEY",
        value_name = "RAW_PRIVATE_KEY",
        hide_env_values = true,
        global = true
    )]
    #[serde(skip)]
    pub private_key: Option<String>,
}

impl figment::Provider for PortalOpts {
    fn metadata(&self) -> Metadata {
        Metadata::named("PortalOpts")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        let value = Value::serialize(self)?;
        let error = InvalidType(value.to_actual(), "map".into());
        let dict = value.into_dict().ok_or(error)?;
        Ok(Map::from([(Config::selected_profile(), dict)]))
    }
}

impl PortalOpts {
    /// Loads the [`Config`] with these options merged on top.
    pub fn load_config(&self) -> Result<Config> {
        let figment = Config::figment().merge(self.clone());
        Ok(Config::from_provider(figment)?)
    }

    /// Connects to the configured node, or returns `None` if no endpoint is configured.
    pub fn backend(&self, config: &Config) -> Result<Option<Backend>> {
        let wallet = self.private_key.as_deref().map(utils::local_wallet).transpose()?;
        Ok(Backend::from_config(config, wallet)?)
    }
}
