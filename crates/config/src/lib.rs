//! # waveportal-config
//!
//! Layered configuration for the wave portal client.
//!
//! Values are read from the following sources, in ascending priority order:
//!
//!   1. [`Config::default()`]
//!   2. `waveportal.toml` _or_ the file named in the `WAVE_CONFIG` environment variable
//!   3. `WAVE_` prefixed environment variables
//!
//! Command line flags are merged on top by the CLI.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use alloy_primitives::{Address, address};
use figment::{
    Figment, Metadata, Profile, Provider,
    providers::{Env, Format, Serialized, Toml},
    value::{Dict, Map},
};
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

mod error;
pub use error::{ExtractConfigError, FAILED_TO_EXTRACT_CONFIG_MSG};

// reexport so cli types can implement `figment::Provider`
pub use figment;

/// Wave portal configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// The selected profile. Set from the extracting figment, never read from a source.
    #[serde(skip)]
    pub profile: Profile,
    /// JSON-RPC endpoint of the node backing the wallet. `None` means no provider is available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eth_rpc_url: Option<String>,
    /// Address of the deployed wave portal contract.
    pub contract_address: Address,
    /// Gas ceiling attached to every `wave` transaction.
    pub gas_limit: u64,
    /// How often event filters are polled, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Config {
    /// The default profile: "default"
    pub const DEFAULT_PROFILE: Profile = Profile::const_new("default");

    /// File name of the config toml file
    pub const FILE_NAME: &'static str = "waveportal.toml";

    /// Prefix of the environment variables read by [`Config::figment`].
    pub const ENV_PREFIX: &'static str = "WAVE_";

    /// Environment variable selecting the profile.
    pub const PROFILE_ENV: &'static str = "WAVE_PROFILE";

    /// Environment variable overriding the config file path.
    pub const CONFIG_ENV: &'static str = "WAVE_CONFIG";

    /// The wave portal deployment used when none is configured.
    pub const DEFAULT_CONTRACT_ADDRESS: Address =
        address!("0x0FCb50d55FC87A61DF594fC13FAbe7f779c2451C");

    /// Gas ceiling for `wave` transactions.
    pub const DEFAULT_GAS_LIMIT: u64 = 300_000;

    /// Default event filter polling interval, in milliseconds.
    pub const DEFAULT_POLL_INTERVAL_MS: u64 = 4_000;

    /// Names of every setting read from a source.
    pub const SETTINGS: [&'static str; 4] =
        ["eth_rpc_url", "contract_address", "gas_limit", "poll_interval_ms"];

    /// Returns the current `Config`.
    ///
    /// See [`figment`](Self::figment) for more details.
    pub fn load() -> Result<Self, ExtractConfigError> {
        Self::from_provider(Self::figment())
    }

    /// Returns the current `Config`, reading the config file from the given root.
    pub fn load_with_root(root: impl AsRef<Path>) -> Result<Self, ExtractConfigError> {
        Self::from_provider(Self::figment_with_root(root))
    }

    /// Extracts a `Config` from `provider`, returning an error if it can't be extracted.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use figment::providers::{Format, Toml};
    /// use waveportal_config::Config;
    ///
    /// let figment = Config::figment().merge(Toml::file("other.toml").nested());
    /// let config = Config::from_provider(figment).unwrap();
    /// ```
    pub fn from_provider<T: Provider>(provider: T) -> Result<Self, ExtractConfigError> {
        trace!("load config with provider: {:?}", provider.metadata());
        let figment = Figment::from(provider);
        let mut config = figment.extract::<Self>().map_err(ExtractConfigError::new)?;
        config.profile = figment.profile().clone();
        Ok(config)
    }

    /// Returns the default figment
    ///
    /// The profile selected is the value set in the `WAVE_PROFILE` environment variable. If it
    /// is not set, it defaults to `default`.
    pub fn figment() -> Figment {
        Self::figment_with_root(".")
    }

    /// Returns the default figment, resolving the config file relative to `root`.
    pub fn figment_with_root(root: impl AsRef<Path>) -> Figment {
        Self::default().to_figment(root.as_ref())
    }

    fn to_figment(self, root: &Path) -> Figment {
        let profile = Self::selected_profile();
        let file = Env::var_or(Self::CONFIG_ENV, Self::FILE_NAME);
        let file = root.join(file);
        debug!(path = %file.display(), %profile, "resolving config");

        let figment = Figment::default().merge(Toml::file(file).nested()).merge(
            Env::prefixed(Self::ENV_PREFIX).ignore(&["PROFILE", "CONFIG", "DEBUG"]).global(),
        );

        Figment::from(self).merge(figment).select(profile)
    }

    /// Returns the selected profile.
    ///
    /// If the `WAVE_PROFILE` env variable is not set, this returns the `DEFAULT_PROFILE`.
    pub fn selected_profile() -> Profile {
        Profile::from_env_or(Self::PROFILE_ENV, Self::DEFAULT_PROFILE)
    }

    /// Returns the configured RPC endpoint, if any.
    pub fn rpc_url(&self) -> Option<&str> {
        self.eth_rpc_url.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }

    /// Returns the event filter polling interval.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Provider for Config {
    fn metadata(&self) -> Metadata {
        Metadata::named("Wave Portal Config")
    }

    #[track_caller]
    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Serialized::defaults(self).data()
    }

    fn profile(&self) -> Option<Profile> {
        Some(self.profile.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: Self::DEFAULT_PROFILE,
            eth_rpc_url: None,
            contract_address: Self::DEFAULT_CONTRACT_ADDRESS,
            gas_limit: Self::DEFAULT_GAS_LIMIT,
            poll_interval_ms: Self::DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl From<Config> for Figment {
    fn from(c: Config) -> Self {
        c.to_figment(Path::new("."))
    }
}
