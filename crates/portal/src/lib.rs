//! # waveportal
//!
//! Client side of the wave portal: a contract where anyone can leave a "wave" with a short
//! message, and where a wave may earn the sender a small payout.
//!
//! The crate is split along the same seams as the portal itself:
//!
//! - [`connection`]: EIP-1193 style wallet providers and the [`ConnectionManager`] that asks
//!   them for authorized accounts.
//! - [`gateway`]: the [`WavePortalApi`] seam over the remote contract and the
//!   [`ContractGateway`] that reads and submits waves through it.
//! - [`events`]: typed `NewWave` subscriptions with an owning [`Subscription`] handle.
//! - [`portal`]: the [`Portal`] session context owning the account, the wave list and the
//!   draft message, and the [`View`] rendered from it.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod abi;
pub mod alert;
pub mod backend;
pub mod book;
pub mod connection;
pub mod error;
pub mod events;
pub mod gateway;
pub mod portal;
pub mod rpc;
pub mod view;
pub mod wave;

pub use alert::{Alert, NO_PROVIDER_ALERT};
pub use backend::Backend;
pub use book::WaveBook;
pub use connection::{ConnectionManager, LocalWallet, RpcWallet, WalletProvider};
pub use error::{PortalError, Result};
pub use events::{NewWaveHandler, Subscription};
pub use gateway::{ContractGateway, WaveOutcome, WavePortalApi};
pub use portal::{Portal, Session};
pub use rpc::RpcWavePortal;
pub use view::View;
pub use wave::Wave;
