//! The [`Wave`] record shown by the portal.

use crate::{
    abi::WavePortal,
    error::{PortalError, Result},
};
use alloy_primitives::{Address, U256};
use chrono::{DateTime, Utc};
use std::fmt;

/// Format used when rendering wave timestamps.
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S UTC";

/// A wave left on the portal.
///
/// Waves are immutable once received. They are created either by the bulk read of the
/// contract's storage or by a `NewWave` notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wave {
    /// Account that sent the wave.
    pub sender: Address,
    /// Block time at which the wave was stored.
    pub timestamp: DateTime<Utc>,
    /// Message attached to the wave.
    pub message: String,
}

impl Wave {
    /// Creates a wave from the contract's raw representation, where `raw_timestamp` is in
    /// seconds since the Unix epoch.
    pub fn new(sender: Address, raw_timestamp: U256, message: String) -> Result<Self> {
        Ok(Self { sender, timestamp: timestamp_from_secs(raw_timestamp)?, message })
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }
}

impl TryFrom<WavePortal::Wave> for Wave {
    type Error = PortalError;

    fn try_from(wave: WavePortal::Wave) -> Result<Self> {
        Self::new(wave.sender, wave.timestamp, wave.message)
    }
}

impl TryFrom<WavePortal::NewWave> for Wave {
    type Error = PortalError;

    fn try_from(event: WavePortal::NewWave) -> Result<Self> {
        Self::new(event.from, event.timestamp, event.message)
    }
}

impl fmt::Display for Wave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Address: {}", self.sender)?;
        writeln!(f, "Time: {}", self.timestamp.format(TIMESTAMP_FORMAT))?;
        writeln!(f, "Message: {}", self.message)
    }
}

/// Converts a `uint256` seconds count into a point in time, `raw * 1000` milliseconds after the
/// epoch.
pub fn timestamp_from_secs(raw: U256) -> Result<DateTime<Utc>> {
    u64::try_from(raw)
        .ok()
        .and_then(|secs| i64::try_from(secs).ok())
        .and_then(|secs| secs.checked_mul(1000))
        .and_then(DateTime::from_timestamp_millis)
        .ok_or(PortalError::TimestampOutOfRange(raw))
}
