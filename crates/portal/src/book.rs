//! Shared, append-only list of waves.

use crate::wave::Wave;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::watch;

/// The local list of waves, in insertion order.
///
/// The bulk read replaces the whole list; notifications append to it. Nothing else
/// mutates it. Every change bumps a version counter that renderers can wait on.
#[derive(Clone, Debug)]
pub struct WaveBook {
    waves: Arc<RwLock<Vec<Wave>>>,
    version: Arc<watch::Sender<u64>>,
}

impl Default for WaveBook {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        let (version, _) = watch::channel(0);
        Self { waves: Arc::new(RwLock::new(Vec::new())), version: Arc::new(version) }
    }

    /// Replaces the whole list with the result of a bulk read.
    pub fn replace(&self, waves: Vec<Wave>) {
        *self.waves.write() = waves;
        self.bump();
    }

    /// Appends a wave, keeping every existing entry in place.
    pub fn push(&self, wave: Wave) {
        self.waves.write().push(wave);
        self.bump();
    }

    /// Number of waves held.
    pub fn len(&self) -> usize {
        self.waves.read().len()
    }

    /// Whether the book holds no waves.
    pub fn is_empty(&self) -> bool {
        self.waves.read().is_empty()
    }

    /// Waves in insertion order.
    pub fn snapshot(&self) -> Vec<Wave> {
        self.waves.read().clone()
    }

    /// Waves in display order: the last inserted comes first.
    pub fn newest_first(&self) -> Vec<Wave> {
        self.waves.read().iter().rev().cloned().collect()
    }

    /// Returns a receiver that is notified on every change.
    pub fn changes(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    fn bump(&self) {
        self.version.send_modify(|version| *version += 1);
    }
}
