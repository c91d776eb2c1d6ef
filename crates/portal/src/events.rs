//! `NewWave` subscriptions.
//!
//! A subscription registers a typed [`NewWaveHandler`] and hands back a [`Subscription`].
//! The registration lives exactly as long as the handle: dropping it, or calling
//! [`Subscription::unsubscribe`], releases it.

use crate::{
    abi::WavePortal, book::WaveBook, error::Result, gateway::WavePortalApi, wave::Wave,
};
use parking_lot::Mutex;
use std::{fmt, sync::Arc};
use tokio::task::JoinHandle;

/// Callback invoked for every `NewWave` notification.
pub type NewWaveHandler = Arc<dyn Fn(WavePortal::NewWave) + Send + Sync>;

type Release = Box<dyn FnOnce() + Send>;

/// Owning handle of an event registration.
#[must_use = "dropping a subscription unsubscribes it"]
pub struct Subscription {
    release: Option<Release>,
}

impl Subscription {
    /// Creates a handle that runs `release` when unsubscribed or dropped.
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// Creates a handle that aborts `task` when released.
    pub fn from_task<T: Send + 'static>(task: JoinHandle<T>) -> Self {
        Self::new(move || task.abort())
    }

    /// Whether the registration is still held.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Releases the registration.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}

/// Subscribes `book` to new waves: every notification is mapped the same way as the bulk
/// read and appended.
///
/// Once the returned handle is released, deliveries that are still in flight are dropped
/// instead of appended.
pub async fn subscribe(api: &dyn WavePortalApi, book: WaveBook) -> Result<Subscription> {
    let target = Arc::new(Mutex::new(Some(book)));

    let handler: NewWaveHandler = {
        let target = Arc::clone(&target);
        Arc::new(move |event: WavePortal::NewWave| {
            debug!(from = %event.from, timestamp = %event.timestamp, message = %event.message, "NewWave");
            let target = target.lock();
            let Some(book) = target.as_ref() else {
                trace!("dropping NewWave delivered after unsubscribe");
                return;
            };
            match Wave::try_from(event) {
                Ok(wave) => book.push(wave),
                Err(err) => warn!(%err, "ignoring malformed NewWave event"),
            }
        })
    };

    let registration = api.watch_new_waves(handler).await?;
    debug!("subscribed to NewWave");

    Ok(Subscription::new(move || {
        target.lock().take();
        drop(registration);
        debug!("unsubscribed from NewWave");
    }))
}
