//! The [`Portal`] session context.

use crate::{
    alert::Alert,
    backend::Backend,
    book::WaveBook,
    connection::ConnectionManager,
    events::{self, Subscription},
    gateway::{ContractGateway, WaveOutcome},
    view::View,
};
use alloy_primitives::Address;
use std::sync::Arc;

/// The connected account, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    account: Option<Address>,
}

impl Session {
    /// The connected account.
    pub fn account(&self) -> Option<Address> {
        self.account
    }

    /// Whether an account is connected.
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// Sets the account. The first account set is kept for the session's lifetime.
    fn set_account(&mut self, account: Address) {
        match self.account {
            None => self.account = Some(account),
            Some(current) if current != account => {
                debug!(%current, ignored = %account, "session account is already set");
            }
            Some(_) => {}
        }
    }
}

/// Owns everything the portal shows: the session, the wave list and the draft message.
///
/// A portal is created with [`Portal::mount`], which subscribes to new waves and silently
/// restores an authorized account, and torn down with [`Portal::unmount`]. Every remote
/// failure is logged and swallowed here; none of the operations below return errors.
#[derive(Debug)]
pub struct Portal {
    connection: ConnectionManager,
    gateway: Option<ContractGateway>,
    session: Session,
    waves: WaveBook,
    draft: String,
    subscription: Option<Subscription>,
}

impl Portal {
    /// Creates an unmounted portal. `backend` is `None` when no wallet provider is available.
    pub fn new(backend: Option<Backend>, alert: Arc<dyn Alert>, gas_limit: u64) -> Self {
        let (wallet, gateway) = match backend {
            Some(Backend { wallet, contract }) => {
                (Some(wallet), Some(ContractGateway::new(contract, gas_limit)))
            }
            None => (None, None),
        };
        Self {
            connection: ConnectionManager::new(wallet, alert),
            gateway,
            session: Session::default(),
            waves: WaveBook::new(),
            draft: String::new(),
            subscription: None,
        }
    }

    /// Creates a portal, subscribes to new waves and restores an already authorized account.
    ///
    /// The subscription starts before the initial load, and the load replaces the whole list:
    /// a notification delivered while `getAllWaves` is in flight is overwritten by its result.
    pub async fn mount(backend: Option<Backend>, alert: Arc<dyn Alert>, gas_limit: u64) -> Self {
        let mut portal = Self::new(backend, alert, gas_limit);
        portal.subscribe().await;
        portal.check_existing_authorization().await;
        portal
    }

    /// Releases the `NewWave` subscription.
    pub fn unmount(mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }

    async fn subscribe(&mut self) {
        let Some(gateway) = &self.gateway else { return };
        match events::subscribe(gateway.api().as_ref(), self.waves.clone()).await {
            Ok(subscription) => self.subscription = Some(subscription),
            Err(err) => error!(%err, "failed to subscribe to NewWave"),
        }
    }

    /// Restores an account the wallet already authorized and loads the waves once.
    pub async fn check_existing_authorization(&mut self) -> Option<Address> {
        let account = self.connection.check_existing_authorization().await?;
        self.session.set_account(account);
        self.load_waves().await;
        Some(account)
    }

    /// Asks the wallet to connect an account.
    pub async fn connect(&mut self) -> Option<Address> {
        let account = self.connection.request_connection().await?;
        self.session.set_account(account);
        Some(account)
    }

    /// Replaces the local list with the contract's. Leaves it untouched on failure.
    pub async fn load_waves(&mut self) -> bool {
        let Some(gateway) = &self.gateway else {
            warn!("no wallet provider, can't load waves");
            return false;
        };
        match gateway.fetch_all_waves().await {
            Ok(waves) => {
                self.waves.replace(waves);
                true
            }
            Err(err) => {
                error!(%err, "failed to load waves");
                false
            }
        }
    }

    /// Sends the draft message as a wave from the connected account.
    ///
    /// The draft is kept, and the wave is not added locally: it shows up once the
    /// `NewWave` notification arrives.
    pub async fn wave(&mut self) -> Option<WaveOutcome> {
        let Some(gateway) = &self.gateway else {
            warn!("no wallet provider, can't wave");
            return None;
        };
        let Some(from) = self.session.account() else {
            warn!("no connected account, can't wave");
            return None;
        };
        match gateway.submit_wave(from, &self.draft).await {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                error!(%err, "failed to wave");
                None
            }
        }
    }

    /// Sets the draft message.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// The draft message.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The current session.
    pub fn session(&self) -> Session {
        self.session
    }

    /// The local wave list.
    pub fn waves(&self) -> &WaveBook {
        &self.waves
    }

    /// The contract gateway, if a provider is available.
    pub fn gateway(&self) -> Option<&ContractGateway> {
        self.gateway.as_ref()
    }

    /// Whether the portal holds a live `NewWave` subscription.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Snapshot of what the portal shows.
    pub fn view(&self) -> View {
        View {
            account: self.session.account(),
            draft: self.draft.clone(),
            waves: self.waves.newest_first(),
        }
    }
}
