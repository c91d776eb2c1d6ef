use crate::mock::{ALICE, BOB, GAS_LIMIT, MockContract, MockWallet, RecordingAlert, init_tracing};
use alloy_primitives::U256;
use std::sync::Arc;
use waveportal::{Portal, WaveBook, abi::WavePortal, events};

async fn mounted(contract: &MockContract) -> Portal {
    let (_, backend) = contract.backend(MockWallet::authorized([ALICE]));
    Portal::mount(Some(backend), Arc::new(RecordingAlert::default()), GAS_LIMIT).await
}

#[tokio::test]
async fn notification_appends_after_prior_entries() {
    init_tracing();
    let contract = MockContract::new().with_wave(BOB, 100, "one").with_wave(BOB, 200, "two");
    let portal = mounted(&contract).await;
    let before = portal.waves().snapshot();

    contract.emit(ALICE, "three", U256::from(300));

    let after = portal.waves().snapshot();
    assert_eq!(after.len(), 3);
    assert_eq!(&after[..2], &before[..]);
    assert_eq!(after[2].sender, ALICE);
    assert_eq!(after[2].message, "three");
    assert_eq!(after[2].timestamp_millis(), 300_000);
}

#[tokio::test]
async fn submitted_wave_arrives_through_notification() {
    let contract = MockContract::new().silent();
    let mut portal = mounted(&contract).await;
    portal.set_draft("hello there");

    let outcome = portal.wave().await.unwrap();
    assert_eq!(outcome.total_waves, 1);
    // nothing inserted locally until the notification is delivered
    assert!(portal.waves().is_empty());
    assert_eq!(portal.draft(), "hello there");

    contract.emit(ALICE, "hello there", U256::from(1_700_000_012));
    assert_eq!(portal.waves().len(), 1);
}

#[tokio::test]
async fn submitted_wave_is_shown_first() {
    let contract = MockContract::new().with_wave(BOB, 100, "old");
    let mut portal = mounted(&contract).await;
    portal.set_draft("new");

    portal.wave().await.unwrap();

    let shown: Vec<_> = portal.view().waves.into_iter().map(|wave| wave.message).collect();
    assert_eq!(shown, ["new", "old"]);
}

#[tokio::test]
async fn unmount_stops_appends() {
    let contract = MockContract::new().with_wave(BOB, 100, "one");
    let portal = mounted(&contract).await;
    let book = portal.waves().clone();
    let stale = contract.last_handler().unwrap();
    assert_eq!(contract.listener_count(), 1);

    portal.unmount();

    assert_eq!(contract.listener_count(), 0);
    contract.emit(ALICE, "ignored", U256::from(200));
    // a delivery that was already in flight when the subscription was released
    stale(WavePortal::NewWave { from: ALICE, message: "late".into(), timestamp: U256::from(300) });
    assert_eq!(book.len(), 1);
}

#[tokio::test]
async fn dropping_the_portal_unsubscribes() {
    let contract = MockContract::new();
    let portal = mounted(&contract).await;
    assert!(portal.is_subscribed());

    drop(portal);

    assert_eq!(contract.listener_count(), 0);
}

#[tokio::test]
async fn malformed_notification_is_ignored() {
    let contract = MockContract::new();
    let book = WaveBook::new();
    let subscription = events::subscribe(&contract, book.clone()).await.unwrap();

    contract.emit(BOB, "far future", U256::MAX);
    contract.emit(BOB, "ok", U256::from(5));

    assert_eq!(book.len(), 1);
    assert_eq!(book.snapshot()[0].message, "ok");
    subscription.unsubscribe();
}
