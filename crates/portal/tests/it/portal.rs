use crate::mock::{ALICE, BOB, GAS_LIMIT, MockContract, MockWallet, RecordingAlert};
use alloy_primitives::U256;
use similar_asserts::assert_eq;
use std::sync::Arc;
use waveportal::Portal;

async fn mounted(contract: &MockContract) -> Portal {
    let (_, backend) = contract.backend(MockWallet::authorized([ALICE]));
    Portal::mount(Some(backend), Arc::new(RecordingAlert::default()), GAS_LIMIT).await
}

#[tokio::test]
async fn renders_newest_first() {
    let contract = MockContract::new().with_wave(BOB, 0, "first").with_wave(ALICE, 60, "second");
    let mut portal = mounted(&contract).await;
    portal.set_draft("hey");

    assert_eq!(
        portal.view().to_string(),
        format!(
            "👋 WELCOME!\n\
             Connect your Ethereum wallet and send a 👋 (wave) ✨\n\
             \n\
             [ Wallet Connected ] {ALICE}\n\
             [ Wave at Me ]\n\
             > hey\n\
             \n\
             Address: {ALICE}\n\
             Time: Thu Jan 01 1970 00:01:00 UTC\n\
             Message: second\n\
             \n\
             Address: {BOB}\n\
             Time: Thu Jan 01 1970 00:00:00 UTC\n\
             Message: first\n"
        )
    );
}

#[tokio::test]
async fn failed_load_keeps_the_list() {
    let contract = MockContract::new().with_wave(BOB, 10, "kept");
    let mut portal = mounted(&contract).await;
    contract.emit(ALICE, "live", U256::from(20));
    let before = portal.waves().snapshot();

    contract.fail_reads(true);
    assert!(!portal.load_waves().await);

    assert_eq!(portal.waves().snapshot(), before);
}

#[tokio::test]
async fn reload_replaces_the_list() {
    let contract = MockContract::new().silent().with_wave(BOB, 10, "one");
    let mut portal = mounted(&contract).await;
    portal.set_draft("two");
    portal.wave().await.unwrap();
    assert_eq!(portal.waves().len(), 1);

    assert!(portal.load_waves().await);

    assert_eq!(portal.waves().len(), 2);
    assert_eq!(contract.all_waves_calls(), 2);
}

#[tokio::test]
async fn failed_submission_is_swallowed() {
    let contract = MockContract::new().with_wave(BOB, 10, "one");
    let mut portal = mounted(&contract).await;
    contract.fail_sends(true);
    portal.set_draft("denied");

    assert_eq!(portal.wave().await, None);

    assert_eq!(portal.waves().len(), 1);
    assert_eq!(portal.draft(), "denied");
    assert!(contract.sent().is_empty());
}

#[tokio::test]
async fn wave_needs_a_connected_account() {
    let contract = MockContract::new();
    let (_, backend) = contract.backend(MockWallet::default());
    let mut portal =
        Portal::mount(Some(backend), Arc::new(RecordingAlert::default()), GAS_LIMIT).await;
    portal.set_draft("anyone?");

    assert_eq!(portal.wave().await, None);
    assert!(contract.sent().is_empty());
}

#[tokio::test]
async fn reload_overwrites_notifications() {
    let contract = MockContract::new().with_wave(BOB, 10, "stored");
    let mut portal = mounted(&contract).await;
    // delivered while the bulk read is pending, and not part of its result
    contract.emit(ALICE, "in flight", U256::from(20));
    assert_eq!(portal.waves().len(), 2);

    assert!(portal.load_waves().await);

    let messages: Vec<_> = portal.waves().snapshot().into_iter().map(|w| w.message).collect();
    assert_eq!(messages, ["stored"]);
}
