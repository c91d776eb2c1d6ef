use crate::mock::{ALICE, BOB, GAS_LIMIT, MockContract, MockWallet, ether, init_tracing};
use alloy_primitives::{U256, address};
use std::sync::Arc;
use waveportal::{ContractGateway, Wave};

fn gateway(contract: &MockContract) -> ContractGateway {
    ContractGateway::new(Arc::new(contract.clone()), GAS_LIMIT)
}

#[tokio::test]
async fn bulk_load_matches_count() {
    let contract = MockContract::new()
        .with_wave(ALICE, 1_650_000_000, "first")
        .with_wave(BOB, 1_650_000_060, "second")
        .with_wave(ALICE, 1_650_000_120, "third");
    let gateway = gateway(&contract);

    let count = gateway.fetch_wave_count().await.unwrap();
    let waves = gateway.fetch_all_waves().await.unwrap();

    assert_eq!(count, 3);
    assert_eq!(waves.len() as u64, count);
    let millis: Vec<_> = waves.iter().map(Wave::timestamp_millis).collect();
    assert_eq!(millis, [1_650_000_000_000, 1_650_000_060_000, 1_650_000_120_000]);
    assert_eq!(waves[1].sender, BOB);
    assert_eq!(waves[1].message, "second");
}

#[tokio::test]
async fn raw_seconds_become_milliseconds() {
    let one = address!("0x0000000000000000000000000000000000000001");
    let contract = MockContract::new().with_wave(one, 1_000, "hi");

    let waves = gateway(&contract).fetch_all_waves().await.unwrap();

    assert_eq!(waves.len(), 1);
    assert_eq!(waves[0].sender, one);
    assert_eq!(waves[0].timestamp_millis(), 1_000_000);
    assert_eq!(waves[0].message, "hi");
    assert!(waves[0].to_string().contains("Time: Thu Jan 01 1970 00:16:40 UTC"));
}

#[tokio::test]
async fn failed_read_is_an_error() {
    let contract = MockContract::new().with_wave(ALICE, 1, "gm");
    contract.fail_reads(true);
    let gateway = gateway(&contract);

    assert!(gateway.fetch_wave_count().await.is_err());
    assert!(gateway.fetch_all_waves().await.is_err());
}

#[tokio::test]
async fn submit_reports_reward() {
    init_tracing();
    let contract = MockContract::new().with_balance(ether(1)).with_payout(U256::from(100u64));

    let outcome = gateway(&contract).submit_wave(ALICE, "hello").await.unwrap();

    assert_eq!(outcome.total_waves, 1);
    assert_eq!(outcome.balance_before, ether(1));
    assert_eq!(outcome.balance_after, ether(1) - U256::from(100u64));
    assert!(outcome.won_reward());
    assert_eq!(contract.sent(), [(ALICE, "hello".to_string(), GAS_LIMIT)]);
}

#[tokio::test]
async fn submit_without_reward() {
    let contract = MockContract::new().with_balance(ether(1));

    let outcome = gateway(&contract).submit_wave(BOB, "no luck").await.unwrap();

    assert!(!outcome.won_reward());
    assert_eq!(contract.balance(), ether(1));
}

#[tokio::test]
async fn empty_message_is_sent_as_is() {
    let contract = MockContract::new();
    let gateway = ContractGateway::new(Arc::new(contract.clone()), 21_000);

    gateway.submit_wave(ALICE, "").await.unwrap();

    assert_eq!(contract.sent(), [(ALICE, String::new(), 21_000)]);
}

#[tokio::test]
async fn backend_gateway_uses_configured_gas_limit() {
    let contract = MockContract::new();
    let (_, backend) = contract.backend(MockWallet::authorized([ALICE]));
    let mut portal = waveportal::Portal::mount(
        Some(backend),
        Arc::new(crate::mock::RecordingAlert::default()),
        123_456,
    )
    .await;
    assert_eq!(portal.gateway().map(ContractGateway::gas_limit), Some(123_456));

    portal.set_draft("gas");
    portal.wave().await.unwrap();
    assert_eq!(contract.sent(), [(ALICE, "gas".to_string(), 123_456)]);
}

#[tokio::test]
async fn malformed_wave_is_skipped() {
    init_tracing();
    let contract = MockContract::new()
        .with_wave(ALICE, 100, "before")
        .with_wave(BOB, u64::MAX, "far future")
        .with_wave(ALICE, 200, "after");

    let waves = gateway(&contract).fetch_all_waves().await.unwrap();

    let messages: Vec<_> = waves.iter().map(|wave| wave.message.as_str()).collect();
    assert_eq!(messages, ["before", "after"]);
}
