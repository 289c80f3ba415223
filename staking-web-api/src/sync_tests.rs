// Unit tests covering the sync routine, the staking store and the
// token registry.

use crate::chain::{ChainError, StakingReader};
use crate::dto::StakingData;
use crate::registry::{TokenRegistry, CHAIN_NAME};
use crate::store::{self, StakingUpsert};
use crate::sync::{self, normalize_tvl, SyncError};
use async_trait::async_trait;
use sea_orm::{Database, DatabaseConnection};
use staking_db_migration::{Migrator, MigratorTrait};
use std::collections::{HashMap, HashSet};
use web3::types::U256;

async fn test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("sqlite connect failed");
    Migrator::up(&db, None).await.expect("migration failed");
    db
}

#[derive(Default)]
struct MockChain {
    apys: HashMap<String, u8>,
    totals: HashMap<String, U256>,
    failing: HashSet<String>,
}

impl MockChain {
    fn stub(&mut self, staking_address: &str, apy: u8, total_staked: u64) {
        self.apys.insert(staking_address.to_owned(), apy);
        self.totals
            .insert(staking_address.to_owned(), U256::from(total_staked));
    }

    fn fail(&mut self, staking_address: &str) {
        self.failing.insert(staking_address.to_owned());
    }
}

#[async_trait]
impl StakingReader for MockChain {
    async fn fixed_apy(&self, staking_address: &str) -> Result<u8, ChainError> {
        if self.failing.contains(staking_address) {
            return Err(ChainError::InvalidAddress(staking_address.to_owned()));
        }
        Ok(*self.apys.get(staking_address).unwrap_or(&0))
    }

    async fn total_amount_staked(&self, staking_address: &str) -> Result<U256, ChainError> {
        if self.failing.contains(staking_address) {
            return Err(ChainError::InvalidAddress(staking_address.to_owned()));
        }
        Ok(*self.totals.get(staking_address).unwrap_or(&U256::zero()))
    }
}

fn sample_upsert(address_token: &str) -> StakingUpsert {
    StakingUpsert {
        id_protocol: "Uniswap_UNI".to_owned(),
        address_token: address_token.to_owned(),
        address_staking: "0xa976c4930e253CE56Ff129404a95F0578345C113".to_owned(),
        name_token: "UNI".to_owned(),
        name_project: "Uniswap".to_owned(),
        chain: CHAIN_NAME.to_owned(),
        apy: 12,
        tvl: 1.5,
        stablecoin: false,
        categories: vec!["Staking".to_owned()],
        logo: "https://cryptologos.cc/logos/uniswap-uni-logo.png".to_owned(),
    }
}

#[test]
fn normalize_tvl_six_decimal_scaling() {
    assert_eq!(normalize_tvl(U256::from(5_000_000u64)).unwrap(), 5.0);
    assert_eq!(normalize_tvl(U256::from(10_000_000u64)).unwrap(), 10.0);
    assert_eq!(normalize_tvl(U256::zero()).unwrap(), 0.0);
    assert_eq!(normalize_tvl(U256::from(1_500u64)).unwrap(), 0.0015);
}

#[test]
fn normalize_tvl_rejects_oversized_amounts() {
    let raw = U256::from(u128::MAX) + U256::from(1u64);
    assert!(matches!(
        normalize_tvl(raw),
        Err(SyncError::TvlOutOfRange(_))
    ));
}

#[test]
fn stablecoin_symbols_get_stablecoin_category() {
    let registry = TokenRegistry::bootstrap();

    let usdc = registry.get("USDC").unwrap();
    assert!(usdc.is_stablecoin());
    assert_eq!(
        usdc.categories(),
        vec!["Staking".to_owned(), "Stablecoin".to_owned()]
    );

    let uni = registry.get("UNI").unwrap();
    assert!(!uni.is_stablecoin());
    assert_eq!(uni.categories(), vec!["Staking".to_owned()]);
}

#[test]
fn protocol_id_joins_project_and_symbol() {
    let registry = TokenRegistry::bootstrap();
    let dai = registry.get("DAI").unwrap();
    assert_eq!(dai.id_protocol(), "StargateV3_DAI");
}

#[test]
fn logo_lookup_falls_back_to_empty_string() {
    let registry = TokenRegistry::bootstrap();
    let uni = registry.get("UNI").unwrap();
    assert_eq!(
        registry.logo(&uni.address_token),
        "https://cryptologos.cc/logos/uniswap-uni-logo.png"
    );
    assert_eq!(registry.logo("0x0000000000000000000000000000000000000000"), "");
}

#[test]
fn registry_covers_all_supported_symbols() {
    let registry = TokenRegistry::bootstrap();
    let mut symbols = registry.symbols();
    symbols.sort();
    assert_eq!(symbols, vec!["DAI", "UNI", "USDC", "USDT", "WETH"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn upsert_creates_then_updates_single_row() {
    let db = test_db().await;
    let address = "0x6c8D1fd3AA9F436CBA20E4b6A5aeDb1bf814A732";

    store::upsert(&db, sample_upsert(address)).await.unwrap();

    // Second call with new live values but also different descriptive
    // fields; only tvl/apy/updated_at may change.
    let mut second = sample_upsert(address);
    second.apy = 20;
    second.tvl = 42.25;
    second.id_protocol = "SomethingElse_UNI".to_owned();
    second.logo = "https://example.com/other.png".to_owned();
    store::upsert(&db, second).await.unwrap();

    let records = store::find_all(&db).await.unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.apy, 20);
    assert_eq!(record.tvl, 42.25);
    assert_eq!(record.id_protocol, "Uniswap_UNI");
    assert_eq!(
        record.logo,
        "https://cryptologos.cc/logos/uniswap-uni-logo.png"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn find_all_on_empty_storage_returns_empty_vec() {
    let db = test_db().await;
    assert!(store::find_all(&db).await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn find_by_address_absent_is_none() {
    let db = test_db().await;
    let found = store::find_by_address(&db, "0x74A8Ee760959AF0B18307861e92769CfEcC42f9B")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn find_by_protocol_id_matches_exactly() {
    let db = test_db().await;
    store::upsert(&db, sample_upsert("0x6c8D1fd3AA9F436CBA20E4b6A5aeDb1bf814A732"))
        .await
        .unwrap();

    let matches = store::find_by_protocol_id(&db, "Uniswap_UNI").await.unwrap();
    assert_eq!(matches.len(), 1);

    let misses = store::find_by_protocol_id(&db, "Uniswap_WETH").await.unwrap();
    assert!(misses.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn sync_dai_end_to_end() {
    let db = test_db().await;
    let registry = TokenRegistry::bootstrap();
    let dai = registry.get("DAI").unwrap().clone();

    let mut mock = MockChain::default();
    mock.stub(&dai.address_staking, 5, 10_000_000);
    sync::sync_token(&db, &mock, &registry, "DAI").await.unwrap();

    let record = store::find_by_address(&db, &dai.address_token)
        .await
        .unwrap()
        .expect("record missing after sync");
    assert_eq!(record.apy, 5);
    assert_eq!(record.tvl, 10.0);
    assert_eq!(record.address_token, dai.address_token);
    assert_eq!(record.address_staking, dai.address_staking);
    assert_eq!(record.id_protocol, "StargateV3_DAI");
    assert_eq!(record.chain, CHAIN_NAME);
    assert!(!record.stablecoin);
    assert_eq!(record.categories, serde_json::json!(["Staking"]));

    // A later sync with fresh on-chain values overwrites tvl and apy.
    let mut mock = MockChain::default();
    mock.stub(&dai.address_staking, 8, 25_500_000);
    sync::sync_token(&db, &mock, &registry, "DAI").await.unwrap();

    let records = store::find_all(&db).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].apy, 8);
    assert_eq!(records[0].tvl, 25.5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn sync_unknown_symbol_is_an_error() {
    let db = test_db().await;
    let registry = TokenRegistry::bootstrap();
    let mock = MockChain::default();

    let result = sync::sync_token(&db, &mock, &registry, "DOGE").await;
    assert!(matches!(result, Err(SyncError::UnknownToken(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn fan_out_survives_single_token_failure() {
    let db = test_db().await;
    let registry = TokenRegistry::bootstrap();

    let mut mock = MockChain::default();
    for symbol in registry.symbols() {
        let token = registry.get(&symbol).unwrap();
        mock.stub(&token.address_staking, 7, 1_000_000);
    }
    let usdc = registry.get("USDC").unwrap().clone();
    mock.fail(&usdc.address_staking);

    let outcomes = sync::sync_all(&db, &mock, &registry).await;
    assert_eq!(outcomes.len(), 5);

    let failed: Vec<&str> = outcomes
        .iter()
        .filter(|outcome| outcome.result.is_err())
        .map(|outcome| outcome.token.as_str())
        .collect();
    assert_eq!(failed, vec!["USDC"]);

    let records = store::find_all(&db).await.unwrap();
    assert_eq!(records.len(), 4);
    assert!(store::find_by_address(&db, &usdc.address_token)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn staking_dto_uses_original_wire_field_names() {
    let db = test_db().await;
    store::upsert(&db, sample_upsert("0x6c8D1fd3AA9F436CBA20E4b6A5aeDb1bf814A732"))
        .await
        .unwrap();

    let record = store::find_all(&db).await.unwrap().remove(0);
    let json = serde_json::to_value(StakingData::new(record)).unwrap();
    assert_eq!(json["idProtocol"], "Uniswap_UNI");
    assert_eq!(
        json["addressToken"],
        "0x6c8D1fd3AA9F436CBA20E4b6A5aeDb1bf814A732"
    );
    assert_eq!(json["nameToken"], "UNI");
    assert_eq!(json["categories"], serde_json::json!(["Staking"]));
    assert!(json["updatedAt"].is_string());
}
