use crate::chain::{ChainError, StakingReader};
use crate::registry::{TokenRegistry, CHAIN_NAME};
use crate::store::{self, StakingUpsert};
use futures::future::join_all;
use sea_orm::DatabaseConnection;
use thiserror::Error;
use tracing::{error, info};
use web3::types::U256;

/// Staked amounts are reported with six decimals on-chain.
const TVL_DECIMALS: u32 = 6;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("token {0} is not registered")]
    UnknownToken(String),
    #[error("chain query failed: {0}")]
    Chain(#[from] ChainError),
    #[error("total staked amount {0} exceeds supported range")]
    TvlOutOfRange(U256),
    #[error("storage error: {0}")]
    Db(#[from] sea_orm::DbErr),
}

pub struct SyncOutcome {
    pub token: String,
    pub result: Result<(), SyncError>,
}

pub fn normalize_tvl(raw: U256) -> Result<f64, SyncError> {
    if raw > U256::from(u128::MAX) {
        return Err(SyncError::TvlOutOfRange(raw));
    }
    Ok(raw.as_u128() as f64 / 10u64.pow(TVL_DECIMALS) as f64)
}

/// Refresh the persisted record for one token symbol: read the staking
/// contract, normalize, upsert keyed by token address.
pub async fn sync_token(
    db: &DatabaseConnection,
    reader: &dyn StakingReader,
    registry: &TokenRegistry,
    symbol: &str,
) -> Result<(), SyncError> {
    let token = registry
        .get(symbol)
        .ok_or_else(|| SyncError::UnknownToken(symbol.to_owned()))?;

    let apy = reader.fixed_apy(&token.address_staking).await?;
    let total_staked = reader.total_amount_staked(&token.address_staking).await?;

    let record = StakingUpsert {
        id_protocol: token.id_protocol(),
        address_token: token.address_token.to_owned(),
        address_staking: token.address_staking.to_owned(),
        name_token: token.symbol.to_owned(),
        name_project: token.name_project.to_owned(),
        chain: CHAIN_NAME.to_owned(),
        apy: i32::from(apy),
        tvl: normalize_tvl(total_staked)?,
        stablecoin: token.is_stablecoin(),
        categories: token.categories(),
        logo: registry.logo(&token.address_token),
    };
    store::upsert(db, record).await?;
    Ok(())
}

/// Best-effort batch over every registered symbol. All syncs are issued
/// up front and awaited together; one token's failure never blocks its
/// siblings. Callers get a per-token outcome instead of a single flag.
pub async fn sync_all(
    db: &DatabaseConnection,
    reader: &dyn StakingReader,
    registry: &TokenRegistry,
) -> Vec<SyncOutcome> {
    let symbols = registry.symbols();
    let results = join_all(
        symbols
            .iter()
            .map(|symbol| sync_token(db, reader, registry, symbol)),
    )
    .await;

    symbols
        .into_iter()
        .zip(results)
        .map(|(token, result)| {
            match result {
                Ok(()) => info!("Updated staking data for {}", token),
                Err(ref err) => error!("Error updating staking data for {}: {:?}", token, err),
            }
            SyncOutcome { token, result }
        })
        .collect()
}
