use crate::sync::SyncOutcome;
use rocket::serde::{Deserialize, Serialize};
use staking_db_entity::db::staking_protocol::Model as StakingModel;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct StakingData {
    pub id_protocol: String,
    pub address_token: String,
    pub address_staking: String,
    pub name_token: String,
    pub name_project: String,
    pub chain: String,
    pub apy: i32,
    pub tvl: f64,
    pub stablecoin: bool,
    pub categories: Vec<String>,
    pub logo: String,
    pub updated_at: String,
}

impl StakingData {
    pub fn new(model: StakingModel) -> Self {
        StakingData {
            id_protocol: model.id_protocol,
            address_token: model.address_token,
            address_staking: model.address_staking,
            name_token: model.name_token,
            name_project: model.name_project,
            chain: model.chain,
            apy: model.apy,
            tvl: model.tvl,
            stablecoin: model.stablecoin,
            categories: serde_json::from_value(model.categories).unwrap_or_default(),
            logo: model.logo,
            updated_at: model.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorBody {
            error: error.into(),
        }
    }
}

pub const STATUS_UPDATED: &str = "updated";
pub const STATUS_FAILED: &str = "failed";

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TokenSyncStatus {
    pub token: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TokenSyncStatus {
    pub fn new(outcome: SyncOutcome) -> Self {
        let (status, error) = match outcome.result {
            Ok(()) => (STATUS_UPDATED.to_owned(), None),
            Err(err) => (STATUS_FAILED.to_owned(), Some(err.to_string())),
        };
        TokenSyncStatus {
            token: outcome.token,
            status,
            error,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct UpdateReport {
    pub message: String,
    pub results: Vec<TokenSyncStatus>,
}
