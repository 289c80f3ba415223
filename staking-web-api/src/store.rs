use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};
use staking_db_entity::db::staking_protocol::{
    self, Column as StakingColumn, Entity as StakingProtocol, Model as StakingModel,
};

/// Desired next state of one token's record, as computed by the sync
/// routine.
pub struct StakingUpsert {
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
}

/// Insert-or-update keyed by `address_token`. An existing row only gets
/// its `tvl`, `apy` and `updated_at` refreshed; the descriptive fields
/// keep the values set on creation.
pub async fn upsert(db: &DatabaseConnection, record: StakingUpsert) -> Result<StakingModel, DbErr> {
    let existing = StakingProtocol::find_by_id(record.address_token.to_owned())
        .one(db)
        .await?;

    match existing {
        Some(current) => {
            let mut current = current.into_active_model();
            current.tvl = ActiveValue::Set(record.tvl);
            current.apy = ActiveValue::Set(record.apy);
            current.updated_at = ActiveValue::Set(Utc::now());
            current.update(db).await
        }
        None => {
            let row = staking_protocol::ActiveModel {
                address_token: ActiveValue::Set(record.address_token),
                id_protocol: ActiveValue::Set(record.id_protocol),
                address_staking: ActiveValue::Set(record.address_staking),
                name_token: ActiveValue::Set(record.name_token),
                name_project: ActiveValue::Set(record.name_project),
                chain: ActiveValue::Set(record.chain),
                apy: ActiveValue::Set(record.apy),
                tvl: ActiveValue::Set(record.tvl),
                stablecoin: ActiveValue::Set(record.stablecoin),
                categories: ActiveValue::Set(serde_json::json!(record.categories)),
                logo: ActiveValue::Set(record.logo),
                updated_at: ActiveValue::Set(Utc::now()),
            };
            row.insert(db).await
        }
    }
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<StakingModel>, DbErr> {
    StakingProtocol::find().all(db).await
}

/// `id_protocol` is not unique, so this is a set lookup.
pub async fn find_by_protocol_id(
    db: &DatabaseConnection,
    id_protocol: &str,
) -> Result<Vec<StakingModel>, DbErr> {
    StakingProtocol::find()
        .filter(StakingColumn::IdProtocol.eq(id_protocol))
        .all(db)
        .await
}

pub async fn find_by_address(
    db: &DatabaseConnection,
    address_token: &str,
) -> Result<Option<StakingModel>, DbErr> {
    StakingProtocol::find_by_id(address_token.to_owned())
        .one(db)
        .await
}
