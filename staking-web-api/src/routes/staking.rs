use crate::chain::EvmStakingReader;
use crate::dto::{ErrorBody, StakingData, TokenSyncStatus, UpdateReport};
use crate::pool::Db;
use crate::registry::TokenRegistry;
use crate::{store, sync};
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use sea_orm_rocket::Connection;
use tracing::error;

type ApiError = Custom<Json<ErrorBody>>;

fn fetch_failed() -> ApiError {
    Custom(
        Status::InternalServerError,
        Json(ErrorBody::new("Failed to fetch staking data")),
    )
}

fn not_found() -> ApiError {
    Custom(
        Status::NotFound,
        Json(ErrorBody::new("Staking data not found")),
    )
}

#[get("/staking")]
pub async fn get_all(conn: Connection<'_, Db>) -> Result<Json<Vec<StakingData>>, ApiError> {
    let db = conn.into_inner();
    match store::find_all(db).await {
        Ok(records) => Ok(Json(records.into_iter().map(StakingData::new).collect())),
        Err(err) => {
            error!("Error fetching staking data: {:?}", err);
            Err(fetch_failed())
        }
    }
}

#[get("/staking/protocol/<id_protocol>")]
pub async fn get_by_protocol(
    conn: Connection<'_, Db>,
    id_protocol: String,
) -> Result<Json<Vec<StakingData>>, ApiError> {
    let db = conn.into_inner();
    match store::find_by_protocol_id(db, &id_protocol).await {
        Ok(records) => {
            if records.is_empty() {
                return Err(not_found());
            }
            Ok(Json(records.into_iter().map(StakingData::new).collect()))
        }
        Err(err) => {
            error!("Error fetching staking data for {}: {:?}", id_protocol, err);
            Err(fetch_failed())
        }
    }
}

#[get("/staking/address/<address>")]
pub async fn get_by_address(
    conn: Connection<'_, Db>,
    address: String,
) -> Result<Json<StakingData>, ApiError> {
    let db = conn.into_inner();
    match store::find_by_address(db, &address).await {
        Ok(Some(record)) => Ok(Json(StakingData::new(record))),
        Ok(None) => Err(not_found()),
        Err(err) => {
            error!("Error fetching staking data for {}: {:?}", address, err);
            Err(fetch_failed())
        }
    }
}

#[post("/staking/update")]
pub async fn update(
    conn: Connection<'_, Db>,
    registry: &State<TokenRegistry>,
    reader: &State<EvmStakingReader>,
) -> Json<UpdateReport> {
    let db = conn.into_inner();
    let outcomes = sync::sync_all(db, reader.inner(), registry).await;
    let results = outcomes.into_iter().map(TokenSyncStatus::new).collect();
    Json(UpdateReport {
        message: "All staking data updated successfully".to_owned(),
        results,
    })
}
