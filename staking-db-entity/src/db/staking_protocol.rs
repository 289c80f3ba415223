use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "staking_protocol")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub address_token: String,
    pub id_protocol: String,
    pub address_staking: String,
    pub name_token: String,
    pub name_project: String,
    pub chain: String,
    pub apy: i32,
    pub tvl: f64,
    pub stablecoin: bool,
    pub categories: Json,
    pub logo: String,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
