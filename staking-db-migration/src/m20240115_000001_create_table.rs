use sea_orm_migration::prelude::*;
use staking_db_entity::db::staking_protocol;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240115_000001_create_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(staking_protocol::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(staking_protocol::Column::AddressToken)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(staking_protocol::Column::IdProtocol)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(staking_protocol::Column::AddressStaking)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(staking_protocol::Column::NameToken)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(staking_protocol::Column::NameProject)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(staking_protocol::Column::Chain)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(staking_protocol::Column::Apy)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(staking_protocol::Column::Tvl)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(staking_protocol::Column::Stablecoin)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(staking_protocol::Column::Categories)
                            .json()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(staking_protocol::Column::Logo)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(staking_protocol::Column::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_staking_protocol_id_protocol")
                    .table(staking_protocol::Entity)
                    .col(staking_protocol::Column::IdProtocol)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(staking_protocol::Entity).to_owned())
            .await
    }
}
