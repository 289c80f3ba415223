use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use sea_orm_migration::sea_orm::Database;
use serde::Deserialize;
use staking_db_migration::{Migrator, MigratorTrait};
use std::error::Error;

#[derive(Deserialize)]
struct MigrationConfig {
    database_url: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config: MigrationConfig = Figment::new()
        .merge(Toml::file("App.toml"))
        .merge(Env::raw().only(&["database_url"]))
        .extract()?;

    let db = Database::connect(&config.database_url).await?;
    Migrator::up(&db, None).await?;

    println!("Migrations applied");
    Ok(())
}
