mod chain;
mod cors;
mod dto;
mod pool;
mod registry;
mod routes;
mod store;
mod sync;

use chain::EvmStakingReader;
use dto::ErrorBody;
use pool::Db;
use registry::TokenRegistry;
use rocket::{serde::json::Json, Config, Request};
use sea_orm_rocket::Database;
use std::collections::HashSet;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

#[macro_use]
extern crate rocket;

#[get("/")]
async fn health_ping() -> &'static str {
    ""
}

#[catch(404)]
async fn bad_request(req: &Request<'_>) -> Json<ErrorBody> {
    Json(ErrorBody::new(format!("Couldn't find '{}'", req.uri())))
}

#[catch(500)]
async fn internal_error() -> Json<ErrorBody> {
    Json(ErrorBody::new("Whoops! Looks like we messed up."))
}

#[launch]
async fn rocket() -> _ {
    let staking_config = Config::figment().extract::<pool::StakingConfig>().unwrap();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", &staking_config.rust_log);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                format!("staking_web_api={}", &staking_config.web_api_log)
                    .parse()
                    .expect("Error parsing directive"),
            ),
        )
        .with_span_events(FmtSpan::FULL)
        .init();

    let chain_reader = EvmStakingReader::new(&staking_config.evm_rpc_url)
        .expect("EVM RPC client failed to initialize!");

    let registry = TokenRegistry::bootstrap();

    let allowed_domains: HashSet<String> = staking_config
        .cors_allowed_domains
        .split(',')
        .map(|s| s.to_owned())
        .collect();

    rocket::build()
        .register("/", catchers![internal_error, bad_request])
        .attach(Db::init())
        .manage(staking_config)
        .manage(registry)
        .manage(chain_reader)
        .attach(cors::OriginHeader { allowed_domains })
        .attach(routes::mount())
        .mount("/", routes![health_ping])
}

#[cfg(test)]
mod sync_tests;
