use std::sync::Arc;

use ub_api_rest::{
    context::{ApiRestCtx, ApiRestDaoCtx, ApiRestHashCtx, ApiRestTokenCtx},
    ApiRestServer,
};
use ub_hash_argon2::argon2::Argon2Hash;
use ub_store_json::store::JsonStore;
use ub_token_jwt::token::JwtToken;

mod config_path;

#[tokio::main]
async fn main() {
    let config_path = config_path::get();
    let config = ub_config::new(&config_path);

    ub_log::init(config.log().display_level(), config.log().level_filter());

    ub_log::info(Some("🚀"), "[Userbase] Starting");

    let argon2_hash = Argon2Hash::new(
        config.hash().argon2().algorithm(),
        config.hash().argon2().version(),
        config.hash().argon2().salt(),
    );

    let jwt_token = JwtToken::new(
        config.token().jwt().secret(),
        config.token().jwt().expiry_duration(),
    );

    let store = match JsonStore::new(config.store().json().path()).await {
        Ok(store) => Arc::new(store),
        Err(err) => {
            ub_log::panic(None, format!("[Userbase] Opening store failed: {err}"));
            return;
        }
    };

    let api_rest_server = ApiRestServer::new(
        config.api().rest().host(),
        config.api().rest().port(),
        config.api().rest().allowed_origin(),
        ApiRestCtx::new(
            ApiRestHashCtx::new(argon2_hash),
            ApiRestTokenCtx::new(jwt_token),
            ApiRestDaoCtx::new(store),
        ),
    );

    match api_rest_server.run().await {
        Ok(_) => ub_log::info(Some("👋"), "[Userbase] Turned off"),
        Err(err) => {
            ub_log::error(Some("👋"), format!("[Userbase] Turned off with error: {err}"))
        }
    }
}
