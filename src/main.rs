mod bot;
mod config;
mod data;
mod error;
mod model;
mod platform;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

#[cfg(test)]
mod test_utils;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let state = AppState::from_config(config.clone());

    tracing::info!("Starting Discord Chat Reviver Bot");

    // Liveness endpoint runs alongside the bot; losing it is not fatal.
    let keep_alive_addr = config.keep_alive_addr;
    tokio::spawn(async move {
        if let Err(e) = startup::serve_keep_alive(keep_alive_addr).await {
            tracing::error!("Keep-alive server error: {}", e);
        }
    });

    bot::start::start_bot(&config, state).await
}
