//! # parley-client
//!
//! The Conversation Session Controller and the terminal front end that
//! drives it.

pub mod commands;
pub mod config;
pub mod events;
pub mod frontend;
pub mod input;
pub mod mock_data;
pub mod responder;
pub mod session;
pub mod state;
pub mod views;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ClientConfig;
use crate::session::Session;

/// Initialise logging to stderr so it never interleaves with the UI on stdout.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("parley_client_lib=debug,parley_shared=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

pub async fn run() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!(
        "Starting {} v{}",
        parley_shared::constants::APP_NAME,
        env!("CARGO_PKG_VERSION")
    );

    let config = ClientConfig::from_env();
    config.validate()?;
    tracing::info!(?config, "Loaded configuration");

    let (session, events) = Session::new(config.reply_delay());
    if config.seed_mock_data {
        mock_data::seed(&session);
    }

    frontend::run_terminal(session, events).await
}
