//! Order Desk: a desktop view over the order service.
//!
//! Two screens read the order collection from the configured endpoint:
//! pending orders (with a link to each order's processing route) and the
//! archive of completed orders.

mod app;
mod archive_view;
mod client;
mod config;
mod error;
mod order;
mod orders_view;
mod projection;
mod route;
mod ui;

use app::App;
use client::OrdersClient;
use config::Config;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_args();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    fmt().with_env_filter(env_filter).with_target(true).init();

    tracing::info!(endpoint = %config.endpoint, timeout = ?config.timeout, "starting order desk");

    let client = OrdersClient::new(&config)?;

    iced::application(App::title, App::update, App::view)
        .theme(App::theme)
        .run_with(move || App::new(client))?;

    tracing::info!("order desk closed");
    Ok(())
}
