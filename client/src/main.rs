//! `roster` console: page through, create, edit and delete players from a
//! terminal.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::io;
use std::sync::Arc;

use color_eyre::eyre::{Context, Result};
use ortho_config::OrthoConfig;
use roster::config::RosterSettings;
use roster::domain::PlayerTableController;
use roster::inbound::terminal::{TerminalNotifier, TerminalSession, TerminalTableView};
use roster::outbound::http::PlayerHttpGateway;
use tokio::io::BufReader;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    color_eyre::install()?;
    let settings =
        RosterSettings::load_from_iter(env::args_os()).wrap_err("failed to load roster settings")?;
    init_tracing(settings.log_json);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build console runtime")?;
    runtime.block_on(run(settings))
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

async fn run(settings: RosterSettings) -> Result<()> {
    let gateway = PlayerHttpGateway::new(settings.base_url()?, settings.request_timeout())
        .wrap_err("failed to build players gateway")?;
    info!(url = %gateway.collection_url(), "using players backend");

    let controller = PlayerTableController::new(
        Arc::new(gateway),
        Arc::new(TerminalNotifier::new(io::stdout())),
        TerminalTableView::new(io::stdout()),
        settings.page_size_selector()?,
    )
    .with_date_display(settings.date_display()?);

    let mut session = TerminalSession::new(controller);
    session.start().await;
    session
        .run(BufReader::new(tokio::io::stdin()))
        .await
        .wrap_err("failed to read console input")?;
    Ok(())
}
