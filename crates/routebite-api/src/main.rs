//! Routebite CLI and server entry point.
//!
//! Binary name: `rbite`
//!
//! Parses CLI arguments, loads the catalog, then dispatches to a command
//! handler or starts the lookup endpoint and the Telegram poller.

mod bot;
mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use routebite_core::dispatch::MessageDispatcher;
use routebite_infra::config::Settings;
use routebite_infra::nlu::WitClient;
use routebite_infra::telegram::TelegramClient;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,routebite_core=debug,routebite_infra=debug,routebite_api=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need the catalog
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "rbite", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init();

    match cli.command {
        Commands::Resolve { start, end } => {
            cli::resolve::resolve(&state, &start, &end, cli.json)?;
        }

        Commands::Routes => {
            cli::routes::routes(&state, cli.json)?;
        }

        Commands::Serve { host, port } => {
            let settings = Settings::from_env()?;
            let host = host.unwrap_or(settings.host);
            let port = port.unwrap_or(settings.port);

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            let wit = WitClient::new(settings.wit_token);
            let telegram = TelegramClient::new(settings.telegram_token);
            let dispatcher = MessageDispatcher::new(wit, state.resolver.clone());
            let poller = tokio::spawn(bot::run(telegram, dispatcher));

            println!(
                "  {} Routebite lookup endpoint on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!(
                "  {} Telegram poller running",
                console::style("🤖").bold()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            poller.abort();
            println!("\n  Server stopped.");
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
