//! World Events Dashboard
//!
//! Terminal front-end that polls the events server, renders the loaded
//! batch as cards and takes commands from stdin.

mod command;
mod render;

use clap::Parser;
use command::{Command, HELP};
use std::sync::Arc;
use std::time::Duration;
use time::UtcOffset;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;
use wevt_core::dashboard::{Dashboard, DashboardConfig};
use wevt_sdk::client::EventsClient;

/// World Events - terminal dashboard
#[derive(Parser, Debug)]
#[command(name = "wevt-dashboard")]
#[command(version, about, long_about = None)]
struct Args {
    /// Root URL of the events server
    #[arg(short, long, env = "WEVT_SERVER_URL", default_value = "http://127.0.0.1:8080")]
    server_url: Url,

    /// Seconds between automatic refreshes
    #[arg(short, long, env = "WEVT_REFRESH_INTERVAL", default_value_t = 30)]
    interval_secs: u64,

    /// Start with auto-refresh enabled
    #[arg(short, long)]
    auto_refresh: bool,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    // The local offset can only be read while the process is single-threaded.
    let offset = UtcOffset::current_local_offset().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Could not determine local offset, showing UTC");
        UtcOffset::UTC
    });

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(args, offset))
}

async fn run(args: Args, offset: UtcOffset) -> anyhow::Result<()> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()?;
    let client = EventsClient::new(args.server_url).with_http_client(http);

    tracing::info!(server = %client.base_url(), "Starting wevt-dashboard v{}", env!("CARGO_PKG_VERSION"));

    let config = DashboardConfig {
        auto_refresh_interval: Duration::from_secs(args.interval_secs.max(1)),
    };
    let mut dashboard = Dashboard::mount(Arc::new(client), config).await;
    if args.auto_refresh {
        dashboard.set_auto_refresh(true);
    }
    let interval = dashboard.config().auto_refresh_interval;

    let mut state_rx = dashboard.subscribe();
    println!(
        "{}",
        render::render(&state_rx.borrow_and_update(), interval, offset)
    );
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received Ctrl+C, exiting");
                break;
            }

            changed = state_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let view = render::render(&state_rx.borrow_and_update(), interval, offset);
                println!("{view}");
            }

            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read stdin");
                        break;
                    }
                };

                match Command::parse(&line) {
                    Ok(Command::Refresh) => {
                        // Mirrors a disabled refresh button while a fetch is in flight.
                        if dashboard.state().loading {
                            println!("Already loading");
                        } else {
                            let handle = dashboard.handle();
                            tokio::spawn(async move {
                                let _ = handle.refresh().await;
                            });
                        }
                    }
                    Ok(Command::Filter(filter)) => dashboard.set_filter(filter),
                    Ok(Command::AutoRefresh(enabled)) => dashboard.set_auto_refresh(enabled),
                    Ok(Command::Categories) => {
                        println!("{}", render::render_categories(&dashboard.state()));
                    }
                    Ok(Command::Help) => println!("{HELP}"),
                    Ok(Command::Quit) => break,
                    Err(command::CommandError::Empty) => {}
                    Err(e) => println!("{e}"),
                }
            }
        }
    }

    // Dropping the dashboard stops the auto-refresh timer.
    drop(dashboard);
    tracing::info!("Dashboard closed");
    Ok(())
}

/// Logs go to stderr so they do not interleave with the rendered view.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
