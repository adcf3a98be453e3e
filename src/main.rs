use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tool_rental::api::{AppState, create_router};
use tool_rental::checkout::CheckoutService;
use tool_rental::config::{CatalogLoader, ToolCatalog};
use tool_rental::models::CurrencyFormat;

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(name = "tool-rental")]
#[command(about = "Tool rental checkout - billable days, charges and agreements")]
struct Args {
    #[arg(short, long, global = true, help = "Directory holding categories.yaml and tools.yaml")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check out a tool and print the rental agreement
    Checkout {
        #[arg(short, long, help = "Tool code, e.g. JAKR")]
        tool: String,

        #[arg(short, long, allow_negative_numbers = true, help = "Number of rental days")]
        days: i64,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true, help = "Discount percent, 0 to 100")]
        discount: i64,

        #[arg(long, help = "Checkout date as YYYY-MM-DD (defaults to today)")]
        date: Option<NaiveDate>,
    },

    /// List the tools available for rent
    Tools,

    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tool_rental=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let catalog = match &args.config {
        Some(dir) => CatalogLoader::load(dir)
            .with_context(|| format!("loading tool catalog from {}", dir.display()))?,
        None => ToolCatalog::standard(),
    };

    match args.command {
        Command::Checkout {
            tool,
            days,
            discount,
            date,
        } => {
            let checkout_date = date.unwrap_or_else(|| Local::now().date_naive());
            let service = CheckoutService::new(catalog);
            let agreement = service.checkout(&tool, days, discount, checkout_date)?;
            agreement.print();
        }
        Command::Tools => {
            let usd = CurrencyFormat::US_DOLLAR;
            for tool in catalog.tools() {
                println!(
                    "{}  {:<10}  {:<8}  {}/day  weekends: {}  holidays: {}",
                    tool.code,
                    tool.category.label(),
                    tool.brand,
                    usd.format(tool.policy.daily_rate),
                    if tool.policy.weekend_charge { "charged" } else { "free" },
                    if tool.policy.holiday_charge { "charged" } else { "free" },
                );
            }
        }
        Command::Serve { addr } => {
            let router = create_router(AppState::new(catalog));
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("binding {}", addr))?;

            info!(%addr, "Tool rental API listening");
            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
            info!("Tool rental API stopped");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
    }
}
