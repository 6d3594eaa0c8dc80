use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use order_analytics::analyzer::{OrderAnalyticsEngine, ReportOptions};
use order_analytics::logging::init_logging;
use order_analytics::models::TimePeriod;

#[derive(Parser)]
#[command(name = "order-analytics")]
#[command(about = "Fast order analytics and time-period reporting for restaurant dashboards")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone)]
struct CommonArgs {
    /// Output in JSON format
    #[arg(long)]
    json: bool,
    /// Show at most N rows per report section
    #[arg(long)]
    limit: Option<usize>,
    /// Order exports path (file or directory), overrides config
    #[arg(long)]
    orders: Option<PathBuf>,
    /// Menu catalog file (JSON array), overrides config
    #[arg(long)]
    menu: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analytics for a single day
    Daily {
        /// Date to report on (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Analytics for the current calendar week (Sunday-Saturday)
    Weekly {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Analytics for the current calendar month
    Monthly {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Analytics over all orders
    Summary {
        #[command(flatten)]
        common: CommonArgs,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Summary {
        common: CommonArgs {
            json: false,
            limit: None,
            orders: None,
            menu: None,
        },
    });

    let (period, date, common) = match command {
        Commands::Daily { date, common } => {
            let date = date.unwrap_or_else(today_string);
            validate_date(&date, common.json);
            (TimePeriod::Daily, Some(date), common)
        }
        Commands::Weekly { common } => (TimePeriod::Weekly, None, common),
        Commands::Monthly { common } => (TimePeriod::Monthly, None, common),
        Commands::Summary { common } => (TimePeriod::Total, None, common),
    };

    let engine = OrderAnalyticsEngine::new();
    let options = ReportOptions {
        period,
        date,
        json_output: common.json,
        limit: common.limit,
        orders_path: common.orders,
        menu_path: common.menu,
    };

    match engine.run_report(options) {
        Ok(_) => Ok(()),
        Err(e) => handle_error(e, common.json),
    }
}

fn today_string() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn validate_date(date: &str, json: bool) {
    if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        if !json {
            eprintln!("❌ Invalid date format: {}. Use YYYY-MM-DD", date);
        }
        process::exit(1);
    }
}

fn handle_error(e: anyhow::Error, json: bool) -> Result<(), anyhow::Error> {
    if json {
        println!("{}", serde_json::json!({ "error": e.to_string() }));
    } else {
        eprintln!("Error: {}", e);
    }
    process::exit(1);
}
