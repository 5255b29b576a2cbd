use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{PortfolioLoader, SheetsClient};
use shared::domain::ProjectId;

mod config;
mod session;

use config::load_settings;
use session::Session;

/// Render the portfolio page from its Google Sheet.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "portfolio.toml")]
    config: PathBuf,
    #[arg(long)]
    sheet_id: Option<String>,
    #[arg(long)]
    api_key: Option<String>,
    #[arg(long)]
    range: Option<String>,
    /// Write the page here instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Open this project's detail view before writing the page.
    #[arg(long)]
    select: Option<ProjectId>,
    /// Print the loaded snapshot as JSON instead of the page.
    #[arg(long)]
    dump_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(&args.config)?;
    if let Some(v) = args.sheet_id {
        settings.sheet_id = v;
    }
    if let Some(v) = args.api_key {
        settings.api_key = v;
    }
    if let Some(v) = args.range {
        settings.range = v;
    }

    let loader = PortfolioLoader::new(SheetsClient::new(settings.endpoint()));
    let mut session = Session::start(&loader, &settings).await;
    if let Some(id) = args.select {
        session.select(id);
    }

    let output = if args.dump_json {
        serde_json::to_string_pretty(&session.snapshot)?
    } else {
        session.to_html()
    };

    match args.output {
        Some(path) => fs::write(&path, output)
            .with_context(|| format!("failed to write '{}'", path.display()))?,
        None => println!("{output}"),
    }

    Ok(())
}
