use clap::Parser;
use litlens::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "litlens", about = "Terminal client for the LitLens bookshelf service")]
struct Args {
    /// API base URL (overrides config file and LITLENS_API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to litlens.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("litlens.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({}), using defaults", e);
        config::LitlensConfig::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref());

    log::info!("LitLens starting up (api: {})", resolved.api_base_url);

    litlens::tui::run(resolved)
}
