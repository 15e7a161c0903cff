use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use link_shortener::{config, server, telemetry};

/// URL shortener with HTTP and gRPC fronts.
#[derive(Parser)]
#[command(name = "link-shortener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with configs; environment variables are used when omitted
    #[arg(long = "conf", env = "LINKS_CONFIG")]
    conf: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load(cli.conf.as_deref())?;
    telemetry::init(&config);
    config.print_summary();

    server::run(config).await
}
