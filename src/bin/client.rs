//! gRPC smoke client for link-shortener.
//!
//! Creates a short link through the gRPC front, resolves it again, and fails
//! unless the round trip returns the original link.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin links-client
//! cargo run --bin links-client -- --addr http://127.0.0.1:8081 --url https://www.rust-lang.org
//! ```

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::*;

use link_shortener::rpc::proto::{OriginalLink, ShortLink, links_client::LinksClient};

/// Round-trip check against a running gRPC front.
#[derive(Parser)]
#[command(name = "links-client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// gRPC endpoint
    #[arg(long, default_value = "http://127.0.0.1:8081")]
    addr: String,

    /// Original link to shorten
    #[arg(long, default_value = "https://www.golang.org")]
    url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut client = LinksClient::connect(cli.addr.clone())
        .await
        .with_context(|| format!("Failed to connect to {}", cli.addr))?;

    let short = client
        .create_short_link(OriginalLink {
            original_link: cli.url.clone(),
        })
        .await
        .context("CreateShortLink failed")?
        .into_inner();
    println!("{} {}", "short link:".bright_blue(), short.short_link);

    let original = client
        .get_original_link(ShortLink {
            short_link: short.short_link,
        })
        .await
        .context("GetOriginalLink failed")?
        .into_inner();

    if original.original_link != cli.url {
        bail!(
            "incorrect work: expected '{}', got '{}'",
            cli.url,
            original.original_link
        );
    }

    println!("{}", "SUCCESS".green().bold());
    Ok(())
}
