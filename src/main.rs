use std::env;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use palpite_ev::api_client::ApiClient;
use palpite_ev::config::ProviderConfig;
use palpite_ev::pipeline::Analyzer;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ProviderConfig::from_env()?;
    let client = ApiClient::new(config)?;
    let analyzer = Analyzer::new(client);

    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        let prompt = args.join(" ");
        println!("{}", analyzer.analyze_to_text(&prompt));
        return Ok(());
    }

    // No prompt on the command line: one analysis per stdin line, the same
    // shape a chat-transport collaborator drives this with.
    info!("reading prompts from stdin, one per line");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        println!("{}", analyzer.analyze_to_text(&line));
        io::stdout().flush().ok();
    }
    Ok(())
}
