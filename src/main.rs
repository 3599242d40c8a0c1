use anyhow::Result;
use clap::Parser;

mod encoding;
mod error;
mod export;
mod key;
mod keygen;
mod provider;
mod secret_key;

use crate::provider::OsCryptoProvider;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Local Ed25519 keypair generator (offline). No network calls."
)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    let result = keygen::run(&OsCryptoProvider).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
