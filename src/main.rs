// Harness CCM Perspectives Fetcher - Main Entry Point

use harness_perspectives::{Credentials, HarnessClient, Runner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Credentials first - no network activity without both values
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let client = HarnessClient::new(credentials)?;
    let runner = Runner::new(client);

    let result = tokio::select! {
        result = runner.run() => result,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("⚠️  Interrupted - stopping before completion");
            std::process::exit(130);
        }
    };

    match result {
        Ok(summary) => {
            println!(
                "✅ Done: {} perspectives listed, {} details fetched, {} failed",
                summary.listed, summary.fetched, summary.failed
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Run failed: {e}");
            Err(e.into())
        }
    }
}
