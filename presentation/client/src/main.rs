use dotenvy::dotenv;

mod config;
mod setup;

use business::domain::fetch::http::{FetchOutcome, HttpMethod};
use business::domain::fetch::services::SessionContext;
use business::domain::fetch::use_cases::fetch::Fetcher;
use config::app_config::AppConfig;
use setup::{command::Command, dependency_injection::DependencyContainer};

/// Shopping client entry point
///
/// Wires the fetcher from environment configuration and issues a single
/// authenticated call:
/// - config/: API origin and initial session
/// - setup/: Dependency wiring and argument parsing
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Parse the call to issue
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(AppConfig::from_env());
    let fetcher = container.fetcher;

    // 5. Issue the call
    let outcome = match (command.method, command.body) {
        (HttpMethod::Get, _) => fetcher.get(&command.endpoint).await?,
        (HttpMethod::Delete, _) => fetcher.delete(&command.endpoint).await?,
        (HttpMethod::Post, body) => {
            fetcher
                .post(&command.endpoint, body.unwrap_or_default())
                .await?
        }
        (HttpMethod::Put, body) => {
            fetcher
                .put(&command.endpoint, body.unwrap_or_default())
                .await?
        }
    };

    match outcome {
        FetchOutcome::Completed(response) => {
            tracing::info!(
                "{} {} -> {}",
                command.method,
                command.endpoint,
                response.status
            );
            println!("{}", response.body);
        }
        FetchOutcome::Redirected => {
            tracing::warn!(
                "session rejected, now at {}",
                container.session.current_location()
            );
        }
    }

    Ok(())
}
