use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use chatbox::{Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "chatbox")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Query endpoint URL (defaults to $CHATBOX_QUERY_URL, then http://localhost:8000/query/)
    #[arg(short, long, global = true)]
    endpoint: Option<String>,

    /// Give up on a request after this many seconds (no timeout by default)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Answer from canned responses instead of calling the endpoint
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let directive = log_directive(cli.verbose, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        endpoint: cli.endpoint,
        timeout_secs: cli.timeout_secs,
        mock: cli.mock,
    })?;
    debug!("Answer endpoint: {}", container.endpoint());

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

/// `--verbose` wins, then `RUST_LOG`, then `info`.
fn log_directive(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    rust_log
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "info".to_string())
}
