use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use aurasense_core::{
    ActionClient, ActionKind, ActionOutcome, AurasenseError, ClientConfig, Surface,
};

#[derive(Parser)]
#[command(name = "aurasense")]
#[command(about = "Fetch YouTube transcripts and AI summaries from an AuraSense backend")]
struct Cli {
    /// Backend base URL. Falls back to AURASENSE_BACKEND_URL, then localhost.
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 60)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether the backend is reachable
    Health,
    /// Fetch the raw transcript of a video
    Transcribe {
        /// YouTube URL or video ID
        url: String,
    },
    /// Fetch an AI-generated summary of a video
    Summarize {
        /// YouTube URL or video ID
        url: String,
    },
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aurasense_core=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::resolve(cli.backend_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = ActionClient::new(config)?;

    println!(
        "\n{}  {}\n",
        style("aurasense").cyan().bold(),
        style("YouTube Intelligence").dim()
    );

    match cli.command {
        Command::Health => check_health(&client).await,
        Command::Transcribe { url } => run_action(&client, ActionKind::Transcribe, &url).await,
        Command::Summarize { url } => run_action(&client, ActionKind::Summarize, &url).await,
    }
}

async fn check_health(client: &ActionClient) -> Result<()> {
    let spinner = create_spinner("Checking backend...");
    match client.check_health().await {
        Ok(health) => {
            spinner.finish_with_message(format!(
                "{} Backend {} {}",
                style("✓").green().bold(),
                style(&health.status).green(),
                style(client.base_url()).dim()
            ));
            Ok(())
        }
        Err(AurasenseError::BackendUnreachable { .. }) => {
            spinner.finish_with_message(format!(
                "{} Backend {} {}",
                style("✗").red().bold(),
                style("Unavailable").red(),
                style(client.base_url()).dim()
            ));
            std::process::exit(1);
        }
        Err(e) => {
            spinner.finish_and_clear();
            Err(e.into())
        }
    }
}

async fn run_action(client: &ActionClient, kind: ActionKind, url: &str) -> Result<()> {
    let mut surface = Surface::new();
    let spinner = create_spinner(&format!("Requesting {}...", kind.label()));

    match surface.submit(client, kind, url).await {
        Ok(outcome) => {
            spinner.finish_with_message(format!(
                "{} Received {} for {}",
                style("✓").green().bold(),
                kind.label(),
                style(outcome.video_id()).yellow()
            ));
            println!("{}", style("─".repeat(60)).dim());
            print_outcome(&outcome);
            Ok(())
        }
        // Inline error output; the URL the user typed is not discarded by us.
        Err(err) => {
            spinner.finish_with_message(format!("{} {}", style("✗").red().bold(), err));
            std::process::exit(1);
        }
    }
}

fn print_outcome(outcome: &ActionOutcome) {
    if matches!(outcome, ActionOutcome::Summary(_)) {
        println!("{}\n", style("AI Summary").bold());
    }
    println!("{}", outcome.text());
}
