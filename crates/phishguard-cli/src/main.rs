use anyhow::Result;
use clap::{Parser, Subcommand};
use phishguard_core::{AnalysisSession, CoreConfig, HistoryStorage, HistoryStore};
use phishguard_types::InputType;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "phishguard")]
#[command(about = "PhishGuard CLI - content risk scoring client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a URL or email content against the scoring service
    Analyze {
        #[command(subcommand)]
        target: AnalyzeTarget,
    },
    /// Show or clear past analyses
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Export the most recent analysis as a JSON report
    Export {
        /// Destination path (defaults to phishguard_report_<date>.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum AnalyzeTarget {
    /// Analyze a URL
    Url { url: String },
    /// Analyze email content
    Email { content: String },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List past analyses, most recent first
    List,
    /// Delete all past analyses
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = CoreConfig::default();
    let storage = HistoryStorage::default_location()?;
    let history = HistoryStore::open(storage, config.history_capacity);

    match cli.command {
        Commands::Analyze { target } => {
            let mut session = AnalysisSession::new(history);
            match target {
                AnalyzeTarget::Url { url } => {
                    commands::analyze::run(&mut session, InputType::Url, &url).await?
                }
                AnalyzeTarget::Email { content } => {
                    commands::analyze::run(&mut session, InputType::EmailContent, &content).await?
                }
            }
        }
        Commands::History { action } => match action {
            HistoryAction::List => commands::history::list(&history),
            HistoryAction::Clear => commands::history::clear(history)?,
        },
        Commands::Export { output } => commands::export::run(&history, output)?,
    }

    Ok(())
}
