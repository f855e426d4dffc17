use anyhow::Result;
use phishguard_client::ScoringApiClient;
use phishguard_core::AnalysisSession;
use phishguard_types::{InputType, SessionState};

/// Submits one piece of content and prints the outcome.
pub async fn run(
    session: &mut AnalysisSession,
    input_type: InputType,
    text: &str,
) -> Result<()> {
    let client = ScoringApiClient::from_env();

    match session.submit(input_type, text, &client).await {
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {err}");
            return Ok(());
        }
    }

    match session.state() {
        SessionState::Succeeded(record) => {
            println!("Risk score : {}/100", record.score);
            println!("Risk level : {}", record.risk_level);
            println!("Summary    : {}", record.summary);
            if !record.triggered_indicators.is_empty() {
                println!("Triggered indicators:");
                for indicator in &record.triggered_indicators {
                    println!("  - {indicator}");
                }
            }
        }
        SessionState::Failed(message) => {
            eprintln!("Analysis failed: {message}");
        }
        // submit always settles in a terminal state
        _ => {}
    }

    Ok(())
}
