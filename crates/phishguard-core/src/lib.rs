//! Core workflow for the PhishGuard content-risk client: input validation,
//! the analysis session state machine, the bounded durable history, and
//! report export.

pub mod config;
pub mod error;
pub mod history;
pub mod history_storage;
pub mod report;
pub mod scoring;
pub mod session;
pub mod validator;

// Re-export common types
pub use config::CoreConfig;
pub use error::PhishGuardError;
pub use history::{DEFAULT_CAPACITY, HistoryStore};
pub use history_storage::HistoryStorage;
pub use scoring::ScoringService;
pub use session::{AnalysisSession, SubmissionTicket};
