//! Seam to the external scoring service.

use async_trait::async_trait;
use phishguard_types::{InputType, ScoreResponse};

use crate::error::Result;

/// The external collaborator that computes risk scores.
///
/// The core only depends on this trait; the HTTP implementation lives in
/// the client crate so the workflow stays testable without a network.
#[async_trait]
pub trait ScoringService: Send + Sync {
    /// Submits one piece of content for scoring.
    ///
    /// # Errors
    ///
    /// Returns a `Transport` error for any network, endpoint, or payload
    /// failure. The core does not retry.
    async fn analyze(&self, input_type: InputType, input: &str) -> Result<ScoreResponse>;
}
