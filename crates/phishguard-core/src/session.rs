//! The analyze-request workflow state machine.

use phishguard_types::{AnalysisRecord, InputType, ScoreResponse, SessionState};

use crate::error::{PhishGuardError, Result};
use crate::history::HistoryStore;
use crate::scoring::ScoringService;
use crate::validator;

/// Proof that a submission was accepted and is in flight.
///
/// A ticket is consumed by [`AnalysisSession::complete`]. It carries the
/// accepted input and the session generation it was issued under; a ticket
/// issued before a `reset()` is stale and its completion is dropped.
#[derive(Debug)]
pub struct SubmissionTicket {
    input_type: InputType,
    input_text: String,
    generation: u64,
}

impl SubmissionTicket {
    /// The kind of content this submission carries.
    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    /// The accepted (trimmed) input text.
    pub fn input_text(&self) -> &str {
        &self.input_text
    }
}

/// Orchestrates one analyze-request lifecycle at a time.
///
/// States: `Idle -> Submitting -> {Succeeded, Failed} -> Idle`. At most one
/// request may be outstanding; a second submission while one is in flight
/// is rejected synchronously with [`PhishGuardError::Busy`], never queued.
///
/// The session owns its ephemeral state and the [`HistoryStore`]; on a
/// successful completion the produced record is handed to the store. The
/// transition functions are explicit so a view layer can observe the
/// current state and history after every step.
pub struct AnalysisSession {
    state: SessionState,
    history: HistoryStore,
    generation: u64,
}

impl AnalysisSession {
    /// Creates an idle session over the given history store.
    pub fn new(history: HistoryStore) -> Self {
        Self {
            state: SessionState::Idle,
            history,
            generation: 0,
        }
    }

    /// The current workflow state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Read-only view of the history contents.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Validates the input and transitions to `Submitting`.
    ///
    /// # Errors
    ///
    /// - `Busy` if a request is already in flight. The state is unchanged
    ///   and the in-flight submission is undisturbed.
    /// - `Validation` if the input is rejected. The session moves to
    ///   `Failed` with the validator's reason; no request is issued.
    pub fn begin(&mut self, input_type: InputType, text: &str) -> Result<SubmissionTicket> {
        if self.state.is_submitting() {
            return Err(PhishGuardError::Busy);
        }

        if let Err(err) = validator::validate(input_type, text) {
            self.state = SessionState::Failed(err.to_string());
            return Err(err);
        }

        self.state = SessionState::Submitting;
        tracing::debug!(%input_type, "submission accepted");

        Ok(SubmissionTicket {
            input_type,
            input_text: text.trim().to_string(),
            generation: self.generation,
        })
    }

    /// Consumes a ticket with the scoring outcome and settles the session.
    ///
    /// On success the record is built here: `created_at` is stamped at
    /// receipt time and the risk level is recomputed from the score, so the
    /// record is self-consistent even when the service reports a level that
    /// disagrees with its own score. The record is then appended to the
    /// history; a persistence failure is logged and does not roll back the
    /// `Succeeded` state.
    ///
    /// A stale ticket (issued before a `reset()` or a history load) is
    /// ignored: a late response must not resurrect the session.
    pub fn complete(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<ScoreResponse>,
    ) -> &SessionState {
        if ticket.generation != self.generation {
            tracing::debug!("dropping completion for a stale submission");
            return &self.state;
        }

        match outcome {
            Ok(response) => {
                let record = AnalysisRecord::new(
                    ticket.input_type,
                    ticket.input_text,
                    response.score,
                    response.analysis_summary,
                    response.triggered_rules,
                );
                if let Err(err) = self.history.add(record.clone()) {
                    tracing::warn!("Failed to persist analysis result: {err}");
                }
                self.state = SessionState::Succeeded(record);
            }
            Err(err) => {
                self.state = SessionState::Failed(err.to_string());
            }
        }

        &self.state
    }

    /// Runs one full submission: `begin`, one call to the scoring service,
    /// `complete`.
    ///
    /// # Errors
    ///
    /// `Busy` and `Validation` errors from [`AnalysisSession::begin`];
    /// transport failures settle the session in `Failed` and are reported
    /// through the returned state rather than as an error.
    pub async fn submit(
        &mut self,
        input_type: InputType,
        text: &str,
        service: &dyn ScoringService,
    ) -> Result<&SessionState> {
        let ticket = self.begin(input_type, text)?;
        let outcome = service.analyze(ticket.input_type(), ticket.input_text()).await;
        Ok(self.complete(ticket, outcome))
    }

    /// Returns to `Idle`, discarding any held record or error.
    ///
    /// Pending completions are orphaned; the history is untouched.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = SessionState::Idle;
    }

    /// Re-displays a past record without validation, network, or re-insert
    /// into the history.
    pub fn load_from_history(&mut self, record: AnalysisRecord) {
        self.generation += 1;
        self.state = SessionState::Succeeded(record);
    }
}
