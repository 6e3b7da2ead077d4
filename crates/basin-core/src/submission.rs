//! Hand-off of computed answers to an external checker.
//!
//! The transport (HTTP session, cookies, endpoint) belongs to whoever
//! implements [`AnswerSink`]; this module only fixes the contract and the
//! interpretation of the checker's reply.
use serde::Serialize;
use thiserror::Error;

use crate::analysis::AnalysisReport;

/// Verdict returned by the checker for one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
    /// The reply matched neither verdict (rate limiting, already solved, ...).
    Unknown,
}

impl SubmitOutcome {
    /// Classify a checker reply body.
    pub fn from_response(body: &str) -> Self {
        if body.contains("not the right answer") {
            SubmitOutcome::Rejected
        } else if body.contains("That's the right answer") {
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Unknown
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("answer submission failed: {0}")]
    Transport(String),
}

/// Receives one answer at a time. Implementations are not retried.
pub trait AnswerSink {
    fn submit(&mut self, answer: &str) -> Result<SubmitOutcome, SubmitError>;
}

/// Submit the risk score, then the basin score.
pub fn submit_scores<S: AnswerSink + ?Sized>(
    sink: &mut S,
    report: &AnalysisReport,
) -> Result<[SubmitOutcome; 2], SubmitError> {
    let mut outcomes = [SubmitOutcome::Unknown; 2];
    for (slot, (label, answer)) in outcomes.iter_mut().zip([
        ("risk score", report.risk_score),
        ("basin score", report.basin_score),
    ]) {
        let outcome = sink.submit(&answer.to_string())?;
        match outcome {
            SubmitOutcome::Accepted => log::info!("{label} {answer} accepted"),
            SubmitOutcome::Rejected => log::warn!("{label} {answer} rejected"),
            SubmitOutcome::Unknown => log::info!("{label} {answer}: no verdict"),
        }
        *slot = outcome;
    }
    Ok(outcomes)
}
