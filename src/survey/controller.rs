//! The submit protocol around a survey draft.
//!
//! The controller owns the draft plus the bits of state the form needs to
//! re-render after a failed attempt: whether a submit was tried, the
//! current error list, and whether the response has been accepted (a
//! terminal state; the draft is read-only from then on).

use super::draft::{self, DraftAction, SurveyDraft};
use super::validation;

/// Shown when the submission call itself fails; validation problems get
/// their own per-field messages instead.
pub const GENERIC_SUBMIT_ERROR: &str =
    "There was an error submitting your survey. Please try again.";

/// Where a valid draft gets sent. The server's form handler implements
/// this over a database insert; tests implement it with a call counter.
pub trait SubmitTransport {
    fn send(&mut self, draft: &SurveyDraft) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was transmitted.
    Rejected,
    /// The response was transmitted and accepted.
    Accepted,
    /// The draft was valid but the submission call failed; the draft is
    /// untouched and may be re-submitted.
    TransportFailed,
    /// A response was already accepted; repeat submits are refused.
    AlreadySubmitted,
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    pub draft: SurveyDraft,
    pub attempted_submit: bool,
    pub submitted: bool,
    pub errors: Vec<String>,
    pub missing: Vec<&'static str>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a user interaction to the draft. Ignored once submitted;
    /// the accepted response is immutable.
    pub fn apply(&mut self, action: DraftAction) {
        if self.submitted {
            return;
        }
        draft::apply(&mut self.draft, action);
    }

    /// Validate and, if clean, transmit exactly once.
    ///
    /// On rejection the draft is left intact for correction and no
    /// transport call is made. On transport failure the draft is also
    /// left intact, `attempted_submit` stays set so any visible errors
    /// persist until corrected, and nothing retries automatically.
    pub fn submit(&mut self, transport: &mut dyn SubmitTransport) -> SubmitOutcome {
        if self.submitted {
            return SubmitOutcome::AlreadySubmitted;
        }

        self.attempted_submit = true;

        let report = validation::validate(&self.draft);
        if !report.is_valid() {
            self.errors = report.messages.clone();
            self.missing = report.missing;
            return SubmitOutcome::Rejected;
        }

        self.errors.clear();
        self.missing.clear();

        match transport.send(&self.draft) {
            Ok(()) => {
                self.submitted = true;
                SubmitOutcome::Accepted
            }
            Err(e) => {
                log::error!("survey submission failed: {e}");
                self.errors = vec![GENERIC_SUBMIT_ERROR.to_string()];
                SubmitOutcome::TransportFailed
            }
        }
    }

    /// Whether this field should render in its error state.
    pub fn is_missing(&self, field: &str) -> bool {
        self.attempted_submit && self.missing.iter().any(|f| *f == field)
    }

    /// Whether this field is the focus target, i.e. the topmost missing
    /// control. The form template turns this into an `autofocus`.
    pub fn focus_is(&self, field: &str) -> bool {
        self.attempted_submit && validation::focus_target(&self.missing) == Some(field)
    }
}
