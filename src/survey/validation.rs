//! Submit-time validation of a survey draft.
//!
//! Two orders are in play and they are not the same. Error messages are
//! reported in the declaration order of the required-field lists, while
//! focus targeting follows the rendered document: the topmost missing
//! control is the one brought into view.

use super::draft::SurveyDraft;
use super::fields::{self, REQUIRED_RATINGS, REQUIRED_SELECTS};

/// Outcome of validating a draft: one message per missing required field,
/// plus the parallel field-name list used only for focus targeting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub messages: Vec<String>,
    pub missing: Vec<&'static str>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Check every required field. A rating left at `None` fails even though
/// the slider renders at the midpoint; only an actual interaction makes
/// it `Some`.
pub fn validate(draft: &SurveyDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (name, label) in REQUIRED_RATINGS {
        if draft.rating(name).is_none() {
            report.messages.push(format!("Please provide a rating for {label}"));
            report.missing.push(name);
        }
    }

    for (name, label) in REQUIRED_SELECTS {
        if draft.choice(name).is_empty() {
            report.messages.push(format!("Please select a value for {label}"));
            report.missing.push(name);
        }
    }

    report
}

/// The field whose control sits highest on the page, i.e. the one to
/// scroll into view and focus. Fields without a rendered control are
/// skipped; `None` tells the caller to fall back to scrolling the form
/// container itself.
pub fn focus_target(missing: &[&'static str]) -> Option<&'static str> {
    missing
        .iter()
        .filter_map(|f| fields::document_position(f).map(|pos| (pos, *f)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, f)| f)
}
