use serde::{Deserialize, Serialize};

use crate::survey::draft::SurveyDraft;

/// A persisted survey response: the submitted draft plus the identity,
/// timestamp, and building label the server assigns at write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResponse {
    pub id: i64,
    pub created_at: String,
    pub building: String,
    #[serde(flatten)]
    pub survey: SurveyDraft,
}

impl StoredResponse {
    pub fn rating(&self, field: &str) -> Option<i64> {
        self.survey.rating(field)
    }
}
