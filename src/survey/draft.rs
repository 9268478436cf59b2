//! The in-memory draft of a survey response and its reducer.
//!
//! Every mutation goes through [`apply`] with a typed [`DraftAction`], so
//! each transition is auditable and testable on its own instead of being
//! an ad hoc field assignment scattered across handlers.

use serde::{Deserialize, Serialize};

use super::fields::{self, FieldKind};

/// A not-yet-submitted survey response.
///
/// Rating fields are tri-state: `None` means the resident never touched
/// the slider, which is distinct from choosing the midpoint the UI happens
/// to park the thumb on. Collapsing these to a plain integer would make
/// missing input undetectable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyDraft {
    // About you
    pub resident_duration: String,
    pub resident_status: String,

    // Building amenities
    pub amenities_satisfaction: Option<i64>,
    pub amenities_usage: Vec<String>,
    pub amenities_improvements: String,

    // Security, safety and concierge
    pub security_satisfaction: Option<i64>,
    pub concierge_rating: Option<i64>,
    pub security_concerns: String,
    pub concierge_improvements: Vec<String>,

    // Building maintenance
    pub maintenance_satisfaction: Option<i64>,
    pub maintenance_response_satisfaction: Option<i64>,
    pub maintenance_common_issues: Vec<String>,
    pub maintenance_priority_areas: Vec<String>,
    pub maintenance_issues: String,

    // Financial management
    pub financial_satisfaction: Option<i64>,
    pub financial_transparency: Option<i64>,
    pub financial_concerns: Vec<String>,
    pub financial_priorities: String,

    // Board communication
    pub communication_satisfaction: Option<i64>,
    pub communication_frequency: String,
    pub communication_preferred_method: String,
    pub communication_suggestions: String,

    // Building projects
    pub projects_awareness: String,
    pub projects_satisfaction: Option<i64>,
    pub projects_concerns: Vec<String>,
    pub projects_suggestions: String,

    // Community and events
    pub community_importance: Option<i64>,
    pub community_interest: String,
    pub community_suggestions: String,

    // Additional feedback and optional contact details
    pub top_priorities: String,
    pub contact_name: String,
    pub contact_unit: String,
    pub contact_email: String,
}

/// One user interaction with the form.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftAction {
    SetRating { field: String, value: i64 },
    SetChoice { field: String, value: String },
    SetText { field: String, value: String },
    ToggleTag { field: String, tag: String, checked: bool },
}

/// Apply one action to the draft. Actions naming unknown fields, or of
/// the wrong kind for their field, are ignored.
pub fn apply(draft: &mut SurveyDraft, action: DraftAction) {
    match action {
        DraftAction::SetRating { field, value } => {
            if matches!(fields::kind_of(&field), Some(FieldKind::Rating)) {
                draft.set_rating(&field, value.clamp(1, 5));
            } else {
                log::debug!("ignoring rating action for {field}");
            }
        }
        DraftAction::SetChoice { field, value } => {
            if matches!(fields::kind_of(&field), Some(FieldKind::Select)) {
                draft.set_choice(&field, value);
            } else {
                log::debug!("ignoring choice action for {field}");
            }
        }
        DraftAction::SetText { field, value } => {
            if matches!(fields::kind_of(&field), Some(FieldKind::Text)) {
                draft.set_text(&field, value);
            } else {
                log::debug!("ignoring text action for {field}");
            }
        }
        DraftAction::ToggleTag { field, tag, checked } => {
            if matches!(fields::kind_of(&field), Some(FieldKind::Multi)) {
                let tags = draft.tags_mut(&field);
                if checked {
                    if !tags.iter().any(|t| *t == tag) {
                        tags.push(tag);
                    }
                } else {
                    tags.retain(|t| *t != tag);
                }
            } else {
                log::debug!("ignoring tag action for {field}");
            }
        }
    }
}

impl SurveyDraft {
    /// Build a draft from the url-encoded pairs of the no-script form
    /// post. Checkboxes only submit when checked, so every multi pair is
    /// a ToggleTag with `checked: true`.
    pub fn from_form_pairs(pairs: &[(String, String)]) -> Self {
        let mut draft = SurveyDraft::default();
        for (name, value) in pairs {
            let action = match fields::kind_of(name) {
                Some(FieldKind::Rating) => match value.parse::<i64>() {
                    Ok(v) => DraftAction::SetRating { field: name.clone(), value: v },
                    Err(_) => continue,
                },
                Some(FieldKind::Select) => {
                    if value.is_empty() {
                        continue;
                    }
                    DraftAction::SetChoice { field: name.clone(), value: value.clone() }
                }
                Some(FieldKind::Multi) => DraftAction::ToggleTag {
                    field: name.clone(),
                    tag: value.clone(),
                    checked: true,
                },
                Some(FieldKind::Text) => {
                    DraftAction::SetText { field: name.clone(), value: value.clone() }
                }
                None => continue,
            };
            apply(&mut draft, action);
        }
        draft
    }

    pub fn rating(&self, field: &str) -> Option<i64> {
        match field {
            "amenities_satisfaction" => self.amenities_satisfaction,
            "security_satisfaction" => self.security_satisfaction,
            "concierge_rating" => self.concierge_rating,
            "maintenance_satisfaction" => self.maintenance_satisfaction,
            "maintenance_response_satisfaction" => self.maintenance_response_satisfaction,
            "financial_satisfaction" => self.financial_satisfaction,
            "financial_transparency" => self.financial_transparency,
            "communication_satisfaction" => self.communication_satisfaction,
            "projects_satisfaction" => self.projects_satisfaction,
            "community_importance" => self.community_importance,
            _ => None,
        }
    }

    fn set_rating(&mut self, field: &str, value: i64) {
        let slot = match field {
            "amenities_satisfaction" => &mut self.amenities_satisfaction,
            "security_satisfaction" => &mut self.security_satisfaction,
            "concierge_rating" => &mut self.concierge_rating,
            "maintenance_satisfaction" => &mut self.maintenance_satisfaction,
            "maintenance_response_satisfaction" => &mut self.maintenance_response_satisfaction,
            "financial_satisfaction" => &mut self.financial_satisfaction,
            "financial_transparency" => &mut self.financial_transparency,
            "communication_satisfaction" => &mut self.communication_satisfaction,
            "projects_satisfaction" => &mut self.projects_satisfaction,
            "community_importance" => &mut self.community_importance,
            _ => return,
        };
        *slot = Some(value);
    }

    pub fn choice(&self, field: &str) -> &str {
        match field {
            "resident_duration" => &self.resident_duration,
            "resident_status" => &self.resident_status,
            "community_interest" => &self.community_interest,
            "projects_awareness" => &self.projects_awareness,
            "communication_frequency" => &self.communication_frequency,
            "communication_preferred_method" => &self.communication_preferred_method,
            _ => "",
        }
    }

    fn set_choice(&mut self, field: &str, value: String) {
        match field {
            "resident_duration" => self.resident_duration = value,
            "resident_status" => self.resident_status = value,
            "community_interest" => self.community_interest = value,
            "projects_awareness" => self.projects_awareness = value,
            "communication_frequency" => self.communication_frequency = value,
            "communication_preferred_method" => self.communication_preferred_method = value,
            _ => {}
        }
    }

    pub fn text(&self, field: &str) -> &str {
        match field {
            "amenities_improvements" => &self.amenities_improvements,
            "security_concerns" => &self.security_concerns,
            "maintenance_issues" => &self.maintenance_issues,
            "financial_priorities" => &self.financial_priorities,
            "communication_suggestions" => &self.communication_suggestions,
            "projects_suggestions" => &self.projects_suggestions,
            "community_suggestions" => &self.community_suggestions,
            "top_priorities" => &self.top_priorities,
            "contact_name" => &self.contact_name,
            "contact_unit" => &self.contact_unit,
            "contact_email" => &self.contact_email,
            _ => "",
        }
    }

    fn set_text(&mut self, field: &str, value: String) {
        match field {
            "amenities_improvements" => self.amenities_improvements = value,
            "security_concerns" => self.security_concerns = value,
            "maintenance_issues" => self.maintenance_issues = value,
            "financial_priorities" => self.financial_priorities = value,
            "communication_suggestions" => self.communication_suggestions = value,
            "projects_suggestions" => self.projects_suggestions = value,
            "community_suggestions" => self.community_suggestions = value,
            "top_priorities" => self.top_priorities = value,
            "contact_name" => self.contact_name = value,
            "contact_unit" => self.contact_unit = value,
            "contact_email" => self.contact_email = value,
            _ => {}
        }
    }

    pub fn tags(&self, field: &str) -> &[String] {
        match field {
            "amenities_usage" => &self.amenities_usage,
            "concierge_improvements" => &self.concierge_improvements,
            "maintenance_common_issues" => &self.maintenance_common_issues,
            "maintenance_priority_areas" => &self.maintenance_priority_areas,
            "financial_concerns" => &self.financial_concerns,
            "projects_concerns" => &self.projects_concerns,
            _ => &[],
        }
    }

    fn tags_mut(&mut self, field: &str) -> &mut Vec<String> {
        match field {
            "amenities_usage" => &mut self.amenities_usage,
            "concierge_improvements" => &mut self.concierge_improvements,
            "maintenance_common_issues" => &mut self.maintenance_common_issues,
            "maintenance_priority_areas" => &mut self.maintenance_priority_areas,
            "financial_concerns" => &mut self.financial_concerns,
            "projects_concerns" => &mut self.projects_concerns,
            _ => unreachable!("tags_mut called for non-multi field"),
        }
    }

    pub fn has_tag(&self, field: &str, tag: &str) -> bool {
        self.tags(field).iter().any(|t| t == tag)
    }

    /// Slider thumb position: the chosen value, or the neutral midpoint
    /// the UI parks the thumb on while the field is still unset.
    pub fn rating_value(&self, field: &str) -> i64 {
        self.rating(field).unwrap_or(3)
    }

    pub fn rating_set(&self, field: &str) -> bool {
        self.rating(field).is_some()
    }
}
