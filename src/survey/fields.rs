//! The survey's field schema.
//!
//! Everything that needs to agree about the form lives here: the required
//! field lists checked at submit time, the top-to-bottom order of the
//! rendered controls used for focus targeting, and the option inventories
//! for every select and checkbox group. The form template, the validation
//! engine, and the client script are all generated from this one table, so
//! they cannot drift apart.

use serde_json::json;

/// What kind of control a field is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 1-5 slider with null-until-touched semantics.
    Rating,
    /// Single-choice select or radio group, "" when unset.
    Select,
    /// Checkbox group collected into a tag set.
    Multi,
    /// Free text, unbounded.
    Text,
}

/// One `<option>` / radio / checkbox choice.
#[derive(Debug, Clone, Copy)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// One rating slider: wire name, the short label used in validation
/// messages, the question shown above the control, and the scale captions.
#[derive(Debug, Clone, Copy)]
pub struct RatingQuestion {
    pub name: &'static str,
    pub label: &'static str,
    pub question: &'static str,
    pub left: &'static str,
    pub middle: &'static str,
    pub right: &'static str,
    pub required: bool,
}

/// The nine mandatory ratings, in the fixed order validation messages are
/// reported in. This is declaration order, not document order: the
/// resident-status radio sits near the top of the page but its message is
/// appended after all of these.
pub const REQUIRED_RATINGS: [(&str, &str); 9] = [
    ("amenities_satisfaction", "Building Amenities satisfaction"),
    ("security_satisfaction", "Building Safety rating"),
    ("maintenance_satisfaction", "Building Maintenance rating"),
    ("maintenance_response_satisfaction", "Maintenance Response satisfaction"),
    ("financial_satisfaction", "Financial Management satisfaction"),
    ("financial_transparency", "Financial Transparency rating"),
    ("communication_satisfaction", "Board Communication satisfaction"),
    ("projects_satisfaction", "Building Projects satisfaction"),
    ("community_importance", "Community Building importance"),
];

pub const REQUIRED_SELECTS: [(&str, &str); 1] = [("resident_status", "Resident status")];

/// Every rendered control, top to bottom as laid out on the survey page.
/// Focus targeting picks the topmost missing field from this order, which
/// interleaves the security and concierge questions and does not match the
/// declaration order above.
pub const DOCUMENT_ORDER: [&str; 33] = [
    "resident_duration",
    "resident_status",
    "amenities_satisfaction",
    "amenities_usage",
    "amenities_improvements",
    "security_satisfaction",
    "concierge_rating",
    "security_concerns",
    "concierge_improvements",
    "maintenance_satisfaction",
    "maintenance_response_satisfaction",
    "maintenance_common_issues",
    "maintenance_priority_areas",
    "maintenance_issues",
    "financial_satisfaction",
    "financial_transparency",
    "financial_concerns",
    "financial_priorities",
    "communication_satisfaction",
    "communication_frequency",
    "communication_preferred_method",
    "communication_suggestions",
    "projects_awareness",
    "projects_satisfaction",
    "projects_concerns",
    "projects_suggestions",
    "community_importance",
    "community_interest",
    "community_suggestions",
    "top_priorities",
    "contact_name",
    "contact_unit",
    "contact_email",
];

/// Position of a field in the rendered document, if it has a control.
pub fn document_position(field: &str) -> Option<usize> {
    DOCUMENT_ORDER.iter().position(|f| *f == field)
}

pub fn kind_of(field: &str) -> Option<FieldKind> {
    match field {
        "amenities_satisfaction"
        | "security_satisfaction"
        | "concierge_rating"
        | "maintenance_satisfaction"
        | "maintenance_response_satisfaction"
        | "financial_satisfaction"
        | "financial_transparency"
        | "communication_satisfaction"
        | "projects_satisfaction"
        | "community_importance" => Some(FieldKind::Rating),
        "resident_duration"
        | "resident_status"
        | "community_interest"
        | "projects_awareness"
        | "communication_frequency"
        | "communication_preferred_method" => Some(FieldKind::Select),
        "amenities_usage"
        | "concierge_improvements"
        | "maintenance_common_issues"
        | "maintenance_priority_areas"
        | "financial_concerns"
        | "projects_concerns" => Some(FieldKind::Multi),
        "amenities_improvements"
        | "security_concerns"
        | "maintenance_issues"
        | "financial_priorities"
        | "communication_suggestions"
        | "projects_suggestions"
        | "community_suggestions"
        | "top_priorities"
        | "contact_name"
        | "contact_unit"
        | "contact_email" => Some(FieldKind::Text),
        _ => None,
    }
}

pub static RESIDENT_DURATION_OPTIONS: [SelectOption; 5] = [
    SelectOption { value: "less_than_1", label: "Less than 1 year" },
    SelectOption { value: "1_to_3", label: "1-3 years" },
    SelectOption { value: "3_to_5", label: "3-5 years" },
    SelectOption { value: "5_to_10", label: "5-10 years" },
    SelectOption { value: "more_than_10", label: "More than 10 years" },
];

pub static RESIDENT_STATUS_OPTIONS: [SelectOption; 3] = [
    SelectOption { value: "owner_occupant", label: "Owner living in the building" },
    SelectOption { value: "owner_nonresident", label: "Owner not living in the building" },
    SelectOption { value: "tenant", label: "Tenant (renting)" },
];

pub static COMMUNITY_INTEREST_OPTIONS: [SelectOption; 3] = [
    SelectOption { value: "yes", label: "Yes, I'd participate" },
    SelectOption { value: "maybe", label: "Maybe, depends on the event" },
    SelectOption { value: "no", label: "No, not interested" },
];

pub static PROJECTS_AWARENESS_OPTIONS: [SelectOption; 3] = [
    SelectOption { value: "yes", label: "Very aware" },
    SelectOption { value: "somewhat", label: "Somewhat aware" },
    SelectOption { value: "no", label: "Not aware at all" },
];

pub static COMMUNICATION_FREQUENCY_OPTIONS: [SelectOption; 3] = [
    SelectOption { value: "monthly", label: "Monthly" },
    SelectOption { value: "quarterly", label: "Quarterly" },
    SelectOption { value: "annually", label: "Annually" },
];

pub static COMMUNICATION_METHOD_OPTIONS: [SelectOption; 5] = [
    SelectOption { value: "email", label: "Email" },
    SelectOption { value: "app", label: "Mobile App" },
    SelectOption { value: "newsletter", label: "Newsletter" },
    SelectOption { value: "meetings", label: "In-person Meetings" },
    SelectOption { value: "other", label: "Other" },
];

pub static AMENITIES_USAGE_OPTIONS: [SelectOption; 3] = [
    SelectOption { value: "party_room", label: "Party Room" },
    SelectOption { value: "rooftop", label: "Rooftop" },
    SelectOption { value: "outdoor_space", label: "Outdoor Space" },
];

// The concierge checklist stores its labels verbatim as values; that is
// how the first submissions were recorded and changing it would split the
// historical tag space.
pub static CONCIERGE_IMPROVEMENT_OPTIONS: [SelectOption; 7] = [
    SelectOption { value: "Response time to requests", label: "Response time to requests" },
    SelectOption { value: "Friendliness and professionalism", label: "Friendliness and professionalism" },
    SelectOption { value: "Package handling", label: "Package handling" },
    SelectOption { value: "Visitor management", label: "Visitor management" },
    SelectOption { value: "Building information provided", label: "Building information provided" },
    SelectOption { value: "Emergency response", label: "Emergency response" },
    SelectOption { value: "Other", label: "Other" },
];

pub static MAINTENANCE_ISSUE_OPTIONS: [SelectOption; 6] = [
    SelectOption { value: "elevator_issues", label: "Elevator Issues" },
    SelectOption { value: "hvac_issues", label: "HVAC Issues" },
    SelectOption { value: "plumbing_issues", label: "Plumbing Issues" },
    SelectOption { value: "lighting_issues", label: "Lighting/Electrical Issues" },
    SelectOption { value: "cleanliness_issues", label: "Cleanliness Issues" },
    SelectOption { value: "door_access_issues", label: "Door/Access Control Issues" },
];

pub static MAINTENANCE_AREA_OPTIONS: [SelectOption; 5] = [
    SelectOption { value: "lobby", label: "Lobby" },
    SelectOption { value: "hallways", label: "Hallways" },
    SelectOption { value: "elevators", label: "Elevators" },
    SelectOption { value: "parking", label: "Parking" },
    SelectOption { value: "common_areas", label: "Common Areas" },
];

pub static FINANCIAL_CONCERN_OPTIONS: [SelectOption; 6] = [
    SelectOption { value: "condo_fees", label: "Rising Condo Fees" },
    SelectOption { value: "special_assessments", label: "Special Assessments" },
    SelectOption { value: "reserve_fund", label: "Reserve Fund Health" },
    SelectOption { value: "budget_overruns", label: "Budget Overruns" },
    SelectOption { value: "spending_transparency", label: "Lack of Spending Transparency" },
    SelectOption { value: "contractor_selection", label: "Contractor Selection Process" },
];

pub static PROJECT_CONCERN_OPTIONS: [SelectOption; 6] = [
    SelectOption { value: "delayed_projects", label: "Delayed Projects" },
    SelectOption { value: "cost_overruns", label: "Cost Overruns" },
    SelectOption { value: "poor_quality", label: "Poor Quality of Work" },
    SelectOption { value: "inadequate_planning", label: "Inadequate Planning" },
    SelectOption { value: "resident_disruption", label: "Resident Disruption" },
    SelectOption { value: "lack_of_updates", label: "Lack of Progress Updates" },
];

pub static RATING_QUESTIONS: [RatingQuestion; 10] = [
    RatingQuestion {
        name: "amenities_satisfaction",
        label: "Building Amenities satisfaction",
        question: "How satisfied are you with our current building amenities?",
        left: "Very Dissatisfied",
        middle: "Neutral",
        right: "Very Satisfied",
        required: true,
    },
    RatingQuestion {
        name: "security_satisfaction",
        label: "Building Safety rating",
        question: "How safe do you feel in our building?",
        left: "Not Safe",
        middle: "Somewhat Safe",
        right: "Very Safe",
        required: true,
    },
    RatingQuestion {
        name: "concierge_rating",
        label: "Concierge Service rating",
        question: "How satisfied are you with the concierge service?",
        left: "Very Dissatisfied",
        middle: "Neutral",
        right: "Very Satisfied",
        required: false,
    },
    RatingQuestion {
        name: "maintenance_satisfaction",
        label: "Building Maintenance rating",
        question: "How satisfied are you with our building maintenance?",
        left: "Very Dissatisfied",
        middle: "Neutral",
        right: "Very Satisfied",
        required: true,
    },
    RatingQuestion {
        name: "maintenance_response_satisfaction",
        label: "Maintenance Response satisfaction",
        question: "How satisfied are you with maintenance response times?",
        left: "Very Dissatisfied",
        middle: "Neutral",
        right: "Very Satisfied",
        required: true,
    },
    RatingQuestion {
        name: "financial_satisfaction",
        label: "Financial Management satisfaction",
        question: "How satisfied are you with how condo fees are being managed?",
        left: "Very Dissatisfied",
        middle: "Neutral",
        right: "Very Satisfied",
        required: true,
    },
    RatingQuestion {
        name: "financial_transparency",
        label: "Financial Transparency rating",
        question: "How would you rate the financial transparency from the board?",
        left: "Not Transparent",
        middle: "Somewhat",
        right: "Very Transparent",
        required: true,
    },
    RatingQuestion {
        name: "communication_satisfaction",
        label: "Board Communication satisfaction",
        question: "How satisfied are you with the current level of communication from the board?",
        left: "Very Dissatisfied",
        middle: "Neutral",
        right: "Very Satisfied",
        required: true,
    },
    RatingQuestion {
        name: "projects_satisfaction",
        label: "Building Projects satisfaction",
        question: "How satisfied are you with the progress of current building projects?",
        left: "Very Dissatisfied",
        middle: "Neutral",
        right: "Very Satisfied",
        required: true,
    },
    RatingQuestion {
        name: "community_importance",
        label: "Community Building importance",
        question: "How important is community building at 95 Prince Arthur to you?",
        left: "Not Important",
        middle: "Somewhat",
        right: "Very Important",
        required: true,
    },
];

pub fn rating_question(name: &str) -> Option<&'static RatingQuestion> {
    RATING_QUESTIONS.iter().find(|q| q.name == name)
}

/// Options of a multi-select or single-select field.
pub fn options_of(field: &str) -> Option<&'static [SelectOption]> {
    match field {
        "resident_duration" => Some(&RESIDENT_DURATION_OPTIONS),
        "resident_status" => Some(&RESIDENT_STATUS_OPTIONS),
        "community_interest" => Some(&COMMUNITY_INTEREST_OPTIONS),
        "projects_awareness" => Some(&PROJECTS_AWARENESS_OPTIONS),
        "communication_frequency" => Some(&COMMUNICATION_FREQUENCY_OPTIONS),
        "communication_preferred_method" => Some(&COMMUNICATION_METHOD_OPTIONS),
        "amenities_usage" => Some(&AMENITIES_USAGE_OPTIONS),
        "concierge_improvements" => Some(&CONCIERGE_IMPROVEMENT_OPTIONS),
        "maintenance_common_issues" => Some(&MAINTENANCE_ISSUE_OPTIONS),
        "maintenance_priority_areas" => Some(&MAINTENANCE_AREA_OPTIONS),
        "financial_concerns" => Some(&FINANCIAL_CONCERN_OPTIONS),
        "projects_concerns" => Some(&PROJECT_CONCERN_OPTIONS),
        _ => None,
    }
}

/// Human label for a stored option value, falling back to the raw value
/// for tags recorded before an option list changed.
pub fn option_label(field: &str, value: &str) -> String {
    options_of(field)
        .and_then(|opts| opts.iter().find(|o| o.value == value))
        .map(|o| o.label.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Everything the survey template needs to lay the form out, bundled so
/// the template context stays one field.
pub struct Fields {
    pub duration: &'static [SelectOption],
    pub status: &'static [SelectOption],
    pub interest: &'static [SelectOption],
    pub awareness: &'static [SelectOption],
    pub comm_frequency: &'static [SelectOption],
    pub comm_method: &'static [SelectOption],
    pub amenities_usage: &'static [SelectOption],
    pub concierge_improvements: &'static [SelectOption],
    pub maintenance_issues: &'static [SelectOption],
    pub maintenance_areas: &'static [SelectOption],
    pub financial_concerns: &'static [SelectOption],
    pub project_concerns: &'static [SelectOption],
    pub q_amenities: &'static RatingQuestion,
    pub q_security: &'static RatingQuestion,
    pub q_concierge: &'static RatingQuestion,
    pub q_maintenance: &'static RatingQuestion,
    pub q_maintenance_response: &'static RatingQuestion,
    pub q_financial: &'static RatingQuestion,
    pub q_transparency: &'static RatingQuestion,
    pub q_communication: &'static RatingQuestion,
    pub q_projects: &'static RatingQuestion,
    pub q_community: &'static RatingQuestion,
}

pub static FIELDS: Fields = Fields {
    duration: &RESIDENT_DURATION_OPTIONS,
    status: &RESIDENT_STATUS_OPTIONS,
    interest: &COMMUNITY_INTEREST_OPTIONS,
    awareness: &PROJECTS_AWARENESS_OPTIONS,
    comm_frequency: &COMMUNICATION_FREQUENCY_OPTIONS,
    comm_method: &COMMUNICATION_METHOD_OPTIONS,
    amenities_usage: &AMENITIES_USAGE_OPTIONS,
    concierge_improvements: &CONCIERGE_IMPROVEMENT_OPTIONS,
    maintenance_issues: &MAINTENANCE_ISSUE_OPTIONS,
    maintenance_areas: &MAINTENANCE_AREA_OPTIONS,
    financial_concerns: &FINANCIAL_CONCERN_OPTIONS,
    project_concerns: &PROJECT_CONCERN_OPTIONS,
    q_amenities: &RATING_QUESTIONS[0],
    q_security: &RATING_QUESTIONS[1],
    q_concierge: &RATING_QUESTIONS[2],
    q_maintenance: &RATING_QUESTIONS[3],
    q_maintenance_response: &RATING_QUESTIONS[4],
    q_financial: &RATING_QUESTIONS[5],
    q_transparency: &RATING_QUESTIONS[6],
    q_communication: &RATING_QUESTIONS[7],
    q_projects: &RATING_QUESTIONS[8],
    q_community: &RATING_QUESTIONS[9],
};

/// JSON blob injected into the survey page for the client-side validator:
/// the same required lists, in the same order, as the server checks.
pub fn client_schema_json() -> String {
    json!({
        "requiredRatings": REQUIRED_RATINGS
            .iter()
            .map(|(name, label)| json!({ "name": name, "label": label }))
            .collect::<Vec<_>>(),
        "requiredSelects": REQUIRED_SELECTS
            .iter()
            .map(|(name, label)| json!({ "name": name, "label": label }))
            .collect::<Vec<_>>(),
    })
    .to_string()
}
