//! Draft reducer tests: every form interaction is a typed action through
//! one transition function.

mod common;

use pa95::survey::draft::{DraftAction, SurveyDraft, apply};

fn set_rating(field: &str, value: i64) -> DraftAction {
    DraftAction::SetRating { field: field.to_string(), value }
}

fn toggle(field: &str, tag: &str, checked: bool) -> DraftAction {
    DraftAction::ToggleTag {
        field: field.to_string(),
        tag: tag.to_string(),
        checked,
    }
}

#[test]
fn ratings_are_clamped_to_the_scale() {
    let mut draft = SurveyDraft::default();

    apply(&mut draft, set_rating("amenities_satisfaction", 9));
    assert_eq!(draft.amenities_satisfaction, Some(5));

    apply(&mut draft, set_rating("amenities_satisfaction", -2));
    assert_eq!(draft.amenities_satisfaction, Some(1));
}

#[test]
fn tag_toggles_deduplicate_and_remove() {
    let mut draft = SurveyDraft::default();

    apply(&mut draft, toggle("amenities_usage", "rooftop", true));
    apply(&mut draft, toggle("amenities_usage", "rooftop", true));
    apply(&mut draft, toggle("amenities_usage", "party_room", true));
    assert_eq!(draft.amenities_usage, vec!["rooftop", "party_room"]);

    apply(&mut draft, toggle("amenities_usage", "rooftop", false));
    assert_eq!(draft.amenities_usage, vec!["party_room"]);

    // Unchecking something never checked is a no-op
    apply(&mut draft, toggle("amenities_usage", "outdoor_space", false));
    assert_eq!(draft.amenities_usage, vec!["party_room"]);
}

#[test]
fn unknown_or_mismatched_fields_are_ignored() {
    let mut draft = SurveyDraft::default();
    let before = draft.clone();

    apply(&mut draft, set_rating("no_such_field", 4));
    // A select field cannot take a rating
    apply(&mut draft, set_rating("resident_status", 4));
    apply(&mut draft, toggle("resident_status", "tenant", true));

    assert_eq!(draft, before);
}

#[test]
fn choices_and_text_set_verbatim() {
    let mut draft = SurveyDraft::default();

    apply(
        &mut draft,
        DraftAction::SetChoice {
            field: "resident_status".to_string(),
            value: "tenant".to_string(),
        },
    );
    apply(
        &mut draft,
        DraftAction::SetText {
            field: "security_concerns".to_string(),
            value: "  spaces kept   verbatim  ".to_string(),
        },
    );

    assert_eq!(draft.resident_status, "tenant");
    assert_eq!(draft.security_concerns, "  spaces kept   verbatim  ");
}

#[test]
fn form_pairs_build_the_same_draft_the_browser_would() {
    let pairs: Vec<(String, String)> = vec![
        ("resident_status", "owner_occupant"),
        ("resident_duration", ""),
        ("amenities_satisfaction", "4"),
        ("amenities_usage", "rooftop"),
        ("amenities_usage", "party_room"),
        ("top_priorities", "Fix the elevators"),
        ("bogus_field", "ignored"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let draft = SurveyDraft::from_form_pairs(&pairs);

    assert_eq!(draft.resident_status, "owner_occupant");
    // An empty select submission leaves the field unset
    assert_eq!(draft.resident_duration, "");
    assert_eq!(draft.amenities_satisfaction, Some(4));
    assert_eq!(draft.amenities_usage, vec!["rooftop", "party_room"]);
    assert_eq!(draft.top_priorities, "Fix the elevators");
}

#[test]
fn wire_format_round_trips_through_json() {
    let draft = common::complete_draft();

    let json = serde_json::to_string(&draft).expect("serialize");
    let parsed: SurveyDraft = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, draft);

    // Untouched ratings serialize as null, not a default number
    let empty_json = serde_json::to_value(SurveyDraft::default()).expect("serialize");
    assert!(empty_json["amenities_satisfaction"].is_null());

    // Partial bodies parse with everything else defaulted
    let partial: SurveyDraft =
        serde_json::from_str(r#"{"resident_status": "tenant", "security_satisfaction": 5}"#)
            .expect("partial deserialize");
    assert_eq!(partial.resident_status, "tenant");
    assert_eq!(partial.security_satisfaction, Some(5));
    assert_eq!(partial.amenities_satisfaction, None);
}
