//! Shared test infrastructure.
//!
//! Provides a tempfile-backed SQLite database with the real schema, plus
//! builders for drafts and stored responses used across the test files.

use rusqlite::Connection;
use tempfile::TempDir;

use pa95::db::MIGRATIONS;
use pa95::models::survey::StoredResponse;
use pa95::survey::draft::SurveyDraft;
use pa95::survey::fields::REQUIRED_RATINGS;

pub const TEST_BUILDING: &str = "95 Prince Arthur Ave";
pub const ADMIN_PASS: &str = "prince95arthur";

/// Setup a test database with the survey schema applied.
///
/// Returns a tuple of (TempDir, Connection) where TempDir must be kept
/// alive for the Connection to remain valid.
pub fn setup_test_db() -> (TempDir, Connection) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let conn = Connection::open(&db_path).expect("Failed to open test DB");

    conn.execute_batch("PRAGMA foreign_keys=ON; PRAGMA journal_mode=WAL;")
        .expect("Failed to set pragmas");

    conn.execute_batch(MIGRATIONS)
        .expect("Failed to run migrations");

    (dir, conn)
}

/// A draft with every required field set and a few optional ones, ready
/// to pass validation.
pub fn complete_draft() -> SurveyDraft {
    let mut draft = SurveyDraft {
        resident_status: "owner_occupant".to_string(),
        resident_duration: "3_to_5".to_string(),
        amenities_usage: vec!["rooftop".to_string(), "party_room".to_string()],
        top_priorities: "Fix the elevators".to_string(),
        ..SurveyDraft::default()
    };
    for (i, (name, _)) in REQUIRED_RATINGS.iter().enumerate() {
        set_rating(&mut draft, name, (i as i64 % 5) + 1);
    }
    draft
}

/// Set one rating field through the reducer.
pub fn set_rating(draft: &mut SurveyDraft, field: &str, value: i64) {
    pa95::survey::draft::apply(
        draft,
        pa95::survey::draft::DraftAction::SetRating {
            field: field.to_string(),
            value,
        },
    );
}

/// A stored response for aggregation tests; `seq` disambiguates records
/// when testing sort stability.
pub fn stored_response(seq: i64, created_at: &str, status: &str) -> StoredResponse {
    let mut survey = SurveyDraft {
        resident_status: status.to_string(),
        contact_unit: format!("unit-{seq}"),
        ..SurveyDraft::default()
    };
    for (name, _) in REQUIRED_RATINGS.iter() {
        set_rating(&mut survey, name, 3);
    }
    StoredResponse {
        id: seq,
        created_at: created_at.to_string(),
        building: TEST_BUILDING.to_string(),
        survey,
    }
}
