//! The public results page.
//!
//! Until enough real submissions are in, this page aggregates a fixed set
//! of fictional responses so residents can see what the published results
//! will look like. The numbers go through the same aggregation code the
//! admin dashboard uses.

use actix_web::HttpResponse;

use crate::config;
use crate::errors::{AppError, render};
use crate::models::survey::StoredResponse;
use crate::survey::draft::SurveyDraft;
use crate::survey::fields::{RATING_QUESTIONS, RESIDENT_STATUS_OPTIONS};
use crate::survey::stats;
use crate::templates_structs::{CountRow, ResultsTemplate, StatBar};

/// GET /survey-results
pub async fn results_page() -> Result<HttpResponse, AppError> {
    let records = sample_responses();

    let averages = RATING_QUESTIONS
        .iter()
        .map(|q| {
            let avg = stats::average(&records, q.name);
            StatBar {
                label: q.label.to_string(),
                display: avg.map(|v| format!("{v:.1}")).unwrap_or_else(|| "No data".to_string()),
                pct: avg.map(|v| (v / 5.0 * 100.0).round() as i64).unwrap_or(0),
            }
        })
        .collect();

    let status_counts = RESIDENT_STATUS_OPTIONS
        .iter()
        .map(|opt| {
            let count = records
                .iter()
                .filter(|r| r.survey.resident_status == opt.value)
                .count();
            CountRow {
                label: opt.label.to_string(),
                count,
                pct: percentage(count, records.len()),
            }
        })
        .collect();

    let usage_counts = count_rows(&records, "amenities_usage");
    let issue_counts = count_rows(&records, "maintenance_common_issues");

    render(ResultsTemplate {
        total: records.len(),
        averages,
        status_counts,
        usage_counts,
        issue_counts,
    })
}

fn count_rows(records: &[StoredResponse], field: &str) -> Vec<CountRow> {
    let total = records.len();
    stats::tag_counts(records, field)
        .into_iter()
        .map(|(label, count)| CountRow { label, count, pct: percentage(count, total) })
        .collect()
}

fn percentage(count: usize, total: usize) -> i64 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as i64
}

/// Fictional sample submissions, labelled as such on the page.
fn sample_responses() -> Vec<StoredResponse> {
    let specs: [(&str, &str, [i64; 10], &[&str], &[&str]); 6] = [
        // (created_at, status, ratings in RATING_QUESTIONS order,
        //  amenities used, maintenance issues seen)
        (
            "2025-04-15T14:32:22",
            "owner_occupant",
            [4, 4, 4, 3, 3, 3, 3, 3, 2, 4],
            &["rooftop", "outdoor_space"],
            &["elevator_issues", "door_access_issues"],
        ),
        (
            "2025-04-14T11:20:15",
            "owner_occupant",
            [4, 4, 4, 3, 3, 3, 2, 3, 3, 4],
            &["rooftop"],
            &["elevator_issues", "hvac_issues"],
        ),
        (
            "2025-04-13T09:45:33",
            "owner_occupant",
            [3, 4, 3, 2, 3, 3, 3, 3, 2, 4],
            &["party_room", "rooftop"],
            &["elevator_issues", "cleanliness_issues"],
        ),
        (
            "2025-04-12T18:03:41",
            "owner_occupant",
            [4, 5, 4, 3, 3, 3, 3, 3, 3, 5],
            &["outdoor_space"],
            &["hvac_issues"],
        ),
        (
            "2025-04-11T08:17:09",
            "tenant",
            [4, 4, 4, 3, 4, 3, 3, 3, 3, 4],
            &["rooftop", "party_room"],
            &["plumbing_issues", "door_access_issues"],
        ),
        (
            "2025-04-10T20:55:02",
            "owner_nonresident",
            [3, 4, 3, 3, 3, 2, 2, 3, 2, 4],
            &[],
            &["elevator_issues"],
        ),
    ];

    specs
        .iter()
        .enumerate()
        .map(|(i, (created_at, status, ratings, amenities, issues))| {
            let mut survey = SurveyDraft {
                resident_status: status.to_string(),
                amenities_usage: amenities.iter().map(|s| s.to_string()).collect(),
                maintenance_common_issues: issues.iter().map(|s| s.to_string()).collect(),
                ..SurveyDraft::default()
            };
            for (q, value) in RATING_QUESTIONS.iter().zip(ratings.iter()) {
                crate::survey::draft::apply(
                    &mut survey,
                    crate::survey::draft::DraftAction::SetRating {
                        field: q.name.to_string(),
                        value: *value,
                    },
                );
            }
            StoredResponse {
                id: i as i64 + 1,
                created_at: created_at.to_string(),
                building: config::BUILDING.to_string(),
                survey,
            }
        })
        .collect()
}
