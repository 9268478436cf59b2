//! The survey form and its two submission paths: the JSON API the page
//! script talks to, and a plain form post for browsers without script.

use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::survey::queries;
use crate::survey::controller::{FormController, SubmitTransport};
use crate::survey::draft::SurveyDraft;
use crate::templates_structs::SurveyTemplate;

const SUBMIT_THANKS: &str =
    "Thank you for your feedback! Your input will help improve 95 Prince Arthur.";
const SUBMIT_FAILED: &str =
    "There was an error submitting your feedback. Please try again.";
const FETCH_FAILED: &str = "Error fetching survey submissions";

/// Render the survey form with a fresh draft (GET /survey).
pub async fn form_page() -> Result<HttpResponse, AppError> {
    render(SurveyTemplate::new(FormController::new()))
}

/// Transport that lands a valid draft in the database; used by the
/// no-script form post below.
struct DbTransport<'a> {
    pool: &'a DbPool,
    building: &'a str,
}

impl SubmitTransport for DbTransport<'_> {
    fn send(&mut self, draft: &SurveyDraft) -> Result<(), String> {
        let conn = self.pool.get().map_err(|e| e.to_string())?;
        queries::insert(&conn, draft, self.building).map_err(|e| e.to_string())?;
        Ok(())
    }
}

/// Accept the form post of a browser without script (POST /survey).
/// Validation failures re-render the form with the error list, the draft
/// intact, and the topmost missing control focused.
pub async fn form_submit(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    body: String,
) -> Result<HttpResponse, AppError> {
    let pairs = parse_form_body(&body);

    let mut controller = FormController::new();
    controller.draft = SurveyDraft::from_form_pairs(&pairs);

    let mut transport = DbTransport { pool: &pool, building: &config.building };
    controller.submit(&mut transport);

    render(SurveyTemplate::new(controller))
}

/// Accept a survey submission as JSON (POST /api/survey). The server
/// stamps the timestamp and building label before persisting.
pub async fn api_submit(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    draft: web::Json<SurveyDraft>,
) -> HttpResponse {
    let stored = pool
        .get()
        .map_err(|e| e.to_string())
        .and_then(|conn| {
            queries::insert(&conn, &draft, &config.building).map_err(|e| e.to_string())
        });

    match stored {
        Ok(id) => {
            log::info!("survey submission {id} received");
            HttpResponse::Ok().json(json!({
                "message": SUBMIT_THANKS,
                "success": true,
            }))
        }
        Err(e) => {
            log::error!("error processing survey submission: {e}");
            HttpResponse::InternalServerError().json(json!({
                "message": SUBMIT_FAILED,
                "success": false,
            }))
        }
    }
}

/// List all submissions, newest first (GET /api/survey).
pub async fn api_list(pool: web::Data<DbPool>) -> HttpResponse {
    let submissions = pool
        .get()
        .map_err(|e| e.to_string())
        .and_then(|conn| queries::find_all(&conn).map_err(|e| e.to_string()));

    match submissions {
        Ok(submissions) => HttpResponse::Ok().json(json!({
            "count": submissions.len(),
            "submissions": submissions,
        })),
        Err(e) => {
            log::error!("error fetching survey submissions: {e}");
            HttpResponse::InternalServerError().json(json!({
                "message": FETCH_FAILED,
                "success": false,
            }))
        }
    }
}

/// Decode a URL-encoded string (form data): `+` to space, `%HH` to byte.
fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    let mut out = Vec::with_capacity(s.len());
    let b = s.as_bytes();
    let mut i = 0;
    while i < b.len() {
        if b[i] == b'%' && i + 2 < b.len() {
            if let Ok(byte) = u8::from_str_radix(&s[i + 1..i + 3], 16) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(b[i]);
        i += 1;
    }
    String::from_utf8(out).unwrap_or_default()
}

/// Parse a URL-encoded form body into key-value pairs. Repeated keys are
/// kept; checkbox groups submit one pair per checked box.
pub fn parse_form_body(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|s| !s.is_empty())
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            Some((url_decode(k), url_decode(v)))
        })
        .collect()
}
