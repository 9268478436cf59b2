//! The password-gated admin view: the responses table with filtering and
//! sorting, the CSV export, and the JSON auth check the login page calls.

use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;

use crate::auth::gate::{self, AdminCredential};
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::survey::{StoredResponse, queries};
use crate::survey::fields::{RATING_QUESTIONS, RESIDENT_STATUS_OPTIONS, option_label};
use crate::survey::stats::{self, SortDir};
use crate::templates_structs::{
    AdminDashboardTemplate, AdminLoginTemplate, ResponseRow, SortLink, StatBar,
};

const AUTH_WELCOME: &str = "Welcome to the 95 Prince Arthur Survey admin dashboard";
const AUTH_DENIED: &str = "Invalid password";
const AUTH_ERROR: &str = "Authentication error";

/// View parameters of the dashboard and the CSV export.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

impl ListParams {
    fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("all")
    }

    fn sort(&self) -> &str {
        self.sort.as_deref().unwrap_or("created_at")
    }

    fn dir(&self) -> SortDir {
        SortDir::from_param(self.dir.as_deref().unwrap_or("desc"))
    }
}

/// GET /admin: the login form without a grant, the dashboard with one.
pub async fn dashboard(
    pool: web::Data<DbPool>,
    session: Session,
    params: web::Query<ListParams>,
) -> Result<HttpResponse, AppError> {
    if !gate::is_admin(&session) {
        return render(AdminLoginTemplate);
    }

    let records = fetch_view(&pool, &params)?;

    let averages = RATING_QUESTIONS
        .iter()
        .map(|q| {
            let avg = stats::average(&records, q.name);
            StatBar {
                label: q.label.to_string(),
                display: avg.map(|v| format!("{v:.1}")).unwrap_or_else(|| "-".to_string()),
                pct: avg.map(|v| (v / 5.0 * 100.0).round() as i64).unwrap_or(0),
            }
        })
        .collect();

    let rows = records.iter().map(response_row).collect();

    let mut sort_links = vec![
        sort_link("Date", "created_at", &params),
        sort_link("Status", "resident_status", &params),
    ];
    for q in RATING_QUESTIONS.iter() {
        sort_links.push(sort_link(short_heading(q.name), q.name, &params));
    }

    render(AdminDashboardTemplate {
        total: records.len(),
        rows,
        averages,
        status: params.status().to_string(),
        status_options: &RESIDENT_STATUS_OPTIONS,
        sort_links,
        export_url: format!(
            "/admin/export.csv?status={}&sort={}&dir={}",
            params.status(),
            params.sort(),
            params.dir().as_param()
        ),
    })
}

/// GET /admin/export.csv: the current view as a CSV attachment.
pub async fn export_csv(
    pool: web::Data<DbPool>,
    session: Session,
    params: web::Query<ListParams>,
) -> Result<HttpResponse, AppError> {
    if !gate::is_admin(&session) {
        return Ok(HttpResponse::Forbidden().body("Forbidden"));
    }

    let records = fetch_view(&pool, &params)?;
    let csv = stats::to_csv(&records)?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"survey-responses.csv\"",
        ))
        .body(csv))
}

/// POST /admin/logout
pub async fn logout(session: Session) -> HttpResponse {
    gate::revoke(&session);
    HttpResponse::SeeOther()
        .insert_header(("Location", "/admin"))
        .finish()
}

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub password: String,
}

/// POST /api/admin/auth: check the password and, on a match, store the
/// grant in the session so the dashboard renders on the next load.
pub async fn api_auth(
    credential: web::Data<AdminCredential>,
    session: Session,
    body: web::Json<AuthRequest>,
) -> HttpResponse {
    match credential.verify(&body.password) {
        Ok(true) => {
            gate::grant(&session);
            HttpResponse::Ok().json(json!({
                "success": true,
                "message": AUTH_WELCOME,
            }))
        }
        Ok(false) => HttpResponse::Unauthorized().json(json!({
            "success": false,
            "message": AUTH_DENIED,
        })),
        Err(e) => {
            log::error!("auth error: {e}");
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": AUTH_ERROR,
            }))
        }
    }
}

/// Load all responses and apply the view's filter and sort.
fn fetch_view(
    pool: &DbPool,
    params: &ListParams,
) -> Result<Vec<StoredResponse>, AppError> {
    let conn = pool.get()?;
    let records = queries::find_all(&conn)?;
    let mut records = stats::filter_by_status(records, params.status());
    stats::sort_by(&mut records, params.sort(), params.dir());
    Ok(records)
}

fn response_row(record: &StoredResponse) -> ResponseRow {
    ResponseRow {
        date: stats::display_date(&record.created_at),
        status: option_label("resident_status", &record.survey.resident_status),
        ratings: RATING_QUESTIONS
            .iter()
            .map(|q| {
                record
                    .rating(q.name)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".to_string())
            })
            .collect(),
        unit: record.survey.contact_unit.clone(),
        priorities: truncate(&record.survey.top_priorities, 80),
    }
}

fn sort_link(label: &'static str, column: &str, params: &ListParams) -> SortLink {
    let active = params.sort() == column;
    // Clicking the active column flips the direction.
    let next_dir = if active {
        match params.dir() {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    } else {
        SortDir::Desc
    };
    SortLink {
        label,
        url: format!(
            "/admin?status={}&sort={column}&dir={}",
            params.status(),
            next_dir.as_param()
        ),
        active,
    }
}

fn short_heading(field: &str) -> &'static str {
    match field {
        "amenities_satisfaction" => "Amenities",
        "security_satisfaction" => "Security",
        "concierge_rating" => "Concierge",
        "maintenance_satisfaction" => "Maintenance",
        "maintenance_response_satisfaction" => "Response",
        "financial_satisfaction" => "Financial",
        "financial_transparency" => "Transparency",
        "communication_satisfaction" => "Communication",
        "projects_satisfaction" => "Projects",
        "community_importance" => "Community",
        _ => "Rating",
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let cut: String = s.chars().take(max_chars).collect();
    format!("{cut}...")
}
