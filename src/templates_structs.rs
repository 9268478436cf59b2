// Template context structures for the Askama templates, one per page.

use askama::Template;

use crate::survey::controller::FormController;
use crate::survey::fields::{self, Fields, SelectOption};

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate;

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

#[derive(Template)]
#[template(path = "about_survey.html")]
pub struct AboutSurveyTemplate;

#[derive(Template)]
#[template(path = "resources.html")]
pub struct ResourcesTemplate;

#[derive(Template)]
#[template(path = "survey.html")]
pub struct SurveyTemplate {
    pub form: FormController,
    pub f: &'static Fields,
    pub schema_json: String,
}

impl SurveyTemplate {
    pub fn new(form: FormController) -> Self {
        Self {
            form,
            f: &fields::FIELDS,
            schema_json: fields::client_schema_json(),
        }
    }
}

/// One horizontal bar on the results page / averages strip: a label, the
/// preformatted value, and a 0-100 width for the fill.
pub struct StatBar {
    pub label: String,
    pub display: String,
    pub pct: i64,
}

/// One count line for a select or checkbox breakdown.
pub struct CountRow {
    pub label: String,
    pub count: usize,
    pub pct: i64,
}

#[derive(Template)]
#[template(path = "survey_results.html")]
pub struct ResultsTemplate {
    pub total: usize,
    pub averages: Vec<StatBar>,
    pub status_counts: Vec<CountRow>,
    pub usage_counts: Vec<CountRow>,
    pub issue_counts: Vec<CountRow>,
}

#[derive(Template)]
#[template(path = "admin_login.html")]
pub struct AdminLoginTemplate;

/// One response row of the admin table, preformatted for display.
pub struct ResponseRow {
    pub date: String,
    pub status: String,
    pub ratings: Vec<String>,
    pub unit: String,
    pub priorities: String,
}

/// A sortable column header with its toggle link.
pub struct SortLink {
    pub label: &'static str,
    pub url: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "admin_dashboard.html")]
pub struct AdminDashboardTemplate {
    pub total: usize,
    pub rows: Vec<ResponseRow>,
    pub averages: Vec<StatBar>,
    pub status: String,
    pub status_options: &'static [SelectOption],
    pub sort_links: Vec<SortLink>,
    pub export_url: String,
}
