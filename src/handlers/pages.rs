//! The informational pages. No state, just templates.

use actix_web::HttpResponse;

use crate::errors::{AppError, render};
use crate::templates_structs::{AboutSurveyTemplate, AboutTemplate, HomeTemplate, ResourcesTemplate};

pub async fn home() -> Result<HttpResponse, AppError> {
    render(HomeTemplate)
}

pub async fn about() -> Result<HttpResponse, AppError> {
    render(AboutTemplate)
}

pub async fn about_survey() -> Result<HttpResponse, AppError> {
    render(AboutSurveyTemplate)
}

pub async fn resources() -> Result<HttpResponse, AppError> {
    render(ResourcesTemplate)
}
