//! The no-script form path: an url-encoded POST either stores the
//! response and renders the thank-you state, or re-renders the form with
//! the validation errors and nothing stored.

mod common;

use actix_web::{App, test, web};

use pa95::config::AppConfig;
use pa95::db::{self, DbPool};
use pa95::handlers;
use pa95::models::survey::queries;
use pa95::survey::fields::REQUIRED_RATINGS;
use common::{ADMIN_PASS, TEST_BUILDING};

fn test_pool() -> (tempfile::TempDir, DbPool) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let pool = db::init_pool(dir.path().join("test.db").to_str().unwrap());
    db::run_migrations(&pool);
    (dir, pool)
}

fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        database_path: String::new(),
        admin_password: ADMIN_PASS.to_string(),
        building: TEST_BUILDING.to_string(),
    }
}

/// Form pairs the browser would send for a complete response.
fn complete_form_pairs() -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = REQUIRED_RATINGS
        .iter()
        .map(|(name, _)| (name.to_string(), "4".to_string()))
        .collect();
    pairs.push(("resident_status".to_string(), "tenant".to_string()));
    pairs.push(("amenities_usage".to_string(), "rooftop".to_string()));
    pairs.push(("amenities_usage".to_string(), "party_room".to_string()));
    pairs
}

async fn post_form(pool: &DbPool, pairs: &[(String, String)]) -> String {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(test_config()))
            .route("/survey", web::get().to(handlers::survey::form_page))
            .route("/survey", web::post().to(handlers::survey::form_submit)),
    )
    .await;

    let body = serde_urlencoded::to_string(pairs).expect("encode form");
    let request = test::TestRequest::post()
        .uri("/survey")
        .insert_header(("Content-Type", "application/x-www-form-urlencoded"))
        .set_payload(body)
        .to_request();

    let bytes = test::call_and_read_body(&app, request).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 page")
}

#[actix_rt::test]
async fn complete_form_post_stores_and_thanks() {
    let (_dir, pool) = test_pool();

    let page = post_form(&pool, &complete_form_pairs()).await;

    assert!(page.contains("Thank You!"), "expected the submitted state");

    let conn = pool.get().expect("conn");
    assert_eq!(queries::count(&conn).expect("count"), 1);
    let stored = queries::find_all(&conn).expect("load").remove(0);
    assert_eq!(stored.survey.resident_status, "tenant");
    assert_eq!(stored.survey.amenities_usage, vec!["rooftop", "party_room"]);
    assert_eq!(stored.building, TEST_BUILDING);
}

#[actix_rt::test]
async fn incomplete_form_post_re_renders_errors_and_stores_nothing() {
    let (_dir, pool) = test_pool();

    // Ratings only; resident status left unanswered
    let pairs: Vec<(String, String)> = REQUIRED_RATINGS
        .iter()
        .map(|(name, _)| (name.to_string(), "4".to_string()))
        .collect();

    let page = post_form(&pool, &pairs).await;

    assert!(page.contains("Please select a value for Resident status"));
    assert!(!page.contains("Thank You!"));

    let conn = pool.get().expect("conn");
    assert_eq!(queries::count(&conn).expect("count"), 0);
}
