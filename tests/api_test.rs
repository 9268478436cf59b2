//! API contract tests: the JSON survey routes and the admin auth check,
//! exercised through an actix test service.

mod common;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, cookie::Key, test, web};
use serde_json::{Value, json};

use pa95::auth::gate::AdminCredential;
use pa95::config::AppConfig;
use pa95::db::{self, DbPool};
use pa95::handlers;
use common::{ADMIN_PASS, TEST_BUILDING, complete_draft};

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

macro_rules! test_app {
    ($pool:expr) => {
        test::init_service(
            App::new()
                .wrap(SessionMiddleware::builder(
                    CookieSessionStore::default(),
                    Key::generate(),
                )
                .cookie_secure(false)
                .build())
                .app_data(web::Data::new($pool.clone()))
                .app_data(web::Data::new(test_config()))
                .app_data(web::Data::new(
                    AdminCredential::new(ADMIN_PASS).expect("credential"),
                ))
                .route("/api/survey", web::post().to(handlers::survey::api_submit))
                .route("/api/survey", web::get().to(handlers::survey::api_list))
                .route("/api/admin/auth", web::post().to(handlers::admin::api_auth)),
        )
        .await
    };
}

#[actix_rt::test]
async fn submit_then_list_round_trips_a_response() {
    let (_dir, pool) = test_pool();
    let app = test_app!(pool);

    let request = test::TestRequest::post()
        .uri("/api/survey")
        .set_json(complete_draft())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["message"],
        json!("Thank you for your feedback! Your input will help improve 95 Prince Arthur.")
    );

    let request = test::TestRequest::get().uri("/api/survey").to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["count"], json!(1));
    let submission = &body["submissions"][0];
    assert_eq!(submission["resident_status"], json!("owner_occupant"));
    assert_eq!(submission["building"], json!(TEST_BUILDING));
    assert!(submission["created_at"].is_string());
    assert!(submission["id"].is_i64());
}

#[actix_rt::test]
async fn list_is_ordered_newest_first() {
    let (_dir, pool) = test_pool();
    let app = test_app!(pool);

    for unit in ["101", "102"] {
        let mut draft = complete_draft();
        draft.contact_unit = unit.to_string();
        let request = test::TestRequest::post()
            .uri("/api/survey")
            .set_json(draft)
            .to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());
    }

    let request = test::TestRequest::get().uri("/api/survey").to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["count"], json!(2));
    assert_eq!(body["submissions"][0]["contact_unit"], json!("102"));
    assert_eq!(body["submissions"][1]["contact_unit"], json!("101"));
}

#[actix_rt::test]
async fn auth_grants_the_configured_password() {
    let (_dir, pool) = test_pool();
    let app = test_app!(pool);

    let request = test::TestRequest::post()
        .uri("/api/admin/auth")
        .set_json(json!({ "password": "prince95arthur" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["message"],
        json!("Welcome to the 95 Prince Arthur Survey admin dashboard")
    );
}

#[actix_rt::test]
async fn auth_denies_a_wrong_password_with_401() {
    let (_dir, pool) = test_pool();
    let app = test_app!(pool);

    let request = test::TestRequest::post()
        .uri("/api/admin/auth")
        .set_json(json!({ "password": "wrong" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 401);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Invalid password"));
}
