use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use pa95::auth::gate::AdminCredential;
use pa95::config::AppConfig;
use pa95::{db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    // Ensure the data directory exists before SQLite opens the file
    if let Some(dir) = std::path::Path::new(&config.database_path).parent() {
        std::fs::create_dir_all(dir).expect("Failed to create data directory");
    }

    let pool = db::init_pool(&config.database_path);
    db::run_migrations(&pool);

    // The admin password is only ever held as a hash from here on
    let credential = AdminCredential::new(&config.admin_password)
        .expect("Failed to hash admin password");

    // Session encryption key — load from SESSION_KEY env var so admin
    // grants survive restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+), generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set, generating random key (grants lost on restart)");
            Key::generate()
        }
    };

    log::info!("Starting server at http://{}", config.bind_addr);

    let bind_addr = config.bind_addr.clone();
    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(credential.clone()))
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Informational pages
            .route("/", web::get().to(handlers::pages::home))
            .route("/about", web::get().to(handlers::pages::about))
            .route("/about-the-survey", web::get().to(handlers::pages::about_survey))
            .route("/resources", web::get().to(handlers::pages::resources))
            // Survey form + no-script submission fallback
            .route("/survey", web::get().to(handlers::survey::form_page))
            .route("/survey", web::post().to(handlers::survey::form_submit))
            .route("/survey-results", web::get().to(handlers::results::results_page))
            // Admin view
            .route("/admin", web::get().to(handlers::admin::dashboard))
            .route("/admin/export.csv", web::get().to(handlers::admin::export_csv))
            .route("/admin/logout", web::post().to(handlers::admin::logout))
            // JSON API
            .route("/api/survey", web::post().to(handlers::survey::api_submit))
            .route("/api/survey", web::get().to(handlers::survey::api_list))
            .route("/api/admin/auth", web::post().to(handlers::admin::api_auth))
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
