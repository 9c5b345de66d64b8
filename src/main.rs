use actix_files::Files;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing_subscriber::{fmt, EnvFilter};

use coursepress::config::AppConfig;
use coursepress::web::{self, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let state = AppState::from_config(&config);
    state.ensure_storage().await.map_err(std::io::Error::other)?;
    let state = Data::new(state);

    log::info!(
        "Serving courses from {} and articles from {}",
        config.courses_file.display(),
        config.articles_file.display()
    );

    let static_dir = config.static_dir.clone();
    let pkg_dir = config.pkg_dir.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY"))
                    .add(("Referrer-Policy", "strict-origin-when-cross-origin")),
            )
            .configure(web::configure)
            .service(Files::new("/static", &static_dir).prefer_utf8(true))
            .service(Files::new("/pkg", &pkg_dir))
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
