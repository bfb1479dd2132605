// src/main.rs
use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use interview_bot::api::{configure_routes, AppState};
use interview_bot::{banner, config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    banner::print_banner();

    // Load .env if present; a real environment variable always wins.
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  No .env file loaded: {}", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let bot_config = config::BotConfig::from_env();
    if bot_config.key_missing() {
        println!("⚠️  GEMINI_API_KEY not set — answering with local fallback feedback");
    } else {
        println!("✅ Gemini configured, model: {}", bot_config.model);
    }

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let state = AppState::new(bot_config);

    println!("🚀 Starting server on http://0.0.0.0:{}", port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(actix_web::web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
