use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use rxdesk::config::Config;
use rxdesk::db;
use rxdesk::routes::create_router;
use rxdesk::services::auth;
use rxdesk::state::AppState;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env();

    // Storage must be reachable before serving; any failure here is fatal.
    let pool = db::init_db(&config.database_url)
        .await
        .expect("failed to initialize database");

    auth::ensure_admin_user(&pool)
        .await
        .expect("failed to seed admin user");

    let state = Arc::new(AppState::new(pool));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("failed to bind listener");
    tracing::info!("listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}
