use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use api::jwt::{JwtConfig, JwtService};
use api::state::AppState;
use api::{routes, seed};
use common::database::{DatabaseConfig, health_check, init_pool};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting storefront API");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    health_check(&pool).await?;
    info!("Database connection successful");

    // Apply pending migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database migrations applied");

    // Initialize JWT service
    let jwt_config = JwtConfig::from_env()?;
    let jwt_service = JwtService::new(jwt_config);
    info!(
        "Session tokens expire after {} seconds",
        jwt_service.token_expiry()
    );

    let app_state = AppState::new(pool, jwt_service);

    // Ensure the back office is reachable on a fresh database
    seed::seed_admin_user(&app_state.user_repository).await?;

    info!("Storefront API initialized successfully");

    // Start the web server
    let app = routes::create_router(app_state);

    let port: u16 = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(2022);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Storefront API listening on 0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
