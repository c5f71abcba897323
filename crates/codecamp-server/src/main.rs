use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::PgCampRepository;
use application::CampService;
use codecamp::CampRepository;
use config::ServerConfig;

/// Camp service over whichever repository adapter is wired in
pub type AppCampService = CampService<dyn CampRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub camp_service: Arc<AppCampService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "CodeCamp API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Assemble the full HTTP surface
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .merge(routes::camps::router());

    if config.swagger_ui {
        let openapi = routes::swagger::ApiDoc::openapi();
        router = router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .layer(config.cors_layer())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🏕️  CodeCamp API initializing...");

    let config = ServerConfig::from_secrets(&secrets)?;
    if config.cors_origin.is_none() {
        tracing::warn!("⚠️  No CODECAMP_CORS_ORIGIN set - CORS is permissive");
    }

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run database migrations: {}", e))?;

    tracing::info!("✅ Database migrations completed");

    // Initialize application services
    let camp_repo: Arc<dyn CampRepository> = Arc::new(PgCampRepository::new(pool));
    let state = AppState {
        camp_service: Arc::new(CampService::new(camp_repo)),
    };

    let router = build_router(state, &config);

    if config.swagger_ui {
        tracing::info!("📚 Swagger UI: /swagger-ui");
    }
    tracing::info!("✅ CodeCamp API ready");

    Ok(router.into())
}
