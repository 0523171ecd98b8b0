use std::sync::Arc;

use anyhow::Context;
use scoring::MemoryStore;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod state;

use config::Config;
use middleware::auth::ApiKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::performances::handlers::log_performance,
        features::performances::handlers::preview_points,
        features::performances::handlers::delete_performance,
        features::users::handlers::list_performances,
        features::users::handlers::get_statistics,
        features::users::handlers::get_achievements,
        features::users::handlers::update_profile,
        features::users::handlers::list_pulls,
        features::rewards::handlers::get_pool,
        features::rewards::handlers::put_pool,
        features::rewards::handlers::invoke,
        features::leaderboard::handlers::get_leaderboard,
    ),
    components(
        schemas(
            scoring::dto::performance::LogPerformanceRequest,
            scoring::dto::performance::PreviewPointsRequest,
            scoring::dto::performance::PreviewPointsResponse,
            scoring::dto::performance::PerformanceResponse,
            scoring::dto::achievement::AchievementView,
            scoring::dto::achievement::AchievementReportResponse,
            scoring::dto::invocation::InvocationRequest,
            scoring::dto::invocation::InvocationResponse,
            scoring::dto::invocation::RewardPoolRequest,
            scoring::dto::invocation::RewardPoolResponse,
            scoring::dto::leaderboard::LeaderboardRow,
            scoring::dto::profile::UpdateProfileRequest,
            scoring::dto::common::PaginationMeta,
            scoring::models::ActivityKind,
            scoring::models::ActivityMetrics,
            scoring::models::ClimbDifficulty,
            scoring::models::MatchOutcome,
            scoring::models::ActivityTotals,
            scoring::models::UserStatisticsSnapshot,
            scoring::models::UserProfile,
            scoring::models::RewardEntry,
            scoring::models::PullRecord,
            scoring::models::LeaderboardEntry,
            scoring::models::ProfileStyle,
            scoring::models::RankMovement,
        )
    ),
    tags(
        (name = "performances", description = "Activity logging and scoring"),
        (name = "users", description = "Per-user statistics, achievements and profile"),
        (name = "rewards", description = "Reward pools and invocations"),
        (name = "leaderboard", description = "Ranking with movement tracking"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting tournament scoring API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if config.api_keys.trim().is_empty() {
        tracing::warn!("API_KEYS is empty, administrative endpoints will reject every request");
    }

    let state = AppState::new(Arc::new(MemoryStore::new()));

    let app = features::router(state, api_keys)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
