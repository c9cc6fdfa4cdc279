use std::sync::Arc;

use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod application;
mod auth;
mod config;
mod models;
mod routes;
mod services;

use application::{CoachService, JournalService, MealService, WorkoutService};
use config::ServerConfig;
use services::coach::ScriptedCoach;
use services::entropy::{SeededEntropy, ThreadEntropy};
use services::nutrition::{NutrientTable, NutritionEngine, RuleBasedFoodRecognizer};
use services::pose::RuleBasedPoseEstimator;
use services::sentiment::LexiconSentimentAnalyzer;

/// Type aliases for pipeline services with the rule-based estimators
pub type AppJournalService = JournalService<LexiconSentimentAnalyzer>;
pub type AppMealService = MealService<RuleBasedFoodRecognizer>;
pub type AppWorkoutService = WorkoutService<RuleBasedPoseEstimator>;
pub type AppCoachService = CoachService<ScriptedCoach>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub journal: Arc<AppJournalService>,
    pub meal: Arc<AppMealService>,
    pub workout: Arc<AppWorkoutService>,
    pub coach: Arc<AppCoachService>,
}

impl AppState {
    /// Build every reference table and pipeline once; everything in here
    /// is read-only for the process lifetime
    fn build(config: &ServerConfig) -> Self {
        let entropy: Arc<dyn wellspring::ports::EntropySource> = match config.entropy_seed {
            Some(seed) => Arc::new(SeededEntropy::new(seed)),
            None => Arc::new(ThreadEntropy),
        };

        let journal = Arc::new(JournalService::new(Arc::new(
            LexiconSentimentAnalyzer::new(),
        )));

        let table = Arc::new(NutrientTable::builtin());
        let meal = Arc::new(MealService::new(
            Arc::new(RuleBasedFoodRecognizer::new(table.clone(), entropy.clone())),
            NutritionEngine::new(table, entropy.clone()),
        ));

        let workout = Arc::new(WorkoutService::new(Arc::new(RuleBasedPoseEstimator::new(
            entropy,
        ))));

        let coach = Arc::new(CoachService::new(Arc::new(ScriptedCoach::new(
            config.coach_delay,
        ))));

        Self {
            journal,
            meal,
            workout,
            coach,
        }
    }
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
        message: "Wellspring API is running - signals flow from the source".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🌿 Wellspring API initializing...");

    let config = ServerConfig::from_env();

    if let Some(api_key) = config.api_key.clone() {
        auth::init_api_key(api_key);
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No WELLSPRING_API_KEY set - authentication disabled");
    }

    let state = AppState::build(&config);
    tracing::info!("📊 Reference tables loaded, pipelines ready");

    // Protected routes (require authentication when a key is configured)
    let protected_routes = Router::new()
        .merge(routes::journal::router())
        .merge(routes::meal::router())
        .merge(routes::pose::router())
        .merge(routes::coach::router())
        .layer(middleware::from_fn(auth::auth_middleware));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Wellspring API ready on {addr}");

    axum::serve(listener, router).await?;
    Ok(())
}
