mod config;
mod error;
mod profile;

use anyhow::Context;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use error::ApiError;
use extract::{Extractor, GroqClient, Triple};
use graph::Neo4jStore;
use profile::UserProfile;
use story::StoryGenerator;

struct AppState {
    store: Neo4jStore,
    extractor: Extractor,
    story: StoryGenerator,
    profile: RwLock<Option<UserProfile>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    let store = Neo4jStore::connect(
        &config.neo4j.uri,
        &config.neo4j.user,
        &config.neo4j.password,
    )
    .await
    .context("failed to connect to Neo4j")?;

    let extractor = Extractor::new(GroqClient::new(
        config.groq.base_url.clone(),
        config.groq.api_key.clone(),
        config.groq.extract_model.clone(),
    ));

    let story = StoryGenerator::new(GroqClient::new(
        config.groq.base_url.clone(),
        config.groq.api_key.clone(),
        config.groq.story_model.clone(),
    ));

    let state = Arc::new(AppState {
        store,
        extractor,
        story,
        profile: RwLock::new(None),
    });

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<HeaderValue>()
                .context("invalid CORS_ORIGIN")?,
        )
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/store-user", post(store_user))
        .route("/process-answer", post(process_answer))
        .route("/generate-story", get(generate_story))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Serialize)]
struct HealthResponse {
    neo4j: String,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let neo4j = match state.store.ping().await {
        Ok(()) => "ok".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Json(HealthResponse { neo4j })
}

#[derive(Serialize)]
struct StoreUserResponse {
    message: &'static str,
    profile: UserProfile,
}

async fn store_user(
    State(state): State<Arc<AppState>>,
    Json(new_profile): Json<UserProfile>,
) -> Json<StoreUserResponse> {
    info!(name = %new_profile.name, "user profile stored");
    *state.profile.write().await = Some(new_profile.clone());

    Json(StoreUserResponse {
        message: "user profile stored",
        profile: new_profile,
    })
}

#[derive(Deserialize)]
struct AnswerRequest {
    text: String,
}

#[derive(Serialize)]
struct AnswerResponse {
    message: &'static str,
    full_text: String,
    persons: Vec<String>,
    triples: Vec<Triple>,
    edges_written: usize,
}

async fn process_answer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, ApiError> {
    // Snapshot the profile up front; the rest of the pipeline never touches
    // the shared slot.
    let snapshot = state
        .profile
        .read()
        .await
        .clone()
        .ok_or(ApiError::MissingProfile)?;

    let full_text = snapshot.compose_input(&req.text);

    let persons = state.extractor.extract_people(&full_text).await?;
    info!(count = persons.len(), "persons identified");

    let triples = state.extractor.extract_triples(&full_text, &persons).await?;
    info!(count = triples.len(), "triples extracted");

    if persons.is_empty() || triples.is_empty() {
        return Err(ApiError::NothingExtracted);
    }

    let report = graph::store_batch(&state.store, &persons, &triples).await?;
    info!(
        persons = report.persons,
        edges = report.edges,
        descriptions = report.descriptions,
        "batch written to graph"
    );

    Ok(Json(AnswerResponse {
        message: "processed successfully",
        full_text,
        persons,
        triples,
        edges_written: report.edges + report.descriptions,
    }))
}

#[derive(Serialize)]
struct StoryResponse {
    story: String,
}

async fn generate_story(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StoryResponse>, ApiError> {
    let data = state.store.fetch_all().await?;

    let text = state
        .story
        .generate(&data.persons, &data.entities)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(StoryResponse { story: text }))
}
