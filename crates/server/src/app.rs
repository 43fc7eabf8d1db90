use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use catalog::{CatalogError, QuestionCatalog};
use trivia_core::model::{CategoryKey, QuestionRecord};

// Application state
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<dyn QuestionCatalog>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Arc<dyn QuestionCatalog>) -> Self {
        Self { catalog }
    }
}

#[derive(Debug, Deserialize)]
struct QuestionsQuery {
    category: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Builds the provider router.
///
/// Cross-origin access is read-only: GET and OPTIONS from any origin, with
/// `Content-Type` as the only allowed request header.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/questions", get(list_questions))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::OPTIONS])
                        .allow_headers([header::CONTENT_TYPE]),
                ),
        )
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `GET /api/questions?category=<key>`
///
/// Returns the ordered question list for a known category, or 404 with a
/// plain-text body when the key is missing, blank, or unknown.
async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<QuestionsQuery>,
) -> Response {
    let Some(Ok(category)) = query.category.map(|raw| raw.parse::<CategoryKey>()) else {
        return not_found();
    };

    match state.catalog.questions(&category).await {
        Ok(questions) => {
            let records: Vec<QuestionRecord> = questions
                .iter()
                .map(QuestionRecord::from_question)
                .collect();
            (StatusCode::OK, Json(records)).into_response()
        }
        Err(CatalogError::UnknownCategory(_)) => {
            tracing::debug!(%category, "unknown category requested");
            not_found()
        }
        Err(err) => {
            tracing::warn!(%category, error = %err, "question lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Kategori tidak ditemukan.").into_response()
}
