//! HTTP API for the Freight Pricing engine.
//!
//! This module exposes the calculators as a small REST API using the
//! [`axum`](https://crates.io/crates/axum) framework.  Every estimate
//! endpoint is a stateless wrapper around a pure function; the only
//! shared state is the notifier used for enterprise suggestion
//! requests.

use crate::config::{AppConfig, ServerConfig};
use crate::engine::{run_estimates, EstimateBatch, EstimateBatchResult};
use crate::error::AppError;
use crate::i18n::{Language, Localized};
use crate::models::{
    EnterpriseClassification, EnterpriseUsageInput, PersonalUsageInput, PersonalUsageRequest,
    PersonalUsageResult, PlatformPlan, PlatformQuote, PlatformUsageInput, PlatformUsageRequest,
};
use crate::notify::{DisabledNotifier, LogNotifier, SuggestionNotifier, SuggestionRequest};
use crate::platform::plans;
use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Application state shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub notifier: Arc<dyn SuggestionNotifier>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        let notifier: Arc<dyn SuggestionNotifier> = if config.notify.enabled {
            Arc::new(LogNotifier)
        } else {
            Arc::new(DisabledNotifier)
        };
        AppState { notifier }
    }
}

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/estimate/personal", post(personal_handler))
        .route("/api/estimate/enterprise", post(enterprise_handler))
        .route("/api/estimate/batch", post(batch_handler))
        .route("/api/quote", post(quote_handler))
        .route("/api/plans", get(plans_handler))
        .route("/api/enterprise-suggestion", post(suggestion_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

impl LangQuery {
    fn language(&self) -> Result<Option<Language>, AppError> {
        match self.lang.as_deref() {
            Some(raw) => Ok(Some(raw.parse::<Language>()?)),
            None => Ok(None),
        }
    }
}

/// A calculator result, optionally annotated with a display label when
/// the caller asked for a language.
#[derive(Debug, Serialize)]
struct Labeled<T> {
    #[serde(flatten)]
    result: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'static str>,
}

fn labeled<T>(result: T, subject: &impl Localized, lang: Option<Language>) -> Json<Labeled<T>> {
    Json(Labeled {
        result,
        label: lang.map(|lang| subject.label(lang)),
    })
}

/// Handler for POST /api/estimate/personal
///
/// With `?lang=` the response carries the frequency label.
async fn personal_handler(
    Query(query): Query<LangQuery>,
    payload: Result<Json<PersonalUsageRequest>, JsonRejection>,
) -> Result<Json<Labeled<PersonalUsageResult>>, AppError> {
    let lang = query.language()?;
    let Json(request) = payload?;
    let input = PersonalUsageInput::from(request);
    Ok(labeled(input.estimate(), &input.usage_frequency, lang))
}

/// Handler for POST /api/estimate/enterprise
///
/// With `?lang=` the response carries the plan label.
async fn enterprise_handler(
    Query(query): Query<LangQuery>,
    payload: Result<Json<EnterpriseUsageInput>, JsonRejection>,
) -> Result<Json<Labeled<EnterpriseClassification>>, AppError> {
    let lang = query.language()?;
    let Json(input) = payload?;
    let classification = input.classify();
    let plan = classification.plan_name;
    Ok(labeled(classification, &plan, lang))
}

/// Handler for POST /api/quote
///
/// With `?lang=` the response carries the model tier label.
async fn quote_handler(
    Query(query): Query<LangQuery>,
    payload: Result<Json<PlatformUsageRequest>, JsonRejection>,
) -> Result<Json<Labeled<PlatformQuote>>, AppError> {
    let lang = query.language()?;
    let Json(request) = payload?;
    let input = PlatformUsageInput::from(request);
    Ok(labeled(input.quote(), &input.model_type, lang))
}

/// Handler for POST /api/estimate/batch
async fn batch_handler(
    payload: Result<Json<EstimateBatch>, JsonRejection>,
) -> Result<Json<EstimateBatchResult>, AppError> {
    let Json(batch) = payload?;
    // The batch runs on rayon's pool; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || run_estimates(batch))
        .await
        .map_err(|e| AppError::Internal(format!("estimate batch aborted: {e}")))?;
    Ok(Json(result))
}

/// Handler for GET /api/plans
async fn plans_handler(Query(query): Query<LangQuery>) -> Result<Json<Vec<PlatformPlan>>, AppError> {
    let lang = query.language()?.unwrap_or_default();
    Ok(Json(plans(lang)))
}

#[derive(Debug, Deserialize)]
struct SuggestionBody {
    #[serde(flatten)]
    profile: EnterpriseUsageInput,
    #[serde(default)]
    contact: Option<String>,
}

/// Handler for POST /api/enterprise-suggestion
///
/// Classifies the profile, queues the notification and answers with
/// `202 Accepted` without waiting for delivery.
async fn suggestion_handler(
    State(state): State<AppState>,
    payload: Result<Json<SuggestionBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = payload?;
    let classification = body.profile.classify();
    let request = SuggestionRequest {
        profile: body.profile,
        classification: classification.clone(),
        contact: body.contact,
    };

    let notifier = state.notifier.clone();
    tokio::task::spawn_blocking(move || {
        if let Err(err) = notifier.notify(&request) {
            warn!(notifier = notifier.name(), error = %err, "failed to deliver enterprise suggestion");
        }
    });

    let body = Json(json!({
        "status": "accepted",
        "plan_name": classification.plan_name,
        "cost_range": classification.cost_range,
    }));
    Ok((StatusCode::ACCEPTED, body))
}

/// Launch the API server.  Binds to the configured address and blocks
/// until the server terminates (e.g. when interrupted).
pub async fn serve(config: AppConfig) -> Result<()> {
    let router = build_router(AppState::from_config(&config));

    let listener = bind_listener(&config.server).await?;
    info!("Freight pricing server listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;
    Ok(())
}

/// Bind the configured host and port.  The host may be an IP address
/// or a resolvable name such as `localhost`.
pub async fn bind_listener(server: &ServerConfig) -> Result<TcpListener> {
    let listener = TcpListener::bind((server.host.as_str(), server.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", server.host, server.port))?;
    Ok(listener)
}
