//! DataBounty Server
//!
//! HTTP server exposing the marketplace as JSON endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::advisory::{AdvisoryService, InFlight};
use crate::error::MarketError;
use crate::lifecycle::Marketplace;
use crate::session::Session;
use crate::types::{
    Bounty, BountyDraft, DashboardSummary, PayoutKind, PayoutReceipt, Role, Submission,
    SubmissionFile, SubmissionReceipt, User,
};

pub struct AppState {
    pub market: Marketplace,
    pub session: Session,
    pub advisory: AdvisoryService,
    pub refine_in_flight: InFlight,
    pub strategy_in_flight: InFlight,
    pub started_at: std::time::Instant,
}

impl AppState {
    pub fn new(market: Marketplace, session: Session, advisory: AdvisoryService) -> Self {
        Self {
            market,
            session,
            advisory,
            refine_in_flight: InFlight::default(),
            strategy_in_flight: InFlight::default(),
            started_at: std::time::Instant::now(),
        }
    }
}

impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        let status = match &self {
            MarketError::Validation(_) => StatusCode::BAD_REQUEST,
            MarketError::NotLoggedIn => StatusCode::UNAUTHORIZED,
            MarketError::Unauthorized(_) => StatusCode::FORBIDDEN,
            MarketError::NotFound { .. } => StatusCode::NOT_FOUND,
            MarketError::InvalidState(_) => StatusCode::CONFLICT,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, MarketError>;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config", get(config_handler))
        .route("/session", get(session_handler))
        .route("/session/login", post(login_handler))
        .route("/session/logout", post(logout_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/bounties", get(list_bounties_handler).post(create_bounty_handler))
        .route("/bounties/:id", get(get_bounty_handler))
        .route("/bounties/:id/complete", post(complete_bounty_handler))
        .route("/bounties/:id/cancel", post(cancel_bounty_handler))
        .route(
            "/bounties/:id/submissions",
            get(list_submissions_handler).post(submit_files_handler),
        )
        .route("/submissions/:id/payout", post(payout_handler))
        .route("/submissions/:id/reject", post(reject_handler))
        .route("/advisory/refine", post(refine_handler))
        .route("/advisory/strategy", post(strategy_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub uptime_secs: u64,
    pub version: String,
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        healthy: true,
        uptime_secs: state.started_at.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn config_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "name": "DataBounty",
        "version": env!("CARGO_PKG_VERSION"),
        "min_reward": state.market.min_reward(),
        "total_bounties": state.market.storage().get_total_bounties(),
    }))
}

// ============================================================================
// Session
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub role: Role,
}

async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<User> {
    Ok(Json(state.session.login(request.role)?))
}

async fn logout_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let user = state.session.logout();
    Json(json!({ "logged_out": user.is_some() }))
}

async fn session_handler(State(state): State<Arc<AppState>>) -> ApiResult<User> {
    Ok(Json(state.session.current()?))
}

async fn dashboard_handler(State(state): State<Arc<AppState>>) -> ApiResult<DashboardSummary> {
    let user = state.session.current()?;
    Ok(Json(state.market.dashboard(&user)))
}

// ============================================================================
// Bounties
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

async fn list_bounties_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Bounty>> {
    Json(state.market.list_bounties(query.category.as_deref()))
}

async fn create_bounty_handler(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<BountyDraft>,
) -> Result<(StatusCode, Json<Bounty>), MarketError> {
    let user = state.session.current()?;
    let bounty = state.market.create_bounty(&user, draft)?;
    Ok((StatusCode::CREATED, Json(bounty)))
}

async fn get_bounty_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Bounty> {
    Ok(Json(state.market.get_bounty(&id)?))
}

async fn complete_bounty_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Bounty> {
    let user = state.session.current()?;
    Ok(Json(state.market.complete_bounty(&user, &id)?))
}

async fn cancel_bounty_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Bounty> {
    let user = state.session.current()?;
    Ok(Json(state.market.cancel_bounty(&user, &id)?))
}

// ============================================================================
// Submissions
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub files: Vec<SubmissionFile>,
}

async fn list_submissions_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Vec<Submission>> {
    Ok(Json(state.market.bounty_submissions(&id)?))
}

async fn submit_files_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<SubmitRequest>,
) -> Result<(StatusCode, Json<SubmissionReceipt>), MarketError> {
    let user = state.session.current()?;
    let receipt = state.market.submit_files(&user, &id, &request.files)?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

#[derive(Debug, Deserialize)]
pub struct PayoutRequest {
    pub kind: PayoutKind,
    #[serde(default)]
    pub amount: Option<f64>,
}

async fn payout_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<PayoutRequest>,
) -> ApiResult<PayoutReceipt> {
    let receipt = state.session.with_current(|user| {
        state
            .market
            .process_payout(user, &id, request.kind, request.amount)
    })?;
    Ok(Json(receipt))
}

#[derive(Debug, Default, Deserialize)]
pub struct RejectRequest {
    #[serde(default)]
    pub comment: Option<String>,
}

async fn reject_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<RejectRequest>,
) -> ApiResult<Submission> {
    let user = state.session.current()?;
    Ok(Json(
        state.market.reject_submission(&user, &id, request.comment)?,
    ))
}

// ============================================================================
// Advisory
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RefineRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct StrategyRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdvisoryResponse {
    pub text: String,
}

fn busy_response() -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(json!({ "error": "a request is already in flight" })),
    )
        .into_response()
}

async fn refine_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RefineRequest>,
) -> Response {
    let Some(_guard) = state.refine_in_flight.try_begin() else {
        warn!("Refine request rejected: already in flight");
        return busy_response();
    };
    let text = state.advisory.refine_requirement(&request.text).await;
    Json(AdvisoryResponse { text }).into_response()
}

async fn strategy_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StrategyRequest>,
) -> Response {
    let Some(_guard) = state.strategy_in_flight.try_begin() else {
        warn!("Strategy request rejected: already in flight");
        return busy_response();
    };
    let text = state
        .advisory
        .suggest_strategy(&request.title, &request.description)
        .await;
    Json(AdvisoryResponse { text }).into_response()
}

/// Run the server
pub async fn run_server(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    info!("Starting DataBounty server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        e
    })?;
    axum::serve(listener, app).await?;

    Ok(())
}
