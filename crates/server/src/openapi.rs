use axum::Router;
use shared_types::{AppError, AppErrorKind, LoanResponse, StatusUpdateRequest, SummaryResponse};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{health, rest, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Loan Service",
        description = "Loan summary, loan lists and status decisions for the admin and verifier dashboards."
    ),
    paths(
        health::health_check,
        rest::loan::loan_summary,
        rest::loan::list_by_role,
        rest::loan::list_by_officer,
        rest::loan::update_status_admin,
        rest::loan::update_status_verifier,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        SummaryResponse,
        LoanResponse,
        StatusUpdateRequest,
        health::HealthResponse,
    )),
    tags(
        (name = "loans", description = "Loan records and decisions"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Full router: loan routes, request log, health, docs, tracing and CORS.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(rest::api_router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            rest::request_log::record_requests,
        ))
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
