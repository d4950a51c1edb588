//! revcycle-server
//!
//! JSON API behind the revenue-cycle dashboard. All state lives in one
//! [`revcycle_analytics::AnalyticsEngine`] guarded by a mutex; uploads
//! replace its lists and every read endpoint recomputes from them.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

pub use state::AppState;

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/demo", post(routes::demo::load_demo))
        // Uploads
        .route("/uploads/contracts", post(routes::uploads::upload_contracts))
        .route("/uploads/payments", post(routes::uploads::upload_payments))
        .route("/uploads/claims", post(routes::uploads::upload_claims))
        .route("/uploads/era", post(routes::uploads::upload_era))
        // Loaded records
        .route("/contracts", get(routes::records::list_contracts))
        .route("/contracts/issues", get(routes::records::contract_issues))
        .route("/payments", get(routes::records::list_payments))
        .route("/claims", get(routes::records::list_claims))
        // Analysis
        .route("/variances", get(routes::variances::list_variances))
        .route("/variances/export", get(routes::variances::export_variances))
        .route("/summary", get(routes::summary::get_summary))
        .route(
            "/settings",
            get(routes::settings::get_settings).put(routes::settings::update_settings),
        )
        .route("/payers", get(routes::payers::list_payers))
        .route("/payers/{id}", get(routes::payers::get_payer_detail))
        .route("/pricing/{cpt}", get(routes::pricing::get_pricing))
        .route("/quality", get(routes::quality::list_quality))
        .route("/appeals", post(routes::appeals::generate_appeals))
        .route("/appeals/{claim_id}/docx", get(routes::appeals::appeal_docx))
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::audit::audit_log))
                .layer(cors)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .with_state(state)
}
