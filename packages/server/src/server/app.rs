//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::auth::{ChallengeStore, JwtService};
use crate::kernel::{BaseMailer, ServerDeps};
use crate::server::auth::SessionStore;
use crate::server::middleware::auth_context_middleware;
use crate::server::routes::{
    health_handler, insert_detail_handler, locations_handler, logout_handler, send_otp_handler,
    validate_handler, verify_otp_handler,
};

/// Seconds between idle-session sweeps
const SESSION_SWEEP_SECS: u64 = 300;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub server_deps: Arc<ServerDeps>,
    pub jwt_service: Arc<JwtService>,
    pub session_store: Arc<SessionStore>,
}

/// Build the Axum application router
///
/// The mailer comes in behind its trait so tests can substitute a
/// recording mock for the real HTTP client.
pub fn build_app(
    pool: PgPool,
    mailer: Arc<dyn BaseMailer>,
    jwt_secret: String,
    jwt_issuer: String,
) -> Router {
    // JWT service signs the long-lived credential cookie
    let jwt_service = Arc::new(JwtService::new(&jwt_secret, jwt_issuer));

    // Process-wide stores: outstanding OTP challenges and server sessions
    let challenge_store = Arc::new(ChallengeStore::new());
    let session_store = Arc::new(SessionStore::new());

    let server_deps = Arc::new(ServerDeps::new(pool.clone(), mailer, challenge_store));

    // Sweep idle sessions in the background
    let sweep_store = session_store.clone();
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(SESSION_SWEEP_SECS));
        loop {
            interval.tick().await;
            sweep_store.cleanup_expired().await;
        }
    });

    let app_state = AppState {
        db_pool: pool,
        server_deps,
        jwt_service,
        session_store,
    };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Rate limiting: 10 requests per second per IP with bursts up to 20
    let rate_limit_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .use_headers() // Extract IP from X-Forwarded-For header
            .finish()
            .expect("Rate limiter configuration is valid and should never fail"),
    );

    let rate_limit_layer = GovernorLayer {
        config: rate_limit_config,
    };

    Router::new()
        // Login and scanner endpoints, rate limited
        .route("/auth/send-otp", post(send_otp_handler))
        .route("/auth/verify-otp", post(verify_otp_handler))
        .route("/auth/logout", get(logout_handler))
        .route("/scanner/validate", post(validate_handler))
        .route("/scanner/locations", get(locations_handler))
        .route("/scanner/insert-detail", post(insert_detail_handler))
        .layer(rate_limit_layer)
        // Health check (no rate limit)
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(auth_context_middleware))
        .layer(Extension(app_state)) // Add shared state (must be after middlewares that need it)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
