//! Route table, OpenAPI document and HTTP middleware stack.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue},
    response::IntoResponse,
    routing::{get, head},
    Router,
};
use std::{sync::Arc, time::Duration};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use utoipa::{openapi::Server, OpenApi};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        campground::{self, CAMPGROUND_TAG},
        review::{self, REVIEW_TAG},
        seo::{self, SEO_TAG},
        user::{self, USER_TAG},
    },
    error::AppError,
    state::AppState,
};

/// Auth endpoints allow a burst of 10 requests per client IP, replenishing one
/// every 90 seconds: 10 per 15 minutes.
const AUTH_BURST: u32 = 10;
const AUTH_REPLENISH_SECS: u64 = 90;

/// How often idle rate limiter entries are purged.
const RATE_LIMIT_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Upper bound on request bodies, covering several image files per submission.
const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    script-src 'self' 'unsafe-inline' https://api.mapbox.com https://cdn.jsdelivr.net; \
    style-src 'self' 'unsafe-inline' https://api.mapbox.com https://cdn.jsdelivr.net; \
    img-src 'self' data: blob: https://res.cloudinary.com; \
    connect-src 'self' https://api.mapbox.com https://events.mapbox.com; \
    worker-src 'self' blob:; \
    object-src 'none'; \
    frame-ancestors 'self'";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Outdoorsy API",
        description = "Campground listings with reviews, favorites and geographic search."
    ),
    tags(
        (name = CAMPGROUND_TAG, description = "Campground listings, search and favorites"),
        (name = REVIEW_TAG, description = "Campground reviews"),
        (name = USER_TAG, description = "Accounts and sessions"),
        (name = SEO_TAG, description = "Health check, robots file and sitemap")
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// Routes are mounted under the state's base path, with Swagger UI at
/// `{base}/api-docs` and the OpenAPI document at `{base}/openapi.json`.
///
/// # Arguments
/// - `state` - Shared application state
/// - `session` - Session layer from startup
///
/// # Returns
/// - `Ok(Router)` - Router ready to serve
/// - `Err(AppError::InternalError)` - Rate limiter configuration rejected
pub fn router(
    state: AppState,
    session: SessionManagerLayer<SqliteStore>,
) -> Result<Router, AppError> {
    let governor = GovernorConfigBuilder::default()
        .per_second(AUTH_REPLENISH_SECS)
        .burst_size(AUTH_BURST)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limit configuration".to_string()))?;

    let limiter = governor.limiter().clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(RATE_LIMIT_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            limiter.retain_recent();
        }
    });

    let auth_routes = OpenApiRouter::new()
        .routes(routes!(user::register))
        .routes(routes!(user::login))
        .layer(
            GovernorLayer::new(Arc::new(governor))
                .error_handler(|err| AppError::from(err).into_response()),
        );

    let (api, mut openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(seo::health))
        .routes(routes!(seo::robots_txt))
        .routes(routes!(seo::sitemap_xml))
        .routes(routes!(user::logout))
        .routes(routes!(user::get_session))
        .routes(routes!(
            campground::get_campgrounds,
            campground::create_campground
        ))
        .routes(routes!(campground::get_nearby_campgrounds))
        .routes(routes!(campground::get_favorites))
        .routes(routes!(
            campground::get_campground,
            campground::update_campground,
            campground::delete_campground
        ))
        .routes(routes!(campground::toggle_favorite))
        .routes(routes!(review::create_review))
        .routes(routes!(review::delete_review))
        .merge(auth_routes)
        .route("/", head(seo::health))
        .route("/logout", get(user::logout))
        .split_for_parts();

    openapi.servers = Some(vec![Server::new(state.path(""))]);

    let base_path = state.base_path.clone();
    let api = if base_path.is_empty() {
        api
    } else {
        Router::new().nest(&base_path, api)
    };

    let docs = SwaggerUi::new(format!("{}/api-docs", base_path))
        .url(format!("{}/openapi.json", base_path), openapi);

    Ok(api
        .merge(docs)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(session)
        .layer(security_header(
            header::CONTENT_SECURITY_POLICY,
            CONTENT_SECURITY_POLICY,
        ))
        .layer(security_header(header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .layer(security_header(header::X_FRAME_OPTIONS, "SAMEORIGIN"))
        .layer(security_header(header::REFERRER_POLICY, "no-referrer"))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn security_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(name, HeaderValue::from_static(value))
}
