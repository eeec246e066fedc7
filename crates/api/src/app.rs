use std::time::Duration;

use async_graphql::{EmptyMutation, EmptySubscription, ObjectType, Schema};
use axum::{
    extract::Request,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::error::AppError;

/// Build the Axum router with health endpoint and GraphQL.
/// Generic over the query root so the schema stays defined in the gql module.
pub fn build_router<Q>(schema: Schema<Q, EmptyMutation, EmptySubscription>) -> Router
where
    Q: ObjectType + Send + Sync + 'static,
{
    Router::new()
        // Simple liveness check; the upstream API is deliberately not probed.
        .route("/health", get(health))
        .route(
            "/graphql",
            post(move |req| graphql_handler(req, schema)),
        )
        // Useful default middlewares
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer({
            let allowed_origins = std::env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".to_string());

            let origins: Vec<HeaderValue> = allowed_origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE])
        })
}

/// GraphQL handler with an explicit body-size cap.
async fn graphql_handler<Q>(
    req: Request,
    schema: Schema<Q, EmptyMutation, EmptySubscription>,
) -> Result<Response, AppError>
where
    Q: ObjectType + Send + Sync + 'static,
{
    let (_parts, body) = req.into_parts();
    let body_bytes = axum::body::to_bytes(body, 2 * 1024 * 1024)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read request body: {}", e)))?;

    let gql_request: async_graphql::Request = serde_json::from_slice(&body_bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid GraphQL request: {}", e)))?;

    let gql_response = schema.execute(gql_request).await;

    Ok(Json(gql_response).into_response())
}

/// Liveness probe.
async fn health() -> &'static str {
    "ok"
}
