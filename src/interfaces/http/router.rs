//! API Router with Swagger UI

use axum::{middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::LedgerServices;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::health::{self, HealthState};
use crate::interfaces::http::modules::metrics::{
    http_metrics_middleware, prometheus_metrics, MetricsState,
};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::{categories, transactions, types};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        types::list_types,
        types::get_type,
        types::create_type,
        types::update_type,
        types::delete_type,
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        transactions::list_transactions,
        transactions::get_transaction,
        transactions::create_transaction,
        transactions::update_transaction,
        transactions::delete_transaction,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            types::TypeResponse,
            types::CreateTypeRequest,
            types::UpdateTypeRequest,
            categories::CategoryResponse,
            categories::CreateCategoryRequest,
            categories::UpdateCategoryRequest,
            transactions::TransactionResponse,
            transactions::CreateTransactionRequest,
            transactions::UpdateTransactionRequest,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Types", description = "Top-level groupings such as Income or Expense"),
        (name = "Categories", description = "Categories, each belonging to one type"),
        (name = "Transactions", description = "Dated amounts booked against a category"),
    ),
    info(
        title = "Ledger Service API",
        version = "0.1.0",
        description = "CRUD API over types, categories and transactions. \
            List endpoints accept `skip`, `take`, `cursor`, and JSON-encoded `where` / `orderBy`.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

fn entity_routes(services: &LedgerServices) -> Router {
    let type_routes = Router::new()
        .route("/types", get(types::list_types).post(types::create_type))
        .route(
            "/types/{id}",
            get(types::get_type)
                .put(types::update_type)
                .delete(types::delete_type),
        )
        .with_state(services.types.clone());

    let category_routes = Router::new()
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .with_state(services.categories.clone());

    let transaction_routes = Router::new()
        .route(
            "/transactions",
            get(transactions::list_transactions).post(transactions::create_transaction),
        )
        .route(
            "/transactions/{id}",
            get(transactions::get_transaction)
                .put(transactions::update_transaction)
                .delete(transactions::delete_transaction),
        )
        .with_state(services.transactions.clone());

    type_routes.merge(category_routes).merge(transaction_routes)
}

/// Create the API router with all routes.
///
/// `/metrics` is mounted only when a Prometheus handle is supplied.
pub fn create_api_router(
    services: LedgerServices,
    db: DatabaseConnection,
    prometheus: Option<PrometheusHandle>,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState::new(db));

    let mut router = entity_routes(&services)
        .merge(health_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()));

    if let Some(handle) = prometheus {
        router = router.merge(
            Router::new()
                .route("/metrics", get(prometheus_metrics))
                .with_state(MetricsState { handle }),
        );
    }

    router
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::infrastructure::database::connect_in_memory;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;

    async fn app() -> Router {
        let db = connect_in_memory().await.unwrap();
        let services = LedgerServices::new(Arc::new(SeaOrmRepositoryProvider::new(db.clone())));
        create_api_router(services, db, None)
    }

    async fn get(app: Router, uri: &str) -> axum::http::Response<Body> {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let resp = get(app().await, "/health").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"]["status"], "ok");
    }

    #[tokio::test]
    async fn openapi_lists_every_entity_route() {
        let resp = get(app().await, "/api-doc/openapi.json").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        for path in [
            "/types",
            "/types/{id}",
            "/categories",
            "/categories/{id}",
            "/transactions",
            "/transactions/{id}",
        ] {
            assert!(doc["paths"][path].is_object(), "missing {}", path);
        }
    }

    #[tokio::test]
    async fn request_id_is_echoed_or_generated() {
        let app = app().await;
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/types")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.headers()["x-request-id"], "abc-123");

        let resp = get(app, "/types").await;
        let generated = resp.headers()["x-request-id"].to_str().unwrap();
        assert!(uuid::Uuid::parse_str(generated).is_ok());
    }

    #[tokio::test]
    async fn metrics_route_absent_without_recorder() {
        let resp = get(app().await, "/metrics").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
