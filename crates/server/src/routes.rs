pub mod exams;

use axum::{routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: health, the exam resource, and the OpenAPI docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let exam_routes = Router::new()
        .route(
            "/api/v1/exam",
            get(exams::list).post(exams::create).put(exams::update).delete(exams::delete),
        )
        .route("/api/v1/exam/multiple", get(exams::list_multiple));

    let trace = TraceLayer::new_for_http()
        // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        // 响应返回时打点，包含状态码与耗时
        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
        // 失败（5xx 等）时以 ERROR 记录
        .on_failure(DefaultOnFailure::new().level(Level::ERROR));

    Router::new()
        .route("/health", get(health))
        .merge(exam_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(trace).layer(cors))
}
