mod api;
mod error;
mod state;
mod types;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::limit::RequestBodyLimitLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use self::state::*;
pub use self::types::*;

#[derive(OpenApi)]
#[openapi(
    paths(api::image_handler, api::image_list_handler, api::stats_handler),
    components(schemas(crate::catalog::ImageRecord, types::StatsResponse))
)]
pub struct ApiDoc;

/// 构建API服务器
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/image", get(api::image_handler))
        .route("/imageList", get(api::image_list_handler))
        .route("/stats", get(api::stats_handler))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // 只有查询接口，不接收请求体
        .layer(RequestBodyLimitLayer::new(1024))
        .with_state(state)
}
