use std::borrow::Cow;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Query, State};
use axum::response::Response;
use log::debug;

use super::error::Result;
use super::state::AppState;
use super::types::*;
use crate::metrics;
use crate::resolver::ListFilter;

/// 查询单张图片，找不到时返回空记录
#[utoipa::path(
    get,
    path = "/image",
    params(ImageQuery),
    responses(
        (status = 200, body = crate::catalog::ImageRecord),
    )
)]
pub async fn image_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ImageQuery>,
) -> Result<Response> {
    let start = Instant::now();
    let image = state.resolver.image(query.id.as_deref());
    let found = matches!(image, Cow::Borrowed(_));
    debug!("查询图片 {:?}: {}", query.id, if found { "找到" } else { "未找到" });
    metrics::observe_query("image", "id", start.elapsed().as_secs_f32(), found as usize);
    state.json(&image)
}

/// 查询图片列表
#[utoipa::path(
    get,
    path = "/imageList",
    params(ImageListQuery),
    responses(
        (status = 200, body = [crate::catalog::ImageRecord]),
    )
)]
pub async fn image_list_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ImageListQuery>,
) -> Result<Response> {
    let start = Instant::now();
    let filter = ListFilter::new(query.tag, query.tag_contains);
    let images = state.resolver.image_list(&filter);
    debug!("查询图片列表 {:?}: {} 张", filter, images.len());
    metrics::observe_query("imageList", filter.name(), start.elapsed().as_secs_f32(), images.len());
    state.json(&images)
}

/// 获取图片目录统计信息
#[utoipa::path(
    get,
    path = "/stats",
    responses(
        (status = 200, body = StatsResponse),
    )
)]
pub async fn stats_handler(State(state): State<Arc<AppState>>) -> Result<Response> {
    let catalog = state.resolver.catalog();
    state.json(&StatsResponse { images: catalog.len(), keywords: catalog.keywords().len() })
}
