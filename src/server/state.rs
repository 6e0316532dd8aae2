use std::sync::Arc;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::error::Result;
use crate::cli::server::ServerCommand;
use crate::resolver::Resolver;

/// 应用状态
#[derive(Debug)]
pub struct AppState {
    /// 图片查询，目录在服务启动前已加载完成
    pub resolver: Resolver,
    /// 是否输出格式化的 JSON
    pub pretty: bool,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(resolver: Resolver, opts: &ServerCommand) -> Arc<Self> {
        Arc::new(AppState { resolver, pretty: opts.pretty })
    }

    /// 将结果序列化为 JSON 响应
    pub fn json<T: Serialize>(&self, value: &T) -> Result<Response> {
        let body =
            if self.pretty { serde_json::to_vec_pretty(value)? } else { serde_json::to_vec(value)? };
        Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
    }
}
