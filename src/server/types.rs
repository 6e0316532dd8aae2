use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// 单张图片查询参数
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ImageQuery {
    /// 图片 ID
    pub id: Option<String>,
}

/// 图片列表查询参数
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ImageListQuery {
    /// 关键词完全匹配
    pub tag: Option<String>,
    /// 关键词包含子串，区分大小写，优先于 `tag`
    pub tag_contains: Option<String>,
}

/// 图片目录统计
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatsResponse {
    /// 图片数量
    pub images: usize,
    /// 不同关键词的数量
    pub keywords: usize,
}
