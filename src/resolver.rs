use std::borrow::Cow;
use std::sync::Arc;

use crate::catalog::{Catalog, ImageRecord};

/// 图片列表的过滤方式，每次查询只使用一种
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListFilter {
    /// 不过滤，返回全部图片
    #[default]
    All,
    /// 关键词完全相同
    Tag(String),
    /// 关键词包含子串
    TagContains(String),
}

impl ListFilter {
    /// 根据查询参数构建过滤方式
    ///
    /// 同时提供两个参数时，`tag_contains` 优先，`tag` 被忽略。
    pub fn new(tag: Option<String>, tag_contains: Option<String>) -> Self {
        match (tag, tag_contains) {
            (_, Some(pattern)) => Self::TagContains(pattern),
            (Some(tag), None) => Self::Tag(tag),
            (None, None) => Self::All,
        }
    }

    pub fn matches(&self, image: &ImageRecord) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => image.has_keyword(tag),
            Self::TagContains(pattern) => image.keyword_contains(pattern),
        }
    }

    /// 用于日志和指标的名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Tag(_) => "tag",
            Self::TagContains(_) => "tag_contains",
        }
    }
}

/// 图片查询
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Arc<Catalog>,
}

impl Resolver {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// 按 ID 查找图片，ID 重复时返回第一个
    pub fn find(&self, id: &str) -> Option<&ImageRecord> {
        self.catalog.iter().find(|image| image.id == id)
    }

    /// 查询单张图片
    ///
    /// 未提供 ID 或找不到时返回空记录而不是错误，调用方无法区分这两种情况。
    /// 需要区分时使用 [`Resolver::find`]。
    pub fn image(&self, id: Option<&str>) -> Cow<'_, ImageRecord> {
        match id.and_then(|id| self.find(id)) {
            Some(image) => Cow::Borrowed(image),
            None => Cow::Owned(ImageRecord::default()),
        }
    }

    /// 查询图片列表，结果保持目录中的顺序，每张图片最多出现一次
    pub fn image_list(&self, filter: &ListFilter) -> Vec<&ImageRecord> {
        self.catalog.iter().filter(|image| filter.matches(image)).collect()
    }
}
