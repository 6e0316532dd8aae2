use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// 图片数据加载失败，此错误不可恢复
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("无法读取图片数据文件 {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("图片数据格式错误: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 图片元数据记录
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageRecord {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub caption: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub copyright: String,
    #[serde(deserialize_with = "nullable")]
    pub created_date: String,
    /// 关键词/标签列表
    #[serde(deserialize_with = "nullable_keywords")]
    pub keywords: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub directory: String,
    #[serde(deserialize_with = "nullable")]
    pub filename: String,
    /// 像素高度
    #[serde(deserialize_with = "nullable")]
    pub image_height: i64,
    /// 像素宽度
    #[serde(deserialize_with = "nullable")]
    pub image_width: i64,
    /// 镜头型号
    #[serde(deserialize_with = "nullable")]
    pub lens: String,
    /// 焦距
    #[serde(deserialize_with = "nullable")]
    pub focal_length: String,
    /// 光圈值
    #[serde(deserialize_with = "nullable")]
    pub f_num: String,
    /// 快门速度
    #[serde(deserialize_with = "nullable")]
    pub shutter_speed: String,
    /// 感光度
    #[serde(deserialize_with = "nullable")]
    pub iso: i64,
}

impl ImageRecord {
    /// 是否有与 `tag` 完全相同的关键词
    pub fn has_keyword(&self, tag: &str) -> bool {
        self.keywords.iter().any(|k| k == tag)
    }

    /// 是否有至少一个关键词包含 `pattern`，区分大小写
    pub fn keyword_contains(&self, pattern: &str) -> bool {
        self.keywords.iter().any(|k| k.contains(pattern))
    }
}

// JSON 中的 null 视为零值
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let keywords: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(keywords.unwrap_or_default().into_iter().map(Option::unwrap_or_default).collect())
}

// 顶层 null 视为空目录，数组中的 null 视为空记录
fn from_nullable(images: Option<Vec<Option<ImageRecord>>>) -> Vec<ImageRecord> {
    images.unwrap_or_default().into_iter().map(Option::unwrap_or_default).collect()
}

/// 图片目录
///
/// 启动时从 JSON 数组加载一次，之后只读。记录顺序与文件中的顺序一致，
/// 不检查 ID 是否唯一。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    images: Vec<ImageRecord>,
}

impl Catalog {
    /// 从文件加载图片目录
    ///
    /// # Arguments
    ///
    /// * `path` - JSON 文件路径，内容为图片记录数组
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        info!("加载图片数据: {}", path.display());
        let raw =
            fs::read(path).map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;
        let catalog = Self::from_slice(&raw)?;
        info!("共加载 {} 张图片", catalog.len());
        Ok(catalog)
    }

    pub fn from_slice(raw: &[u8]) -> Result<Self, LoadError> {
        let images = from_nullable(serde_json::from_slice(raw)?);
        Ok(Self { images })
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        let images = from_nullable(serde_json::from_reader(reader)?);
        Ok(Self { images })
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRecord> {
        self.images.iter()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// 返回所有不同的关键词及其出现的图片数量，按关键词排序
    ///
    /// 同一张图片中重复的关键词只计一次。
    pub fn keywords(&self) -> Vec<(&str, usize)> {
        let mut counts = BTreeMap::new();
        for image in self {
            let keywords: BTreeSet<&str> = image.keywords.iter().map(String::as_str).collect();
            for keyword in keywords {
                *counts.entry(keyword).or_insert(0) += 1;
            }
        }
        counts.into_iter().collect()
    }
}

impl From<Vec<ImageRecord>> for Catalog {
    fn from(images: Vec<ImageRecord>) -> Self {
        Self { images }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ImageRecord;
    type IntoIter = std::slice::Iter<'a, ImageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
