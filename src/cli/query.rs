use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;

use crate::catalog::ImageRecord;
use crate::cli::{OutputFormat, SubCommandExtend, load_catalog};
use crate::config::Opts;
use crate::resolver::{ListFilter, Resolver};

#[derive(Parser, Debug, Clone)]
pub struct QueryCommand {
    #[command(subcommand)]
    pub kind: QueryKind,
    /// 输出格式
    #[arg(long, value_name = "FORMAT", value_enum, global = true, default_value_t = OutputFormat::Json)]
    pub output_format: OutputFormat,
}

#[derive(Subcommand, Debug, Clone)]
pub enum QueryKind {
    /// 按 ID 查询单张图片，找不到时输出空记录
    Image {
        /// 图片 ID
        id: Option<String>,
    },
    /// 查询图片列表
    List {
        /// 关键词完全匹配
        #[arg(long)]
        tag: Option<String>,
        /// 关键词包含子串，优先于 --tag
        #[arg(long)]
        tag_contains: Option<String>,
    },
}

impl SubCommandExtend for QueryCommand {
    async fn run(&self, opts: &Opts) -> Result<()> {
        let resolver = Resolver::new(Arc::new(load_catalog(opts)?));

        match &self.kind {
            QueryKind::Image { id } => {
                let image = resolver.image(id.as_deref());
                print_result(&image, [&*image], self.output_format)
            }
            QueryKind::List { tag, tag_contains } => {
                let filter = ListFilter::new(tag.clone(), tag_contains.clone());
                let images = resolver.image_list(&filter);
                debug!("{:?} 匹配 {} 张图片", filter, images.len());
                print_result(&images, images.iter().copied(), self.output_format)
            }
        }
    }
}

fn print_result<'a>(
    value: &impl Serialize,
    images: impl IntoIterator<Item = &'a ImageRecord>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?)
        }
        OutputFormat::Table => {
            for image in images {
                println!("{}\t{}\t{}", image.id, image.title, image.keywords.join(","));
            }
        }
    }
    Ok(())
}
