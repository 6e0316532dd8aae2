use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::*;

#[derive(Parser, Debug, Clone)]
#[command(name = "imquery", version)]
pub struct Opts {
    #[command(subcommand)]
    pub subcmd: SubCommand,
    /// 图片数据文件，内容为图片记录的 JSON 数组
    #[arg(short, long, global = true, value_name = "FILE", default_value = "./images.json")]
    pub data: PathBuf,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SubCommand {
    /// 启动 HTTP 查询服务
    Server(ServerCommand),
    /// 在命令行中查询图片
    Query(QueryCommand),
    /// 列出所有关键词及其图片数量
    Tags(TagsCommand),
}
