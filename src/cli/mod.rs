mod query;
pub mod server;
mod tags;

use anyhow::Result;
use clap::ValueEnum;
use tokio::task::block_in_place;

pub use query::*;
pub use server::*;
pub use tags::*;

use crate::catalog::Catalog;
use crate::config::Opts;

pub trait SubCommandExtend {
    fn run(&self, opts: &Opts) -> impl std::future::Future<Output = anyhow::Result<()>> + Send;
}

/// 加载图片目录，失败时由调用方终止进程
fn load_catalog(opts: &Opts) -> Result<Catalog> {
    Ok(block_in_place(|| Catalog::load(&opts.data))?)
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Table,
}
