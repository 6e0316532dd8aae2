use anyhow::Result;
use clap::Parser;
use serde_json::json;

use crate::cli::{OutputFormat, SubCommandExtend, load_catalog};
use crate::config::Opts;

#[derive(Parser, Debug, Clone)]
pub struct TagsCommand {
    /// 输出格式
    #[arg(long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Table)]
    pub output_format: OutputFormat,
}

impl SubCommandExtend for TagsCommand {
    async fn run(&self, opts: &Opts) -> Result<()> {
        let catalog = load_catalog(opts)?;
        let keywords = catalog.keywords();

        match self.output_format {
            OutputFormat::Json => {
                let keywords: Vec<_> = keywords
                    .into_iter()
                    .map(|(keyword, count)| json!({ "keyword": keyword, "count": count }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&keywords)?)
            }
            OutputFormat::Table => {
                for (keyword, count) in keywords {
                    println!("{}\t{}", count, keyword);
                }
            }
        }
        Ok(())
    }
}
