use clap::Parser;
use env_logger::Env;

use imquery::cli::SubCommandExtend;
use imquery::config::{Opts, SubCommand};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();

    match &opts.subcmd {
        SubCommand::Server(config) => config.run(&opts).await,
        SubCommand::Query(config) => config.run(&opts).await,
        SubCommand::Tags(config) => config.run(&opts).await,
    }
}
