pub mod catalog;
pub mod cli;
pub mod config;
mod metrics;
pub mod resolver;
pub mod server;

pub use catalog::{Catalog, ImageRecord, LoadError};
pub use config::Opts;
pub use resolver::{ListFilter, Resolver};
