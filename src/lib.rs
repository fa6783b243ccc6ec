pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig, ServerConfig};
pub use crate::core::{dataset::Dataset, query::ReleaseQueries};
pub use crate::server::{router, serve, AppState};
pub use crate::utils::error::{ApiError, Result};
