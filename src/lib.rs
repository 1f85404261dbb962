pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};

pub use core::{engine::Engine, engine::RunOutcome, pipeline::MultiplyPipeline};
pub use domain::model::{Params, Product};
pub use utils::error::{MulError, Result};
