pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{toml_config::TomlConfig, Settings};
pub use crate::core::resolver::{BreedResolver, ResolverBuilder, DEFAULT_BASE_URL};
pub use crate::domain::model::{BreedQuery, ServiceResponse, SubBreedList};
pub use crate::domain::ports::{BreedFetcher, ConfigProvider};
pub use crate::utils::error::{AppError, ResolutionError, Result};
