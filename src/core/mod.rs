pub mod report;
pub mod resolver;

pub use crate::domain::model::{BreedQuery, Message, ServiceResponse, SubBreedList};
pub use crate::domain::ports::{BreedFetcher, ConfigProvider};
pub use crate::utils::error::{ResolutionError, Result};
