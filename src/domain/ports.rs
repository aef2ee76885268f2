use crate::domain::model::{BreedQuery, SubBreedList};
use crate::utils::error::ResolutionError;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait BreedFetcher: Send + Sync {
    async fn get_sub_breeds(&self, breed: &BreedQuery) -> Result<SubBreedList, ResolutionError>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
}
