use crate::domain::model::{Product, Stock};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Key-value persistence slot for the serialized cart.
pub trait Storage: Send + Sync {
    fn read(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn write(
        &self,
        key: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Remote product/inventory API.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn product(&self, product_id: u64) -> Result<Product>;
    async fn stock(&self, product_id: u64) -> Result<Stock>;
}

/// Transient user-facing notification surface (the toast layer).
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn storage_path(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}
