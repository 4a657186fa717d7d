use crate::domain::model::{Product, Stock};
use crate::domain::ports::{CatalogApi, ConfigProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Catalog/inventory client issuing `GET {base_url}/products/{id}` and
/// `GET {base_url}/stock/{id}`.
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.api_base_url(), config.request_timeout())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T> {
        tracing::debug!(%url, "catalog request");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    async fn product(&self, product_id: u64) -> Result<Product> {
        self.get_json(format!("{}/products/{}", self.base_url, product_id))
            .await
    }

    async fn stock(&self, product_id: u64) -> Result<Stock> {
        self.get_json(format!("{}/stock/{}", self.base_url, product_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CartError;
    use httpmock::prelude::*;

    fn catalog(server: &MockServer) -> HttpCatalog {
        HttpCatalog::new(&server.base_url(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_product_fetch() {
        let server = MockServer::start();
        let product_mock = server.mock(|when, then| {
            when.method(GET).path("/products/1");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "id": 1,
                    "title": "Sneaker",
                    "price": 179.9,
                    "image": "sneaker.jpg"
                }));
        });

        let product = catalog(&server).product(1).await.unwrap();

        product_mock.assert();
        assert_eq!(product.id, 1);
        assert_eq!(product.title, "Sneaker");
        assert_eq!(product.price, 179.9);
    }

    #[tokio::test]
    async fn test_stock_fetch() {
        let server = MockServer::start();
        let stock_mock = server.mock(|when, then| {
            when.method(GET).path("/stock/2");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"id": 2, "amount": 9}));
        });

        let stock = catalog(&server).stock(2).await.unwrap();

        stock_mock.assert();
        assert_eq!(stock.id, 2);
        assert_eq!(stock.amount, 9);
    }

    #[tokio::test]
    async fn test_missing_product_is_an_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/products/99");
            then.status(404);
        });

        let result = catalog(&server).product(99).await;

        assert!(matches!(result, Err(CartError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url_is_tolerated() {
        let server = MockServer::start();
        let product_mock = server.mock(|when, then| {
            when.method(GET).path("/products/1");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "id": 1,
                    "title": "Sneaker",
                    "price": 179.9,
                    "image": "sneaker.jpg"
                }));
        });

        let base = format!("{}/", server.base_url());
        let catalog = HttpCatalog::new(&base, Duration::from_secs(5)).unwrap();
        catalog.product(1).await.unwrap();

        product_mock.assert();
    }
}
