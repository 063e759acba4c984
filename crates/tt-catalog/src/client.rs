//! HTTP client for the demo catalog API.

use std::future::Future;

use tt_config::CatalogConfig;

use crate::error::CatalogError;
use crate::http::check_response;
use crate::projection::{
    CatalogTechnology, PRODUCT_FIELDS, Product, ProductDetail, ProductList, project,
    resource_links,
};
use crate::roadmap::{RoadmapEntry, normalize_roadmap};

/// Anything that can answer a catalog search. Lets the debounced search
/// register run against a stub in tests.
pub trait CatalogSearch: Send + Sync + 'static {
    fn search_catalog(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<CatalogTechnology>, CatalogError>> + Send;
}

pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    page_size: u32,
    roadmap_limit: u32,
}

impl CatalogClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("techtrack/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base().to_string(),
            page_size: config.page_size,
            roadmap_limit: config.roadmap_limit,
        })
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, CatalogError> {
        tracing::debug!(url, "catalog request");
        check_response(self.http.get(url).send().await?).await
    }

    /// Search products matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn search(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<CatalogTechnology>, CatalogError> {
        let url = format!(
            "{}/products/search?q={}&limit={limit}&select={PRODUCT_FIELDS}",
            self.base_url,
            urlencoding::encode(query)
        );
        let list: ProductList = self.get(&url).await?.json().await?;
        Ok(project(list))
    }

    /// Fetch the first catalog page.
    ///
    /// # Errors
    ///
    /// Same as [`Self::search`].
    pub async fn fetch_page(&self, limit: u32) -> Result<Vec<CatalogTechnology>, CatalogError> {
        let url = format!(
            "{}/products?limit={limit}&select={PRODUCT_FIELDS}",
            self.base_url
        );
        let list: ProductList = self.get(&url).await?.json().await?;
        Ok(project(list))
    }

    /// Fetch a single product, projected.
    ///
    /// # Errors
    ///
    /// Same as [`Self::search`]; an unknown id is [`CatalogError::Api`] with
    /// status 404.
    pub async fn fetch_product(&self, id: i64) -> Result<CatalogTechnology, CatalogError> {
        let url = format!("{}/products/{id}?select={PRODUCT_FIELDS}", self.base_url);
        let product: Product = self.get(&url).await?.json().await?;
        Ok(CatalogTechnology::from(product))
    }

    /// Resource links (thumbnail, then images) for product `id`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::search`].
    pub async fn load_resources(&self, id: i64) -> Result<Vec<String>, CatalogError> {
        let url = format!("{}/products/{id}", self.base_url);
        let detail: ProductDetail = self.get(&url).await?.json().await?;
        Ok(resource_links(detail))
    }

    /// Fetch and normalize the remote roadmap.
    ///
    /// # Errors
    ///
    /// [`CatalogError::EmptyRoadmap`] if it holds no entries, otherwise as
    /// [`Self::search`].
    pub async fn fetch_roadmap(&self) -> Result<Vec<RoadmapEntry>, CatalogError> {
        let url = format!("{}/recipes?limit={}", self.base_url, self.roadmap_limit);
        let payload: serde_json::Value = self.get(&url).await?.json().await?;
        normalize_roadmap(&payload)
    }
}

impl CatalogSearch for CatalogClient {
    fn search_catalog(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<CatalogTechnology>, CatalogError>> + Send {
        async move { self.search(&query, self.page_size).await }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_config() {
        let client = CatalogClient::new(&CatalogConfig::default()).unwrap();
        assert_eq!(client.base_url, "https://dummyjson.com");
        assert_eq!(client.page_size(), 12);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = CatalogConfig {
            base_url: "http://localhost:8080/".into(),
            ..CatalogConfig::default()
        };
        let client = CatalogClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[tokio::test]
    async fn unreachable_host_is_http_error() {
        let config = CatalogConfig {
            base_url: "http://127.0.0.1:9".into(),
            timeout_secs: 2,
            ..CatalogConfig::default()
        };
        let client = CatalogClient::new(&config).unwrap();
        let err = client.fetch_page(1).await.unwrap_err();
        assert!(matches!(err, CatalogError::Http(_)));
    }
}
