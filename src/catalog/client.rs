//! Catalog REST service client implementation.
//!
//! Handles listing, creating, and updating products.

use crate::catalog::models::{Product, ProductPayload};
use crate::config::Config;
use anyhow::{Context, Result};
use reqwest::{Client, Response};
use std::time::Duration;

/// Catalog REST service client.
///
/// Every call is a single request with no retry.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// HTTP client for API requests
    client: Client,
    /// Products collection URL, without trailing slash
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client from configuration.
    ///
    /// # Arguments
    /// * `config` - Application configuration
    ///
    /// # Returns
    /// * `Result<CatalogClient>` - New client or error
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = config.api_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(anyhow::anyhow!(
                "Catalog API URL is required. Please set it in config.jsonc"
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// URL of the products collection.
    pub fn collection_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single product.
    pub fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Fetch the full product collection.
    ///
    /// # Returns
    /// * `Result<Vec<Product>>` - All products in service order or error
    pub async fn fetch_products(&self) -> Result<Vec<Product>> {
        tracing::debug!(url = %self.base_url, "fetching products");
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .context("Failed to fetch products from catalog API")?;

        let products: Vec<Product> = check_status(response)
            .await?
            .json()
            .await
            .context("Failed to parse products response")?;

        tracing::info!(count = products.len(), "fetched products");
        Ok(products)
    }

    /// Create a product.
    ///
    /// # Arguments
    /// * `payload` - Fields of the new product
    ///
    /// # Returns
    /// * `Result<Product>` - Product as stored by the service (with its new ID)
    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product> {
        tracing::debug!(title = %payload.title, "creating product");
        let response = self
            .client
            .post(&self.base_url)
            .json(payload)
            .send()
            .await
            .context("Failed to create product")?;

        let product: Product = check_status(response)
            .await?
            .json()
            .await
            .context("Failed to parse created product")?;

        tracing::info!(id = product.id, title = %product.title, "created product");
        Ok(product)
    }

    /// Update an existing product.
    ///
    /// # Arguments
    /// * `id` - ID of the product to replace
    /// * `payload` - New field values
    ///
    /// # Returns
    /// * `Result<Product>` - Product as stored by the service
    pub async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<Product> {
        let url = self.item_url(id);
        tracing::debug!(%url, "updating product");
        let response = self
            .client
            .put(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to update product {}", id))?;

        let product: Product = check_status(response)
            .await?
            .json()
            .await
            .context("Failed to parse updated product")?;

        tracing::info!(id = product.id, title = %product.title, "updated product");
        Ok(product)
    }
}

/// Turn a non-success response into an error carrying status and body.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let error_text = response.text().await.unwrap_or_default();
    Err(anyhow::anyhow!("Catalog API error ({}): {}", status, error_text))
}
