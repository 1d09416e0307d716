//! # storefront_api
//! Asynchronous client for the storefront's REST backend.
//! ## Example
//! ```no_run
//! use storefront_api::query::GetProductsQuery;
//!
//! #[tokio::main]
//! pub async fn main() -> Result<(), storefront_api::Error> {
//!     let api = storefront_api::StorefrontApi::new("http://localhost:3005")?;
//!     let page = api.get_products(GetProductsQuery::new(1, 7)).await?;
//!     println!("{} products on page 1", page.products.len());
//!     Ok(())
//! }
//! ```
pub mod client;
pub mod common;
pub mod error;
pub mod model;
pub mod query;

use client::{Client, QueryResponse};
pub use common::{ApiSuccess, CategoryId, OrderId, ProductId, UserId};
pub use error::{Error, Result};
use model::{Category, Order, Product, ProductDraft, ProductPage, User};
use query::{
    BulkDeleteProductsQuery, CreateCategoryQuery, CreateProductQuery, DeleteCategoryQuery,
    DeleteProductQuery, GetCategoriesQuery, GetOrdersQuery, GetProductsQuery, GetUserOrdersQuery,
    GetUserQuery, GetUsersQuery, Query, SearchQuery, UpdateCategoryQuery, UpdateProductQuery,
};
use serde::de::DeserializeOwned;

/// Facade over the storefront backend. One async method per endpoint.
/// Clone is low cost.
#[derive(Debug, Clone)]
pub struct StorefrontApi {
    base_url: String,
    client: Client,
}

impl StorefrontApi {
    pub fn new<S: Into<String>>(base_url: S) -> Result<Self> {
        Ok(Self {
            base_url: base_url.into(),
            client: Client::new()?,
        })
    }
    /// Re-use a pre-existing reqwest::Client.
    pub fn from_reqwest_client<S: Into<String>>(client: reqwest::Client, base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new_from_reqwest_client(client),
        }
    }
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn query_json<T: DeserializeOwned>(
        &self,
        query: &impl Query,
        target: &'static str,
    ) -> Result<T> {
        let QueryResponse { text, .. } = self.client.execute(&self.base_url, query).await?;
        serde_json::from_str(&text).map_err(|e| Error::json(target, e, text))
    }
    async fn query_success(&self, query: &impl Query) -> Result<ApiSuccess> {
        self.client.execute(&self.base_url, query).await?;
        Ok(ApiSuccess)
    }

    /// One page of the product collection, optionally scoped to a category.
    pub async fn get_products(&self, query: GetProductsQuery) -> Result<ProductPage> {
        self.query_json(&query, "ProductPage").await
    }
    /// Free-text product search. The backend returns the full, unpaginated
    /// match set; callers are expected to enforce the two character minimum.
    pub async fn search<S: Into<String>>(&self, query: S) -> Result<Vec<Product>> {
        self.query_json(&SearchQuery::new(query), "Vec<Product>")
            .await
    }
    pub async fn create_product(&self, draft: ProductDraft) -> Result<ApiSuccess> {
        self.query_success(&CreateProductQuery::new(draft)).await
    }
    pub async fn update_product(&self, id: &ProductId, draft: ProductDraft) -> Result<ApiSuccess> {
        self.query_success(&UpdateProductQuery::new(id.clone(), draft))
            .await
    }
    pub async fn delete_product(&self, id: &ProductId) -> Result<ApiSuccess> {
        self.query_success(&DeleteProductQuery::new(id.clone()))
            .await
    }
    pub async fn bulk_delete_products(&self, ids: Vec<ProductId>) -> Result<ApiSuccess> {
        self.query_success(&BulkDeleteProductsQuery::new(ids)).await
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        self.query_json(&GetCategoriesQuery, "Vec<Category>").await
    }
    pub async fn create_category<S: Into<String>>(&self, name: S) -> Result<ApiSuccess> {
        self.query_success(&CreateCategoryQuery::new(name)).await
    }
    pub async fn update_category<S: Into<String>>(
        &self,
        id: &CategoryId,
        name: S,
    ) -> Result<ApiSuccess> {
        self.query_success(&UpdateCategoryQuery::new(id.clone(), name))
            .await
    }
    pub async fn delete_category(&self, id: &CategoryId) -> Result<ApiSuccess> {
        self.query_success(&DeleteCategoryQuery::new(id.clone()))
            .await
    }

    pub async fn get_users(&self) -> Result<Vec<User>> {
        self.query_json(&GetUsersQuery, "Vec<User>").await
    }
    pub async fn get_user(&self, id: &UserId) -> Result<User> {
        self.query_json(&GetUserQuery::new(id.clone()), "User")
            .await
    }

    pub async fn get_orders(&self) -> Result<Vec<Order>> {
        self.query_json(&GetOrdersQuery, "Vec<Order>").await
    }
    pub async fn get_user_orders(&self, user_id: &UserId) -> Result<Vec<Order>> {
        self.query_json(&GetUserOrdersQuery::new(user_id.clone()), "Vec<Order>")
            .await
    }
}
