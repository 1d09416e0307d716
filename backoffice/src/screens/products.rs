use crate::collection::source::RemoteCollection;
use crate::collection::{
    CollectionController, CollectionEntity, ControllerOptions, FieldValue, Page, Visible,
};
use crate::config::Config;
use crate::notify::NotificationHandle;
use crate::Result;
use itertools::Itertools;
use std::sync::Arc;
use storefront_api::model::{Product, ProductDraft};
use storefront_api::query::GetProductsQuery;
use storefront_api::{ProductId, StorefrontApi};
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Price,
    OldPrice,
    Category,
}

impl CollectionEntity for Product {
    type Id = ProductId;
    type Field = ProductField;
    const SORTABLE: &'static [ProductField] = &[
        ProductField::Name,
        ProductField::Price,
        ProductField::OldPrice,
    ];
    const SEARCHABLE: &'static [ProductField] = &[ProductField::Name];
    fn id(&self) -> &ProductId {
        &self.id
    }
    fn field(&self, field: ProductField) -> FieldValue<'_> {
        match field {
            ProductField::Name => FieldValue::text(self.name.as_str()),
            ProductField::Price => FieldValue::number(self.display_price()),
            ProductField::OldPrice => self
                .old_price()
                .map(FieldValue::number)
                .unwrap_or(FieldValue::Missing),
            ProductField::Category => {
                if self.category.is_empty() {
                    FieldValue::Missing
                } else {
                    FieldValue::text(self.category_names().join(", "))
                }
            }
        }
    }
}

/// Products are the one resource the backend paginates itself; the scope
/// discriminator carries the category filter.
pub struct ProductSource {
    api: Arc<StorefrontApi>,
}

impl RemoteCollection for ProductSource {
    type Entity = Product;
    async fn fetch_page(
        &self,
        scope: Option<&str>,
        page: usize,
        page_size: usize,
    ) -> Result<Page<Product>> {
        let mut query = GetProductsQuery::new(page, page_size);
        if let Some(category) = scope {
            query = query.with_category(category);
        }
        let fetched = self.api.get_products(query).await?;
        Ok(Page {
            page_number: fetched.current_page,
            page_size,
            items: fetched.products,
            total_pages: fetched.total_pages.max(1),
        })
    }
    async fn search(&self, query: &str) -> Result<Vec<Product>> {
        Ok(self.api.search(query).await?)
    }
}

pub struct ProductsScreen {
    api: Arc<StorefrontApi>,
    pub controller: CollectionController<ProductSource>,
    notify: NotificationHandle,
}

impl ProductsScreen {
    pub fn new(api: Arc<StorefrontApi>, config: &Config, notify: NotificationHandle) -> Self {
        let options = ControllerOptions::from_config(config, config.products_per_page);
        let controller = CollectionController::new(ProductSource { api: api.clone() }, options);
        Self {
            api,
            controller,
            notify,
        }
    }

    pub async fn open(&mut self) {
        self.controller.refresh().await;
    }

    pub async fn set_category(&mut self, category: Option<String>) {
        self.controller.set_scope(category).await;
    }

    pub fn visible(&self) -> Visible<Product> {
        self.controller.visible()
    }

    /// Delete one product. Callers confirm with the operator first; the
    /// view only reconciles once the server has acknowledged.
    pub async fn delete_product(&mut self, id: &ProductId) {
        match self.api.delete_product(id).await {
            Ok(_) => {
                self.notify.success("Product deleted");
                self.controller.remove_confirmed(&[id.clone()]).await;
            }
            Err(e) => {
                warn!("Error <{e}> deleting product {id}");
                self.notify.error(format!("Failed to delete product: {e}"));
            }
        }
    }

    /// Bulk-delete everything currently selected in one request.
    pub async fn delete_selected(&mut self) {
        let ids = self.controller.selection().to_vec();
        if ids.is_empty() {
            self.notify.info("No products selected");
            return;
        }
        match self.api.bulk_delete_products(ids.clone()).await {
            Ok(_) => {
                self.notify
                    .success(format!("{} products deleted", ids.len()));
                self.controller.remove_confirmed(&ids).await;
            }
            Err(e) => {
                warn!("Error <{e}> bulk deleting {} products", ids.len());
                self.notify.error(format!("Failed to delete products: {e}"));
            }
        }
    }

    pub async fn create_product(&mut self, draft: ProductDraft) {
        match self.api.create_product(draft).await {
            Ok(_) => {
                self.notify.success("Product created");
                self.controller.invalidate_and_refresh().await;
            }
            Err(e) => {
                warn!("Error <{e}> creating product");
                self.notify.error(format!("Failed to create product: {e}"));
            }
        }
    }

    pub async fn update_product(&mut self, id: &ProductId, draft: ProductDraft) {
        match self.api.update_product(id, draft).await {
            Ok(_) => {
                self.notify.success("Product updated");
                self.controller.invalidate_and_refresh().await;
            }
            Err(e) => {
                warn!("Error <{e}> updating product {id}");
                self.notify.error(format!("Failed to update product: {e}"));
            }
        }
    }
}
