use crate::collection::pagination::compute_window;
use crate::collection::source::RemoteCollection;
use crate::collection::{
    CollectionController, CollectionEntity, ControllerOptions, FieldValue, Page, Visible,
};
use crate::config::Config;
use crate::notify::NotificationHandle;
use crate::Result;
use std::sync::Arc;
use storefront_api::model::Category;
use storefront_api::{CategoryId, StorefrontApi};
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryField {
    Name,
}

impl CollectionEntity for Category {
    type Id = CategoryId;
    type Field = CategoryField;
    const SORTABLE: &'static [CategoryField] = &[CategoryField::Name];
    const SEARCHABLE: &'static [CategoryField] = &[CategoryField::Name];
    fn id(&self) -> &CategoryId {
        &self.id
    }
    fn field(&self, field: CategoryField) -> FieldValue<'_> {
        match field {
            CategoryField::Name => FieldValue::text(self.name.as_str()),
        }
    }
}

/// The backend returns categories as a flat list; pagination and search
/// both happen here, on the fetched set.
pub struct CategorySource {
    api: Arc<StorefrontApi>,
}

impl RemoteCollection for CategorySource {
    type Entity = Category;
    async fn fetch_page(
        &self,
        _scope: Option<&str>,
        page: usize,
        page_size: usize,
    ) -> Result<Page<Category>> {
        let all = self.api.get_categories().await?;
        let window = compute_window(all.len(), page_size, page);
        Ok(Page {
            page_number: window.effective_page,
            page_size,
            items: all[window.slice_start..window.slice_end].to_vec(),
            total_pages: window.total_pages,
        })
    }
    async fn search(&self, query: &str) -> Result<Vec<Category>> {
        let all = self.api.get_categories().await?;
        Ok(all.into_iter().filter(|c| c.matches_query(query)).collect())
    }
}

pub struct CategoriesScreen {
    api: Arc<StorefrontApi>,
    pub controller: CollectionController<CategorySource>,
    notify: NotificationHandle,
}

impl CategoriesScreen {
    pub fn new(api: Arc<StorefrontApi>, config: &Config, notify: NotificationHandle) -> Self {
        let options = ControllerOptions::from_config(config, config.categories_per_page);
        let controller = CollectionController::new(CategorySource { api: api.clone() }, options);
        Self {
            api,
            controller,
            notify,
        }
    }

    pub async fn open(&mut self) {
        self.controller.refresh().await;
    }

    pub fn visible(&self) -> Visible<Category> {
        self.controller.visible()
    }

    pub async fn create_category(&mut self, name: &str) {
        match self.api.create_category(name).await {
            Ok(_) => {
                self.notify.success("Category created");
                self.controller.invalidate_and_refresh().await;
            }
            Err(e) => {
                warn!("Error <{e}> creating category");
                self.notify.error(format!("Failed to create category: {e}"));
            }
        }
    }

    pub async fn update_category(&mut self, id: &CategoryId, name: &str) {
        match self.api.update_category(id, name).await {
            Ok(_) => {
                self.notify.success("Category updated");
                self.controller.invalidate_and_refresh().await;
            }
            Err(e) => {
                warn!("Error <{e}> updating category {id}");
                self.notify.error(format!("Failed to update category: {e}"));
            }
        }
    }

    pub async fn delete_category(&mut self, id: &CategoryId) {
        match self.api.delete_category(id).await {
            Ok(_) => {
                self.notify.success("Category deleted");
                self.controller.remove_confirmed(&[id.clone()]).await;
            }
            Err(e) => {
                warn!("Error <{e}> deleting category {id}");
                self.notify.error(format!("Failed to delete category: {e}"));
            }
        }
    }
}
