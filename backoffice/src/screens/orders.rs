use crate::collection::pagination::compute_window;
use crate::collection::source::RemoteCollection;
use crate::collection::{
    CollectionController, CollectionEntity, ControllerOptions, FieldValue, Page, Visible,
};
use crate::config::Config;
use crate::Result;
use std::sync::Arc;
use storefront_api::model::Order;
use storefront_api::{OrderId, StorefrontApi, UserId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderField {
    Date,
    Total,
    Customer,
}

impl CollectionEntity for Order {
    type Id = OrderId;
    type Field = OrderField;
    const SORTABLE: &'static [OrderField] = &[OrderField::Date, OrderField::Total];
    const SEARCHABLE: &'static [OrderField] = &[OrderField::Customer];
    fn id(&self) -> &OrderId {
        &self.id
    }
    fn field(&self, field: OrderField) -> FieldValue<'_> {
        match field {
            // ISO-ordered so text comparison sorts chronologically.
            OrderField::Date => {
                FieldValue::text(self.created_at.format("%Y-%m-%d %H:%M").to_string())
            }
            OrderField::Total => FieldValue::number(self.total_amount),
            OrderField::Customer => FieldValue::text(self.shipping_address.name.as_str()),
        }
    }
}

/// Orders come back unpaginated. The scope discriminator selects between
/// the full feed and a single customer's history.
pub struct OrderSource {
    api: Arc<StorefrontApi>,
}

impl OrderSource {
    async fn fetch_all(&self, scope: Option<&str>) -> Result<Vec<Order>> {
        let orders = match scope {
            Some(user_id) => self.api.get_user_orders(&UserId::from(user_id)).await?,
            None => self.api.get_orders().await?,
        };
        Ok(orders)
    }
}

impl RemoteCollection for OrderSource {
    type Entity = Order;
    async fn fetch_page(
        &self,
        scope: Option<&str>,
        page: usize,
        page_size: usize,
    ) -> Result<Page<Order>> {
        let all = self.fetch_all(scope).await?;
        let window = compute_window(all.len(), page_size, page);
        Ok(Page {
            page_number: window.effective_page,
            page_size,
            items: all[window.slice_start..window.slice_end].to_vec(),
            total_pages: window.total_pages,
        })
    }
    async fn search(&self, query: &str) -> Result<Vec<Order>> {
        let all = self.fetch_all(None).await?;
        Ok(all.into_iter().filter(|o| o.matches_query(query)).collect())
    }
}

pub struct OrdersScreen {
    pub controller: CollectionController<OrderSource>,
}

impl OrdersScreen {
    pub fn new(api: Arc<StorefrontApi>, config: &Config) -> Self {
        let options = ControllerOptions::from_config(config, config.products_per_page);
        let controller = CollectionController::new(OrderSource { api }, options);
        Self { controller }
    }

    pub async fn open(&mut self) {
        self.controller.refresh().await;
    }

    /// Restrict the view to one customer's orders, or widen back out.
    pub async fn set_user(&mut self, user: Option<UserId>) {
        self.controller
            .set_scope(user.map(|u| u.to_string()))
            .await;
    }

    pub fn visible(&self) -> Visible<Order> {
        self.controller.visible()
    }
}
