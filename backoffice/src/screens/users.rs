use crate::collection::pagination::compute_window;
use crate::collection::source::RemoteCollection;
use crate::collection::{
    CollectionController, CollectionEntity, ControllerOptions, FieldValue, Page, Visible,
};
use crate::config::Config;
use crate::notify::NotificationHandle;
use crate::Result;
use std::sync::Arc;
use storefront_api::model::User;
use storefront_api::{StorefrontApi, UserId};
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserField {
    Name,
    Email,
}

impl CollectionEntity for User {
    type Id = UserId;
    type Field = UserField;
    const SORTABLE: &'static [UserField] = &[UserField::Name, UserField::Email];
    const SEARCHABLE: &'static [UserField] = &[UserField::Name, UserField::Email];
    fn id(&self) -> &UserId {
        &self.id
    }
    fn field(&self, field: UserField) -> FieldValue<'_> {
        match field {
            UserField::Name => FieldValue::text(self.display_name()),
            UserField::Email => FieldValue::text(self.email.as_str()),
        }
    }
}

/// Users arrive as a flat list; paging and matching are client-side.
pub struct UserSource {
    api: Arc<StorefrontApi>,
}

impl RemoteCollection for UserSource {
    type Entity = User;
    async fn fetch_page(
        &self,
        _scope: Option<&str>,
        page: usize,
        page_size: usize,
    ) -> Result<Page<User>> {
        let all = self.api.get_users().await?;
        let window = compute_window(all.len(), page_size, page);
        Ok(Page {
            page_number: window.effective_page,
            page_size,
            items: all[window.slice_start..window.slice_end].to_vec(),
            total_pages: window.total_pages,
        })
    }
    async fn search(&self, query: &str) -> Result<Vec<User>> {
        let all = self.api.get_users().await?;
        Ok(all.into_iter().filter(|u| u.matches_query(query)).collect())
    }
}

pub struct UsersScreen {
    api: Arc<StorefrontApi>,
    pub controller: CollectionController<UserSource>,
    notify: NotificationHandle,
}

impl UsersScreen {
    pub fn new(api: Arc<StorefrontApi>, config: &Config, notify: NotificationHandle) -> Self {
        let options = ControllerOptions::from_config(config, config.products_per_page);
        let controller = CollectionController::new(UserSource { api: api.clone() }, options);
        Self {
            api,
            controller,
            notify,
        }
    }

    pub async fn open(&mut self) {
        self.controller.refresh().await;
    }

    pub fn visible(&self) -> Visible<User> {
        self.controller.visible()
    }

    /// Detail lookup for a single customer. Failures surface as a
    /// notification rather than tearing down the screen.
    pub async fn load_user(&mut self, id: &UserId) -> Option<User> {
        match self.api.get_user(id).await {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Error <{e}> loading user {id}");
                self.notify.error(format!("Failed to load user: {e}"));
                None
            }
        }
    }
}
