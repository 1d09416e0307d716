//! End-to-end checks against a live storefront backend, to allow for
//! automated checking of backend api changes.
use crate::collection::ListStatus;
use crate::config::Config;
use crate::notify::{NotificationHandle, NotificationQueue};
use crate::screens::categories::CategoriesScreen;
use crate::screens::products::ProductsScreen;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use storefront_api::StorefrontApi;

fn live_config() -> Config {
    let mut config = Config::default();
    if let Ok(url) = env::var("backoffice_test_api_url") {
        config.api_url = url;
    }
    config
}

fn live_setup(config: &Config) -> (Arc<StorefrontApi>, NotificationHandle, NotificationQueue) {
    let api = Arc::new(StorefrontApi::new(config.api_url.as_str()).unwrap());
    let (queue, notify) =
        NotificationQueue::new(Duration::from_millis(config.notification_duration_ms));
    (api, notify, queue)
}

#[tokio::test]
#[ignore = "Requires a running storefront backend"]
async fn live_products_first_page() {
    let config = live_config();
    let (api, notify, _queue) = live_setup(&config);
    let mut screen = ProductsScreen::new(api, &config, notify);
    screen.open().await;
    assert_eq!(screen.controller.status(), ListStatus::Loaded);
    let visible = screen.visible();
    assert!(visible.items.len() <= config.products_per_page);
    assert_eq!(visible.window.effective_page, 1);
}

#[tokio::test]
#[ignore = "Requires a running storefront backend"]
async fn live_search_matches_names() {
    let config = live_config();
    let (api, notify, _queue) = live_setup(&config);
    let mut screen = ProductsScreen::new(api, &config, notify);
    screen.controller.on_query_change("sh");
    assert!(screen.controller.pump_search().await);
    for product in &screen.visible().items {
        assert!(product.name.to_lowercase().contains("sh"));
    }
}

#[tokio::test]
#[ignore = "Requires a running storefront backend"]
async fn live_categories_listing() {
    let config = live_config();
    let (api, notify, _queue) = live_setup(&config);
    let mut screen = CategoriesScreen::new(api, &config, notify);
    screen.open().await;
    assert_eq!(screen.controller.status(), ListStatus::Loaded);
    assert!(screen.visible().items.len() <= config.categories_per_page);
}
