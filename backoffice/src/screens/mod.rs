//! Per-resource screens. Each one binds a storefront entity to the
//! collection controller and layers the resource's mutations on top,
//! reporting outcomes through the injected notification handle.
pub mod categories;
pub mod orders;
pub mod products;
pub mod users;

use crate::collection::ControllerOptions;
use crate::config::Config;
use std::time::Duration;

impl ControllerOptions {
    pub fn from_config(config: &Config, page_size: usize) -> Self {
        Self {
            page_size,
            debounce: Duration::from_millis(config.search_debounce_ms),
            cache_capacity: config.cache_capacity,
        }
    }
}
