//! Bounded memo of previously fetched pages.
//!
//! Keyed by every filter dimension plus the page number, so changing any
//! filter addresses a different slot. Capacity-bounded, and invalidated
//! wholesale whenever a mutating call touches the resource, so a read after
//! a delete or edit never serves the pre-mutation page.
use super::Page;
use moka::sync::Cache;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PageKey {
    pub scope: Option<String>,
    pub page: usize,
}

impl PageKey {
    pub fn new(scope: Option<&str>, page: usize) -> Self {
        Self {
            scope: scope.map(str::to_owned),
            page,
        }
    }
}

pub struct PageCache<E> {
    inner: Cache<PageKey, Page<E>>,
}

impl<E: Clone + Send + Sync + 'static> PageCache<E> {
    pub fn new(capacity: u64) -> Self {
        Self {
            inner: Cache::builder().max_capacity(capacity).build(),
        }
    }
    pub fn get(&self, key: &PageKey) -> Option<Page<E>> {
        self.inner.get(key)
    }
    pub fn put(&self, key: PageKey, page: Page<E>) {
        self.inner.insert(key, page);
    }
    /// Drop every cached page of this resource. Called after any successful
    /// mutation, before the next fetch.
    pub fn invalidate_all(&self) {
        debug!("Invalidating page cache");
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: usize, items: Vec<&str>) -> Page<String> {
        Page {
            page_number: n,
            page_size: 2,
            items: items.into_iter().map(str::to_owned).collect(),
            total_pages: 3,
        }
    }

    #[test]
    fn scope_is_part_of_the_key() {
        let cache = PageCache::new(8);
        cache.put(PageKey::new(None, 1), page(1, vec!["a", "b"]));
        cache.put(PageKey::new(Some("toys"), 1), page(1, vec!["c"]));
        assert_eq!(
            cache.get(&PageKey::new(None, 1)).unwrap().items,
            vec!["a", "b"]
        );
        assert_eq!(
            cache.get(&PageKey::new(Some("toys"), 1)).unwrap().items,
            vec!["c"]
        );
        assert!(cache.get(&PageKey::new(Some("toys"), 2)).is_none());
    }

    #[test]
    fn invalidate_all_empties_every_slot() {
        let cache = PageCache::new(8);
        cache.put(PageKey::new(None, 1), page(1, vec!["a"]));
        cache.put(PageKey::new(None, 2), page(2, vec!["b"]));
        cache.invalidate_all();
        // moka applies invalidation lazily; reads after invalidate_all miss.
        assert!(cache.get(&PageKey::new(None, 1)).is_none());
        assert!(cache.get(&PageKey::new(None, 2)).is_none());
    }
}
