//! Generic collection view controller.
//!
//! Every admin screen is the same machine: fetch a page of entities, filter
//! and sort them, window them, track a multi-select, and reconcile deletes.
//! This module implements that machine once, generic over the entity shape;
//! the per-resource screens declare their columns and plug in a remote
//! source.
use crate::error::{Error, Result};
use cache::{PageCache, PageKey};
use debounce::{Debounced, Debouncer};
use pagination::{compute_window, PageWindow};
use selection::SelectionSet;
use sort::{sort_items, SortConfig};
use source::RemoteCollection;
use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;
use tracing::{debug, warn};

pub mod cache;
pub mod debounce;
pub mod pagination;
pub mod selection;
pub mod sort;
pub mod source;

/// Queries shorter than this never reach the search endpoint.
pub const MIN_QUERY_LEN: usize = 2;

/// Load state of a collection, as a screen would report it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStatus {
    New,
    Loading,
    Loaded,
    Error,
}

/// A single cell value, used for sorting, client-side matching and plain
/// text rendering.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Missing,
    Number(f64),
    Text(Cow<'a, str>),
}

impl<'a> FieldValue<'a> {
    pub fn text<S: Into<Cow<'a, str>>>(value: S) -> Self {
        FieldValue::Text(value.into())
    }
    pub fn number(value: f64) -> Self {
        FieldValue::Number(value)
    }
    /// Rendered form; missing cells show as "N/A" like the original tables.
    pub fn display(&self) -> Cow<'a, str> {
        match self {
            FieldValue::Missing => "N/A".into(),
            FieldValue::Number(n) => format!("{n:.2}").into(),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

/// An entity the controller can manage. Implementations declare which
/// columns exist, which are sortable, and which are searched client-side.
pub trait CollectionEntity: Clone + Send + Sync + 'static {
    type Id: Clone + Eq + Hash + Debug + Send + Sync + 'static;
    type Field: Copy + PartialEq + Debug + Send + 'static;
    const SORTABLE: &'static [Self::Field];
    const SEARCHABLE: &'static [Self::Field];
    fn id(&self) -> &Self::Id;
    fn field(&self, field: Self::Field) -> FieldValue<'_>;
    /// Case-insensitive containment over the searchable fields.
    fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        Self::SEARCHABLE.iter().any(|field| match self.field(*field) {
            FieldValue::Text(s) => s.to_lowercase().contains(&query),
            FieldValue::Number(n) => format!("{n}").contains(&query),
            FieldValue::Missing => false,
        })
    }
}

/// One page of a collection plus its pagination metadata.
///
/// Invariant: `total_pages >= 1`; an empty collection is a single empty
/// page.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<E> {
    pub page_number: usize,
    pub page_size: usize,
    pub items: Vec<E>,
    pub total_pages: usize,
}

/// The slice of entities a render layer should show right now.
#[derive(Clone, Debug, PartialEq)]
pub struct Visible<E> {
    pub items: Vec<E>,
    pub window: PageWindow,
}

#[derive(Clone, Copy, Debug)]
pub struct ControllerOptions {
    pub page_size: usize,
    pub debounce: Duration,
    pub cache_capacity: u64,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            page_size: 7,
            debounce: Duration::from_millis(300),
            cache_capacity: 32,
        }
    }
}

/// State machine for one screen instance. Owns the cache, sort
/// configuration and selection set exclusively; entities are immutable
/// snapshots owned by the backend.
pub struct CollectionController<R: RemoteCollection> {
    source: R,
    scope: Option<String>,
    page_size: usize,
    requested_page: usize,
    remote_total_pages: usize,
    items: Vec<R::Entity>,
    status: ListStatus,
    sort: SortConfig<<R::Entity as CollectionEntity>::Field>,
    selection: SelectionSet<<R::Entity as CollectionEntity>::Id>,
    cache: PageCache<R::Entity>,
    query: String,
    /// When present the screen is in search mode: the full match set,
    /// paginated client-side through the same window arithmetic as list
    /// mode.
    search_results: Option<Vec<R::Entity>>,
    debouncer: Debouncer<String>,
}

impl<R: RemoteCollection> CollectionController<R> {
    pub fn new(source: R, options: ControllerOptions) -> Self {
        Self {
            source,
            scope: None,
            page_size: options.page_size.max(1),
            requested_page: 1,
            remote_total_pages: 1,
            items: Vec::new(),
            status: ListStatus::New,
            sort: SortConfig::default(),
            selection: SelectionSet::default(),
            cache: PageCache::new(options.cache_capacity),
            query: String::new(),
            search_results: None,
            debouncer: Debouncer::new(options.debounce),
        }
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }
    pub fn query(&self) -> &str {
        &self.query
    }
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }
    pub fn is_search_active(&self) -> bool {
        self.search_results.is_some()
    }
    pub fn sort(&self) -> &SortConfig<<R::Entity as CollectionEntity>::Field> {
        &self.sort
    }
    pub fn selection(&self) -> &SelectionSet<<R::Entity as CollectionEntity>::Id> {
        &self.selection
    }
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Load the current page, serving from the page cache when possible.
    /// Read failures degrade to an empty state; they are not retried.
    pub async fn refresh(&mut self) {
        let key = PageKey::new(self.scope.as_deref(), self.requested_page);
        if let Some(page) = self.cache.get(&key) {
            debug!("Serving page {} from cache", self.requested_page);
            self.apply_page(page);
            return;
        }
        self.status = ListStatus::Loading;
        match self
            .source
            .fetch_page(self.scope.as_deref(), self.requested_page, self.page_size)
            .await
        {
            Ok(page) => {
                self.cache.put(key, page.clone());
                self.apply_page(page);
            }
            Err(e) => {
                warn!("Error <{e}> fetching page {}", self.requested_page);
                self.items.clear();
                self.remote_total_pages = 1;
                self.status = ListStatus::Error;
            }
        }
    }

    fn apply_page(&mut self, page: Page<R::Entity>) {
        self.remote_total_pages = page.total_pages.max(1);
        self.requested_page = page.page_number.clamp(1, self.remote_total_pages);
        self.items = page.items;
        self.status = ListStatus::Loaded;
    }

    /// Navigate to a page. Out-of-range requests are ignored in list mode,
    /// matching the disabled prev/next affordances; in search mode the
    /// window arithmetic clamps instead.
    pub async fn set_page(&mut self, page: usize) {
        if self.search_results.is_some() {
            self.requested_page = page.max(1);
            return;
        }
        if page >= 1 && page <= self.remote_total_pages && page != self.requested_page {
            self.requested_page = page;
            self.refresh().await;
        }
    }

    /// Change the scope discriminator (e.g. the category filter) and reload
    /// from page one. Selections are kept; cached pages of other scopes
    /// stay addressable under their own keys.
    pub async fn set_scope(&mut self, scope: Option<String>) {
        self.scope = scope;
        self.requested_page = 1;
        self.refresh().await;
    }

    /// React to a keystroke in the search box. Queries below the minimum
    /// length leave search mode immediately and cancel any pending
    /// evaluation; anything else is debounced.
    pub fn on_query_change(&mut self, query: &str) {
        self.query = query.to_string();
        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_LEN {
            self.debouncer.cancel_pending();
            if self.search_results.take().is_some() {
                self.requested_page = 1;
            }
            return;
        }
        self.debouncer.submit(trimmed.to_string());
    }

    /// Drive the debounced search pipeline: wait for the next settled query,
    /// drop anything a later submission has superseded, and run the search.
    /// Returns whether the view changed.
    pub async fn pump_search(&mut self) -> bool {
        let Some(mut next) = self.debouncer.settled().await else {
            return false;
        };
        while let Some(later) = self.debouncer.try_settled() {
            next = later;
        }
        let Debounced { generation, value } = next;
        if generation != self.debouncer.latest_generation() {
            debug!("Discarding superseded search evaluation");
            return false;
        }
        self.execute_search(generation, value).await;
        true
    }

    async fn execute_search(&mut self, generation: u64, query: String) {
        self.status = ListStatus::Loading;
        let outcome = self.source.search(&query).await;
        // A newer submission may have started while this one was in flight;
        // its result is the one that gets rendered.
        if generation != self.debouncer.latest_generation() {
            debug!("Discarding superseded search response");
            return;
        }
        match outcome {
            Ok(results) => {
                self.search_results = Some(results);
                self.requested_page = 1;
                self.status = ListStatus::Loaded;
            }
            Err(e) => {
                warn!("Error <{e}> searching for \"{query}\"");
                self.search_results = Some(Vec::new());
                self.status = ListStatus::Error;
            }
        }
    }

    /// Toggle sorting on a column. Fails if the column is not declared
    /// sortable.
    pub fn toggle_sort(&mut self, field: <R::Entity as CollectionEntity>::Field) -> Result<()> {
        if !<R::Entity as CollectionEntity>::SORTABLE.contains(&field) {
            return Err(Error::not_sortable(field));
        }
        self.sort.toggle(field);
        Ok(())
    }

    pub fn toggle_selected(&mut self, id: <R::Entity as CollectionEntity>::Id) {
        self.selection.toggle(id);
    }

    /// Select-all scoped to the currently rendered slice.
    pub fn select_all_visible(&mut self) {
        let visible: Vec<_> = self
            .visible()
            .items
            .iter()
            .map(|e| e.id().clone())
            .collect();
        self.selection.select_all_visible(&visible);
    }

    /// The slice the render layer should show, with its page window.
    pub fn visible(&self) -> Visible<R::Entity> {
        match &self.search_results {
            Some(results) => {
                let mut items = results.clone();
                sort_items(&mut items, &self.sort);
                let window = compute_window(items.len(), self.page_size, self.requested_page);
                Visible {
                    items: items[window.slice_start..window.slice_end].to_vec(),
                    window,
                }
            }
            None => {
                let mut items = self.items.clone();
                sort_items(&mut items, &self.sort);
                let total_pages = self.remote_total_pages.max(1);
                let slice_end = items.len();
                Visible {
                    items,
                    window: PageWindow {
                        effective_page: self.requested_page.clamp(1, total_pages),
                        total_pages,
                        slice_start: 0,
                        slice_end,
                    },
                }
            }
        }
    }

    /// Reconcile state after the server confirmed a delete. Runs
    /// synchronously with the mutation's success: removed ids leave the
    /// selection, cached pages are dropped, and when the last visible row
    /// of a page above one disappears the view steps back a page before
    /// refetching (never rendering an empty page while earlier pages have
    /// content).
    pub async fn remove_confirmed(&mut self, removed: &[<R::Entity as CollectionEntity>::Id]) {
        self.selection.retain(|id| !removed.contains(id));
        if let Some(results) = &mut self.search_results {
            results.retain(|e| !removed.contains(e.id()));
        }
        self.items.retain(|e| !removed.contains(e.id()));
        self.cache.invalidate_all();
        if self.search_results.is_none() {
            if self.items.is_empty() && self.requested_page > 1 {
                self.requested_page -= 1;
            }
            self.refresh().await;
        }
    }

    /// Drop cached pages and refetch, after any non-delete mutation
    /// (create/update) confirmed by the server.
    pub async fn invalidate_and_refresh(&mut self) {
        self.cache.invalidate_all();
        self.refresh().await;
    }
}
