use super::{CollectionEntity, Page};
use crate::Result;
use std::future::Future;

/// Backend seam of the controller. A source knows how to fetch one page of
/// entities and how to run a server-side search; everything else (caching,
/// sorting, windowing, selection) lives in the controller.
///
/// `scope` is an opaque discriminator the source may interpret (the
/// products screen passes the category filter, the orders screen a user
/// id); it also keys the page cache, so two scopes never share pages.
pub trait RemoteCollection {
    type Entity: CollectionEntity;
    fn fetch_page(
        &self,
        scope: Option<&str>,
        page: usize,
        page_size: usize,
    ) -> impl Future<Output = Result<Page<Self::Entity>>> + Send;
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<Self::Entity>>> + Send;
}
