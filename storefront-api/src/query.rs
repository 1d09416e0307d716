//! Type safe queries to pass to the backend.
pub use category::*;
pub use orders::*;
pub use products::*;
pub use search::*;
pub use users::*;

use std::borrow::Cow;

/// The HTTP verb a query is issued with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Represents a query that can be passed to the storefront backend.
pub trait Query {
    fn method(&self) -> Method;
    fn path(&self) -> Cow<'_, str>;
    /// Key/value pairs appended to the URL query string.
    fn params(&self) -> Vec<(&'static str, Cow<'_, str>)> {
        Vec::new()
    }
    /// JSON body, for mutating queries that carry one.
    fn body(&self) -> Option<serde_json::Value> {
        None
    }
}

pub mod products {
    use super::{Method, Query};
    use crate::common::{CategoryId, ProductId};
    use crate::model::ProductDraft;
    use serde_json::json;
    use std::borrow::Cow;

    /// `GET /api/products?category&page&limit` - one page of the products
    /// collection.
    pub struct GetProductsQuery {
        page: usize,
        limit: usize,
        category: Option<CategoryId>,
    }
    impl GetProductsQuery {
        pub fn new(page: usize, limit: usize) -> Self {
            Self {
                page,
                limit,
                category: None,
            }
        }
        pub fn with_category<T: Into<CategoryId>>(mut self, category: T) -> Self {
            self.category = Some(category.into());
            self
        }
    }
    impl Query for GetProductsQuery {
        fn method(&self) -> Method {
            Method::Get
        }
        fn path(&self) -> Cow<'_, str> {
            "/api/products".into()
        }
        fn params(&self) -> Vec<(&'static str, Cow<'_, str>)> {
            let mut params = vec![
                ("page", Cow::Owned(self.page.to_string())),
                ("limit", Cow::Owned(self.limit.to_string())),
            ];
            if let Some(category) = &self.category {
                params.push(("category", Cow::Borrowed(category.as_str())));
            }
            params
        }
    }

    pub struct CreateProductQuery {
        draft: ProductDraft,
    }
    impl CreateProductQuery {
        pub fn new(draft: ProductDraft) -> Self {
            Self { draft }
        }
    }
    impl Query for CreateProductQuery {
        fn method(&self) -> Method {
            Method::Post
        }
        fn path(&self) -> Cow<'_, str> {
            "/api/products".into()
        }
        fn body(&self) -> Option<serde_json::Value> {
            serde_json::to_value(&self.draft).ok()
        }
    }

    pub struct UpdateProductQuery {
        id: ProductId,
        draft: ProductDraft,
    }
    impl UpdateProductQuery {
        pub fn new<T: Into<ProductId>>(id: T, draft: ProductDraft) -> Self {
            Self {
                id: id.into(),
                draft,
            }
        }
    }
    impl Query for UpdateProductQuery {
        fn method(&self) -> Method {
            Method::Put
        }
        fn path(&self) -> Cow<'_, str> {
            format!("/api/products/{}", self.id).into()
        }
        fn body(&self) -> Option<serde_json::Value> {
            serde_json::to_value(&self.draft).ok()
        }
    }

    pub struct DeleteProductQuery {
        id: ProductId,
    }
    impl DeleteProductQuery {
        pub fn new<T: Into<ProductId>>(id: T) -> Self {
            Self { id: id.into() }
        }
    }
    impl Query for DeleteProductQuery {
        fn method(&self) -> Method {
            Method::Delete
        }
        fn path(&self) -> Cow<'_, str> {
            format!("/api/products/{}", self.id).into()
        }
    }

    /// `DELETE /api/products` with an `ids` body - removes several products
    /// in one call.
    pub struct BulkDeleteProductsQuery {
        ids: Vec<ProductId>,
    }
    impl BulkDeleteProductsQuery {
        pub fn new(ids: Vec<ProductId>) -> Self {
            Self { ids }
        }
    }
    impl Query for BulkDeleteProductsQuery {
        fn method(&self) -> Method {
            Method::Delete
        }
        fn path(&self) -> Cow<'_, str> {
            "/api/products".into()
        }
        fn body(&self) -> Option<serde_json::Value> {
            Some(json!({ "ids": self.ids }))
        }
    }
}

pub mod category {
    use super::{Method, Query};
    use crate::common::CategoryId;
    use serde_json::json;
    use std::borrow::Cow;

    pub struct GetCategoriesQuery;
    impl Query for GetCategoriesQuery {
        fn method(&self) -> Method {
            Method::Get
        }
        fn path(&self) -> Cow<'_, str> {
            "/api/category".into()
        }
    }

    pub struct CreateCategoryQuery {
        name: String,
    }
    impl CreateCategoryQuery {
        pub fn new<S: Into<String>>(name: S) -> Self {
            Self { name: name.into() }
        }
    }
    impl Query for CreateCategoryQuery {
        fn method(&self) -> Method {
            Method::Post
        }
        fn path(&self) -> Cow<'_, str> {
            "/api/category".into()
        }
        fn body(&self) -> Option<serde_json::Value> {
            Some(json!({ "name": self.name }))
        }
    }

    pub struct UpdateCategoryQuery {
        id: CategoryId,
        name: String,
    }
    impl UpdateCategoryQuery {
        pub fn new<T: Into<CategoryId>, S: Into<String>>(id: T, name: S) -> Self {
            Self {
                id: id.into(),
                name: name.into(),
            }
        }
    }
    impl Query for UpdateCategoryQuery {
        fn method(&self) -> Method {
            Method::Put
        }
        fn path(&self) -> Cow<'_, str> {
            format!("/api/category/{}", self.id).into()
        }
        fn body(&self) -> Option<serde_json::Value> {
            Some(json!({ "name": self.name }))
        }
    }

    pub struct DeleteCategoryQuery {
        id: CategoryId,
    }
    impl DeleteCategoryQuery {
        pub fn new<T: Into<CategoryId>>(id: T) -> Self {
            Self { id: id.into() }
        }
    }
    impl Query for DeleteCategoryQuery {
        fn method(&self) -> Method {
            Method::Delete
        }
        fn path(&self) -> Cow<'_, str> {
            format!("/api/category/{}", self.id).into()
        }
    }
}

pub mod users {
    use super::{Method, Query};
    use crate::common::UserId;
    use std::borrow::Cow;

    pub struct GetUsersQuery;
    impl Query for GetUsersQuery {
        fn method(&self) -> Method {
            Method::Get
        }
        fn path(&self) -> Cow<'_, str> {
            "/api/users".into()
        }
    }

    pub struct GetUserQuery {
        id: UserId,
    }
    impl GetUserQuery {
        pub fn new<T: Into<UserId>>(id: T) -> Self {
            Self { id: id.into() }
        }
    }
    impl Query for GetUserQuery {
        fn method(&self) -> Method {
            Method::Get
        }
        fn path(&self) -> Cow<'_, str> {
            format!("/api/users/{}", self.id).into()
        }
    }
}

pub mod orders {
    use super::{Method, Query};
    use crate::common::UserId;
    use std::borrow::Cow;

    pub struct GetOrdersQuery;
    impl Query for GetOrdersQuery {
        fn method(&self) -> Method {
            Method::Get
        }
        fn path(&self) -> Cow<'_, str> {
            "/api/orders".into()
        }
    }

    pub struct GetUserOrdersQuery {
        user_id: UserId,
    }
    impl GetUserOrdersQuery {
        pub fn new<T: Into<UserId>>(user_id: T) -> Self {
            Self {
                user_id: user_id.into(),
            }
        }
    }
    impl Query for GetUserOrdersQuery {
        fn method(&self) -> Method {
            Method::Get
        }
        fn path(&self) -> Cow<'_, str> {
            format!("/api/orders/{}", self.user_id).into()
        }
    }
}

pub mod search {
    use super::{Method, Query};
    use std::borrow::Cow;

    /// `GET /api/search?query=` - free-text match over products. The backend
    /// returns an unpaginated match set; callers enforce the two character
    /// minimum before issuing this query.
    pub struct SearchQuery {
        query: String,
    }
    impl SearchQuery {
        pub fn new<S: Into<String>>(query: S) -> Self {
            Self {
                query: query.into(),
            }
        }
    }
    impl Query for SearchQuery {
        fn method(&self) -> Method {
            Method::Get
        }
        fn path(&self) -> Cow<'_, str> {
            "/api/search".into()
        }
        fn params(&self) -> Vec<(&'static str, Cow<'_, str>)> {
            vec![("query", Cow::Borrowed(&self.query))]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_query_builds_paged_params() {
        let query = GetProductsQuery::new(2, 7).with_category("c9");
        assert_eq!(query.method(), Method::Get);
        assert_eq!(query.path(), "/api/products");
        let params = query.params();
        assert_eq!(params[0], ("page", "2".into()));
        assert_eq!(params[1], ("limit", "7".into()));
        assert_eq!(params[2], ("category", "c9".into()));
    }

    #[test]
    fn bulk_delete_carries_ids_in_body() {
        let query = BulkDeleteProductsQuery::new(vec!["p1".into(), "p2".into()]);
        assert_eq!(query.method(), Method::Delete);
        assert_eq!(query.path(), "/api/products");
        assert_eq!(
            query.body().unwrap(),
            serde_json::json!({ "ids": ["p1", "p2"] })
        );
    }

    #[test]
    fn per_user_orders_targets_user_path() {
        let query = GetUserOrdersQuery::new("u7");
        assert_eq!(query.path(), "/api/orders/u7");
        assert!(query.params().is_empty());
    }

    #[test]
    fn search_query_param_is_verbatim() {
        let query = SearchQuery::new("ab");
        assert_eq!(query.path(), "/api/search");
        assert_eq!(query.params(), vec![("query", "ab".into())]);
    }
}
