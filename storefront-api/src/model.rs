//! Wire models for the storefront backend.
//!
//! Field names follow the backend's JSON (Mongo-style `_id`, camelCase
//! elsewhere). Models are immutable snapshots; the backend owns the data.
use crate::common::{CategoryId, OrderId, ProductId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: Vec<Category>,
}

impl Product {
    /// The price shown to customers: the discount price when one is set.
    pub fn display_price(&self) -> f64 {
        self.discount_price.unwrap_or(self.price)
    }
    /// The struck-through price, present only when a discount applies.
    pub fn old_price(&self) -> Option<f64> {
        self.discount_price.map(|_| self.price)
    }
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.category.iter().map(|c| c.name.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: CategoryId,
    pub name: String,
}

/// One page of the products collection, as returned by `GET /api/products`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default = "default_page")]
    pub total_pages: usize,
    #[serde(default = "default_page")]
    pub current_page: usize,
}

fn default_page() -> usize {
    1
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl User {
    /// Full name when set, otherwise first and last name joined.
    pub fn display_name(&self) -> String {
        if let Some(full_name) = &self.full_name {
            return full_name.clone();
        }
        let first = self.first_name.as_deref().unwrap_or_default();
        let last = self.last_name.as_deref().unwrap_or_default();
        format!("{first} {last}").trim().to_owned()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,
    pub created_at: DateTime<Utc>,
    pub total_amount: f64,
    pub shipping_address: ShippingAddress,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub name: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// The backend populates the product reference inline.
    #[serde(rename = "productId")]
    pub product: ProductRef,
    pub quantity: u32,
    pub price: f64,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub customization_options: Vec<CustomizationOption>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProductRef {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationOption {
    pub position: String,
    pub customization_size: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Client-side payload for creating or updating a product.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<CategoryId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_page_deserializes_with_missing_fields() {
        let page: ProductPage = serde_json::from_str("{}").unwrap();
        assert!(page.products.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn product_price_helpers_follow_discount() {
        let product: Product = serde_json::from_str(
            r#"{"_id":"p1","name":"Abacus","price":30.0,"discountPrice":24.5,
                "images":["a.jpg"],"category":[{"_id":"c1","name":"toys"}]}"#,
        )
        .unwrap();
        assert_eq!(product.display_price(), 24.5);
        assert_eq!(product.old_price(), Some(30.0));
        assert_eq!(product.category_names().collect::<Vec<_>>(), vec!["toys"]);
    }

    #[test]
    fn user_display_name_falls_back_to_name_parts() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u1","email":"a@b.c","firstName":"Ada","lastName":"Lovelace"}"#,
        )
        .unwrap();
        assert_eq!(user.display_name(), "Ada Lovelace");
        let user: User = serde_json::from_str(
            r#"{"_id":"u2","email":"a@b.c","fullName":"Grace Hopper","firstName":"G"}"#,
        )
        .unwrap();
        assert_eq!(user.display_name(), "Grace Hopper");
        let user: User = serde_json::from_str(r#"{"_id":"u3","email":"a@b.c"}"#).unwrap();
        assert_eq!(user.display_name(), "");
    }

    #[test]
    fn order_deserializes_populated_product_refs() {
        let order: Order = serde_json::from_str(
            r#"{
                "_id":"o1",
                "createdAt":"2024-11-02T10:15:00Z",
                "totalAmount":59.9,
                "shippingAddress":{"name":"A","street":"1 Rue","city":"Lyon","postalCode":"69000"},
                "items":[{
                    "productId":{"_id":"p1","name":"Abacus"},
                    "quantity":2,
                    "price":29.95,
                    "color":"red",
                    "size":"M",
                    "customizationOptions":[{"position":"front","customizationSize":"A4"}]
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].product.name, "Abacus");
        assert_eq!(order.items[0].customization_options[0].position, "front");
    }
}
