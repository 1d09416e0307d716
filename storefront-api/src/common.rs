//! Identifier newtypes shared across queries and models.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

macro_rules! impl_id {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new<S: Into<String>>(raw: S) -> Self {
                Self(raw.into())
            }
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                Display::fmt(&self.0, f)
            }
        }
        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }
    };
}

impl_id!(ProductId, "Unique identifier for a product.");
impl_id!(CategoryId, "Unique identifier for a category.");
impl_id!(UserId, "Unique identifier for a user.");
impl_id!(OrderId, "Unique identifier for an order.");

/// Returned by mutating endpoints that provide no entity in the response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiSuccess;
