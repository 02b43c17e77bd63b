//! Client-side search, filters and sorting over listed collections.
//!
//! These never touch the store: list a collection, then narrow it down for display.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{Category, Gender, Product, ProductStatus, Role, User, UserStatus};

/// Search and equality filters for the user table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFilter {
    /// Case-insensitive substring of the name or the email.
    pub search: String,
    pub gender: Option<Gender>,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = user.name.to_lowercase().contains(&needle)
            || user.email.to_lowercase().contains(&needle);

        matches_search
            && self.gender.is_none_or(|gender| user.gender == gender)
            && self.role.is_none_or(|role| user.role == role)
            && self.status.is_none_or(|status| user.status == status)
    }

    /// Keeps the matching users, in their original order.
    pub fn apply(&self, users: Vec<User>) -> Vec<User> {
        users.into_iter().filter(|user| self.matches(user)).collect()
    }
}

/// Sort orders offered on the product tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProductSort {
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
    NameAsc,
    NameDesc,
}

impl ProductSort {
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            ProductSort::Newest => b.date_added.cmp(&a.date_added),
            ProductSort::Oldest => a.date_added.cmp(&b.date_added),
            ProductSort::PriceLow => a.price.total_cmp(&b.price),
            ProductSort::PriceHigh => b.price.total_cmp(&a.price),
            ProductSort::NameAsc => compare_names(&a.name, &b.name),
            ProductSort::NameDesc => compare_names(&b.name, &a.name),
        }
    }
}

// Case-insensitive first, so "apple" sorts next to "Apple" rather than after "Zebra".
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Search, equality filters and an optional sort for the product tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFilter {
    /// Case-insensitive substring of the product name.
    pub search: String,
    pub category: Option<Category>,
    pub status: Option<ProductStatus>,
    pub sort: Option<ProductSort>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        product
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
            && self.category.is_none_or(|category| product.category == category)
            && self.status.is_none_or(|status| product.status == status)
    }

    /// Keeps the matching products, then sorts them if a sort is set.
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let mut matching = products
            .into_iter()
            .filter(|product| self.matches(product))
            .collect::<Vec<_>>();

        if let Some(sort) = self.sort {
            matching.sort_by(|a, b| sort.compare(a, b));
        }
        matching
    }
}
