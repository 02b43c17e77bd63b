use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::seed_date;
use crate::{Record, RecordId, Seeded, Timestamp};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Electronics,
    Clothing,
    Food,
    Books,
    Toys,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr, EnumIter,
)]
pub enum ProductStatus {
    #[serde(rename = "available")]
    #[strum(serialize = "available")]
    Available,
    #[serde(rename = "out of stock")]
    #[strum(serialize = "out of stock")]
    OutOfStock,
}

impl ProductStatus {
    /// Default status for a stock level. Callers may still set either status explicitly.
    pub fn for_stock(stock: u32) -> Self {
        if stock == 0 {
            ProductStatus::OutOfStock
        } else {
            ProductStatus::Available
        }
    }
}

/// An item in the catalogue.
#[derive(Record, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[collection("products")]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[key]
    pub id: RecordId,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
    pub description: Option<String>,
    #[created]
    pub date_added: Timestamp,
}

impl ProductDraft {
    /// A draft with the status derived from `stock` and no description.
    pub fn new(name: impl Into<String>, category: Category, price: f64, stock: u32) -> Self {
        ProductDraft {
            name: name.into(),
            category,
            price,
            stock,
            status: ProductStatus::for_stock(stock),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

type SeedProduct = (
    &'static str,
    Category,
    f64,
    u32,
    &'static str,
    Option<(i32, u32, u32)>,
);

// A missing date means "added today". Status follows stock for every seed entry.
const SEED_PRODUCTS: [SeedProduct; 10] = [
    ("Laptop Pro X1", Category::Electronics, 15_000_000.0, 25, "High-performance laptop with latest Intel processor", Some((2024, 1, 10))),
    ("Wireless Mouse", Category::Electronics, 350_000.0, 150, "Ergonomic wireless mouse with long battery life", Some((2024, 2, 15))),
    ("Cotton T-Shirt", Category::Clothing, 150_000.0, 200, "Premium quality cotton t-shirt in various colors", Some((2024, 3, 20))),
    ("Gaming Keyboard", Category::Electronics, 1_200_000.0, 0, "RGB mechanical gaming keyboard", Some((2024, 4, 5))),
    ("Coffee Beans 1kg", Category::Food, 180_000.0, 80, "Premium arabica coffee beans from Java", Some((2024, 5, 12))),
    ("Web Development Book", Category::Books, 250_000.0, 45, "Complete guide to modern web development", Some((2024, 6, 18))),
    ("Denim Jeans", Category::Clothing, 450_000.0, 75, "Classic fit denim jeans for everyday wear", Some((2024, 7, 22))),
    ("LED Monitor 24\"", Category::Electronics, 2_500_000.0, 30, "Full HD LED monitor with IPS panel", Some((2024, 8, 14))),
    ("Educational Toy Set", Category::Toys, 320_000.0, 0, "Interactive learning toy for children", Some((2024, 9, 8))),
    ("Smartphone Case", Category::Electronics, 120_000.0, 300, "Protective case for smartphones", None),
];

impl Seeded for Product {
    fn seed(now: Timestamp) -> Vec<Self> {
        SEED_PRODUCTS
            .iter()
            .zip(1..)
            .map(|(&(name, category, price, stock, description, date), id)| {
                Product::from_draft(
                    RecordId(id),
                    date.map_or(now, |(y, m, d)| seed_date(now, y, m, d)),
                    ProductDraft::new(name, category, price, stock).with_description(description),
                )
            })
            .collect()
    }
}
