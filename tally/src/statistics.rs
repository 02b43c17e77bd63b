use chrono::NaiveDate;
use serde::Serialize;

use crate::{Gender, Product, Record, Timestamp, User};

/// Dashboard counters derived from the two collections. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_users: usize,
    pub total_products: usize,
    pub new_users_today: usize,
    pub new_products_today: usize,
    pub male_users: usize,
    pub female_users: usize,
}

impl Statistics {
    /// Counts over the given collections. "Today" is the UTC calendar date of `now`.
    pub fn compute(users: &[User], products: &[Product], now: Timestamp) -> Self {
        let today = now.date_naive();

        Statistics {
            total_users: users.len(),
            total_products: products.len(),
            new_users_today: created_on(users, today),
            new_products_today: created_on(products, today),
            male_users: users.iter().filter(|u| u.gender == Gender::Male).count(),
            female_users: users.iter().filter(|u| u.gender == Gender::Female).count(),
        }
    }
}

fn created_on<R: Record>(records: &[R], day: NaiveDate) -> usize {
    records
        .iter()
        .filter(|record| record.created_at().date_naive() == day)
        .count()
}

/// The `limit` most recently created records, newest first.
///
/// The sort is stable, so records with the exact same timestamp keep their
/// storage order; callers should treat that order as unspecified.
pub fn most_recent<R: Record>(mut records: Vec<R>, limit: usize) -> Vec<R> {
    records.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    records.truncate(limit);
    records
}
