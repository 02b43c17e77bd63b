mod product;
mod user;

use chrono::{TimeZone, Utc};

pub use product::*;
pub use user::*;

use crate::Timestamp;

/// Midnight UTC of a seed table date.
fn seed_date(fallback: Timestamp, year: i32, month: u32, day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or(fallback)
}
