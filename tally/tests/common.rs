#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use tally::{
    Category, CsvCodec, FixedClock, Gender, MemoryPersistence, ProductDraft, Role, Store,
    Timestamp, UserDraft, UserStatus,
};

pub type TestStore = Store<MemoryPersistence, CsvCodec, FixedClock>;

pub fn noon() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).unwrap()
}

pub fn store() -> TestStore {
    Store::new(MemoryPersistence::new()).with_clock(FixedClock::new(noon()))
}

pub fn ann() -> UserDraft {
    UserDraft {
        name: "Ann Lee".into(),
        email: "ann@example.com".into(),
        gender: Gender::Female,
        role: Role::User,
        status: UserStatus::Active,
    }
}

pub fn user(name: &str, gender: Gender) -> UserDraft {
    UserDraft {
        name: name.into(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        gender,
        role: Role::User,
        status: UserStatus::Active,
    }
}

pub fn lamp() -> ProductDraft {
    ProductDraft::new("Desk Lamp", Category::Electronics, 210_000.0, 12)
        .with_description("Adjustable LED desk lamp")
}
