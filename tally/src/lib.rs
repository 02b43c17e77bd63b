//! # Tally
//!
//! An embeddable record store for admin dashboards. It keeps typed collections
//! (users and products out of the box) in any key-value persistence backend, one
//! encoded payload per collection.
//!
//! ## Features
//!
//! - Pluggable persistence backends through the [`Persistence`] trait
//! - Store-issued ids from a persisted sequence; never reused after deletion
//! - Partial updates through generated patch types
//! - Seed tables, dashboard statistics and "recent" views
//! - Client-side filters and form validation for the dashboard pages
//!
//! ```
//! use tally::{Gender, MemoryPersistence, Role, Store, User, UserDraft, UserStatus};
//!
//! let mut store = Store::new(MemoryPersistence::new());
//! let ann = store
//!     .add::<User>(UserDraft {
//!         name: "Ann Lee".into(),
//!         email: "ann@example.com".into(),
//!         gender: Gender::Female,
//!         role: Role::User,
//!         status: UserStatus::Active,
//!     })
//!     .unwrap();
//!
//! assert_eq!(store.get::<User>(ann.id).unwrap(), Some(ann));
//! assert_eq!(store.statistics().unwrap().female_users, 1);
//! ```

// The derive macro refers to this crate by name, including from inside it.
extern crate self as tally;

mod config;
mod errors;
mod impls;
mod manifest;
mod memory;
mod models;
pub mod query;
mod statistics;
mod store;
mod traits;
pub mod validation;

pub use config::StoreConfig;
pub use errors::{CodecError, ConfigError, StoreError};
pub use impls::*;
pub use memory::{MemoryPersistence, MemoryPersistenceError};
pub use models::*;
pub use statistics::Statistics;
pub use store::{Store, StoreResult};
pub use tally_derive::Record;
pub use traits::*;
