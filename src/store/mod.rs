//! Persistence
//!
//! - **kv**: the `KeyValueStore` trait with in-memory and file backends
//! - **repository**: loads and saves the food list under a fixed key
//! - **error**: error types
//!
//! ```text
//!   FoodRepository ──get/set/delete──▶ KeyValueStore
//!                                        ├─ MemoryStore
//!                                        ├─ FileStore
//!                                        └─ (browser) LocalStorageStore
//! ```

pub mod error;
pub mod kv;
pub mod repository;

pub use error::{StoreError, StoreResult};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use repository::{FoodRepository, FOODS_KEY};
