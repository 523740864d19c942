//! # Nutrition Tracker
//!
//! Daily calorie and protein tracking. Food entries are recorded against
//! daily targets and their totals are shown as stacked bar charts next to a
//! requirement line.
//!
//! ## Modules
//!
//! - [`tracker`]: data model, reducer, chart aggregation, sessions
//! - [`store`]: key-value persistence of the food list
//! - [`render`]: plain-text table and chart rendering
//! - `config`: TOML/env configuration (feature `cli`)
//!
//! ## Quick Start
//!
//! ```rust
//! use nutrition_tracker::store::MemoryStore;
//! use nutrition_tracker::tracker::{Action, Nutrient, Requirements, Session};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = Session::open(MemoryStore::new(), Requirements::default());
//!
//! session.change_field("name", "Rice")?;
//! session.change_field("amount", "150")?;
//! session.change_field("caloriesPerGm", "1.3")?;
//! session.change_field("proteinsPerGm", "0.027")?;
//! session.dispatch(Action::Submit)?;
//!
//! let chart = session.chart(Nutrient::Calories);
//! assert_eq!(chart.upper_bound, 2000.0);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "cli")]
pub mod config;
pub mod render;
pub mod store;
pub mod tracker;

// Re-export top-level types for convenience
pub use store::{
    FileStore, FoodRepository, KeyValueStore, MemoryStore, StoreError, StoreResult, FOODS_KEY,
};

pub use tracker::{
    build_chart, build_series, reduce, Action, AppState, ChartModel, Effect, Field, FoodEntry,
    FormDraft, Mode, Nutrient, Requirements, SeriesRow, Session, TrackerError, TrackerResult,
};

#[cfg(feature = "cli")]
pub use config::{Config, ConfigError, LoggingConfig, RequirementsConfig, StorageConfig};
