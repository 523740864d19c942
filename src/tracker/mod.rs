//! Tracker core
//!
//! - **types**: requirements, food entries, the form draft, field names
//! - **parse**: lenient number parsing for form text
//! - **state**: application state and the reducer
//! - **aggregate**: single-row stacked-bar series per nutrient
//! - **session**: reducer plus persistence, for front ends
//! - **error**: error types
//!
//! # Flow
//!
//! ```text
//!   input ─▶ Action ─▶ reduce(state) ─▶ (state', Effect)
//!                                          │       │
//!                      build_chart ◀───────┘       └─▶ FoodRepository
//! ```

pub mod aggregate;
pub mod error;
pub mod parse;
pub mod session;
pub mod state;
pub mod types;

pub use aggregate::{
    axis_upper_bound, build_chart, build_series, color_for, ChartModel, Nutrient, Segment,
    SeriesRow, PALETTE,
};
pub use error::{TrackerError, TrackerResult};
pub use parse::{display_number, parse_number};
pub use session::{run_effect, Session};
pub use state::{reduce, Action, AppState, Effect, Mode, Transition};
pub use types::{Field, FoodEntry, FormDraft, Requirements};
