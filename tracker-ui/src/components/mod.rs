//! UI Components
//!
//! Leptos components for the tracker page.

pub mod chart;
pub mod entry_form;
pub mod field_input;
pub mod food_table;
pub mod requirements;
pub mod toast;

pub use chart::IntakeChart;
pub use entry_form::EntryForm;
pub use field_input::FieldInput;
pub use food_table::FoodTable;
pub use requirements::RequirementsPanel;
pub use toast::Toast;
