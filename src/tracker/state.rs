//! Application state and the reducer that drives it
//!
//! Every user interaction is an [`Action`]. [`reduce`] consumes the current
//! [`AppState`] and returns the next one together with the persistence
//! [`Effect`] the caller must run. The reducer itself never touches storage.
//!
//! ```text
//!            edit(i)
//!   Idle ──────────────▶ Editing(i)
//!    ▲                      │
//!    └── submit / reset ────┘
//! ```

use uuid::Uuid;

use super::parse::parse_number;
use super::types::{Field, FoodEntry, FormDraft, Requirements};

/// Everything the tracker holds between events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub requirements: Requirements,
    pub draft: FormDraft,
    pub foods: Vec<FoodEntry>,
    /// Index of the entry being edited, if any
    pub edit_cursor: Option<usize>,
}

impl AppState {
    /// Fresh state over an already-loaded food list
    pub fn new(requirements: Requirements, foods: Vec<FoodEntry>) -> Self {
        Self {
            requirements,
            draft: FormDraft::default(),
            foods,
            edit_cursor: None,
        }
    }

    pub fn mode(&self) -> Mode {
        match self.edit_cursor {
            Some(index) => Mode::Editing(index),
            None => Mode::Idle,
        }
    }

    /// Label for the form's submit button
    pub fn submit_label(&self) -> &'static str {
        match self.mode() {
            Mode::Idle => "Add Entry",
            Mode::Editing(_) => "Update Entry",
        }
    }

    fn reset_form(&mut self) {
        self.draft = FormDraft::default();
        self.edit_cursor = None;
    }
}

/// Whether the form is creating a new entry or rewriting an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Editing(usize),
}

/// A user interaction
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// An input changed
    FieldChanged { field: Field, value: String },
    /// Commit the draft as a new or updated entry
    Submit,
    /// Load the entry at this index into the form
    Edit(usize),
    /// Clear the form and leave editing mode
    Reset,
    /// Drop every entry and purge the store
    ClearAll,
}

/// Persistence work the caller must carry out after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Overwrite the stored list with `state.foods`
    SaveFoods,
    /// Delete the stored list
    PurgeStore,
}

/// Result of applying one action
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: AppState,
    pub effect: Effect,
}

impl Transition {
    fn unchanged(state: AppState) -> Self {
        Self {
            state,
            effect: Effect::None,
        }
    }
}

/// Apply `action` to `state`
pub fn reduce(mut state: AppState, action: Action) -> Transition {
    match action {
        Action::FieldChanged { field, value } => {
            apply_field(&mut state, field, value);
            Transition::unchanged(state)
        }

        Action::Submit => {
            if state.draft.is_incomplete() {
                tracing::debug!("Submit ignored: form has empty fields");
                return Transition::unchanged(state);
            }

            match state.edit_cursor.filter(|&i| i < state.foods.len()) {
                Some(index) => {
                    // Updating keeps the entry's identity
                    let id = state.foods[index].id;
                    state.foods[index] = state.draft.to_entry(id);
                    tracing::debug!("Updated entry {} at index {}", id, index);
                }
                None => {
                    let entry = state.draft.to_entry(Uuid::new_v4());
                    tracing::debug!("Added entry {} ({})", entry.id, entry.name);
                    state.foods.push(entry);
                }
            }

            state.reset_form();
            Transition {
                state,
                effect: Effect::SaveFoods,
            }
        }

        Action::Edit(index) => {
            match state.foods.get(index) {
                Some(entry) => {
                    state.draft = FormDraft::from_entry(entry);
                    state.edit_cursor = Some(index);
                }
                None => {
                    tracing::debug!("Edit ignored: no entry at index {}", index);
                }
            }
            Transition::unchanged(state)
        }

        Action::Reset => {
            state.reset_form();
            Transition::unchanged(state)
        }

        Action::ClearAll => {
            state.foods.clear();
            state.reset_form();
            Transition {
                state,
                effect: Effect::PurgeStore,
            }
        }
    }
}

fn apply_field(state: &mut AppState, field: Field, value: String) {
    match field {
        Field::CalorieReq => state.requirements.calorie_req = parse_number(&value),
        Field::ProteinReq => state.requirements.protein_req = parse_number(&value),
        Field::Name => state.draft.name = value,
        Field::Amount => state.draft.amount = value,
        Field::CaloriesPerGm => state.draft.calories_per_gm = value,
        Field::ProteinsPerGm => state.draft.proteins_per_gm = value,
    }
}
