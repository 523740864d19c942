//! A tracker session: reducer state wired to a persisted food list

use crate::store::{FoodRepository, KeyValueStore, StoreResult};

use super::aggregate::{build_chart, ChartModel, Nutrient};
use super::error::{TrackerError, TrackerResult};
use super::state::{reduce, Action, AppState, Effect};
use super::types::{Field, FoodEntry, Requirements};

/// Owns the application state and runs each transition's persistence effect
#[derive(Debug)]
pub struct Session<S> {
    state: AppState,
    repo: FoodRepository<S>,
}

impl<S: KeyValueStore> Session<S> {
    /// Start a session, loading whatever list the store holds
    pub fn open(store: S, requirements: Requirements) -> Self {
        Self::with_repository(FoodRepository::new(store), requirements)
    }

    pub fn with_repository(repo: FoodRepository<S>, requirements: Requirements) -> Self {
        let foods = repo.load();
        Self {
            state: AppState::new(requirements, foods),
            repo,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn foods(&self) -> &[FoodEntry] {
        &self.state.foods
    }

    pub fn repository(&self) -> &FoodRepository<S> {
        &self.repo
    }

    /// Apply an action and run its effect
    ///
    /// The new state is kept even when the write fails; the error is returned
    /// so the front end can report it.
    pub fn dispatch(&mut self, action: Action) -> StoreResult<Effect> {
        let state = std::mem::take(&mut self.state);
        let transition = reduce(state, action);
        self.state = transition.state;

        let result = run_effect(&self.repo, transition.effect, &self.state.foods);
        if let Err(e) = &result {
            tracing::warn!("Failed to persist {:?}: {}", transition.effect, e);
        }
        result.map(|()| transition.effect)
    }

    /// Route a named input change
    pub fn change_field(&mut self, name: &str, value: impl Into<String>) -> TrackerResult<()> {
        let field: Field = name.parse()?;
        self.dispatch(Action::FieldChanged {
            field,
            value: value.into(),
        })?;
        Ok(())
    }

    /// Load the entry at 1-based `row` into the form
    pub fn edit_row(&mut self, row: usize) -> TrackerResult<()> {
        let len = self.state.foods.len();
        if row == 0 || row > len {
            return Err(TrackerError::NoSuchEntry { row, len });
        }
        self.dispatch(Action::Edit(row - 1))?;
        Ok(())
    }

    pub fn chart(&self, nutrient: Nutrient) -> ChartModel {
        build_chart(&self.state.foods, &self.state.requirements, nutrient)
    }
}

/// Carry out the persistence side of a transition
pub fn run_effect<S: KeyValueStore>(
    repo: &FoodRepository<S>,
    effect: Effect,
    foods: &[FoodEntry],
) -> StoreResult<()> {
    match effect {
        Effect::None => Ok(()),
        Effect::SaveFoods => repo.save(foods),
        Effect::PurgeStore => repo.clear(),
    }
}
