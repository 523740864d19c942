//! Global Application State
//!
//! The tracker's `AppState` in a signal, advanced only through the reducer.

use leptos::*;
use nutrition_tracker::store::FoodRepository;
use nutrition_tracker::tracker::{
    build_chart, reduce, run_effect, Action, AppState, ChartModel, Field, Nutrient, Requirements,
    Transition,
};

use crate::storage::LocalStorageStore;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Requirements, form draft, food list and edit cursor
    pub app: RwSignal<AppState>,
    /// Persisted food list
    pub repo: FoodRepository<LocalStorageStore>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree, loading the stored list
pub fn provide_global_state() {
    let repo = FoodRepository::new(LocalStorageStore);
    let foods = repo.load();

    let state = GlobalState {
        app: create_rw_signal(AppState::new(Requirements::default(), foods)),
        repo,
        error: create_rw_signal(None),
    };

    provide_context(state);
}

pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Run an action through the reducer, then persist
    pub fn dispatch(&self, action: Action) {
        let current = self.app.get_untracked();
        let Transition { state, effect } = reduce(current, action);

        if let Err(e) = run_effect(&self.repo, effect, &state.foods) {
            web_sys::console::warn_1(&format!("[tracker] {:?} failed: {}", effect, e).into());
            self.show_error(&format!("Could not save: {}", e));
        }

        self.app.set(state);
    }

    /// Route an input change by field
    pub fn change(&self, field: Field, value: String) {
        self.dispatch(Action::FieldChanged { field, value });
    }

    /// Chart model for one nutrient, tracked
    pub fn chart(&self, nutrient: Nutrient) -> ChartModel {
        self.app
            .with(|s| build_chart(&s.foods, &s.requirements, nutrient))
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }
}
