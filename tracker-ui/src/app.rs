//! App Root Component
//!
//! Single page: targets, entry form, then the list and charts once there is
//! something to show.

use leptos::*;
use nutrition_tracker::tracker::Nutrient;

use crate::components::{EntryForm, FoodTable, IntakeChart, RequirementsPanel, Toast};
use crate::state::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_global_state();
    let has_entries = create_memo(move |_| state.app.with(|s| !s.foods.is_empty()));

    view! {
        <div class="min-h-screen bg-gray-100 flex flex-col items-center p-6">
            <h1 class="text-3xl font-bold mb-6">"Nutrition Tracker"</h1>

            <RequirementsPanel />

            <EntryForm />

            <Show when=move || has_entries.get()>
                <div class="w-full mt-10 max-w-5xl">
                    <FoodTable />

                    {Nutrient::all()
                        .iter()
                        .map(|&nutrient| view! { <IntakeChart nutrient=nutrient /> })
                        .collect_view()}
                </div>
            </Show>

            // Storage failures
            <Toast />
        </div>
    }
}
