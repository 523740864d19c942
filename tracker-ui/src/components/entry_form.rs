//! Entry Form Component
//!
//! Form for adding a food or rewriting the one being edited.

use leptos::*;
use nutrition_tracker::tracker::{Action, AppState, Field, FormDraft};

use super::FieldInput;
use crate::state::use_global_state;

/// Four-field entry form with submit and reset
#[component]
pub fn EntryForm() -> impl IntoView {
    let state = use_global_state();
    let app = state.app;

    let state_for_submit = state.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state_for_submit.dispatch(Action::Submit);
    };

    let state_for_reset = state;
    let on_reset = move |_| state_for_reset.dispatch(Action::Reset);

    view! {
        <form
            on:submit=on_submit
            class="bg-white p-6 rounded-xl shadow-md w-full max-w-md space-y-4"
        >
            <FieldInput
                field=Field::Name
                input_type="text"
                placeholder="Food Name"
                value=draft_signal(app, |d| &d.name)
            />
            <FieldInput
                field=Field::Amount
                input_type="number"
                placeholder="Amount (gms)"
                value=draft_signal(app, |d| &d.amount)
            />
            <FieldInput
                field=Field::CaloriesPerGm
                input_type="number"
                placeholder="Calories per gm"
                value=draft_signal(app, |d| &d.calories_per_gm)
            />
            <FieldInput
                field=Field::ProteinsPerGm
                input_type="number"
                placeholder="Proteins per gm"
                value=draft_signal(app, |d| &d.proteins_per_gm)
            />

            <div class="flex gap-2">
                <button
                    type="submit"
                    class="flex-1 bg-blue-600 text-white py-2 rounded hover:bg-blue-700"
                >
                    {move || app.with(|s| s.submit_label())}
                </button>
                <button
                    type="button"
                    on:click=on_reset
                    class="flex-1 bg-gray-300 text-gray-800 py-2 rounded hover:bg-gray-400"
                >
                    "Reset"
                </button>
            </div>
        </form>
    }
}

/// One draft field as a derived signal
fn draft_signal(app: RwSignal<AppState>, pick: fn(&FormDraft) -> &String) -> Signal<String> {
    Signal::derive(move || app.with(|s| pick(&s.draft).clone()))
}
