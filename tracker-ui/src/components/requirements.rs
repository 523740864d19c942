//! Daily Requirement Panel

use leptos::*;
use nutrition_tracker::tracker::{display_number, Field};

use super::FieldInput;
use crate::state::use_global_state;

/// Calorie and protein target inputs
#[component]
pub fn RequirementsPanel() -> impl IntoView {
    let state = use_global_state();

    // Uncontrolled: echoing the parsed number back would fight partial input like "1."
    let initial = state.app.with_untracked(|s| s.requirements);

    view! {
        <div class="bg-white p-6 rounded-xl shadow-md w-full max-w-md space-y-4 mb-6">
            <h2 class="text-xl font-semibold">"Daily Requirement"</h2>
            <FieldInput
                field=Field::CalorieReq
                input_type="number"
                placeholder="Calorie Requirement"
                initial=display_number(initial.calorie_req)
            />
            <FieldInput
                field=Field::ProteinReq
                input_type="number"
                placeholder="Protein Requirement"
                initial=display_number(initial.protein_req)
            />
        </div>
    }
}
