//! Food List Component

use leptos::*;
use nutrition_tracker::tracker::Action;

use crate::state::use_global_state;

/// Entry table with per-row Edit and a Clear All action
#[component]
pub fn FoodTable() -> impl IntoView {
    let state = use_global_state();
    let app = state.app;

    let state_for_clear = state.clone();
    let on_clear = move |_| state_for_clear.dispatch(Action::ClearAll);

    view! {
        <div class="flex justify-between items-center mb-4">
            <h2 class="text-2xl font-semibold">"Food List"</h2>
            <button
                on:click=on_clear
                class="bg-red-500 text-white px-4 py-2 rounded hover:bg-red-600"
            >
                "Clear All"
            </button>
        </div>

        <div class="overflow-x-auto mb-6">
            <table class="w-full text-left border-collapse">
                <thead>
                    <tr class="bg-gray-200">
                        <th class="p-2 border">"Food"</th>
                        <th class="p-2 border">"Calories"</th>
                        <th class="p-2 border">"Proteins"</th>
                        <th class="p-2 border">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    // Rows are rebuilt on every change; an update keeps the
                    // entry id, so keyed diffing would miss new totals
                    {move || {
                        app.with(|s| s.foods.clone())
                            .into_iter()
                            .enumerate()
                            .map(|(index, food)| {
                                let state = state.clone();
                                view! {
                                    <tr class="border-t">
                                        <td class="p-2 border">{food.name}</td>
                                        <td class="p-2 border">{format!("{:.2}", food.total_calories)}</td>
                                        <td class="p-2 border">{format!("{:.2}", food.total_proteins)}</td>
                                        <td class="p-2 border">
                                            <button
                                                on:click=move |_| state.dispatch(Action::Edit(index))
                                                class="text-blue-500 hover:underline"
                                            >
                                                "Edit"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
