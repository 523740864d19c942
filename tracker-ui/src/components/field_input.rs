//! Field Input Component
//!
//! A named input that reports every keystroke as a field change.

use leptos::*;
use nutrition_tracker::tracker::Field;

use crate::state::use_global_state;

#[component]
pub fn FieldInput(
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
    /// Current text; the input is controlled when this is provided
    #[prop(optional, into)]
    value: Option<Signal<String>>,
    /// Initial text for uncontrolled inputs
    #[prop(optional, into)]
    initial: Option<String>,
) -> impl IntoView {
    let state = use_global_state();
    let class = "w-full p-2 border rounded";

    match value {
        Some(value) => view! {
            <input
                type=input_type
                name=field.as_str()
                placeholder=placeholder
                class=class
                prop:value=move || value.get()
                on:input=move |ev| state.change(field, event_target_value(&ev))
            />
        }.into_view(),
        None => view! {
            <input
                type=input_type
                name=field.as_str()
                placeholder=placeholder
                class=class
                value=initial.unwrap_or_default()
                on:input=move |ev| state.change(field, event_target_value(&ev))
            />
        }.into_view(),
    }
}
