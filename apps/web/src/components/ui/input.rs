//! Labelled form input bound to a string signal, with an inline error line
//! under the field.

use leptos::prelude::*;

const INPUT_CLASS: &str = "bg-gray-50 border text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let has_error = move || error.with(Option::is_some);
    let input_class = move || {
        if has_error() {
            format!("{INPUT_CLASS} border-red-500 dark:border-red-400")
        } else {
            format!("{INPUT_CLASS} border-gray-300 dark:border-gray-600")
        }
    };
    let error_id = format!("{id}-error");
    let described_by = error_id.clone();

    view! {
        <div class="mb-5">
            <label
                class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                for=id
            >
                {label}
            </label>
            <input
                id=id
                name=id
                type=input_type.unwrap_or("text")
                class=input_class
                placeholder=placeholder.unwrap_or_default()
                autocomplete=autocomplete.unwrap_or("off")
                aria-invalid=move || has_error().to_string()
                aria-describedby=described_by
                prop:value=move || value.get()
                on:input=move |event| value.set(event_target_value(&event))
            />
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <p id=error_id.clone() class="mt-2 text-sm text-red-600 dark:text-red-400">
                                {message}
                            </p>
                        }
                    })
            }}
        </div>
    }
}
