use leptos::*;

use crate::core::chain::DatalistOption;

/// Free-text input with suggestions from a `<datalist>`
#[component]
pub fn InputWithDatalist(
    list_id: &'static str,
    #[prop(into)] options: MaybeSignal<Vec<DatalistOption>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <>
            <input
                type="text"
                list=list_id
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            <datalist id=list_id>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| view! { <option value=option.value label=option.label></option> })
                        .collect_view()
                }}
            </datalist>
        </>
    }
}
