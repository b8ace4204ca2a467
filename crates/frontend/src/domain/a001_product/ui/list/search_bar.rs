use leptos::html::Input;
use leptos::prelude::*;

use super::state::ProductListState;
use crate::shared::icons::icon;

/// Поле поиска: Enter отправляет, крестик очищает текст
#[component]
pub fn SearchBar(state: RwSignal<ProductListState>, on_submit: Callback<String>) -> impl IntoView {
    let input_ref = NodeRef::<Input>::new();
    let input_text = move || state.with(|s| s.input_text.clone());
    let has_text = move || state.with(|s| !s.input_text.is_empty());

    let submit = move || {
        // Убираем фокус, чтобы на мобильных закрылась клавиатура
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.blur();
        }
        on_submit.run(state.with_untracked(|s| s.input_text.clone()));
    };

    view! {
        <div class="search-bar">
            <span class="search-bar__icon">{icon("search")}</span>
            <input
                node_ref=input_ref
                type="search"
                placeholder="Search"
                class="search-bar__input"
                prop:value=input_text
                on:input=move |ev| state.update(|s| s.set_input_text(event_target_value(&ev)))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit();
                    }
                }
            />
            <Show when=has_text>
                <button
                    class="search-bar__clear"
                    title="Clear"
                    on:click=move |_| state.update(|s| s.clear_input())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
