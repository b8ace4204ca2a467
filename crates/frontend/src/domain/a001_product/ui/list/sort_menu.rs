use contracts::shared::list_query::SortOption;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::state::ProductListState;
use crate::shared::icons::icon;

/// Кнопка сортировки с выпадающим меню.
///
/// A mousedown anywhere outside the menu closes it. The window listener is
/// removed when the component unmounts.
#[component]
pub fn SortMenu(state: RwSignal<ProductListState>, on_select: Callback<SortOption>) -> impl IntoView {
    let container_ref = NodeRef::<Div>::new();

    let handle = window_event_listener(leptos::ev::mousedown, move |ev: leptos::ev::MouseEvent| {
        if !state.with_untracked(|s| s.sort_menu_open) {
            return;
        }
        let Some(container) = container_ref.get_untracked() else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !container.contains(target.as_ref()) {
            state.update(|s| s.close_sort_menu());
        }
    });
    let handle = StoredValue::new_local(Some(handle));
    on_cleanup(move || {
        if let Some(Some(handle)) = handle.try_update_value(|h| h.take()) {
            handle.remove();
        }
    });

    let active = move || state.with(|s| s.query.sort_option());

    view! {
        <div class="sort-menu" node_ref=container_ref>
            <button
                class="pill-button sort-menu__toggle"
                on:click=move |_| state.update(|s| s.toggle_sort_menu())
            >
                <span>{move || state.with(|s| s.sort_label())}</span>
                {icon("chevron-down")}
            </button>
            <Show when=move || state.with(|s| s.sort_menu_open)>
                <div class="sort-menu__dropdown">
                    {SortOption::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class="sort-menu__item"
                                    class:sort-menu__item--active=move || active() == option
                                    on:click=move |_| on_select.run(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
