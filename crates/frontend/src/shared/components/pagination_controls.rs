use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - "Previous" / "Next Page" and a page label
///
/// Buttons are hidden, not disabled, when there is nowhere to go.
#[component]
pub fn PaginationControls(
    /// Text under the buttons, e.g. "Page 1 of 3"
    #[prop(into)]
    label: Signal<String>,

    #[prop(into)]
    show_prev: Signal<bool>,

    #[prop(into)]
    show_next: Signal<bool>,

    on_prev: Callback<()>,

    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <div class="pagination__buttons">
                <Show when=move || show_prev.get()>
                    <button class="pill-button" on:click=move |_| on_prev.run(())>
                        <span class="pill-button__icon">{icon("arrow-left")}</span>
                        <span>"Previous"</span>
                    </button>
                </Show>
                <Show when=move || show_next.get()>
                    <button class="pill-button" on:click=move |_| on_next.run(())>
                        <span>"Next Page"</span>
                        <span class="pill-button__icon">{icon("arrow-right")}</span>
                    </button>
                </Show>
            </div>
            <div class="pagination__info">{move || label.get()}</div>
        </div>
    }
}
