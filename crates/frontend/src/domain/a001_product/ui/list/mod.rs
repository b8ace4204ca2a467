pub mod search_bar;
pub mod sort_menu;
pub mod state;

use contracts::shared::list_query::{ListQuery, ListQueryParams, SortOption};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use self::search_bar::SearchBar;
use self::sort_menu::SortMenu;
use self::state::{address_url, create_state, FetchApplied, PageStep};
use super::card::{ProductCard, ProductCardSkeleton};
use crate::domain::a001_product::api;
use crate::shared::components::PaginationControls;
use crate::shared::config::ListSettings;
use crate::shared::viewport::DeferredNavigator;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let settings = ListSettings::default();

    // Адресная строка - единственный источник состояния запроса
    let query_map = use_query_map();
    let query = Memo::new(move |_| {
        query_map.with(|params| {
            ListQuery::derive(&ListQueryParams::from_lookup(|key| params.get(key)))
        })
    });
    let state = create_state(query.get_untracked());

    let navigate = use_navigate();
    let navigator = StoredValue::new_local(DeferredNavigator::new(move |url: String| {
        navigate(&url, NavigateOptions::default());
    }));
    on_cleanup(move || {
        navigator.try_with_value(|n| n.cancel());
    });

    let request_navigation = move |target: Option<ListQuery>| {
        if let Some(target) = target {
            navigator.with_value(|n| n.navigate(address_url(&target)));
        }
    };

    // Загрузка при каждом изменении запроса, включая назад/вперёд в истории
    Effect::new(move |_| {
        let query = query.get();
        let Some(ticket) = state.try_update(|s| s.begin_fetch(query, js_sys::Date::now())) else {
            return;
        };

        spawn_local(async move {
            let outcome = api::fetch_page(&ticket.query, settings.page_size).await;
            if let Err(e) = &outcome {
                log::warn!("Product list fetch failed: {}", e);
            }

            let applied = state.try_update(|s| {
                s.apply_fetch(&ticket, outcome, js_sys::Date::now(), settings.min_loading)
            });
            match applied {
                Some(FetchApplied::Applied { settle_after }) => {
                    if !settle_after.is_zero() {
                        TimeoutFuture::new(settle_after.as_millis() as u32).await;
                    }
                    state.try_update(|s| s.settle(&ticket));
                }
                Some(FetchApplied::Superseded) => {
                    log::debug!("Dropped stale response for {:?}", ticket.query);
                }
                // Компонент уже размонтирован
                None => {}
            }
        });
    });

    let on_search = Callback::new(move |text: String| {
        request_navigation(state.try_update(|s| s.submit_search(&text)).flatten());
    });

    let on_sort = Callback::new(move |option: SortOption| {
        request_navigation(
            state
                .try_update(|s| s.change_sort(option.field(), option.direction()))
                .flatten(),
        );
    });

    let on_prev = Callback::new(move |_: ()| {
        request_navigation(state.try_update(|s| s.go_to_page(PageStep::Prev)).flatten());
    });

    let on_next = Callback::new(move |_: ()| {
        request_navigation(state.try_update(|s| s.go_to_page(PageStep::Next)).flatten());
    });

    let empty_state = || {
        view! {
            <div class="empty-state">
                <div class="empty-state__title">"No products found."</div>
                <div class="empty-state__hint">"Try adjusting your search."</div>
            </div>
        }
    };

    view! {
        <div class="storefront">
            <nav class="top-bar">
                <SearchBar state=state on_submit=on_search />
                <SortMenu state=state on_select=on_sort />
            </nav>
            <Show when=move || !state.with(|s| s.show_empty_state()) fallback=empty_state>
                <main class="product-list">
                    {move || {
                        state
                            .with(|s| s.search_summary())
                            .map(|summary| view! { <div class="product-list__summary">{summary}</div> })
                    }}
                    <div class="product-grid">
                        {move || {
                            if state.with(|s| s.is_loading) {
                                let count = state.with(|s| s.skeleton_count(settings.page_size));
                                (0..count)
                                    .map(|_| view! { <ProductCardSkeleton /> })
                                    .collect_view()
                                    .into_any()
                            } else {
                                state
                                    .with(|s| s.products())
                                    .into_iter()
                                    .map(|product| view! { <ProductCard product=product /> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                    <Show when=move || state.with(|s| s.show_pagination())>
                        <PaginationControls
                            label=Signal::derive(move || state.with(|s| s.pagination_label()))
                            show_prev=Signal::derive(move || state.with(|s| s.can_go_prev()))
                            show_next=Signal::derive(move || state.with(|s| s.can_go_next()))
                            on_prev=on_prev
                            on_next=on_next
                        />
                    </Show>
                </main>
            </Show>
        </div>
    }
}
