use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    document().set_title("Products Showcase");

    view! {
        <AppRoutes />
    }
}
