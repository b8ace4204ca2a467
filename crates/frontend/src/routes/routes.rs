use crate::domain::a001_product::ui::details::ProductDetails;
use crate::domain::a001_product::ui::list::ProductList;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="product-details">"Page not found."</div> }>
                <Route path=path!("/") view=ProductList />
                <Route path=path!("/product/:id") view=ProductDetails />
            </Routes>
        </Router>
    }
}
