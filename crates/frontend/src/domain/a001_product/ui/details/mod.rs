use contracts::domain::a001_product::ProductId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Страница товара (заглушка: только идентификатор)
#[component]
#[allow(non_snake_case)]
pub fn ProductDetails() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || {
        params
            .with(|p| p.get("id"))
            .and_then(|raw| ProductId::from_string(&raw).ok())
    };

    view! {
        <div class="product-details">
            {move || match product_id() {
                Some(id) => format!("Product {}", id),
                None => "Product not found".to_string(),
            }}
        </div>
    }
}
