use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::config::media_base;

/// Карточка товара: картинка проявляется после загрузки
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let (is_image_loaded, set_image_loaded) = signal(false);
    let src = product.cover_src(media_base());
    let href = product.details_path();
    let price = product.price_label();
    let alt = product.name.clone();

    view! {
        <A href=href attr:class="product-card">
            <div
                class="product-card__image"
                class:pulse=move || !is_image_loaded.get()
            >
                <img
                    src=src
                    alt=alt
                    class="product-card__img"
                    class:product-card__img--loaded=move || is_image_loaded.get()
                    on:load=move |_| set_image_loaded.set(true)
                />
            </div>
            <div class="product-card__body">
                <p class="product-card__name">{product.name}</p>
                <p class="product-card__price">{price}</p>
            </div>
        </A>
    }
}

#[component]
pub fn ProductCardSkeleton() -> impl IntoView {
    view! {
        <div class="product-card product-card--skeleton">
            <div class="product-card__image pulse"></div>
            <div class="product-card__body">
                <div class="skeleton-line skeleton-line--title pulse"></div>
                <div class="skeleton-line skeleton-line--price pulse"></div>
            </div>
        </div>
    }
}
