/// Components to display lists of items.
/// A grid (or a horizontal row) of item cards, and the "similar items" block
/// of the detail page.
use crate::components::item_card::ItemCard;
use crate::models::item::Item;
use leptos::*;

#[component]
pub fn ItemsList(
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] empty_message: String,
    // Horizontal scrolling row instead of a grid
    #[prop(optional)] row: bool,
) -> impl IntoView {
    view! {
        <Show
            when=move || items.with(|items| !items.is_empty())
            fallback=move || view! { <p class="empty-message">{ empty_message.clone() }</p> }
        >
            <div class=if row { "items-row" } else { "items-grid" }>
                {move || items.get().into_iter().map(|item| view! {
                    <ItemCard item=item/>
                }).collect::<Vec<_>>()}
            </div>
        </Show>
    }
}

#[component]
pub fn SimilarItemsSection(#[prop(into)] title: String, items: Vec<Item>) -> impl IntoView {
    if items.is_empty() {
        return ().into_view();
    }
    view! {
        <section class="similar-items">
            <h2>{ title }</h2>
            <div class="items-row">
                {items.into_iter().map(|item| view! { <ItemCard item=item/> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
    .into_view()
}
