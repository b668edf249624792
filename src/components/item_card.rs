use crate::components::star_rating::StarRatingDisplay;
use crate::models::item::Item;
use crate::state::use_app_state;
use leptos::*;
use leptos_router::A;

/// Cover, favorite toggle and rating of one catalog item. The cover links to
/// the item page.
#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let state = use_app_state();
    let item_id = item.id.clone();
    let is_favorite = {
        let item_id = item_id.clone();
        move || state.is_favorite(&item_id)
    };
    let favorite_title = is_favorite.clone();
    let cover_alt = format!("Capa de {}", item.title);
    let title = item.title.clone();
    let toggle_favorite = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        state.toggle_favorite(&item_id);
    };

    view! {
        <div class="item-card">
            <A href=format!("/item/{}", item.id) class="item-cover">
                <img src=item.img.clone() alt=cover_alt/>
            </A>
            <button
                class="favorite-button"
                class:active=is_favorite
                title=move || if favorite_title() { "Remover dos favoritos" } else { "Adicionar aos favoritos" }
                on:click=toggle_favorite
            >
                { "♥" }
            </button>
            <div class="item-card-info">
                <StarRatingDisplay rating=item.details.average_rating size="text-xs"/>
                <h3 class="item-title" title=title.clone()>{ title }</h3>
            </div>
        </div>
    }
}
