use crate::components::items_list::ItemsList;
use crate::models::item::Item;
use crate::state::use_app_state;
use leptos::*;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let state = use_app_state();
    let favorite_items = Signal::derive(move || {
        state.favorites.with(|favorites| {
            state
                .catalog
                .with(|c| c.items_with_ids(favorites.ids()).into_iter().cloned().collect::<Vec<Item>>())
        })
    });

    view! {
        <div class="favorites-page">
            <h1>{ "Meus Favoritos" }</h1>
            <ItemsList
                items=favorite_items
                empty_message="Você ainda não adicionou favoritos. Clique no coração ♥ em um item para adicioná-lo."
            />
        </div>
    }
}
