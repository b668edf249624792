use crate::components::items_list::SimilarItemsSection;
use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsList;
use crate::components::star_rating::StarRatingDisplay;
use crate::models::item::{Item, ItemKind};
use crate::models::review::Review;
use crate::search::google_books::UNKNOWN_AUTHOR;
use crate::state::review::ItemPageState;
use crate::state::use_app_state;
use leptos::logging::{log, warn};
use leptos::*;
use leptos_router::{use_params_map, A};

/// Groups thousands with dots, as in `12.345`.
pub fn format_count(count: u32) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(digit);
    }
    out
}

fn go_back() {
    let back = gloo_utils::window().history().and_then(|history| history.back());
    if let Err(err) = back {
        warn!("[ITEM] Could not go back: {:?}", err);
    }
}

#[component]
pub fn ItemDetailsPage() -> impl IntoView {
    let state = use_app_state();
    let params = use_params_map();
    let item_id = create_memo(move |_| params.with(|p| p.get("item_id").cloned().unwrap_or_default()));
    let item = create_memo(move |_| item_id.with(|id| state.catalog.with(|c| c.item(id).cloned())));
    let page = create_rw_signal(ItemPageState::default());

    // Likes, list membership and the review draft belong to one item.
    create_effect(move |_| {
        let id = item_id.get();
        let reset = page.try_update(|p| p.reset_for(&id)).unwrap_or(false);
        if reset {
            log!("[ITEM] Showing {}", id);
            gloo_utils::window().scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    move || match item.get() {
        Some(item) => view! { <ItemDetails item=item page=page/> }.into_view(),
        None => view! { <ItemNotFound/> }.into_view(),
    }
}

#[component]
fn ItemDetails(item: Item, page: RwSignal<ItemPageState>) -> impl IntoView {
    let state = use_app_state();
    let details = item.details.clone();
    let availability = details.availability.clone();
    let item_id = store_value(item.id.clone());

    let all_reviews = Signal::derive(move || {
        item_id.with_value(|id| {
            state
                .catalog
                .with(|c| c.reviews_for_item(id).into_iter().cloned().collect::<Vec<Review>>())
        })
    });
    let popular_reviews = Signal::derive(move || {
        let min_likes = state.config.with_value(|c| c.item_popular_review_likes);
        item_id.with_value(|id| {
            state.catalog.with(|c| {
                c.popular_reviews_for_item(id, min_likes)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<Review>>()
            })
        })
    });
    let similar = state
        .catalog
        .with_untracked(|c| c.similar_items(&item).into_iter().cloned().collect::<Vec<Item>>());
    let similar_title = match item.kind {
        ItemKind::Book => "Livros Semelhantes",
        ItemKind::Movie => "Filmes Semelhantes",
    };

    let toggle_like = move |_| {
        page.update(|p| p.liked = !p.liked);
        log!("[ITEM] Like toggled for {}: {}", item_id.get_value(), page.with_untracked(|p| p.liked));
    };
    let toggle_list = move |_| {
        page.update(|p| p.in_list = !p.in_list);
        log!("[ITEM] List toggled for {}: {}", item_id.get_value(), page.with_untracked(|p| p.in_list));
    };

    let year = details
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "Ano Desconhecido".to_string());
    let creator = item.creator().unwrap_or(UNKNOWN_AUTHOR).to_string();
    let description = details
        .description
        .clone()
        .unwrap_or_else(|| "Sem descrição disponível.".to_string());

    view! {
        <div class="item-details">
            <div class="details-banner">
                <img src=item.img.clone() alt=""/>
            </div>
            <button class="back-button" aria-label="Voltar" on:click=move |_| go_back()>{ "←" }</button>

            <div class="details-layout">
                <aside class="details-sidebar">
                    <img class="details-cover" src=item.img.clone() alt=format!("Capa de {}", item.title)/>
                    <div class="details-actions">
                        <button
                            title="Gostar / Desgostar"
                            class:liked=move || page.with(|p| p.liked)
                            on:click=toggle_like
                        >
                            { "♥ Gostar" }
                        </button>
                        <button
                            title="Adicionar à Lista / Remover"
                            class:in-list=move || page.with(|p| p.in_list)
                            on:click=toggle_list
                        >
                            { "+ Lista" }
                        </button>
                    </div>
                    <button class="review-button" on:click=move |_| page.update(|p| p.composer.open())>
                        { "Avaliar ou Escrever Review" }
                    </button>
                    <ReviewForm item_title=item.title.clone() page=page/>

                    <div class="read-links">
                        {availability.library_url.clone().map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer">{ "📖 Ler Online" }</a>
                        })}
                        {availability.download_url.clone().map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer">{ "⬇ Download" }</a>
                        })}
                    </div>
                    {(availability.library_url.is_none() && availability.download_url.is_none()).then(|| view! {
                        <p class="hint">{ "Nenhum link de leitura/download disponível." }</p>
                    })}
                </aside>

                <div class="details-main">
                    <h1>{ item.title.clone() }</h1>
                    <div class="details-byline">
                        <span>{ year }</span>
                        <span>{ "•" }</span>
                        <span>{ creator }</span>
                    </div>
                    <p class="details-description">{ description }</p>

                    {details.average_rating.map(|rating| view! {
                        <div class="details-rating">
                            <StarRatingDisplay rating=Some(rating) size="text-xl" show_value=true/>
                            <span class="ratings-count">
                                { format!("({} avaliações)", format_count(details.ratings_count)) }
                            </span>
                        </div>
                    })}

                    {(!details.genres.is_empty()).then(|| view! {
                        <div class="genres">
                            {details.genres.iter().map(|genre| view! {
                                <span class="genre-chip">{ genre.clone() }</span>
                            }).collect::<Vec<_>>()}
                        </div>
                    })}

                    <div class="details-extra">
                        {details.pages.map(|pages| view! {
                            <p><strong>{ "Páginas: " }</strong>{ pages }</p>
                        })}
                        {details.publisher.clone().map(|publisher| view! {
                            <p><strong>{ "Editora: " }</strong>{ publisher }</p>
                        })}
                    </div>

                    <section class="where-to-buy">
                        <h3>{ "Onde Ler / Comprar" }</h3>
                        {availability.online_store_url.clone().map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer">{ "Loja Online" }</a>
                        })}
                        {availability.is_empty().then(|| view! {
                            <span class="hint">{ "Informação de compra/leitura não disponível." }</span>
                        })}
                    </section>

                    <SimilarItemsSection title=similar_title items=similar/>

                    <Show when=move || popular_reviews.with(|r| !r.is_empty())>
                        <ReviewsList title="Populares" reviews=popular_reviews empty_message=""/>
                    </Show>
                    <ReviewsList
                        title=Signal::derive(move || format!("Reviews ({})", all_reviews.with(Vec::len)))
                        reviews=all_reviews
                        empty_message="Ainda não há reviews para este item. Seja o primeiro a avaliar!"
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ItemNotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>{ "404 - Item Não Encontrado" }</h1>
            <p>{ "O item que você está procurando não existe ou foi movido." }</p>
            <A href="/">{ "Voltar para Início" }</A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_grouped_by_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.000");
        assert_eq!(format_count(1234567), "1.234.567");
    }
}
