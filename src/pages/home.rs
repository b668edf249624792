use crate::components::items_list::ItemsList;
use crate::components::review_card::{PopularReviewCard, RecentReviewCard};
use crate::components::search_bar::ItemSearch;
use crate::models::item::Item;
use crate::models::review::Review;
use crate::state::use_app_state;
use leptos::*;

const RECENT_REVIEWS_SHOWN: usize = 4;
const POPULAR_REVIEWS_SHOWN: usize = 5;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_app_state();

    let popular_items = Signal::derive(move || {
        state
            .catalog
            .with(|c| c.popular_items().into_iter().cloned().collect::<Vec<Item>>())
    });
    let recent_reviews = move || {
        state.catalog.with(|c| {
            c.recent_reviews()
                .iter()
                .take(RECENT_REVIEWS_SHOWN)
                .cloned()
                .collect::<Vec<Review>>()
        })
    };
    let popular_reviews = move || {
        state.catalog.with(|c| {
            c.popular_reviews(POPULAR_REVIEWS_SHOWN)
                .into_iter()
                .cloned()
                .collect::<Vec<Review>>()
        })
    };

    view! {
        <div class="home-page">
            <ItemSearch/>

            <section>
                <h2>{ "Populares da Semana" }</h2>
                <ItemsList
                    items=popular_items
                    empty_message="Nenhum item popular encontrado localmente."
                    row=true
                />
            </section>

            <section>
                <h2>{ "Reviews Recentes" }</h2>
                <div class="recent-reviews">
                    {move || {
                        let reviews = recent_reviews();
                        if reviews.is_empty() {
                            view! { <p class="empty-message">{ "Nenhuma review recente." }</p> }.into_view()
                        } else {
                            reviews.into_iter()
                                .map(|review| view! { <RecentReviewCard review=review/> })
                                .collect::<Vec<_>>()
                                .into_view()
                        }
                    }}
                </div>
            </section>

            <section>
                <h2>{ "Reviews Populares" }</h2>
                <div class="popular-reviews">
                    {move || {
                        let reviews = popular_reviews();
                        if reviews.is_empty() {
                            view! { <p class="empty-message">{ "Nenhuma review popular." }</p> }.into_view()
                        } else {
                            reviews.into_iter()
                                .map(|review| view! { <PopularReviewCard review=review/> })
                                .collect::<Vec<_>>()
                                .into_view()
                        }
                    }}
                </div>
            </section>
        </div>
    }
}
