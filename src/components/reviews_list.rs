use crate::components::review_card::ReviewCard;
use crate::models::review::Review;
use leptos::*;

/// Cards are keyed by review id, so a new submission mounts one card and
/// leaves the like state of the others alone.
#[component]
pub fn ReviewsList(
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] reviews: Signal<Vec<Review>>,
    #[prop(into)] empty_message: String,
    #[prop(optional)] show_item: bool,
) -> impl IntoView {
    view! {
        <section class="reviews-list">
            {move || {
                let title = title.get();
                (!title.is_empty()).then(|| view! { <h3>{ title }</h3> })
            }}
            <Show
                when=move || reviews.with(|r| !r.is_empty())
                fallback=move || view! { <p class="empty-message">{ empty_message.clone() }</p> }
            >
                <For
                    each=move || reviews.get()
                    key=|review| review.id.clone()
                    children=move |review| view! { <ReviewCard review=review show_item=show_item/> }
                />
            </Show>
        </section>
    }
}
