use crate::components::star_rating::StarRatingDisplay;
use crate::models::review::Review;
use crate::state::review::ReviewLikes;
use crate::state::use_app_state;
use leptos::logging::log;
use leptos::*;
use leptos_router::A;

fn profile_href(user_id: &str) -> String {
    format!("/profile/{}", user_id)
}

/// Full review with author, stars, text and a like button. `show_item` adds
/// the reviewed item's cover and title, for lists that mix items.
#[component]
pub fn ReviewCard(review: Review, #[prop(optional)] show_item: bool) -> impl IntoView {
    let state = use_app_state();
    let likes = create_rw_signal(ReviewLikes::from_review(&review));
    let review_id = review.id.clone();

    let toggle_like = move |_| {
        let threshold = state.config.with_value(|c| c.review_promotion_likes);
        likes.update(|l| {
            l.toggle();
        });
        if likes.with_untracked(|l| l.is_promotion_candidate(threshold)) {
            log!("[REVIEW] {} passed {} likes, candidate for the popular list", review_id, threshold);
        }
    };

    view! {
        <article class="review-card">
            <header class="review-header">
                <A href=profile_href(&review.user_id) class="review-author">
                    { format!("@{}", review.username) }
                </A>
                <StarRatingDisplay rating=Some(review.rating as f32) size="text-sm"/>
            </header>
            {show_item.then(|| view! {
                <A href=format!("/item/{}", review.item_id) class="review-item">
                    <img src=review.item_img.clone() alt=review.item_title.clone()/>
                    <span>{ review.item_title.clone() }</span>
                </A>
            })}
            <p class="review-text">{ review.text.clone() }</p>
            <footer class="review-footer">
                <button
                    class="like-button"
                    class:liked=move || likes.with(|l| l.liked)
                    on:click=toggle_like
                >
                    { "♥ " }{ move || likes.with(|l| l.count) }
                </button>
                <span class="comments">{ format!("💬 {}", review.comments_count) }</span>
                <span class="timestamp">{ review.timestamp.format("%d/%m/%Y").to_string() }</span>
            </footer>
        </article>
    }
}

/// Compact card for the home page's recent reviews row.
#[component]
pub fn RecentReviewCard(review: Review) -> impl IntoView {
    view! {
        <A href=format!("/item/{}", review.item_id) class="recent-review-card">
            <img src=review.item_img.clone() alt=review.item_title.clone()/>
            <div class="recent-review-body">
                <span class="review-author">{ format!("@{}", review.username) }</span>
                <StarRatingDisplay rating=Some(review.rating as f32) size="text-xs"/>
                <p class="review-excerpt">{ review.text.clone() }</p>
            </div>
        </A>
    }
}

/// Card for the home page's popular reviews column.
#[component]
pub fn PopularReviewCard(review: Review) -> impl IntoView {
    let cover_alt = review.item_title.clone();
    view! {
        <div class="popular-review-card">
            <A href=format!("/item/{}", review.item_id) class="popular-review-cover">
                <img src=review.item_img.clone() alt=cover_alt/>
            </A>
            <div class="popular-review-body">
                <h4>{ review.item_title.clone() }</h4>
                <A href=profile_href(&review.user_id) class="review-author">
                    { format!("@{}", review.username) }
                </A>
                <StarRatingDisplay rating=Some(review.rating as f32) size="text-xs"/>
                <p class="review-excerpt">{ review.text.clone() }</p>
                <span class="likes">{ format!("♥ {}", review.likes) }</span>
            </div>
        </div>
    }
}
