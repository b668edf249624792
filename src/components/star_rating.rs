use leptos::*;

/// Filled and empty star counts out of five, or `None` for unrated items.
pub fn star_counts(rating: Option<f32>) -> Option<(usize, usize)> {
    let rating = rating.filter(|r| r.is_finite() && *r > 0.0)?;
    let full = (rating.floor() as usize).min(5);
    Some((full, 5 - full))
}

#[component]
pub fn StarRatingDisplay(
    rating: Option<f32>,
    #[prop(optional)] show_value: bool,
    #[prop(default = "text-lg")] size: &'static str,
) -> impl IntoView {
    match star_counts(rating) {
        None => view! {
            <span class=format!("no-rating {}", size)>{ "🥲 Sem Avaliações" }</span>
        }
        .into_view(),
        Some((full, empty)) => view! {
            <div class="star-rating">
                <div class=format!("stars {}", size)>
                    {(0..full).map(|_| view! { <span class="star filled">{ "★" }</span> }).collect::<Vec<_>>()}
                    {(0..empty).map(|_| view! { <span class="star">{ "★" }</span> }).collect::<Vec<_>>()}
                </div>
                {show_value.then(|| view! {
                    <span class="rating-value">{ format!("{:.1}", rating.unwrap_or_default()) }</span>
                })}
            </div>
        }
        .into_view(),
    }
}

/// Clickable 1 to 5 stars used by the review form.
#[component]
pub fn StarRatingInput(
    #[prop(into)] rating: Signal<u8>,
    #[prop(into)] on_select: Callback<u8>,
) -> impl IntoView {
    view! {
        <div class="star-input">
            {(1..=5u8).map(|stars| view! {
                <button
                    type="button"
                    class="star-button"
                    class:selected={move || rating.get() >= stars}
                    title=format!("{} estrela(s)", stars)
                    on:click=move |_| on_select.call(stars)
                >
                    { "★" }
                </button>
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrated_items_have_no_stars() {
        assert_eq!(star_counts(None), None);
        assert_eq!(star_counts(Some(0.0)), None);
    }

    #[test]
    fn stars_round_down() {
        assert_eq!(star_counts(Some(4.5)), Some((4, 1)));
        assert_eq!(star_counts(Some(1.0)), Some((1, 4)));
        assert_eq!(star_counts(Some(7.0)), Some((5, 0)));
    }
}
