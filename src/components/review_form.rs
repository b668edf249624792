use crate::components::star_rating::StarRatingInput;
use crate::state::review::ItemPageState;
use crate::state::use_app_state;
use leptos::logging::{log, warn};
use leptos::*;

fn alert(message: &str) {
    if let Err(err) = gloo_utils::window().alert_with_message(message) {
        warn!("[REVIEW] Could not show alert: {:?}", err);
    }
}

/// Review popup of the item page. Reads and writes the composer inside `page`.
#[component]
pub fn ReviewForm(#[prop(into)] item_title: String, page: RwSignal<ItemPageState>) -> impl IntoView {
    let state = use_app_state();
    let rating = Signal::derive(move || page.with(|p| p.composer.rating));
    let select_rating = Callback::new(move |stars: u8| page.update(|p| p.composer.set_rating(stars)));
    let close = move |_| page.update(|p| p.composer.close());

    let submit_review = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        // Submitting updates the catalog, so the composer is taken out of
        // `page` instead of being mutated inside `page.update`.
        let (item_id, mut composer) = page.with_untracked(|p| (p.item_id.clone(), p.composer.clone()));
        let result = state.submit_review(&mut composer, &item_id);
        page.update(|p| p.composer = composer);

        match result {
            Ok(submitted) => log!(
                "[REVIEW] Published {} for {}, {} follower(s) notified",
                submitted.review.id,
                item_id,
                submitted.notified.len()
            ),
            Err(err) => {
                warn!("[REVIEW] Rejected: {}", err);
                alert(&err.to_string());
            }
        }
    };

    view! {
        <Show when=move || page.with(|p| p.composer.is_open())>
            <div class="modal-backdrop">
                <div class="review-modal">
                    <button class="modal-close" aria-label="Fechar formulário de review" on:click=close>
                        { "✕" }
                    </button>
                    <h3>{ format!("Sua Avaliação para \"{}\"", item_title) }</h3>
                    <form on:submit=submit_review>
                        <StarRatingInput rating=rating on_select=select_rating/>
                        <textarea
                            rows="5"
                            placeholder="Escreva sua review (opcional)..."
                            prop:value=move || page.with(|p| p.composer.text.clone())
                            on:input=move |ev| page.update(|p| p.composer.set_text(event_target_value(&ev)))
                        ></textarea>
                        <div class="form-actions">
                            <button type="button" class="cancel-button" on:click=close>
                                { "Cancelar" }
                            </button>
                            <button
                                type="submit"
                                class="submit-button"
                                class:disabled=move || rating.get() == 0
                            >
                                { "Salvar Avaliação" }
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
