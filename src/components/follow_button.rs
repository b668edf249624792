use crate::state::follows::FollowChange;
use crate::state::use_app_state;
use leptos::logging::{log, warn};
use leptos::*;

#[component]
pub fn FollowButton(#[prop(into)] user_id: String) -> impl IntoView {
    let state = use_app_state();
    let user_id = store_value(user_id);
    let following = move || user_id.with_value(|id| state.is_following(id));

    let toggle = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        let target = user_id.get_value();
        match state.toggle_follow(&target) {
            Ok(FollowChange::Followed) => log!("[FOLLOW] Now following {}", target),
            Ok(FollowChange::Unfollowed) => log!("[FOLLOW] Stopped following {}", target),
            Err(err) => warn!("[FOLLOW] {}", err),
        }
    };

    view! {
        <button class="follow-button" class:following=following on:click=toggle>
            {move || if following() { "Seguindo" } else { "Seguir" }}
        </button>
    }
}
