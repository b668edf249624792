use crate::components::follow_button::FollowButton;
use crate::models::user::User;
use crate::state::use_app_state;
use crate::utils::click_outside::close_on_click_outside;
use leptos::html::Div;
use leptos::*;
use leptos_router::A;

/// Header search over usernames, with a follow button per result.
#[component]
pub fn UserSearch() -> impl IntoView {
    let state = use_app_state();
    let term = create_rw_signal(String::new());
    let show_dropdown = create_rw_signal(false);
    let container = create_node_ref::<Div>();

    let results = create_memo(move |_| {
        let viewer = state.viewer_id();
        term.with(|term| {
            state
                .catalog
                .with(|c| c.search_users(term, &viewer).into_iter().cloned().collect::<Vec<User>>())
        })
    });

    close_on_click_outside(container, move || show_dropdown.set(false));

    let on_input = move |ev: ev::Event| {
        term.set(event_target_value(&ev));
        show_dropdown.set(true);
    };
    let close = move |_| {
        show_dropdown.set(false);
        term.set(String::new());
    };

    view! {
        <div class="user-search" node_ref=container>
            <input
                type="search"
                placeholder="Buscar usuários..."
                prop:value=move || term.get()
                on:input=on_input
                on:focus=move |_| show_dropdown.set(!results.with(Vec::is_empty))
            />
            <Show when=move || show_dropdown.get() && !results.with(Vec::is_empty)>
                <ul class="user-search-dropdown">
                    <For
                        each=move || results.get()
                        key=|user| user.id.clone()
                        children=move |user| {
                            let user_id = user.id.clone();
                            view! {
                                <li class="user-search-result">
                                    <span on:click=close>
                                        <A href=format!("/profile/{}", user.id) class="user-link">
                                            <span class="avatar">{ user.initial() }</span>
                                            <span>{ user.username.clone() }</span>
                                        </A>
                                    </span>
                                    <FollowButton user_id=user_id/>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
