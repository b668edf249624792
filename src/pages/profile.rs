use crate::components::follow_button::FollowButton;
use crate::components::items_list::ItemsList;
use crate::components::reviews_list::ReviewsList;
use crate::models::item::Item;
use crate::models::user::User;
use crate::state::profile::{profile_summary, ProfileSummary, ProfileTab};
use crate::state::use_app_state;
use leptos::logging::warn;
use leptos::*;
use leptos_router::{use_params_map, A};

fn go_back() {
    let back = gloo_utils::window().history().and_then(|history| history.back());
    if let Err(err) = back {
        warn!("[PROFILE] Could not go back: {:?}", err);
    }
}

/// `/profile` and `/profile/:user_id`. Without an id, or with the viewer's
/// own id, shows the viewer's profile.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let state = use_app_state();
    let params = use_params_map();
    let requested = move || params.with(|p| p.get("user_id").cloned());

    let summary = create_memo(move |_| {
        let viewer = state.viewer_id();
        let requested = requested();
        state.favorites.with(|favorites| {
            state
                .catalog
                .with(|c| profile_summary(c, &viewer, requested.as_deref(), favorites))
        })
    });

    let chosen_tab = create_rw_signal(None::<ProfileTab>);
    let show_info = create_rw_signal(false);

    // Another profile starts over on its default tab.
    create_effect(move |_| {
        requested();
        chosen_tab.set(None);
        show_info.set(false);
    });

    move || match summary.get() {
        None => view! { <UserNotFound/> }.into_view(),
        Some(summary) => {
            let active_tab = Signal::derive({
                let tabs = summary.tabs();
                let default_tab = summary.default_tab();
                move || chosen_tab.get().filter(|tab| tabs.contains(tab)).unwrap_or(default_tab)
            });
            view! {
                <ProfileView
                    summary=summary
                    active_tab=active_tab
                    on_tab=move |tab: ProfileTab| chosen_tab.set(Some(tab))
                    show_info=show_info
                />
            }
            .into_view()
        }
    }
}

#[component]
fn ProfileView(
    summary: ProfileSummary,
    active_tab: Signal<ProfileTab>,
    #[prop(into)] on_tab: Callback<ProfileTab>,
    show_info: RwSignal<bool>,
) -> impl IntoView {
    let state = use_app_state();
    let is_own = summary.is_own;
    let user = summary.user.clone();
    let reviews = summary.reviews.clone();

    let favorite_items = Signal::derive(move || {
        state.favorites.with(|favorites| {
            state
                .catalog
                .with(|c| c.items_with_ids(favorites.ids()).into_iter().cloned().collect::<Vec<Item>>())
        })
    });

    view! {
        <div class="profile-page">
            <Show when=move || show_info.get()>
                <UserInfoPopup user=user.clone() on_close=move |_: ()| show_info.set(false)/>
            </Show>

            {(!is_own).then(|| view! {
                <button class="back-button" on:click=move |_| go_back()>{ "← Voltar" }</button>
            })}

            <div class="profile-header">
                <div class="avatar large">{ summary.user.initial() }</div>
                <div class="profile-info">
                    <div class="profile-title">
                        <h1>
                            { summary.user.username.clone() }
                            <button
                                class="info-button"
                                title="Ver informações do usuário"
                                on:click=move |_| show_info.set(true)
                            >
                                { "ⓘ" }
                            </button>
                        </h1>
                        {if is_own {
                            view! { <button class="edit-profile">{ "Editar Perfil" }</button> }.into_view()
                        } else {
                            view! { <FollowButton user_id=summary.user.id.clone()/> }.into_view()
                        }}
                    </div>
                    <p class="bio">
                        {if summary.user.bio.trim().is_empty() { "Sem bio.".to_string() } else { summary.user.bio.clone() }}
                    </p>
                    <div class="profile-stats">
                        {is_own.then(|| view! {
                            <span><strong>{ summary.favorites_count }</strong>{ " Favoritos" }</span>
                        })}
                        <span><strong>{ summary.reviews_count }</strong>{ " Reviews" }</span>
                        <span><strong>{ summary.following_count }</strong>{ " Seguindo" }</span>
                        <span><strong>{ summary.followers_count }</strong>{ " Seguidores" }</span>
                    </div>
                </div>
            </div>

            <div class="profile-tabs">
                {summary.tabs().into_iter().map(|tab| view! {
                    <button
                        class="tab-button"
                        class:active=move || active_tab.get() == tab
                        on:click=move |_| on_tab.call(tab)
                    >
                        { tab.label() }
                    </button>
                }).collect::<Vec<_>>()}
            </div>

            {move || match active_tab.get() {
                ProfileTab::Favorites => view! {
                    <ItemsList items=favorite_items empty_message="Nenhum item para exibir nesta seção."/>
                }
                .into_view(),
                ProfileTab::Reviews => view! {
                    <ReviewsList
                        title=""
                        reviews=Signal::derive({
                            let reviews = reviews.clone();
                            move || reviews.clone()
                        })
                        empty_message="Nenhuma review encontrada."
                        show_item=true
                    />
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn UserInfoPopup(user: User, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.call(())>
            <div class="info-popup" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" aria-label="Fechar popup" on:click=move |_| on_close.call(())>
                    { "×" }
                </button>
                <h2>{ "Informações do Usuário" }</h2>
                <p class="info-item"><strong>{ "Username: " }</strong>{ user.username.clone() }</p>
                {user.email.clone().map(|email| view! {
                    <p class="info-item"><strong>{ "Email: " }</strong>{ email }</p>
                })}
                {user.born_in.clone().map(|born_in| view! {
                    <p class="info-item"><strong>{ "Data de Nascimento: " }</strong>{ born_in }</p>
                })}
                {user.gender.clone().map(|gender| view! {
                    <p class="info-item"><strong>{ "Gênero: " }</strong>{ gender }</p>
                })}
            </div>
        </div>
    }
}

#[component]
fn UserNotFound() -> impl IntoView {
    view! {
        <div class="profile-not-found">
            <h1>{ "Erro" }</h1>
            <p>{ "Usuário não encontrado." }</p>
            <A href="/" class="primary-button">{ "← Voltar para Início" }</A>
        </div>
    }
}
