use crate::components::notifications::NotificationBell;
use crate::components::user_search::UserSearch;
use crate::state::use_app_state;
use chrono::{Datelike, Utc};
use leptos::*;
use leptos_router::A;

/// Início, Favoritos (with count badge) and Perfil. The active route gets
/// `aria-current="page"` from the router.
#[component]
pub fn NavLinks(#[prop(optional)] mobile: bool, #[prop(optional, into)] on_navigate: Option<Callback<()>>) -> impl IntoView {
    let state = use_app_state();
    let favorites_count = move || state.favorites.with(|f| f.len());
    let profile_href = format!("/profile/{}", state.viewer_id());
    let after_click = move |_| {
        if let Some(on_navigate) = on_navigate {
            on_navigate.call(());
        }
    };

    view! {
        <nav class=if mobile { "nav-links mobile" } else { "nav-links" } on:click=after_click>
            <A href="/" exact=true class="nav-link">
                <span class="nav-icon">{ "⌂" }</span>
                <span class="nav-label">{ "Início" }</span>
            </A>
            <A href="/favorites" class="nav-link">
                <span class="nav-icon">{ "♥" }</span>
                <span class="nav-label">{ "Favoritos" }</span>
                <Show when=move || { favorites_count() > 0 }>
                    <span class="badge">{ favorites_count }</span>
                </Show>
            </A>
            <A href=profile_href class="nav-link">
                <span class="nav-icon">{ "👤" }</span>
                <span class="nav-label">{ "Perfil" }</span>
            </A>
        </nav>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let sidebar_open = create_rw_signal(false);
    let close_sidebar = Callback::new(move |_: ()| sidebar_open.set(false));

    view! {
        <header class="site-header">
            <div class="header-inner">
                <A href="/" class="brand">{ "Biblio Virtual" }</A>
                <div class="header-center">
                    <UserSearch/>
                    <NavLinks/>
                </div>
                <div class="header-actions">
                    <NotificationBell/>
                    <button
                        class="menu-button"
                        aria-label=move || if sidebar_open.get() { "Fechar menu" } else { "Abrir menu" }
                        aria-expanded=move || sidebar_open.get().to_string()
                        on:click=move |_| sidebar_open.update(|open| *open = !*open)
                    >
                        {move || if sidebar_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </header>

        <Show when=move || sidebar_open.get()>
            <div class="sidebar-overlay" on:click=move |_| sidebar_open.set(false)></div>
        </Show>
        <aside class="mobile-sidebar" class:open=move || sidebar_open.get() role="dialog" aria-modal="true">
            <div class="sidebar-header">
                <h2>{ "Menu" }</h2>
                <button on:click=move |_| sidebar_open.set(false)>{ "✕" }</button>
            </div>
            <NavLinks mobile=true on_navigate=close_sidebar/>
            <footer class="sidebar-footer">
                <p>{ format!("© {} Biblio Virtual", Utc::now().year()) }</p>
            </footer>
        </aside>
    }
}
