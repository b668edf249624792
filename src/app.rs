/// Main application entry point for Biblio Virtual.
/// Provides the shared state, the navigation header and the page routes.
use crate::components::nav::Header;
use crate::config::AppConfig;
use crate::pages::{
    details::ItemDetailsPage, favorites::FavoritesPage, home::HomePage, not_found::NotFound,
    profile::ProfilePage,
};
use crate::state::AppState;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = AppState::provide(AppConfig::load());

    // Effects only run in the browser, where storage exists.
    create_effect(move |_| state.load_favorites());

    view! {
        <Stylesheet id="leptos" href="/pkg/bibliovirtual.css"/>
        <Title text="Biblio Virtual"/>
        <Router>
            <Header/>
            <main class="main-content">
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/favorites" view=FavoritesPage/>
                    <Route path="/profile" view=ProfilePage/>
                    <Route path="/profile/:user_id" view=ProfilePage/>
                    <Route path="/item/:item_id" view=ItemDetailsPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}
