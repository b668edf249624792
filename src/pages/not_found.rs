use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFound() -> impl IntoView {
    // Set an HTTP status code 404
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_actix::ResponseOptions>() {
            response.set_status(actix_web::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <h1>{ "404 - Página Não Encontrada" }</h1>
            <p>{ "A página que você está procurando não existe." }</p>
            <A href="/" class="primary-button">{ "← Voltar para Início" }</A>
        </div>
    }
}
