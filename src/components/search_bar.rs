//! Home page book search: filter chips, debounced requests and the results
//! dropdown.
use crate::api::{BookSearchClient, FetchTransport};
use crate::models::item::Item;
use crate::search::{Debouncer, RequestSequencer, SearchPlan};
use crate::state::search_box::{ActiveFilters, FilterKey, KeyOutcome, SearchBox};
use crate::state::use_app_state;
use crate::utils::click_outside::close_on_click_outside;
use crate::utils::leptos_owner::with_owner_safe;
use leptos::html::{Div, Input};
use leptos::logging::log;
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
struct SearchHandles {
    client: StoredValue<BookSearchClient<FetchTransport>>,
    sequencer: StoredValue<RequestSequencer>,
    results: RwSignal<Vec<Item>>,
    show_dropdown: RwSignal<bool>,
}

impl SearchHandles {
    fn clear(&self) {
        self.sequencer.update_value(RequestSequencer::invalidate);
        self.results.set(Vec::new());
        self.show_dropdown.set(false);
    }

    /// Starts one request. Its response is applied only if no newer request
    /// was issued and the search bar is still mounted.
    fn run(self, term: String, filters: ActiveFilters) {
        let Some(plan) = SearchPlan::build(&term, &filters) else {
            self.clear();
            return;
        };

        let mut ticket = 0;
        self.sequencer.update_value(|s| ticket = s.issue());
        let client = self.client.get_value();
        let owner = Owner::current();

        spawn_local(async move {
            let outcome = client.search(&plan).await;
            with_owner_safe(owner, "book search response", move || {
                if let Some(settled) = self.sequencer.with_value(|s| s.settle(ticket, outcome)) {
                    self.show_dropdown.set(settled.show_dropdown);
                    self.results.set(settled.results);
                }
            });
        });
    }
}

#[component]
pub fn ItemSearch() -> impl IntoView {
    let state = use_app_state();
    let search_config = state.config.with_value(|c| c.search.clone());

    let search = create_rw_signal(SearchBox::default());
    let debouncer = store_value(Debouncer::new(search_config.debounce_ms));
    let handles = SearchHandles {
        client: store_value(BookSearchClient::browser(search_config)),
        sequencer: store_value(RequestSequencer::default()),
        results: create_rw_signal(Vec::new()),
        show_dropdown: create_rw_signal(false),
    };
    let input_ref = create_node_ref::<Input>();
    let container = create_node_ref::<Div>();

    close_on_click_outside(container, move || handles.show_dropdown.set(false));

    // Every change of the typed text or of the filters restarts the timer.
    create_effect(move |_| {
        let (term, filters) = search.with(|s| (s.input.clone(), s.filters.clone()));
        let owner = Owner::current();
        debouncer.update_value(|d| {
            d.schedule(move || {
                with_owner_safe(owner, "debounced book search", move || handles.run(term, filters));
            })
        });
    });

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let mut next = search.get_untracked();
        match next.handle_key(&ev.key()) {
            KeyOutcome::FilterAdded(key) => {
                ev.prevent_default();
                log!("[SEARCH] Filter {} added", key.label());
                search.set(next);
                handles.show_dropdown.set(false);
            }
            KeyOutcome::FilterRemoved(key) => {
                log!("[SEARCH] Filter {} removed", key.label());
                search.set(next);
            }
            KeyOutcome::Ignored => {}
        }
    };

    let remove_filter = move |key: FilterKey| {
        search.update(|s| {
            s.remove_filter(key);
        });
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    let navigate = use_navigate();
    let open_result = move |item: Item| {
        let href = format!("/item/{}", item.id);
        log!("[SEARCH] Opening {}", item.title);
        state.adopt_search_result(item);
        handles.show_dropdown.set(false);
        navigate(&href, Default::default());
    };
    let open_result = store_value(open_result);

    view! {
        <div class="item-search" node_ref=container>
            <h2>{ "Encontre um Livro, Filme..." }</h2>
            <div class="search-box">
                <span class="search-icon">{ "🔍" }</span>
                <div class="filter-chips">
                    {move || search.with(|s| {
                        s.filters.iter().map(|(key, value)| {
                            let text = format!("{}: {}", key.label(), value);
                            view! {
                                <span class=format!("filter-chip {}", key.css_class())>
                                    { text }
                                    <button
                                        aria-label=format!("Remover filtro {}", key.label())
                                        on:click=move |_| remove_filter(key)
                                    >
                                        { "✕" }
                                    </button>
                                </span>
                            }
                        }).collect::<Vec<_>>()
                    })}
                </div>
                <input
                    type="search"
                    node_ref=input_ref
                    placeholder="Título, autor:Nome, genero:Nome..."
                    prop:value=move || search.with(|s| s.input.clone())
                    on:input=move |ev| search.update(|s| s.set_input(event_target_value(&ev)))
                    on:keydown=on_keydown
                    on:focus=move |_| {
                        if handles.results.with_untracked(|r| !r.is_empty()) {
                            handles.show_dropdown.set(true);
                        }
                    }
                />
            </div>
            <Show when=move || handles.show_dropdown.get() && handles.results.with(|r| !r.is_empty())>
                <div class="search-dropdown">
                    <For
                        each=move || handles.results.get()
                        key=|item| item.id.clone()
                        children=move |item| view! {
                            <SearchResultRow item=item on_select=move |item: Item| open_result.with_value(|open| open(item))/>
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn SearchResultRow(item: Item, #[prop(into)] on_select: Callback<Item>) -> impl IntoView {
    let subtitle = match (item.details.year, item.creator()) {
        (Some(year), Some(creator)) => format!("{} • {}", year, creator),
        (Some(year), None) => year.to_string(),
        (None, Some(creator)) => creator.to_string(),
        (None, None) => String::new(),
    };
    let img = item.img.clone();
    let title = item.title.clone();
    let item = store_value(item);

    view! {
        <div class="search-result" on:click=move |_| on_select.call(item.get_value())>
            <img src=img alt=format!("Capa de {}", title)/>
            <div class="search-result-text">
                <p class="search-result-title">{ title }</p>
                <p class="search-result-subtitle">{ subtitle }</p>
            </div>
        </div>
    }
}
