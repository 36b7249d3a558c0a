//! Tryout list page
//!
//! Loads the full list and the category options on mount; searching swaps
//! the list in place while a non-blocking overlay is shown.

use chrono::Local;
use leptos::prelude::*;
use tryout_core::TryoutApi;
use tryout_core::models::FilterOptions;
use tryout_core::result::ResultExt;
use tryout_core::views::list::{ListDisplay, TryoutListState};
use wasm_bindgen_futures::spawn_local;

use crate::api::{GlooApi, use_api};
use crate::components::{FilterForm, InlineError, TryoutCard};

/// Issue one list request for the applied filters.
fn fetch_list(api: StoredValue<GlooApi>, state: RwSignal<TryoutListState>) {
    let Some(query) = state.try_update(|s| s.begin_refresh(&Local)).flatten() else {
        return;
    };
    let api = api.get_value();
    spawn_local(async move {
        let result = api.list_tryouts(&query).await;
        state.update(|s| s.finish_fetch(result));
    });
}

#[component]
pub fn TryoutListPage() -> impl IntoView {
    let api = use_api();
    let state = RwSignal::new(TryoutListState::new());

    // Initial load: full list plus dropdown values
    Effect::new(move |_| {
        fetch_list(api, state);
        let api = api.get_value();
        spawn_local(async move {
            let options = api
                .filter_options()
                .await
                .or_default_logged("filter options", FilterOptions::default());
            state.update(|s| s.set_categories(&options));
        });
    });

    let on_search = Callback::new(move |()| {
        let today = Local::now().date_naive();
        if let Some(Ok(true)) = state.try_update(|s| s.apply(today)) {
            fetch_list(api, state);
        }
    });

    let on_reset = Callback::new(move |()| {
        if state.try_update(TryoutListState::reset) == Some(true) {
            fetch_list(api, state);
        }
    });

    let stale_error = Signal::derive(move || {
        state.with(|s| {
            s.error()
                .filter(|_| !s.tryouts().is_empty())
                .map(ToString::to_string)
        })
    });

    view! {
        <div class="tryout-list-page">
            <header class="page-header">
                <h1>"Tryouts"</h1>
                <p class="page-subtitle">"Browse and manage your tryouts"</p>
            </header>

            <section class="list-filters">
                <FilterForm state=state on_search=on_search on_reset=on_reset />
            </section>

            <InlineError message=stale_error />

            <section class="list-content">
                <Show when=move || state.with(TryoutListState::is_searching)>
                    <div class="search-overlay">"Searching..."</div>
                </Show>
                {move || {
                    state
                        .with(|s| match s.display() {
                            ListDisplay::Loading => {
                                view! { <p class="loading">"Loading tryouts..."</p> }.into_any()
                            }
                            ListDisplay::Failed(message) => {
                                view! { <p class="error-message">{message.to_string()}</p> }
                                    .into_any()
                            }
                            ListDisplay::NoMatches | ListDisplay::Empty => {
                                view! { <p class="empty-state">{s.empty_message()}</p> }.into_any()
                            }
                            ListDisplay::Items(tryouts) => {
                                let cards = tryouts
                                    .iter()
                                    .cloned()
                                    .map(|tryout| view! { <TryoutCard tryout=tryout /> })
                                    .collect_view();
                                view! { <div class="tryout-grid">{cards}</div> }.into_any()
                            }
                        })
                }}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_page_component_exists() {
        let _component = TryoutListPage;
    }
}
