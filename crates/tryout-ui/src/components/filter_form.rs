//! Filter form for the tryout list
//!
//! Inputs edit the pending filters only; nothing is fetched until the form
//! is submitted.

use chrono::Local;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tryout_core::filters::DAY_FORMAT;
use tryout_core::views::list::TryoutListState;

#[component]
pub fn FilterForm(
    state: RwSignal<TryoutListState>,
    on_search: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let today = Local::now().date_naive().format(DAY_FORMAT).to_string();

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_search.run(());
    };

    view! {
        <form class="filter-form" on:submit=submit>
            <div class="form-group">
                <label for="filter-title">"Title"</label>
                <input
                    id="filter-title"
                    type="text"
                    placeholder="Search by title..."
                    prop:value=move || state.with(|s| s.pending.title.clone())
                    on:input=move |ev| state.update(|s| s.pending.title = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="filter-category">"Category"</label>
                <select
                    id="filter-category"
                    prop:value=move || state.with(|s| s.pending.category.clone())
                    on:change=move |ev| state.update(|s| s.pending.category = event_target_value(&ev))
                >
                    <option value="">"All categories"</option>
                    {move || {
                        state
                            .with(|s| s.categories().to_vec())
                            .into_iter()
                            .map(|category| {
                                let label = category.clone();
                                view! { <option value=category>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <div class="form-group">
                <label for="filter-start">"From"</label>
                <input
                    id="filter-start"
                    type="date"
                    max=today
                    prop:value=move || state.with(|s| s.pending.start_date.clone())
                    on:input=move |ev| state.update(|s| s.pending.start_date = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="filter-end">"To"</label>
                <input
                    id="filter-end"
                    type="date"
                    prop:value=move || state.with(|s| s.pending.end_date.clone())
                    on:input=move |ev| state.update(|s| s.pending.end_date = event_target_value(&ev))
                />
            </div>

            <div class="form-actions">
                <button type="submit" class="btn-primary">"Search"</button>
                <button type="button" class="btn-secondary" on:click=move |_| on_reset.run(())>
                    "Reset"
                </button>
            </div>

            <Show when=move || state.with(|s| s.validation().is_some())>
                <p class="validation-message">
                    {move || state.with(|s| s.validation().map(ToString::to_string).unwrap_or_default())}
                </p>
            </Show>
        </form>
    }
}
