//! Create/edit tryout page
//!
//! `/tryout/new` creates, `/tryout/:id/edit` pre-fills and replaces.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use tryout_core::TryoutApi;
use tryout_core::result::ResultExt;
use tryout_core::views::forms::{FormMode, OTHER_CATEGORY, TryoutFormState, save_tryout};
use tryout_core::views::nav;
use wasm_bindgen_futures::spawn_local;

use crate::api::use_api;
use crate::components::InlineError;
use crate::router::routes;

#[component]
pub fn TryoutFormPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let navigate = use_navigate();
    let mode = FormMode::from_param(params.with_untracked(|p| p.get(routes::TRYOUT_ID)));
    let state = RwSignal::new(TryoutFormState::new(mode));

    Effect::new(move |_| {
        let api = api.get_value();
        spawn_local(async move {
            if let Some(options) = api.filter_options().await.into_option_logged("filter options") {
                state.update(|s| s.set_categories(&options));
            }
            let mode = state.with_untracked(|s| s.mode().clone());
            if let FormMode::Edit(id) = mode {
                let result = api.get_tryout(&id).await;
                state.update(|s| s.finish_load(result));
            }
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(input)) = state.try_update(TryoutFormState::begin_submit) else {
            return;
        };
        let mode = state.with_untracked(|s| s.mode().clone());
        let api = api.get_value();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = save_tryout(&api, &mode, &input).await;
            if let Some(Some(target)) = state.try_update(|s| s.finish_submit(result)) {
                navigate(&target, NavigateOptions::default());
            }
        });
    };

    let busy = move || state.with(|s| s.is_loading() || s.is_submitting());
    let error = Signal::derive(move || state.with(|s| s.error().map(ToString::to_string)));

    view! {
        <div class="form-page">
            <h1>{move || state.with(TryoutFormState::heading)}</h1>
            <InlineError message=error />
            <Show when=move || state.with(TryoutFormState::is_loading)>
                <p class="loading">"Loading tryout..."</p>
            </Show>

            <form class="tryout-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="title">"Title"</label>
                    <input
                        id="title"
                        type="text"
                        placeholder="Enter tryout title..."
                        required=true
                        disabled=busy
                        prop:value=move || state.with(|s| s.draft.title.clone())
                        on:input=move |ev| state.update(|s| s.draft.title = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="4"
                        placeholder="Describe what this tryout covers..."
                        required=true
                        disabled=busy
                        prop:value=move || state.with(|s| s.draft.description.clone())
                        on:input=move |ev| {
                            state.update(|s| s.draft.description = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="category">"Category"</label>
                        <select
                            id="category"
                            required=true
                            disabled=busy
                            prop:value=move || state.with(|s| s.draft.category_choice.clone())
                            on:change=move |ev| {
                                state.update(|s| s.draft.category_choice = event_target_value(&ev));
                            }
                        >
                            <option value="" disabled=true>"Select a category"</option>
                            {move || {
                                state
                                    .with(TryoutFormState::category_choices)
                                    .into_iter()
                                    .map(|choice| {
                                        let label = choice.clone();
                                        view! { <option value=choice>{label}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="duration">"Duration (minutes)"</label>
                        <input
                            id="duration"
                            type="number"
                            min="1"
                            required=true
                            disabled=busy
                            prop:value=move || state.with(|s| s.draft.duration.clone())
                            on:input=move |ev| {
                                state.update(|s| s.draft.duration = event_target_value(&ev));
                            }
                        />
                    </div>
                </div>

                <Show when=move || state.with(|s| s.draft.shows_custom_category())>
                    <div class="form-group">
                        <label for="custom-category">"New category"</label>
                        <input
                            id="custom-category"
                            type="text"
                            placeholder=OTHER_CATEGORY
                            disabled=busy
                            prop:value=move || state.with(|s| s.draft.custom_category.clone())
                            on:input=move |ev| {
                                state.update(|s| s.draft.custom_category = event_target_value(&ev));
                            }
                        />
                    </div>
                </Show>

                <div class="form-actions">
                    <a class="btn-secondary" href=nav::LIST>"Cancel"</a>
                    <button type="submit" class="btn-primary" disabled=busy>
                        {move || state.with(TryoutFormState::submit_label)}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tryout_form_component_exists() {
        let _component = TryoutFormPage;
    }
}
