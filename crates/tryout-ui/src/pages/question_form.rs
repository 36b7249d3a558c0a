//! Add/edit question page
//!
//! Both save and cancel return to the owning tryout.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use tryout_core::TryoutApi;
use tryout_core::views::forms::{FormMode, QuestionFormState, save_question};
use wasm_bindgen_futures::spawn_local;

use crate::api::use_api;
use crate::components::InlineError;
use crate::pages::required_param;
use crate::router::routes;

#[component]
pub fn QuestionFormPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let navigate = use_navigate();
    let (tryout_id, mode) = params.with_untracked(|p| {
        (
            required_param(p, routes::TRYOUT_ID),
            FormMode::from_param(p.get(routes::QUESTION_ID)),
        )
    });
    let Ok(tryout_id) = tryout_id else {
        return view! { <p class="error-message">"Tryout not found."</p> }.into_any();
    };
    let state = RwSignal::new(QuestionFormState::new(tryout_id, mode));

    Effect::new(move |_| {
        let (tryout_id, mode) = state.with_untracked(|s| (s.tryout_id().to_string(), s.mode().clone()));
        let FormMode::Edit(question_id) = mode else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            let result = api.get_question(&tryout_id, &question_id).await;
            state.update(|s| s.finish_load(result));
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(input)) = state.try_update(QuestionFormState::begin_submit) else {
            return;
        };
        let (tryout_id, mode) = state.with_untracked(|s| (s.tryout_id().to_string(), s.mode().clone()));
        let api = api.get_value();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = save_question(&api, &tryout_id, &mode, &input).await;
            if let Some(Some(target)) = state.try_update(|s| s.finish_submit(result)) {
                navigate(&target, NavigateOptions::default());
            }
        });
    };

    let busy = move || state.with(|s| s.is_loading() || s.is_submitting());
    let error = Signal::derive(move || state.with(|s| s.error().map(ToString::to_string)));
    let back = state.with_untracked(QuestionFormState::back_target);

    view! {
        <div class="form-page">
            <h1>{move || state.with(QuestionFormState::heading)}</h1>
            <InlineError message=error />
            <Show when=move || state.with(QuestionFormState::is_loading)>
                <p class="loading">"Loading question..."</p>
            </Show>

            <form class="question-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="question-text">"Question"</label>
                    <textarea
                        id="question-text"
                        rows="3"
                        placeholder="Write a statement that is either true or false..."
                        required=true
                        disabled=busy
                        prop:value=move || state.with(|s| s.draft.text.clone())
                        on:input=move |ev| state.update(|s| s.draft.text = event_target_value(&ev))
                    />
                </div>

                <fieldset class="form-group answer-group" disabled=busy>
                    <legend>"Correct answer"</legend>
                    <label>
                        <input
                            type="radio"
                            name="answer"
                            prop:checked=move || state.with(|s| s.draft.answer == Some(true))
                            on:change=move |_| state.update(|s| s.draft.answer = Some(true))
                        />
                        "True"
                    </label>
                    <label>
                        <input
                            type="radio"
                            name="answer"
                            prop:checked=move || state.with(|s| s.draft.answer == Some(false))
                            on:change=move |_| state.update(|s| s.draft.answer = Some(false))
                        />
                        "False"
                    </label>
                </fieldset>

                <div class="form-actions">
                    <a class="btn-secondary" href=back>"Cancel"</a>
                    <button type="submit" class="btn-primary" disabled=busy>
                        {move || state.with(QuestionFormState::submit_label)}
                    </button>
                </div>
            </form>
        </div>
    }
    .into_any()
}
