//! Tryout detail page
//!
//! Header and question list load as separate requests. Every delete takes
//! two clicks; a deleted question is removed in place without a refetch.

use chrono::Local;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use tryout_core::TryoutApi;
use tryout_core::display::{answer_label, format_duration, format_timestamp};
use tryout_core::models::{Question, Tryout};
use tryout_core::views::confirm::ConfirmStep;
use tryout_core::views::detail::{
    DeleteOutcome, NO_QUESTIONS_MESSAGE, Remote, TryoutDetailState,
};
use tryout_core::views::nav;
use wasm_bindgen_futures::spawn_local;

use crate::api::use_api;
use crate::components::InlineError;
use crate::pages::required_param;
use crate::router::routes;

#[component]
pub fn TryoutDetailPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let navigate = use_navigate();
    let tryout_id = move || params.with(|p| required_param(p, routes::TRYOUT_ID));
    let state = RwSignal::new(TryoutDetailState::default());

    Effect::new(move |_| {
        let Ok(id) = tryout_id() else {
            return;
        };
        state.set(TryoutDetailState::new(id.clone()));
        let api = api.get_value();
        spawn_local(async move {
            let tryout = api.get_tryout(&id).await;
            if state.try_update(|s| s.finish_tryout(&id, tryout)) == Some(true) {
                let questions = api.list_questions(&id).await;
                state.update(|s| s.finish_questions(&id, questions));
            }
        });
    });

    let on_delete_tryout = move |_| {
        if state.try_update(TryoutDetailState::press_delete_tryout) != Some(ConfirmStep::Execute) {
            return;
        }
        let id = state.with_untracked(|s| s.tryout_id().to_string());
        let api = api.get_value();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api.delete_tryout(&id).await;
            if state.try_update(|s| s.finish_delete_tryout(result)) == Some(DeleteOutcome::Deleted) {
                navigate(nav::LIST, NavigateOptions::default());
            }
        });
    };

    let on_delete_question = Callback::new(move |question_id: String| {
        if state.try_update(|s| s.press_delete_question(&question_id)) != Some(ConfirmStep::Execute) {
            return;
        }
        let tryout_id = state.with_untracked(|s| s.tryout_id().to_string());
        let api = api.get_value();
        spawn_local(async move {
            let result = api.delete_question(&tryout_id, &question_id).await;
            state.update(|s| {
                s.finish_delete_question(&question_id, result);
            });
        });
    });

    let on_cancel_question = Callback::new(move |question_id: String| {
        state.update(|s| s.cancel_delete_question(&question_id));
    });

    let action_error = Signal::derive(move || state.with(|s| s.action_error().map(ToString::to_string)));

    view! {
        <div class="tryout-detail-page">
            <a class="back-link" href=nav::LIST>"← Back to Tryouts"</a>
            <InlineError message=action_error />
            {move || match tryout_id() {
                Err(e) => view! { <p class="error-message">{e.to_string()}</p> }.into_any(),
                Ok(_) => {
                    state
                        .with(|s| match s.tryout() {
                            Remote::Idle | Remote::Loading => {
                                view! { <p class="loading">"Loading tryout..."</p> }.into_any()
                            }
                            Remote::Failed(message) => {
                                view! { <p class="error-message">{message.clone()}</p> }.into_any()
                            }
                            Remote::Loaded(tryout) => {
                                view! {
                                    <TryoutHeader
                                        tryout=tryout.clone()
                                        editable=s.tryout_editable()
                                    />
                                }
                                    .into_any()
                            }
                        })
                }
            }}

            <Show when=move || state.with(|s| s.tryout().loaded().is_some())>
                <div class="tryout-actions">
                    <button
                        class="btn-danger"
                        on:click=on_delete_tryout.clone()
                        disabled=move || state.with(|s| s.tryout_delete().is_executing())
                    >
                        {move || state.with(|s| s.tryout_delete().button_label())}
                    </button>
                    <Show when=move || state.with(|s| s.tryout_delete().is_armed())>
                        <button
                            class="btn-secondary"
                            on:click=move |_| state.update(TryoutDetailState::cancel_delete_tryout)
                        >
                            "Cancel"
                        </button>
                    </Show>
                </div>

                <QuestionSection
                    state=state
                    on_delete=on_delete_question
                    on_cancel=on_cancel_question
                />
            </Show>
        </div>
    }
}

/// Title, full description, metadata and the (disabled) start button.
#[component]
fn TryoutHeader(tryout: Tryout, editable: bool) -> impl IntoView {
    let edit_href = nav::tryout_edit(&tryout.id);

    view! {
        <header class="tryout-header">
            <div class="header-title">
                <h1>{tryout.title}</h1>
                <span class="category-badge">{tryout.category}</span>
            </div>
            <p class="tryout-description">{tryout.description}</p>
            <dl class="tryout-meta">
                <dt>"Duration"</dt>
                <dd>{format_duration(tryout.duration)}</dd>
                <dt>"Created"</dt>
                <dd>{format_timestamp(&tryout.created_at, &Local)}</dd>
                <dt>"Last updated"</dt>
                <dd>{format_timestamp(&tryout.updated_at, &Local)}</dd>
            </dl>
            <div class="header-actions">
                <button class="btn-primary" disabled=true>"Start Tryout"</button>
                <Show when=move || editable>
                    <a class="btn-secondary" href=edit_href.clone()>"Edit Tryout"</a>
                </Show>
            </div>
            <Show when=move || !editable>
                <p class="locked-note">
                    "This tryout already has submissions and can no longer be edited."
                </p>
            </Show>
        </header>
    }
}

#[component]
fn QuestionSection(
    state: RwSignal<TryoutDetailState>,
    on_delete: Callback<String>,
    on_cancel: Callback<String>,
) -> impl IntoView {
    let controls = move || state.with(TryoutDetailState::question_controls_visible);
    let add_href = move || state.with(|s| nav::question_new(s.tryout_id()));

    view! {
        <section class="question-section">
            <div class="section-header">
                <h2>"Questions"</h2>
                <Show when=controls>
                    <a class="btn-primary" href=add_href>"+ Add Question"</a>
                </Show>
            </div>
            {move || {
                state
                    .with(|s| match s.questions() {
                        Remote::Idle => ().into_any(),
                        Remote::Loading => {
                            view! { <p class="loading">"Loading questions..."</p> }.into_any()
                        }
                        Remote::Failed(message) => {
                            view! { <p class="error-message">{message.clone()}</p> }.into_any()
                        }
                        Remote::Loaded(questions) if questions.is_empty() => {
                            view! { <p class="empty-state">{NO_QUESTIONS_MESSAGE}</p> }.into_any()
                        }
                        Remote::Loaded(questions) => {
                            let rows = questions
                                .iter()
                                .enumerate()
                                .map(|(index, question)| {
                                    view! {
                                        <QuestionRow
                                            number=index + 1
                                            question=question.clone()
                                            state=state
                                            on_delete=on_delete
                                            on_cancel=on_cancel
                                        />
                                    }
                                })
                                .collect_view();
                            view! { <ol class="question-list">{rows}</ol> }.into_any()
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn QuestionRow(
    number: usize,
    question: Question,
    state: RwSignal<TryoutDetailState>,
    on_delete: Callback<String>,
    on_cancel: Callback<String>,
) -> impl IntoView {
    let controls = move || state.with(TryoutDetailState::question_controls_visible);
    let edit_href = nav::question_edit(&question.tryout_id, &question.id);
    let confirmation = {
        let id = question.id.clone();
        move || state.with(|s| s.question_delete(&id))
    };
    let delete_id = question.id.clone();
    let cancel_id = question.id.clone();

    view! {
        <li class="question-row">
            <span class="question-number">{number}"."</span>
            <span class="question-text">{question.text}</span>
            <span class="answer-badge">{answer_label(question.is_true)}</span>
            <Show when=controls>
                <a class="btn-secondary" href=edit_href.clone()>"Edit"</a>
                <button
                    class="btn-danger"
                    on:click={
                        let id = delete_id.clone();
                        move |_| on_delete.run(id.clone())
                    }
                    disabled={
                        let confirmation = confirmation.clone();
                        move || confirmation().is_executing()
                    }
                >
                    {
                        let confirmation = confirmation.clone();
                        move || confirmation().button_label()
                    }
                </button>
                <Show when={
                    let confirmation = confirmation.clone();
                    move || confirmation().is_armed()
                }>
                    <button
                        class="btn-secondary"
                        on:click={
                            let id = cancel_id.clone();
                            move |_| on_cancel.run(id.clone())
                        }
                    >
                        "Cancel"
                    </button>
                </Show>
            </Show>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_components_exist() {
        let _page = TryoutDetailPage;
        let _header = TryoutHeader;
        let _section = QuestionSection;
        let _row = QuestionRow;
    }
}
