//! CLI command handlers.
//!
//! Every handler drives the same state containers the browser uses, so
//! validation, request shapes and messages are identical on both surfaces.

use anyhow::{Result, anyhow, bail};
use chrono::Local;
use tracing::info;
use tryout_core::TryoutApi;
use tryout_core::display::{
    CARD_DESCRIPTION_CHARS, answer_label, format_date, format_duration, format_timestamp,
    truncate_description,
};
use tryout_core::models::{Question, Tryout};
use tryout_core::views::detail::{DeleteOutcome, NO_QUESTIONS_MESSAGE, Remote, TryoutDetailState};
use tryout_core::views::forms::{FormMode, QuestionFormState, TryoutFormState};
use tryout_core::views::list::{ListDisplay, TryoutListState};

use crate::cli::{Commands, QuestionCommands, TryoutArgs};

/// Refusal for tryouts that already have submissions
pub const LOCKED_TRYOUT_MESSAGE: &str = "This tryout has submissions and can no longer be edited";
pub const LOCKED_QUESTIONS_MESSAGE: &str =
    "This tryout has submissions; its questions can no longer be changed";

/// Execute a CLI command.
///
/// This is the main command dispatcher that routes to the appropriate handler.
///
/// # Errors
///
/// Returns the user-facing message of whatever failed.
pub async fn execute_command<A: TryoutApi + ?Sized>(api: &A, command: Commands) -> Result<()> {
    match command {
        Commands::List {
            title,
            category,
            from,
            to,
        } => cmd_list(api, title, category, from, to).await,
        Commands::Show { id } => cmd_show(api, &id).await,
        Commands::Categories => cmd_categories(api).await,
        Commands::Create(fields) => cmd_save_tryout(api, FormMode::Create, fields).await,
        Commands::Update { id, fields } => cmd_save_tryout(api, FormMode::Edit(id), fields).await,
        Commands::Delete { id, yes } => cmd_delete(api, &id, yes).await,
        Commands::Question(QuestionCommands::Add {
            tryout_id,
            text,
            answer,
        }) => {
            let answer = answer.map(bool::from);
            cmd_save_question(api, &tryout_id, FormMode::Create, text, answer).await
        }
        Commands::Question(QuestionCommands::Edit {
            tryout_id,
            question_id,
            text,
            answer,
        }) => {
            let mode = FormMode::Edit(question_id);
            cmd_save_question(api, &tryout_id, mode, text, answer.map(bool::from)).await
        }
        Commands::Question(QuestionCommands::Delete {
            tryout_id,
            question_id,
            yes,
        }) => cmd_delete_question(api, &tryout_id, &question_id, yes).await,
    }
}

async fn cmd_list<A: TryoutApi + ?Sized>(
    api: &A,
    title: Option<String>,
    category: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> Result<()> {
    let mut state = TryoutListState::new();
    state.pending.title = title.unwrap_or_default();
    state.pending.category = category.unwrap_or_default();
    state.pending.start_date = from.unwrap_or_default();
    state.pending.end_date = to.unwrap_or_default();

    state.apply(Local::now().date_naive())?;
    state.refresh(api, &Local).await;
    if let Some(message) = state.validation() {
        bail!("{message}");
    }

    match state.display() {
        ListDisplay::Loading => {}
        ListDisplay::Failed(message) => bail!("{message}"),
        ListDisplay::NoMatches | ListDisplay::Empty => println!("{}", state.empty_message()),
        ListDisplay::Items(tryouts) => tryouts.iter().for_each(print_card),
    }
    Ok(())
}

fn print_card(tryout: &Tryout) {
    println!("{}  {}", tryout.id, tryout.title);
    println!("    {}", truncate_description(&tryout.description, CARD_DESCRIPTION_CHARS));
    println!(
        "    {} | {} | created {}",
        tryout.category,
        format_duration(tryout.duration),
        format_date(&tryout.created_at, &Local)
    );
}

async fn cmd_show<A: TryoutApi + ?Sized>(api: &A, id: &str) -> Result<()> {
    let mut state = TryoutDetailState::new(id);
    state.load(api).await;

    let tryout = match state.tryout() {
        Remote::Loaded(tryout) => tryout,
        Remote::Failed(message) => bail!("{message}"),
        Remote::Idle | Remote::Loading => return Ok(()),
    };

    println!("{}", tryout.title);
    println!("{}", tryout.description);
    println!("Category:  {}", tryout.category);
    println!("Duration:  {}", format_duration(tryout.duration));
    println!("Created:   {}", format_timestamp(&tryout.created_at, &Local));
    println!("Updated:   {}", format_timestamp(&tryout.updated_at, &Local));
    if tryout.has_submission {
        println!("Locked:    this tryout has submissions and can no longer be edited");
    }
    println!();

    match state.questions() {
        Remote::Loaded(questions) if questions.is_empty() => println!("{NO_QUESTIONS_MESSAGE}"),
        Remote::Loaded(questions) => print_questions(questions),
        Remote::Failed(message) => println!("{message}"),
        Remote::Idle | Remote::Loading => {}
    }
    Ok(())
}

fn print_questions(questions: &[Question]) {
    println!("Questions ({})", questions.len());
    for (number, question) in questions.iter().enumerate() {
        println!("{:>3}. {}  [{}]", number + 1, question.text, answer_label(question.is_true));
        println!("     id: {}", question.id);
    }
}

/// Load a tryout the way the detail screen does, failing with its message.
async fn load_detail<A: TryoutApi + ?Sized>(api: &A, tryout_id: &str) -> Result<TryoutDetailState> {
    let mut state = TryoutDetailState::new(tryout_id);
    state.load(api).await;
    if let Remote::Failed(message) = state.tryout() {
        bail!("{message}");
    }
    Ok(state)
}

/// The detail screen hides question controls on a locked tryout; refuse here too.
async fn load_unlocked_questions<A: TryoutApi + ?Sized>(
    api: &A,
    tryout_id: &str,
) -> Result<TryoutDetailState> {
    let state = load_detail(api, tryout_id).await?;
    if !state.question_controls_visible() {
        bail!(LOCKED_QUESTIONS_MESSAGE);
    }
    Ok(state)
}

async fn cmd_categories<A: TryoutApi + ?Sized>(api: &A) -> Result<()> {
    let options = api.filter_options().await?;
    options.category_names().iter().for_each(|name| println!("{name}"));
    Ok(())
}

async fn cmd_save_tryout<A: TryoutApi + ?Sized>(
    api: &A,
    mode: FormMode,
    fields: TryoutArgs,
) -> Result<()> {
    if let FormMode::Edit(id) = &mode {
        if !load_detail(api, id).await?.tryout_editable() {
            bail!(LOCKED_TRYOUT_MESSAGE);
        }
    }

    let mut state = TryoutFormState::new(mode);
    state.load(api).await;
    if let Some(message) = state.error() {
        bail!("{message}");
    }

    if let Some(title) = fields.title {
        state.draft.title = title;
    }
    if let Some(description) = fields.description {
        state.draft.description = description;
    }
    if let Some(category) = fields.category {
        state.draft.category_choice = category;
        state.draft.custom_category.clear();
        state.reconcile_category();
    }
    if let Some(duration) = fields.duration {
        state.draft.duration = duration;
    }

    match state.submit(api).await {
        Some(_) => {
            info!(mode = ?state.mode(), "tryout saved");
            println!("Tryout saved");
            Ok(())
        }
        None => Err(anyhow!(state.error().unwrap_or("Tryout was not saved").to_string())),
    }
}

async fn cmd_delete<A: TryoutApi + ?Sized>(api: &A, id: &str, yes: bool) -> Result<()> {
    let mut state = load_detail(api, id).await?;
    let Some(title) = state.tryout().loaded().map(|t| t.title.clone()) else {
        return Ok(());
    };

    state.click_delete_tryout(api).await;
    if !yes {
        println!("Delete tryout '{title}'? Re-run with --yes to confirm.");
        return Ok(());
    }
    match state.click_delete_tryout(api).await {
        DeleteOutcome::Deleted => {
            println!("Tryout '{title}' deleted");
            Ok(())
        }
        DeleteOutcome::Failed(message) => bail!("{message}"),
        DeleteOutcome::Armed | DeleteOutcome::Ignored => Ok(()),
    }
}

async fn cmd_save_question<A: TryoutApi + ?Sized>(
    api: &A,
    tryout_id: &str,
    mode: FormMode,
    text: Option<String>,
    answer: Option<bool>,
) -> Result<()> {
    load_unlocked_questions(api, tryout_id).await?;

    let mut state = QuestionFormState::new(tryout_id, mode);
    state.load(api).await;
    if let Some(message) = state.error() {
        bail!("{message}");
    }

    if let Some(text) = text {
        state.draft.text = text;
    }
    if answer.is_some() {
        state.draft.answer = answer;
    }

    match state.submit(api).await {
        Some(_) => {
            println!("Question saved");
            Ok(())
        }
        None => Err(anyhow!(state.error().unwrap_or("Question was not saved").to_string())),
    }
}

async fn cmd_delete_question<A: TryoutApi + ?Sized>(
    api: &A,
    tryout_id: &str,
    question_id: &str,
    yes: bool,
) -> Result<()> {
    let mut state = load_unlocked_questions(api, tryout_id).await?;

    state.click_delete_question(api, question_id).await;
    if !yes {
        println!("Delete question {question_id}? Re-run with --yes to confirm.");
        return Ok(());
    }
    match state.click_delete_question(api, question_id).await {
        DeleteOutcome::Deleted => {
            println!("Question {question_id} deleted");
            Ok(())
        }
        DeleteOutcome::Failed(message) => bail!("{message}"),
        DeleteOutcome::Armed | DeleteOutcome::Ignored => Ok(()),
    }
}
