//! CLI command definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use tryout_core::config::BASE_URL_ENV;

/// Tryout - quiz authoring from the terminal
#[derive(Parser, Debug)]
#[command(name = "tryout")]
#[command(version)]
#[command(about = "Browse and manage tryouts and their true/false questions")]
#[command(
    long_about = "Command-line client for the tryout REST API. Lists, filters, creates, edits and deletes tryouts and their questions."
)]
pub struct Cli {
    /// Base URL of the tryout API
    #[arg(long, global = true, env = BASE_URL_ENV)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tryouts, optionally filtered
    List {
        /// Title contains
        #[arg(short, long)]
        title: Option<String>,

        /// Exact category
        #[arg(short, long)]
        category: Option<String>,

        /// Created on or after this day (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Created on or before this day (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Show a tryout with its questions
    Show {
        /// Tryout id
        id: String,
    },

    /// List the known categories
    Categories,

    /// Create a tryout
    Create(TryoutArgs),

    /// Replace a tryout's fields; omitted fields keep their current value
    Update {
        /// Tryout id
        id: String,

        #[command(flatten)]
        fields: TryoutArgs,
    },

    /// Delete a tryout
    Delete {
        /// Tryout id
        id: String,

        /// Confirm the deletion
        #[arg(short, long, default_value_t = false)]
        yes: bool,
    },

    /// Manage questions of a tryout
    #[command(subcommand)]
    Question(QuestionCommands),
}

/// Tryout fields; all optional so `update` can keep current values
#[derive(Args, Debug, Default, Clone)]
pub struct TryoutArgs {
    #[arg(short, long)]
    pub title: Option<String>,

    #[arg(short, long)]
    pub description: Option<String>,

    /// A known category, or any new one
    #[arg(short, long)]
    pub category: Option<String>,

    /// Minutes
    #[arg(long)]
    pub duration: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum QuestionCommands {
    /// Add a question
    Add {
        /// Tryout id
        tryout_id: String,

        /// Question text
        #[arg(short, long)]
        text: Option<String>,

        /// Correct answer
        #[arg(short, long, value_enum)]
        answer: Option<Answer>,
    },

    /// Replace a question; omitted fields keep their current value
    Edit {
        tryout_id: String,
        question_id: String,

        #[arg(short, long)]
        text: Option<String>,

        #[arg(short, long, value_enum)]
        answer: Option<Answer>,
    },

    /// Delete a question
    Delete {
        tryout_id: String,
        question_id: String,

        /// Confirm the deletion
        #[arg(short, long, default_value_t = false)]
        yes: bool,
    },
}

/// True/false answer
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    True,
    False,
}

impl From<Answer> for bool {
    fn from(answer: Answer) -> Self {
        answer == Answer::True
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_filtered_list() {
        let cli = Cli::try_parse_from(["tryout", "list", "--category", "Math", "--from", "2024-01-05"]).unwrap();
        match cli.command {
            Commands::List { category, from, title, .. } => {
                assert_eq!(category.as_deref(), Some("Math"));
                assert_eq!(from.as_deref(), Some("2024-01-05"));
                assert_eq!(title, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_question_answer_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["tryout", "question", "add", "t1", "--text", "Ice floats"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Question(QuestionCommands::Add { answer: None, .. })
        ));
    }

    #[test]
    fn test_api_url_flag() {
        let cli = Cli::try_parse_from(["tryout", "--api-url", "http://api.test", "categories"]).unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://api.test"));
    }
}
