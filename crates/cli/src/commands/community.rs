use brewguide_core::community::{BrewDraft, BrewId, CommentId, CommunityBoard, SharedBrew};
use brewguide_core::errors::ApplicationError;
use chrono::Utc;
use clap::Subcommand;
use serde::Serialize;
use uuid::Uuid;

use crate::commands::CommandResult;
use crate::context::AppContext;

pub const DEFAULT_LIST_LIMIT: usize = 10;

#[derive(Debug, Subcommand)]
pub enum CommunityAction {
    #[command(about = "Share a brew with the community")]
    Share {
        #[arg(long)]
        author: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        method: String,
        #[arg(long)]
        coffee: Option<String>,
        #[arg(long, default_value = "")]
        notes: String,
    },
    #[command(about = "Comment on a shared brew")]
    Comment {
        brew_id: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        body: String,
    },
    #[command(
        about = "Rate a shared brew from 1 to 5 stars; re-rating replaces your earlier rating"
    )]
    Rate {
        brew_id: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        stars: u8,
    },
    #[command(about = "List recent brews, or the best rated with --top")]
    List {
        #[arg(long, help = "Order by average rating instead of recency")]
        top: bool,
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,
    },
}

#[derive(Debug, Serialize)]
struct BrewSummary<'a> {
    #[serde(flatten)]
    brew: &'a SharedBrew,
    average_rating: Option<f64>,
}

#[derive(Debug, Serialize)]
struct CommunityOutput<'a> {
    action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    brews: Option<Vec<BrewSummary<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    brew_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    average_rating: Option<f64>,
}

impl<'a> CommunityOutput<'a> {
    fn new(action: &'static str) -> Self {
        Self { action, brews: None, brew_id: None, comment_id: None, average_rating: None }
    }
}

pub fn run(action: &CommunityAction) -> CommandResult {
    let context = match AppContext::load() {
        Ok(context) => context,
        Err(error) => return CommandResult::from_error("community", &error),
    };
    let mut board = match context.board() {
        Ok(board) => board,
        Err(error) => return CommandResult::from_error("community", &error),
    };

    match execute(action, &context, &mut board) {
        Ok(output) => CommandResult::data("community", &output),
        Err(error) => CommandResult::from_error("community", &error),
    }
}

fn execute<'a>(
    action: &CommunityAction,
    context: &AppContext,
    board: &'a mut CommunityBoard,
) -> Result<CommunityOutput<'a>, ApplicationError> {
    match action {
        CommunityAction::Share { author, title, method, coffee, notes } => {
            let draft = BrewDraft {
                author: author.clone(),
                title: title.clone(),
                method: method.clone(),
                coffee: coffee.clone(),
                notes: notes.clone(),
            };
            let id = BrewId(Uuid::new_v4().to_string());
            board.share_brew(draft, id.clone(), Utc::now())?;
            context.save_board(board)?;
            tracing::info!(
                event_name = "cli.community.brew_shared",
                brew_id = %id.0,
                "brew shared"
            );

            Ok(CommunityOutput { brew_id: Some(id.0), ..CommunityOutput::new("share") })
        }
        CommunityAction::Comment { brew_id, author, body } => {
            let brew_id = BrewId(brew_id.trim().to_string());
            let comment_id = CommentId(Uuid::new_v4().to_string());
            board.add_comment(&brew_id, author, body, comment_id.clone(), Utc::now())?;
            context.save_board(board)?;

            Ok(CommunityOutput {
                brew_id: Some(brew_id.0),
                comment_id: Some(comment_id.0),
                ..CommunityOutput::new("comment")
            })
        }
        CommunityAction::Rate { brew_id, author, stars } => {
            let brew_id = BrewId(brew_id.trim().to_string());
            let average = board.rate(&brew_id, author, *stars)?;
            context.save_board(board)?;

            Ok(CommunityOutput {
                brew_id: Some(brew_id.0),
                average_rating: Some(average),
                ..CommunityOutput::new("rate")
            })
        }
        CommunityAction::List { top, limit } => {
            let brews = if *top { board.top_rated(*limit) } else { board.recent(*limit) };
            let brews = brews
                .into_iter()
                .map(|brew| BrewSummary { brew, average_rating: brew.average_rating() })
                .collect();
            let action = if *top { "top" } else { "recent" };
            Ok(CommunityOutput { brews: Some(brews), ..CommunityOutput::new(action) })
        }
    }
}
