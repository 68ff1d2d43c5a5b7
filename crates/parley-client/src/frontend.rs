//! Line-oriented terminal front end.
//!
//! Stdin lines are parsed into [`FrontendCommand`]s and turned into
//! controller intents; every [`SessionEvent::Snapshot`] redraws the sidebar
//! and the active thread on stdout.

use std::ops::ControlFlow;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::commands::conversations::{create_conversation, list_conversations, select_conversation};
use crate::commands::messaging::send_message;
use crate::events::{SessionEvent, Snapshot};
use crate::input::{InputOutcome, InputSurface, KeyInput, RejectReason};
use crate::session::Session;
use crate::views;

pub const HELP: &str = "Type a message and press Enter to send. End a line with \\ to continue \
on the next line.\nCommands: /new  /select <n>  /list  /send  /json  /help  /quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontendCommand {
    New,
    /// 1-based position in the sidebar.
    Select(usize),
    List,
    Json,
    Send,
    Help,
    Quit,
    /// Free text; `continued` when the line ended with a backslash.
    Line { text: String, continued: bool },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Usage: /select <n>, where n is a conversation number from the list")]
    BadSelect,

    #[error("Unknown command: {0} (try /help)")]
    Unknown(String),
}

pub fn parse_line(line: &str) -> Result<FrontendCommand, CommandError> {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix('/') {
        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default();
        return match name {
            "new" => Ok(FrontendCommand::New),
            "select" => parts
                .next()
                .and_then(|n| n.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .map(FrontendCommand::Select)
                .ok_or(CommandError::BadSelect),
            "list" => Ok(FrontendCommand::List),
            "json" => Ok(FrontendCommand::Json),
            "send" => Ok(FrontendCommand::Send),
            "help" => Ok(FrontendCommand::Help),
            "quit" | "exit" => Ok(FrontendCommand::Quit),
            other => Err(CommandError::Unknown(format!("/{other}"))),
        };
    }

    // Keep the raw line so leading indentation survives in multi-line input.
    let line = line.trim_end_matches(['\r', '\n']);
    match line.strip_suffix('\\') {
        Some(text) => Ok(FrontendCommand::Line {
            text: text.to_string(),
            continued: true,
        }),
        None => Ok(FrontendCommand::Line {
            text: line.to_string(),
            continued: false,
        }),
    }
}

/// Apply one parsed command. Returns `Break` when the user asked to quit.
pub fn dispatch(
    session: &Session,
    input: &mut InputSurface,
    command: FrontendCommand,
) -> ControlFlow<()> {
    match command {
        FrontendCommand::New => {
            create_conversation(session);
        }
        FrontendCommand::Select(n) => match n
            .checked_sub(1)
            .and_then(|i| list_conversations(session).into_iter().nth(i))
        {
            Some(conv) => select_conversation(session, conv.id),
            None => println!("No conversation #{n}"),
        },
        FrontendCommand::List => print!("{}", views::sidebar::render(&session.snapshot())),
        FrontendCommand::Json => match serde_json::to_string_pretty(&session.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!(error = %e, "Failed to serialize snapshot"),
        },
        FrontendCommand::Send => {
            let outcome = input.handle_key(KeyInput::SubmitButton, session.is_awaiting_response());
            apply_outcome(session, outcome);
        }
        FrontendCommand::Help => println!("{HELP}"),
        FrontendCommand::Quit => return ControlFlow::Break(()),
        FrontendCommand::Line { text, continued } => {
            let awaiting = session.is_awaiting_response();
            // A kept draft continues on its own line.
            if !input.buffer().is_empty() && !input.buffer().ends_with('\n') {
                input.handle_key(KeyInput::Enter { modifier: true }, awaiting);
            }
            input.handle_key(KeyInput::Text(text), awaiting);
            let outcome = input.handle_key(KeyInput::Enter { modifier: continued }, awaiting);
            apply_outcome(session, outcome);
        }
    }
    ControlFlow::Continue(())
}

fn apply_outcome(session: &Session, outcome: InputOutcome) {
    match outcome {
        InputOutcome::Submit(text) => {
            if send_message(session, &text).is_none() {
                debug!("Nothing selected, submitted text dropped");
            }
        }
        InputOutcome::Rejected(RejectReason::AwaitingResponse) => {
            println!("Still waiting for the assistant; your text is kept. Use /send once it replies.");
        }
        InputOutcome::Rejected(RejectReason::Empty) | InputOutcome::Edited => {}
    }
}

fn draw(snapshot: &Snapshot, input: &InputSurface) {
    println!("\n{}", "=".repeat(60));
    print!("{}", views::sidebar::render(snapshot));
    println!("{}", "-".repeat(60));
    print!("{}", views::thread::render(snapshot));
    if !input.buffer().is_empty() {
        println!("[draft]\n{}", input.buffer());
        if input.can_submit(snapshot.is_awaiting_response) {
            println!("(/send to submit the draft)");
        }
    }
}

/// Run the terminal loop until `/quit` or end of input.
pub async fn run_terminal(
    session: Session,
    mut events: mpsc::Receiver<SessionEvent>,
) -> anyhow::Result<()> {
    let mut input = InputSurface::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}");
    session.publish();

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(SessionEvent::Snapshot(snapshot)) => draw(&snapshot, &input),
                Some(SessionEvent::ScrollToLatest { conversation_id }) => {
                    debug!(conversation = %conversation_id.short(), "Scroll to latest");
                }
                None => break,
            },
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_line(&line) {
                    Ok(command) => {
                        if dispatch(&session, &mut input, command).is_break() {
                            break;
                        }
                    }
                    Err(e) => println!("{e}"),
                }
            }
        }
    }

    info!("Front end stopped");
    Ok(())
}
