//! Interactive session handler.

use super::{ContentArgs, PLAN_NOT_SAVED, open_studio};
use captionstudio::{
    StudioSettings,
    render::{render_entry, render_history, render_plan},
};
use chrono::Utc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const HELP: &str = "Type a topic to generate captions.\n\
    :history      list this session's generations\n\
    :show <id>    show a previous generation\n\
    :plan         show plan and remaining quota\n\
    :quit         leave the session";

/// A line typed at the session prompt.
#[derive(Debug, PartialEq, Eq)]
enum SessionInput<'a> {
    Topic(&'a str),
    History,
    Show(Option<u64>),
    Plan,
    Help,
    Quit,
    Unknown(&'a str),
    Empty,
}

fn parse_input(line: &str) -> SessionInput<'_> {
    let line = line.trim();
    let Some(command) = line.strip_prefix(':') else {
        return if line.is_empty() {
            SessionInput::Empty
        } else {
            SessionInput::Topic(line)
        };
    };

    let mut words = command.split_whitespace();
    match words.next().unwrap_or_default() {
        "history" | "h" => SessionInput::History,
        "show" | "s" => SessionInput::Show(words.next().and_then(|id| id.parse().ok())),
        "plan" | "p" => SessionInput::Plan,
        "help" | "?" => SessionInput::Help,
        "quit" | "q" | "exit" => SessionInput::Quit,
        other => SessionInput::Unknown(other),
    }
}

/// Runs an interactive session until `:quit` or end of input.
///
/// History lives for the session only; plan state is saved after every
/// successful generation.
#[tracing::instrument(skip_all)]
pub async fn run_session(settings: &StudioSettings, content: ContentArgs) -> anyhow::Result<()> {
    let (mut studio, store) = open_studio(settings)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    println!("{}\n", HELP);
    tracing::info!("Session started");

    loop {
        stdout.write_all(b"topic> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_input(&line) {
            SessionInput::Empty => {}
            SessionInput::Quit => break,
            SessionInput::Help => println!("{}", HELP),
            SessionInput::Plan => print!("{}", render_plan(studio.plan())),
            SessionInput::History => {
                let history = studio.history();
                let selected = history.selected().map(|e| *e.id());
                print!("{}", render_history(history.entries(), selected, Utc::now()));
            }
            SessionInput::Show(Some(id)) => match studio.select(id) {
                Some(entry) => println!("{}", render_entry(entry, Utc::now())),
                None => println!("No generation with id {}.", id),
            },
            SessionInput::Show(None) => println!("Usage: :show <id>"),
            SessionInput::Unknown(command) => {
                println!("Unknown command ':{}'. Type :help for commands.", command)
            }
            SessionInput::Topic(topic) => {
                let params = content.to_params(topic).map_err(anyhow::Error::msg)?;
                let rendered = studio
                    .generate(params)
                    .await
                    .map(|entry| render_entry(entry, Utc::now()));
                match rendered {
                    Ok(text) => {
                        println!("{}", text);
                        if !store.save_or_warn(studio.plan()) {
                            eprintln!("{}", PLAN_NOT_SAVED);
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Session generation failed");
                        println!("{}", e.user_message());
                    }
                }
            }
        }
    }

    tracing::info!(generations = studio.history().len(), "Session ended");
    Ok(())
}
