//! Line-oriented front-end driving a [`RuntimeHandle`].

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use career_runtime::{RuntimeError, RuntimeHandle, Topic};

use crate::command::{Command, HELP};
use crate::presentation;

/// Whether the loop keeps reading after a command.
enum Flow {
    Continue,
    Quit,
}

pub struct Repl {
    handle: RuntimeHandle,
    notifier: JoinHandle<()>,
}

impl Repl {
    pub fn new(handle: RuntimeHandle) -> Self {
        let notifier = spawn_notifier(&handle);
        Self { handle, notifier }
    }

    /// Reads stdin until EOF or `quit`.
    pub async fn run(self) -> Result<()> {
        println!("{HELP}");
        println!();
        println!("{}", presentation::status(&self.handle.query_state().await?));

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(error) => {
                    println!("{error}");
                    continue;
                }
            };

            match self.dispatch(command).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(error) => {
                    debug!(target: "client", error = %error, "Command failed");
                    println!("{}", describe(&error));
                }
            }
        }

        self.notifier.abort();
        Ok(())
    }

    async fn dispatch(&self, command: Command) -> Result<Flow> {
        let handle = &self.handle;
        match command {
            Command::Help => println!("{HELP}"),
            Command::Quit => return Ok(Flow::Quit),
            Command::Status => println!("{}", presentation::status(&handle.query_state().await?)),
            Command::Market => println!("{}", presentation::market(&handle.query_state().await?)),
            Command::Feed => println!("{}", presentation::feed(&handle.social_feed().await?)),
            Command::Danmu => {
                for line in handle.gather_danmu().await {
                    println!("  {line}");
                }
            }
            Command::Save => println!("saved at nonce {}", handle.save().await?),
            Command::Export => {
                let state = handle.query_state().await?;
                println!("{}", serde_json::to_string_pretty(&state)?);
            }
            Command::News => {
                handle.raise_macro_event().await?;
            }
            Command::Start {
                genre,
                tendency,
                title,
            } => {
                let title = match title {
                    Some(title) => title,
                    None => handle.suggest_title(genre, tendency).await?,
                };
                let id = handle.start_novel(&title, genre, tendency).await?;
                println!("{id} 《{title}》开坑");
            }
            Command::Write { mode, inspiration } => {
                let draft = handle.write_chapter(mode, inspiration).await?;
                println!("{}", presentation::outcome(&draft.outcome));
                if !draft.snippet.is_empty() {
                    println!("  {}", draft.snippet);
                }
            }
            Command::Revise(direction) => {
                let outcome = handle.revise_outline(&direction).await?;
                println!("{}", presentation::outcome(&outcome));
            }
            Command::NegotiateIp(novel) => {
                handle.negotiate_ip(novel).await?;
            }
            Command::Act(action) => {
                let outcome = handle.execute_action(action).await?;
                println!("{}", presentation::outcome(&outcome));
            }
        }
        Ok(Flow::Continue)
    }
}

/// Rejections read better without the error chain.
fn describe(error: &anyhow::Error) -> String {
    match error.downcast_ref::<RuntimeError>() {
        Some(RuntimeError::Execute(inner)) => format!("✗ {inner}"),
        Some(other) => format!("✗ {other}"),
        None => format!("✗ {error:#}"),
    }
}

/// Prints career and market notifications as they are published.
fn spawn_notifier(handle: &RuntimeHandle) -> JoinHandle<()> {
    let mut career = handle.subscribe(Topic::Career);
    let mut market = handle.subscribe(Topic::Market);

    tokio::spawn(async move {
        loop {
            let received = tokio::select! {
                event = career.recv() => event,
                event = market.recv() => event,
            };
            match received {
                Ok(event) => {
                    if let Some(line) = presentation::event(&event) {
                        println!("{line}");
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(target: "client", skipped, "Notifier lagged behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
