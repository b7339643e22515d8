use std::io::BufRead;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use vashantor_types::{AppEvent, Direction};

use crate::ui::HELP;

/// Current dialect and split, like the two selectors of a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub dialect: Option<String>,
    pub split: usize,
}

impl Selection {
    pub fn new(dialect: Option<String>, split: usize) -> Self {
        Self { dialect, split }
    }

    fn load_event(&self) -> AppEvent {
        AppEvent::Load {
            dialect: self.dialect.clone(),
            split: self.split,
        }
    }
}

#[derive(Debug, Clone)]
pub enum CommandOutcome {
    Send(AppEvent),
    Print(String),
    Nothing,
}

/// Interpret one input line, updating `selection` as a side effect
pub fn parse_command(line: &str, selection: &mut Selection) -> CommandOutcome {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return CommandOutcome::Nothing;
    };
    let args: Vec<&str> = words.collect();

    match command.to_ascii_lowercase().as_str() {
        "load" | "l" => {
            let mut args = args.as_slice();
            if let Some((last, rest)) = args.split_last() {
                if let Ok(split) = last.parse::<usize>() {
                    if split == 0 {
                        return CommandOutcome::Print(
                            "Split must be a positive number".to_string(),
                        );
                    }
                    selection.split = split;
                    args = rest;
                }
            }
            if !args.is_empty() {
                selection.dialect = Some(args.join(" "));
            }
            CommandOutcome::Send(selection.load_event())
        }
        "dialect" | "d" => {
            if args.is_empty() {
                selection.dialect = None;
                CommandOutcome::Print("Dialect cleared".to_string())
            } else {
                let name = args.join(" ");
                let message = format!("Dialect: {name}");
                selection.dialect = Some(name);
                CommandOutcome::Print(message)
            }
        }
        "split" | "s" => match args.first().map(|v| v.parse::<usize>()) {
            Some(Ok(split)) if split > 0 => {
                selection.split = split;
                CommandOutcome::Print(format!("Split: {split}"))
            }
            _ => CommandOutcome::Print("Split must be a positive number".to_string()),
        },
        "next" | "n" => CommandOutcome::Send(AppEvent::ChangePage(Direction::Next)),
        "prev" | "p" => CommandOutcome::Send(AppEvent::ChangePage(Direction::Previous)),
        "dialects" => CommandOutcome::Send(AppEvent::ListDialects),
        "help" | "?" => CommandOutcome::Print(HELP.to_string()),
        "quit" | "exit" | "q" => CommandOutcome::Send(AppEvent::Quit),
        other => CommandOutcome::Print(format!("Unknown command `{other}`, type `help`")),
    }
}

/// Forward stdin lines from a plain thread.
///
/// A blocked stdin read must not hold up runtime shutdown, so this does not
/// use the tokio blocking pool.
pub fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (tx, rx) = kanal::bounded::<String>(16);

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
        tracing::debug!("stdin reader finished");
    });

    rx.to_async()
}

/// Turn input lines into app events
pub async fn watcher_io(
    mut selection: Selection,
    lines_rx: AsyncReceiver<String>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines_rx.recv() => line,
        };

        let Ok(line) = line else {
            tracing::info!("Input closed");
            let _ = ui_to_app_tx.send(AppEvent::Quit).await;
            break;
        };

        match parse_command(&line, &mut selection) {
            CommandOutcome::Send(event) => {
                let quit = matches!(event, AppEvent::Quit);
                ui_to_app_tx.send(event).await?;
                if quit {
                    break;
                }
            }
            CommandOutcome::Print(message) => {
                app_to_ui_tx.send(AppEvent::Notice(message)).await?;
            }
            CommandOutcome::Nothing => {}
        }
    }

    Ok(())
}
