//! Line-based terminal front-end for a [`ChatSession`].
//!
//! Each assistant turn is printed as soon as it is appended. While a reply is
//! pending, including the opening exchange, a spinner runs and any line typed
//! is discarded, not queued.

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tracing::debug;

use crate::application::{AssistantBackend, ChatSession, PendingReply};
use crate::domain::{DomainError, PromptLocale, Role, Turn};

const QUIT_COMMAND: &str = "/quit";

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn render(turn: &Turn) -> String {
    let speaker = match turn.role() {
        Role::User => "you",
        Role::Assistant => "assistant",
    };
    format!("\n[{}]\n{}\n", speaker, turn.content())
}

/// Run an interactive session on stdin/stdout until `/quit` or end of input.
pub async fn run_terminal_chat(
    backend: &dyn AssistantBackend,
    locale: PromptLocale,
) -> Result<ChatSession> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    run_chat_loop(backend, locale, stdin, stdout, true).await
}

/// Drive a session from `input`, writing the transcript to `output`.
///
/// Returns the finished session so callers can inspect the conversation.
pub async fn run_chat_loop<R, W>(
    backend: &dyn AssistantBackend,
    locale: PromptLocale,
    input: R,
    mut output: W,
    show_spinner: bool,
) -> Result<ChatSession>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = ChatSession::new(locale);
    let mut lines = input.lines();
    let mut input_closed = false;

    output
        .write_all(format!("{}\n", locale.title()).as_bytes())
        .await?;

    if let Ok(pending) = session.begin_start() {
        let pb = show_spinner.then(spinner);
        let (profile, result) = await_discarding(
            async {
                let profile = backend.fetch_profile().await;
                (profile, backend.reply(pending.history()).await)
            },
            &mut session,
            &mut lines,
            &mut input_closed,
        )
        .await;
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        session.record_profile(profile);
        let turn = finish(&mut session, pending, result);
        let indicator = if session.profile_loaded() {
            "Profile loaded ✓\n"
        } else {
            ""
        };
        output
            .write_all(format!("{}{}", indicator, render(&turn)).as_bytes())
            .await?;
    }
    output
        .write_all(format!("({}, {} to exit)\n", locale.input_hint(), QUIT_COMMAND).as_bytes())
        .await?;
    output.flush().await?;

    while !input_closed {
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim() == QUIT_COMMAND {
            break;
        }

        let pending = match session.begin_send(&line) {
            Ok(pending) => pending,
            Err(rejection) => {
                debug!("Input rejected: {:?}", rejection);
                continue;
            }
        };

        let pb = show_spinner.then(spinner);
        let result = await_discarding(
            backend.reply(pending.history()),
            &mut session,
            &mut lines,
            &mut input_closed,
        )
        .await;
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        let turn = finish(&mut session, pending, result);
        output.write_all(render(&turn).as_bytes()).await?;
        output.flush().await?;
    }

    Ok(session)
}

/// Await `call` while reading and rejecting whatever is typed meanwhile.
/// End of input or a read error closes input but still lets `call` finish.
async fn await_discarding<F, R>(
    call: F,
    session: &mut ChatSession,
    lines: &mut Lines<R>,
    input_closed: &mut bool,
) -> F::Output
where
    F: Future,
    R: AsyncBufRead + Unpin,
{
    tokio::pin!(call);
    loop {
        tokio::select! {
            biased;
            output = &mut call => return output,
            line = lines.next_line(), if !*input_closed => {
                match line {
                    Ok(Some(text)) => discard_while_pending(session, &text),
                    _ => *input_closed = true,
                }
            }
        }
    }
}

fn discard_while_pending(session: &mut ChatSession, text: &str) {
    // The session is Loading or Sending, so this is always rejected.
    if let Err(rejection) = session.begin_send(text) {
        debug!("Input rejected while waiting for reply: {:?}", rejection);
    }
}

fn finish(
    session: &mut ChatSession,
    pending: PendingReply,
    result: Result<String, DomainError>,
) -> Turn {
    session.finish(pending, result).clone()
}
