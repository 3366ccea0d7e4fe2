//! Prompt loop: one command per line. Scheduled reloads run when they fall
//! due, also while the loop is waiting for input.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use anyhow::Result;
use todo_table_core::{Renderer, TodoClient, Transport, View};
use tracing::debug;

use crate::commands::{self, Command, HELP};

/// Read `input` line by line on a helper thread, so the prompt loop can wait
/// for a line and for the next reload deadline at the same time.
pub fn spawn_reader<R>(input: R) -> Receiver<io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in input.lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Run commands from `lines` until `quit` or until the sender hangs up.
///
/// Failed operations have already been shown by the view, so they do not
/// end the loop; only I/O errors on the input or `output` do.
pub fn run<T, R, V>(
    client: &mut TodoClient<T, R, V>,
    lines: Receiver<io::Result<String>>,
    mut output: impl Write,
) -> Result<()>
where
    T: Transport,
    R: Renderer,
    V: View,
{
    prompt(&mut output)?;
    loop {
        let received = match client.next_reload() {
            Some(deadline) => {
                lines.recv_timeout(deadline.saturating_duration_since(Instant::now()))
            }
            None => lines.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        let line = match received {
            Ok(line) => line?,
            Err(RecvTimeoutError::Timeout) => {
                run_due_reloads(client);
                continue;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        };
        run_due_reloads(client);

        match commands::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => execute(client, command, &mut output)?,
            Ok(None) => {}
            Err(e) => writeln!(output, "{e}")?,
        }

        run_due_reloads(client);
        prompt(&mut output)?;
    }
    writeln!(output)?;
    Ok(())
}

fn prompt(output: &mut impl Write) -> io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}

fn run_due_reloads<T: Transport, R: Renderer, V: View>(client: &mut TodoClient<T, R, V>) {
    if let Err(e) = client.tick(Instant::now()) {
        debug!(error = %e, "scheduled reload failed");
    }
}

fn execute<T, R, V>(
    client: &mut TodoClient<T, R, V>,
    command: Command,
    output: &mut impl Write,
) -> Result<()>
where
    T: Transport,
    R: Renderer,
    V: View,
{
    let outcome: Result<()> = match command {
        Command::Load => client.load().map_err(Into::into),
        Command::Add(text) => client.add(&text).map(drop).map_err(Into::into),
        Command::Done(target) => target
            .resolve(client.todos())
            .and_then(|id| Ok(client.update(id, true)?))
            .map(drop),
        Command::Undo(target) => target
            .resolve(client.todos())
            .and_then(|id| Ok(client.update(id, false)?))
            .map(drop),
        Command::Delete(target) => target
            .resolve(client.todos())
            .and_then(|id| Ok(client.delete(id)?))
            .map(drop),
        Command::List => {
            print_rows(client, output)?;
            Ok(())
        }
        Command::Help => {
            writeln!(output, "{HELP}")?;
            Ok(())
        }
        Command::Quit => Ok(()),
    };
    // Client failures were already shown by the view; only report the
    // local ones (bad row numbers) here.
    if let Err(e) = outcome {
        if e.downcast_ref::<todo_table_core::ClientError>().is_none() {
            writeln!(output, "{e}")?;
        }
    }
    Ok(())
}

fn print_rows<T, R, V>(client: &TodoClient<T, R, V>, output: &mut impl Write) -> Result<()>
where
    T: Transport,
    R: Renderer,
    V: View,
{
    if client.todos().is_empty() {
        writeln!(output, "(no open todos)")?;
    }
    for (row, item) in client.todos().iter().enumerate() {
        let mark = if item.done { "x" } else { " " };
        writeln!(output, "{:>3}. [{mark}] {}  ({})", row + 1, item.text, item.id)?;
    }
    Ok(())
}
