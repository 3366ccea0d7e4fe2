//! Line commands typed at the prompt.

use anyhow::{anyhow, bail, Result};
use todo_table_core::{TodoId, TodoItem};

/// A row reference: either a full id or a 1-based row number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Id(TodoId),
    Row(usize),
}

impl Target {
    fn parse(raw: &str) -> Result<Self> {
        if let Ok(row) = raw.parse::<usize>() {
            return Ok(Target::Row(row));
        }
        raw.parse::<TodoId>()
            .map(Target::Id)
            .map_err(|_| anyhow!("`{raw}` is neither a row number nor an id"))
    }

    /// Resolve against the rows currently shown. Unknown ids are passed
    /// through so the client decides what to do with them.
    pub fn resolve(&self, todos: &[TodoItem]) -> Result<TodoId> {
        match self {
            Target::Id(id) => Ok(*id),
            Target::Row(row) => row
                .checked_sub(1)
                .and_then(|index| todos.get(index))
                .map(|item| item.id)
                .ok_or_else(|| anyhow!("no row {row}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load,
    Add(String),
    Done(Target),
    Undo(Target),
    Delete(Target),
    List,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  load             reload open todos from the service
  add <text>       create a todo
  done <row|id>    mark a todo done
  undo <row|id>    mark a todo not done
  delete <row|id>  delete a todo
  list             print the current rows
  help             show this help
  quit             exit";

/// Parse one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }
    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    let command = match word {
        "load" | "reload" => Command::Load,
        // The text is kept verbatim; an empty one is the client's no-op.
        "add" => Command::Add(rest.to_string()),
        "done" => Command::Done(Target::parse(rest.trim())?),
        "undo" => Command::Undo(Target::parse(rest.trim())?),
        "delete" | "rm" => Command::Delete(Target::parse(rest.trim())?),
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command `{other}` (try `help`)"),
    };
    Ok(Some(command))
}
