//! Command dispatcher
//!
//! Tokenizes a line of input, looks the verb up in the [`CommandTable`],
//! and runs the matching handler against the [`Session`].

use tracing::debug;

use crate::commands::{clean_input, handlers, CommandKind, CommandTable};
use crate::error::{PokedexError, Result};
use crate::session::Session;

// == Reply ==
/// Output of a single command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    /// Lines to print, without trailing newlines
    pub lines: Vec<String>,
    /// Whether the REPL should stop after printing
    pub quit: bool,
}

impl Reply {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self::lines([line.into()])
    }

    pub fn lines(lines: impl IntoIterator<Item = String>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
            quit: false,
        }
    }

    pub fn quit(farewell: impl Into<String>) -> Self {
        Self {
            lines: vec![farewell.into()],
            quit: true,
        }
    }
}

// == Dispatcher ==
/// Routes input lines to command handlers.
#[derive(Debug)]
pub struct Dispatcher {
    table: CommandTable,
    session: Session,
}

impl Dispatcher {
    pub fn new(table: CommandTable, session: Session) -> Self {
        Self { table, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Gives back the session, e.g. to shut it down.
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Runs one line of input to completion.
    ///
    /// Blank input yields an empty reply. An unknown verb is an error.
    pub async fn dispatch(&mut self, line: &str) -> Result<Reply> {
        let words = clean_input(line);
        let Some((verb, args)) = words.split_first() else {
            return Ok(Reply::empty());
        };

        let kind = self
            .table
            .get(verb)
            .map(|spec| spec.kind)
            .ok_or_else(|| PokedexError::UnknownCommand(verb.clone()))?;
        debug!(command = %verb, ?args, "Dispatching command");

        let session = &mut self.session;
        match kind {
            CommandKind::Help => Ok(handlers::help(&self.table)),
            CommandKind::Exit => Ok(handlers::exit()),
            CommandKind::Map => handlers::map(session).await,
            CommandKind::MapBack => handlers::map_back(session).await,
            CommandKind::Explore => handlers::explore(session, args).await,
            CommandKind::Catch => handlers::catch(session, args).await,
            CommandKind::Inspect => handlers::inspect(session, args).await,
            CommandKind::Pokedex => handlers::pokedex(session).await,
            CommandKind::CacheStats => handlers::cache_stats(session).await,
        }
    }
}
