//! SQLite-backed roster repository handle.
//!
//! One handle implements every repository trait in this module tree; each
//! trait's SQL lives next to its contract.

use super::schema::ensure_connection_ready;
use super::RepoResult;
use rusqlite::Connection;

/// SQLite-backed roster repository borrowing a migrated connection.
#[derive(Clone, Copy)]
pub struct SqliteRosterRepository<'conn> {
    pub(crate) conn: &'conn Connection,
}

impl<'conn> SqliteRosterRepository<'conn> {
    /// Creates a repository from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were not applied.
    /// - `MissingRequiredTable` when a roster table is absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    /// Borrowed connection, for callers that need raw access.
    pub fn connection(&self) -> &'conn Connection {
        self.conn
    }
}
