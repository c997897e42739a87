//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per area.
//! - Isolate SQL details from service orchestration.
//! - Enforce the optimistic-concurrency contract on `students`.
//!
//! # Invariants
//! - Repositories only operate on connections migrated to the latest schema.
//! - Storage constraint failures surface as `RepoError::ConstraintViolation`.
//! - Read paths reject rows that cannot be mapped instead of masking them.

use crate::db::DbError;
use crate::model::student::StudentId;
use rusqlite::ErrorCode;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod geography_repo;
pub mod record;
pub mod record_repo;
mod schema;
pub mod sqlite;
pub mod student_repo;
pub mod tech_stack_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for roster persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// NOT NULL or UNIQUE constraint rejected the write.
    ConstraintViolation(String),
    /// Target row does not exist.
    NotFound { table: &'static str, key: String },
    /// Stored student version differs from the version the caller read.
    StaleVersion {
        student_id: StudentId,
        expected: i64,
        actual: i64,
    },
    /// Update attempted with a student that carries no version.
    Unversioned(StudentId),
    /// Update or delete attempted on a record that was never inserted.
    Unassigned(&'static str),
    /// Business-id lookup matched more than one row.
    AmbiguousReference {
        table: &'static str,
        column: &'static str,
        value: i64,
    },
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Persisted data cannot be converted to a record.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::ConstraintViolation(message) => write!(f, "constraint violation: {message}"),
            Self::NotFound { table, key } => write!(f, "{table} row not found: {key}"),
            Self::StaleVersion {
                student_id,
                expected,
                actual,
            } => write!(
                f,
                "student {student_id} was modified concurrently: expected version {expected}, found {actual}"
            ),
            Self::Unversioned(student_id) => {
                write!(f, "student {student_id} has no version; read it before updating")
            }
            Self::Unassigned(table) => write!(f, "{table} record has no surrogate id yet"),
            Self::AmbiguousReference {
                table,
                column,
                value,
            } => write!(f, "{table}.{column} = {value} matches more than one row"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "roster repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "roster repository requires table `{table}`")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted roster data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(failure, message) = &value {
            if failure.code == ErrorCode::ConstraintViolation {
                return Self::ConstraintViolation(
                    message.clone().unwrap_or_else(|| failure.to_string()),
                );
            }
        }
        Self::Db(DbError::Sqlite(value))
    }
}

impl RepoError {
    /// Returns whether this error is an optimistic-concurrency conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::StaleVersion { .. })
    }
}
