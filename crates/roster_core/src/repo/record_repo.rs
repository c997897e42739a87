//! Generic CRUD over surrogate-keyed roster records.
//!
//! # Responsibility
//! - Insert, update, load, list, and delete any `Record`.
//! - Resolve records by business id for cross-table references.
//!
//! # Invariants
//! - `create` writes the storage-assigned id back into the record.
//! - `update`/`delete` report `NotFound` when no row changed.
//! - Listing order is deterministic: surrogate id ascending.

use super::record::{
    delete_sql, insert_sql, quoted, select_sql, update_sql, BusinessKeyed, Record, ID_COLUMN,
};
use super::sqlite::SqliteRosterRepository;
use super::{RepoError, RepoResult};
use crate::model::SurrogateId;
use log::debug;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};

/// Repository interface for surrogate-keyed record CRUD.
pub trait RecordRepository {
    /// Inserts a record and assigns its surrogate id.
    fn create<R: Record>(&self, record: &mut R) -> RepoResult<SurrogateId>;
    /// Overwrites every data column of an inserted record.
    fn update<R: Record>(&self, record: &R) -> RepoResult<()>;
    fn get<R: Record>(&self, id: SurrogateId) -> RepoResult<Option<R>>;
    fn list<R: Record>(&self) -> RepoResult<Vec<R>>;
    fn delete<R: Record>(&self, id: SurrogateId) -> RepoResult<()>;
    /// Loads the single record whose business id equals `business_id`.
    ///
    /// Returns `AmbiguousReference` when more than one row matches.
    fn find_by_business_id<R: BusinessKeyed>(&self, business_id: i32) -> RepoResult<Option<R>>;
}

impl RecordRepository for SqliteRosterRepository<'_> {
    fn create<R: Record>(&self, record: &mut R) -> RepoResult<SurrogateId> {
        self.conn
            .execute(&insert_sql::<R>(), params_from_iter(record.column_values()))?;
        let id = self.conn.last_insert_rowid();
        record.assign_surrogate_id(id);
        debug!(
            "event=record_create module=repo status=ok table={} id={id}",
            R::TABLE
        );
        Ok(id)
    }

    fn update<R: Record>(&self, record: &R) -> RepoResult<()> {
        let id = record
            .surrogate_id()
            .ok_or(RepoError::Unassigned(R::TABLE))?;

        let mut values = record.column_values();
        values.push(Value::Integer(id));
        let changed = self
            .conn
            .execute(&update_sql::<R>(), params_from_iter(values))?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                table: R::TABLE,
                key: id.to_string(),
            });
        }

        debug!(
            "event=record_update module=repo status=ok table={} id={id}",
            R::TABLE
        );
        Ok(())
    }

    fn get<R: Record>(&self, id: SurrogateId) -> RepoResult<Option<R>> {
        let mut found = query_records::<R>(
            self.conn,
            &format!("{} WHERE {} = ?1;", select_sql::<R>(), quoted(ID_COLUMN)),
            vec![Value::Integer(id)],
        )?;
        Ok(found.pop())
    }

    fn list<R: Record>(&self) -> RepoResult<Vec<R>> {
        query_records::<R>(
            self.conn,
            &format!("{} ORDER BY {} ASC;", select_sql::<R>(), quoted(ID_COLUMN)),
            Vec::new(),
        )
    }

    fn delete<R: Record>(&self, id: SurrogateId) -> RepoResult<()> {
        let changed = self.conn.execute(&delete_sql::<R>(), [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                table: R::TABLE,
                key: id.to_string(),
            });
        }

        debug!(
            "event=record_delete module=repo status=ok table={} id={id}",
            R::TABLE
        );
        Ok(())
    }

    fn find_by_business_id<R: BusinessKeyed>(&self, business_id: i32) -> RepoResult<Option<R>> {
        find_unique_by_column::<R>(self.conn, R::BUSINESS_KEY, business_id)
    }
}

/// Runs `sql` and maps every row into `R`.
pub(crate) fn query_records<R: Record>(
    conn: &Connection,
    sql: &str,
    bind_values: Vec<Value>,
) -> RepoResult<Vec<R>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params_from_iter(bind_values))?;
    let mut records = Vec::new();
    while let Some(row) = rows.next()? {
        records.push(R::from_row(row)?);
    }
    Ok(records)
}

/// Lists records whose `column` equals `value`, ordered by surrogate id.
pub(crate) fn list_by_column<R: Record>(
    conn: &Connection,
    column: &str,
    value: i32,
) -> RepoResult<Vec<R>> {
    query_records::<R>(
        conn,
        &format!(
            "{} WHERE {} = ?1 ORDER BY {} ASC;",
            select_sql::<R>(),
            quoted(column),
            quoted(ID_COLUMN)
        ),
        vec![Value::from(value)],
    )
}

/// Loads at most one record whose `column` equals `value`.
pub(crate) fn find_unique_by_column<R: Record>(
    conn: &Connection,
    column: &'static str,
    value: i32,
) -> RepoResult<Option<R>> {
    let mut found = query_records::<R>(
        conn,
        &format!(
            "{} WHERE {} = ?1 ORDER BY {} ASC LIMIT 2;",
            select_sql::<R>(),
            quoted(column),
            quoted(ID_COLUMN)
        ),
        vec![Value::from(value)],
    )?;

    if found.len() > 1 {
        return Err(RepoError::AmbiguousReference {
            table: R::TABLE,
            column,
            value: i64::from(value),
        });
    }
    Ok(found.pop())
}
