//! Student repository with optimistic-concurrency writes.
//!
//! # Responsibility
//! - Persist caller-keyed `students` rows.
//! - Reject writes based on a stale version read.
//!
//! # Invariants
//! - Inserted rows start at version 0.
//! - An update succeeds only if the stored version equals the record's
//!   version; the stored version then becomes `version + 1`.
//! - A rejected update leaves the stored row untouched.
//! - Version check and write run in one `IMMEDIATE` transaction, so writers
//!   on other connections are serialized.
//! - A NULL stored version (rows written by older clients) reads and compares
//!   as the initial version.

use super::sqlite::SqliteRosterRepository;
use super::{RepoError, RepoResult};
use crate::model::student::{Student, StudentId};
use log::{debug, warn};
use rusqlite::{params, OptionalExtension, Row, Transaction, TransactionBehavior};

const STUDENT_SELECT_SQL: &str = "SELECT
    studentId,
    name,
    division,
    section,
    fees,
    busFacility,
    COALESCE(version, 0) AS version
FROM students";

const INITIAL_VERSION: i64 = 0;

/// Repository interface for student records.
pub trait StudentRepository {
    /// Inserts a student and sets its version to the initial value.
    fn create_student(&self, student: &mut Student) -> RepoResult<StudentId>;
    fn get_student(&self, student_id: StudentId) -> RepoResult<Option<Student>>;
    /// Lists students ordered by `studentId`.
    fn list_students(&self) -> RepoResult<Vec<Student>>;
    /// Writes a student read earlier, advancing its version on success.
    ///
    /// # Errors
    /// - `Unversioned` when `student.version` is `None`.
    /// - `NotFound` when the row no longer exists.
    /// - `StaleVersion` when another writer advanced the row first.
    fn update_student(&self, student: &mut Student) -> RepoResult<i64>;
    fn delete_student(&self, student_id: StudentId) -> RepoResult<()>;
}

impl StudentRepository for SqliteRosterRepository<'_> {
    fn create_student(&self, student: &mut Student) -> RepoResult<StudentId> {
        self.conn.execute(
            "INSERT INTO students (
                studentId,
                name,
                division,
                section,
                fees,
                busFacility,
                version
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                student.student_id,
                student.name.as_deref(),
                student.division.as_deref(),
                student.section.as_deref(),
                student.fees,
                student.bus_facility.as_deref(),
                INITIAL_VERSION,
            ],
        )?;

        student.version = Some(INITIAL_VERSION);
        debug!(
            "event=student_create module=repo status=ok student_id={} version={INITIAL_VERSION}",
            student.student_id
        );
        Ok(student.student_id)
    }

    fn get_student(&self, student_id: StudentId) -> RepoResult<Option<Student>> {
        let student = self
            .conn
            .query_row(
                &format!("{STUDENT_SELECT_SQL} WHERE studentId = ?1;"),
                [student_id],
                parse_student_row,
            )
            .optional()?;
        Ok(student)
    }

    fn list_students(&self) -> RepoResult<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} ORDER BY studentId ASC;"))?;
        let rows = stmt.query_map([], parse_student_row)?;
        let mut students = Vec::new();
        for student in rows {
            students.push(student?);
        }
        Ok(students)
    }

    fn update_student(&self, student: &mut Student) -> RepoResult<i64> {
        let expected = student
            .version
            .ok_or(RepoError::Unversioned(student.student_id))?;
        let next = expected.checked_add(1).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "student {} version {expected} cannot be advanced",
                student.student_id
            ))
        })?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let changed = tx.execute(
            "UPDATE students
             SET
                name = ?1,
                division = ?2,
                section = ?3,
                fees = ?4,
                busFacility = ?5,
                version = ?6
             WHERE studentId = ?7 AND COALESCE(version, 0) = ?8;",
            params![
                student.name.as_deref(),
                student.division.as_deref(),
                student.section.as_deref(),
                student.fees,
                student.bus_facility.as_deref(),
                next,
                student.student_id,
                expected,
            ],
        )?;

        if changed == 0 {
            let stored: Option<i64> = tx
                .query_row(
                    "SELECT COALESCE(version, 0) FROM students WHERE studentId = ?1;",
                    [student.student_id],
                    |row| row.get(0),
                )
                .optional()?;
            drop(tx);

            return Err(match stored {
                None => RepoError::NotFound {
                    table: "students",
                    key: student.student_id.to_string(),
                },
                Some(actual) => {
                    warn!(
                        "event=student_update module=repo status=conflict student_id={} expected_version={expected} actual_version={actual}",
                        student.student_id
                    );
                    RepoError::StaleVersion {
                        student_id: student.student_id,
                        expected,
                        actual,
                    }
                }
            });
        }

        tx.commit()?;
        student.version = Some(next);
        debug!(
            "event=student_update module=repo status=ok student_id={} version={next}",
            student.student_id
        );
        Ok(next)
    }

    fn delete_student(&self, student_id: StudentId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM students WHERE studentId = ?1;", [student_id])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                table: "students",
                key: student_id.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_student_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        student_id: row.get("studentId")?,
        name: row.get("name")?,
        division: row.get("division")?,
        section: row.get("section")?,
        fees: row.get("fees")?,
        bus_facility: row.get("busFacility")?,
        version: row.get("version")?,
    })
}
