//! Employee / technology join table access.
//!
//! # Responsibility
//! - Maintain `emptechstack` rows pairing employee and tech business ids.
//!
//! # Invariants
//! - `assign` is idempotent per (employee, tech) pair.
//! - `replace_for_employee` is atomic: either the full new set is stored or
//!   the previous set remains.
//! - Stack rows are keyed by business id, which employees may share; they
//!   are only cleared once no employee row carries that id.

use super::record::{quoted, select_sql, Record};
use super::record_repo::{list_by_column, query_records};
use super::sqlite::SqliteRosterRepository;
use super::{RepoError, RepoResult};
use crate::model::catalog::{EmpTechStack, Tech};
use crate::model::SurrogateId;
use log::debug;
use rusqlite::types::Value;
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};

/// Repository interface for employee tech stacks.
pub trait TechStackRepository {
    /// Pairs an employee with a tech, returning the (possibly existing) row.
    fn assign(&self, employee_id: i32, tech_id: i32) -> RepoResult<EmpTechStack>;
    /// Removes a pairing. Returns whether any row was removed.
    fn unassign(&self, employee_id: i32, tech_id: i32) -> RepoResult<bool>;
    /// Lists the join rows of one employee in insertion order.
    fn stack_rows(&self, employee_id: i32) -> RepoResult<Vec<EmpTechStack>>;
    /// Lists technologies paired with an employee, ordered by `techId`.
    fn techs_for_employee(&self, employee_id: i32) -> RepoResult<Vec<Tech>>;
    /// Lists distinct employee business ids paired with a tech.
    fn employees_for_tech(&self, tech_id: i32) -> RepoResult<Vec<i32>>;
    /// Replaces an employee's full tech set.
    fn replace_for_employee(&self, employee_id: i32, tech_ids: &[i32]) -> RepoResult<()>;
    /// Removes every pairing of an employee. Returns the removed row count.
    fn clear_employee(&self, employee_id: i32) -> RepoResult<usize>;
    /// Deletes the employee row `id` and, if it was the last row with its
    /// business id, that id's stack rows. Returns the stack rows removed.
    ///
    /// # Errors
    /// - `NotFound` when no employee row has surrogate id `id`.
    fn remove_employee(&self, id: SurrogateId) -> RepoResult<usize>;
}

impl TechStackRepository for SqliteRosterRepository<'_> {
    fn assign(&self, employee_id: i32, tech_id: i32) -> RepoResult<EmpTechStack> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let row = assign_in(&tx, employee_id, tech_id)?;
        tx.commit()?;
        Ok(row)
    }

    fn unassign(&self, employee_id: i32, tech_id: i32) -> RepoResult<bool> {
        let removed = self.conn.execute(
            "DELETE FROM emptechstack WHERE employeeId = ?1 AND techId = ?2;",
            params![employee_id, tech_id],
        )?;
        Ok(removed > 0)
    }

    fn stack_rows(&self, employee_id: i32) -> RepoResult<Vec<EmpTechStack>> {
        list_by_column::<EmpTechStack>(self.conn, "employeeId", employee_id)
    }

    fn techs_for_employee(&self, employee_id: i32) -> RepoResult<Vec<Tech>> {
        query_records::<Tech>(
            self.conn,
            "SELECT DISTINCT
                t.id AS id,
                t.techId AS techId,
                t.techDescription AS techDescription
             FROM technology t
             INNER JOIN emptechstack s ON s.techId = t.techId
             WHERE s.employeeId = ?1
             ORDER BY t.techId ASC;",
            vec![Value::from(employee_id)],
        )
    }

    fn employees_for_tech(&self, tech_id: i32) -> RepoResult<Vec<i32>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT employeeId
             FROM emptechstack
             WHERE techId = ?1
             ORDER BY employeeId ASC;",
        )?;
        let mut rows = stmt.query([tech_id])?;
        let mut employee_ids = Vec::new();
        while let Some(row) = rows.next()? {
            employee_ids.push(row.get(0)?);
        }
        Ok(employee_ids)
    }

    fn replace_for_employee(&self, employee_id: i32, tech_ids: &[i32]) -> RepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let removed = tx.execute(
            "DELETE FROM emptechstack WHERE employeeId = ?1;",
            [employee_id],
        )?;
        for tech_id in tech_ids {
            assign_in(&tx, employee_id, *tech_id)?;
        }
        tx.commit()?;

        debug!(
            "event=tech_stack_replace module=repo status=ok employee_id={employee_id} removed={removed} requested={}",
            tech_ids.len()
        );
        Ok(())
    }

    fn clear_employee(&self, employee_id: i32) -> RepoResult<usize> {
        let removed = self.conn.execute(
            "DELETE FROM emptechstack WHERE employeeId = ?1;",
            [employee_id],
        )?;
        Ok(removed)
    }

    fn remove_employee(&self, id: SurrogateId) -> RepoResult<usize> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let business_id: Option<Option<i32>> = tx
            .query_row(
                "SELECT employee_Id FROM employees WHERE id = ?1;",
                [id],
                |row| row.get(0),
            )
            .optional()?;
        let Some(business_id) = business_id else {
            return Err(RepoError::NotFound {
                table: "employees",
                key: id.to_string(),
            });
        };

        tx.execute("DELETE FROM employees WHERE id = ?1;", [id])?;

        let mut cleared = 0;
        if let Some(employee_id) = business_id {
            let remaining: i64 = tx.query_row(
                "SELECT COUNT(*) FROM employees WHERE employee_Id = ?1;",
                [employee_id],
                |row| row.get(0),
            )?;
            if remaining == 0 {
                cleared = tx.execute(
                    "DELETE FROM emptechstack WHERE employeeId = ?1;",
                    [employee_id],
                )?;
            }
        }
        tx.commit()?;

        debug!(
            "event=employee_remove module=repo status=ok id={id} stack_rows_removed={cleared}"
        );
        Ok(cleared)
    }
}

fn assign_in(conn: &Connection, employee_id: i32, tech_id: i32) -> RepoResult<EmpTechStack> {
    let mut existing = query_records::<EmpTechStack>(
        conn,
        &format!(
            "{} WHERE {} = ?1 AND {} = ?2 ORDER BY {} ASC LIMIT 1;",
            select_sql::<EmpTechStack>(),
            quoted("employeeId"),
            quoted("techId"),
            quoted("id")
        ),
        vec![Value::from(employee_id), Value::from(tech_id)],
    )?;
    if let Some(row) = existing.pop() {
        return Ok(row);
    }

    let mut row = EmpTechStack::new(employee_id, tech_id);
    conn.execute(
        "INSERT INTO emptechstack (employeeId, techId) VALUES (?1, ?2);",
        params![employee_id, tech_id],
    )?;
    row.assign_surrogate_id(conn.last_insert_rowid());
    Ok(row)
}
