//! Domain records persisted by the roster schema.
//!
//! # Responsibility
//! - Define plain value records for lookup tables, people, and joins.
//! - Keep construction defaults explicit instead of implied.
//!
//! # Invariants
//! - Records never validate their own fields; storage enforces nullability.
//! - Cross-record references are copied business ids, never owned records.
//! - A surrogate id of `None` means "not yet persisted".

pub mod catalog;
pub mod employee;
pub mod geography;
pub mod payroll;
pub mod student;

/// Storage-assigned identity of a surrogate-keyed row.
pub type SurrogateId = i64;
