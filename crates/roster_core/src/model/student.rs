//! Student billing/enrollment record.
//!
//! # Responsibility
//! - Represent one row of `students`, keyed by a caller-assigned id.
//! - Carry the optimistic-concurrency version read from storage.
//!
//! # Invariants
//! - `student_id` is never generated by storage.
//! - `version` is `None` until the record is inserted or read back, and is
//!   only advanced by the repository after a successful write.
//! - `bus_facility` is free text; `"yes"`/`"no"` are expected but any value
//!   is storable.

use serde::{Deserialize, Serialize};

/// Caller-assigned student identifier (`students.studentId`).
pub type StudentId = i64;

pub const BUS_FACILITY_YES: &str = "yes";
pub const BUS_FACILITY_NO: &str = "no";

/// One billing/enrollment record.
///
/// Required columns are modeled as `Option` so a missing value reaches
/// storage and is rejected there, mirroring the NOT NULL schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: StudentId,
    pub name: Option<String>,
    pub division: Option<String>,
    pub section: Option<String>,
    pub fees: Option<f64>,
    /// Expected `"yes"` or `"no"`.
    pub bus_facility: Option<String>,
    pub version: Option<i64>,
}

impl Student {
    /// Creates a fully populated, not-yet-persisted student.
    pub fn new(
        student_id: StudentId,
        name: impl Into<String>,
        division: impl Into<String>,
        section: impl Into<String>,
        fees: f64,
        bus_facility: impl Into<String>,
    ) -> Self {
        Self {
            student_id,
            name: Some(name.into()),
            division: Some(division.into()),
            section: Some(section.into()),
            fees: Some(fees),
            bus_facility: Some(bus_facility.into()),
            version: None,
        }
    }

    /// Interprets `bus_facility` as a flag.
    ///
    /// Returns `None` when unset or when the text is neither yes nor no.
    pub fn bus_facility_flag(&self) -> Option<bool> {
        let value = self.bus_facility.as_deref()?.trim();
        if value.eq_ignore_ascii_case(BUS_FACILITY_YES) {
            Some(true)
        } else if value.eq_ignore_ascii_case(BUS_FACILITY_NO) {
            Some(false)
        } else {
            None
        }
    }
}
