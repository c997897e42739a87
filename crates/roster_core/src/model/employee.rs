//! Employee record.
//!
//! # Responsibility
//! - Represent one organization member as stored in `employees`.
//!
//! # Invariants
//! - Location and designation are denormalized free text, not lookup ids.
//! - Role flags are independent; zero, one, or all four may be set.
//! - No field is validated here (negative pincode and future joining dates
//!   are storable).

use super::SurrogateId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Independent role flags carried by an employee.
///
/// All flags default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFlags {
    pub admin: bool,
    pub reporting: bool,
    pub supervisor: bool,
    pub user: bool,
}

impl RoleFlags {
    /// Returns whether at least one flag is set.
    pub fn any(&self) -> bool {
        self.count() > 0
    }

    /// Number of flags set. Informational only.
    pub fn count(&self) -> usize {
        [self.admin, self.reporting, self.supervisor, self.user]
            .into_iter()
            .filter(|flag| *flag)
            .count()
    }
}

/// One organization member.
///
/// `Employee::default()` is the no-argument shape: unassigned surrogate id,
/// every optional field `None`, every role flag `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Surrogate id; `None` until inserted.
    pub id: Option<SurrogateId>,
    /// Business id, stored in column `employee_Id`.
    pub employee_id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    /// State name as entered, not `State::state_id`.
    pub state: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<i32>,
    pub joining_date: Option<NaiveDate>,
    pub gender: Option<String>,
    #[serde(flatten)]
    pub roles: RoleFlags,
    /// Designation name as entered, not `Designation::designation_id`.
    pub designation: Option<String>,
}

impl Employee {
    /// Creates an employee with business id and name; everything else default.
    pub fn new(
        employee_id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: Some(employee_id),
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Joins the present name parts with a single space.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
