//! Designation and technology catalogs plus the employee/tech join record.

use super::SurrogateId;
use serde::{Deserialize, Serialize};

/// Job title lookup (`Designation` table).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Designation {
    pub id: Option<SurrogateId>,
    /// Unique business id.
    pub designation_id: i32,
    pub designation_name: Option<String>,
}

impl Designation {
    pub fn new(designation_id: i32, designation_name: impl Into<String>) -> Self {
        Self {
            id: None,
            designation_id,
            designation_name: Some(designation_name.into()),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Technology lookup (`technology` table).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tech {
    pub id: Option<SurrogateId>,
    /// Unique business id.
    pub tech_id: i32,
    pub tech_description: Option<String>,
}

impl Tech {
    pub fn new(tech_id: i32, tech_description: impl Into<String>) -> Self {
        Self {
            id: None,
            tech_id,
            tech_description: Some(tech_description.into()),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// One (employee, tech) pairing (`emptechstack` table).
///
/// `employee_id` is the employee's business id (`employees.employee_Id`),
/// `tech_id` is `Tech::tech_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmpTechStack {
    pub id: Option<SurrogateId>,
    pub employee_id: i32,
    pub tech_id: i32,
}

impl EmpTechStack {
    pub fn new(employee_id: i32, tech_id: i32) -> Self {
        Self {
            id: None,
            employee_id,
            tech_id,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
