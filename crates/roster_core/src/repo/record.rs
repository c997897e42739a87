//! Table mapping for surrogate-keyed roster records.
//!
//! # Responsibility
//! - Describe, per record type, its table, columns, and row conversion.
//! - Build the SQL shared by the generic record repository.
//!
//! # Invariants
//! - `COLUMNS` lists data columns in bind order and excludes `id`.
//! - `column_values()` returns exactly one value per entry of `COLUMNS`.

use super::{RepoError, RepoResult};
use crate::model::catalog::{Designation, EmpTechStack, Tech};
use crate::model::employee::{Employee, RoleFlags};
use crate::model::geography::{City, District, State};
use crate::model::SurrogateId;
use rusqlite::types::Value;
use rusqlite::Row;

/// Surrogate key column shared by every mapped table.
pub const ID_COLUMN: &str = "id";

/// A record stored in its own table under a storage-assigned `id`.
pub trait Record: Sized {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn surrogate_id(&self) -> Option<SurrogateId>;
    fn assign_surrogate_id(&mut self, id: SurrogateId);
    fn column_values(&self) -> Vec<Value>;
    fn from_row(row: &Row<'_>) -> RepoResult<Self>;
}

/// A record that also carries a domain-meaningful integer id.
pub trait BusinessKeyed: Record {
    const BUSINESS_KEY: &'static str;
}

pub(crate) fn quoted(ident: &str) -> String {
    format!("\"{ident}\"")
}

pub(crate) fn select_sql<R: Record>() -> String {
    let columns = std::iter::once(ID_COLUMN)
        .chain(R::COLUMNS.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ");
    format!("SELECT {columns} FROM {}", quoted(R::TABLE))
}

pub(crate) fn insert_sql<R: Record>() -> String {
    let columns = R::COLUMNS
        .iter()
        .map(|column| quoted(column))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = (1..=R::COLUMNS.len())
        .map(|index| format!("?{index}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({columns}) VALUES ({placeholders});",
        quoted(R::TABLE)
    )
}

pub(crate) fn update_sql<R: Record>() -> String {
    let assignments = R::COLUMNS
        .iter()
        .enumerate()
        .map(|(index, column)| format!("{} = ?{}", quoted(column), index + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {assignments} WHERE {} = ?{};",
        quoted(R::TABLE),
        quoted(ID_COLUMN),
        R::COLUMNS.len() + 1
    )
}

pub(crate) fn delete_sql<R: Record>() -> String {
    format!(
        "DELETE FROM {} WHERE {} = ?1;",
        quoted(R::TABLE),
        quoted(ID_COLUMN)
    )
}

fn required_id(row: &Row<'_>, table: &str) -> RepoResult<SurrogateId> {
    row.get::<_, Option<SurrogateId>>(ID_COLUMN)?
        .ok_or_else(|| RepoError::InvalidData(format!("null {table}.{ID_COLUMN}")))
}

impl Record for State {
    const TABLE: &'static str = "statet";
    const COLUMNS: &'static [&'static str] = &["stateId", "stateName"];

    fn surrogate_id(&self) -> Option<SurrogateId> {
        self.id
    }

    fn assign_surrogate_id(&mut self, id: SurrogateId) {
        self.id = Some(id);
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            Value::from(self.state_id),
            Value::from(self.state_name.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(required_id(row, Self::TABLE)?),
            state_id: row.get("stateId")?,
            state_name: row.get("stateName")?,
        })
    }
}

impl BusinessKeyed for State {
    const BUSINESS_KEY: &'static str = "stateId";
}

impl Record for District {
    const TABLE: &'static str = "districtt";
    const COLUMNS: &'static [&'static str] = &["districtId", "districtName", "stateId"];

    fn surrogate_id(&self) -> Option<SurrogateId> {
        self.id
    }

    fn assign_surrogate_id(&mut self, id: SurrogateId) {
        self.id = Some(id);
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            Value::from(self.district_id),
            Value::from(self.district_name.clone()),
            Value::from(self.state_id),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(required_id(row, Self::TABLE)?),
            district_id: row.get("districtId")?,
            district_name: row.get("districtName")?,
            state_id: row.get("stateId")?,
        })
    }
}

impl BusinessKeyed for District {
    const BUSINESS_KEY: &'static str = "districtId";
}

impl Record for City {
    const TABLE: &'static str = "cityt";
    const COLUMNS: &'static [&'static str] = &["cityId", "cityName", "districtId"];

    fn surrogate_id(&self) -> Option<SurrogateId> {
        self.id
    }

    fn assign_surrogate_id(&mut self, id: SurrogateId) {
        self.id = Some(id);
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            Value::from(self.city_id),
            Value::from(self.city_name.clone()),
            Value::from(self.district_id),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(required_id(row, Self::TABLE)?),
            city_id: row.get("cityId")?,
            city_name: row.get("cityName")?,
            district_id: row.get("districtId")?,
        })
    }
}

impl BusinessKeyed for City {
    const BUSINESS_KEY: &'static str = "cityId";
}

impl Record for Designation {
    const TABLE: &'static str = "Designation";
    const COLUMNS: &'static [&'static str] = &["designationId", "designationName"];

    fn surrogate_id(&self) -> Option<SurrogateId> {
        self.id
    }

    fn assign_surrogate_id(&mut self, id: SurrogateId) {
        self.id = Some(id);
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            Value::from(self.designation_id),
            Value::from(self.designation_name.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(required_id(row, Self::TABLE)?),
            designation_id: row.get("designationId")?,
            designation_name: row.get("designationName")?,
        })
    }
}

impl BusinessKeyed for Designation {
    const BUSINESS_KEY: &'static str = "designationId";
}

impl Record for Tech {
    const TABLE: &'static str = "technology";
    const COLUMNS: &'static [&'static str] = &["techId", "techDescription"];

    fn surrogate_id(&self) -> Option<SurrogateId> {
        self.id
    }

    fn assign_surrogate_id(&mut self, id: SurrogateId) {
        self.id = Some(id);
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            Value::from(self.tech_id),
            Value::from(self.tech_description.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(required_id(row, Self::TABLE)?),
            tech_id: row.get("techId")?,
            tech_description: row.get("techDescription")?,
        })
    }
}

impl BusinessKeyed for Tech {
    const BUSINESS_KEY: &'static str = "techId";
}

impl Record for EmpTechStack {
    const TABLE: &'static str = "emptechstack";
    const COLUMNS: &'static [&'static str] = &["employeeId", "techId"];

    fn surrogate_id(&self) -> Option<SurrogateId> {
        self.id
    }

    fn assign_surrogate_id(&mut self, id: SurrogateId) {
        self.id = Some(id);
    }

    fn column_values(&self) -> Vec<Value> {
        vec![Value::from(self.employee_id), Value::from(self.tech_id)]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(required_id(row, Self::TABLE)?),
            employee_id: row.get("employeeId")?,
            tech_id: row.get("techId")?,
        })
    }
}

impl Record for Employee {
    const TABLE: &'static str = "employees";
    const COLUMNS: &'static [&'static str] = &[
        "employee_Id",
        "firstName",
        "lastName",
        "address1",
        "address2",
        "address3",
        "state",
        "district",
        "city",
        "pincode",
        "joiningDate",
        "gender",
        "admin",
        "reporting",
        "supervisor",
        "user",
        "designation",
    ];

    fn surrogate_id(&self) -> Option<SurrogateId> {
        self.id
    }

    fn assign_surrogate_id(&mut self, id: SurrogateId) {
        self.id = Some(id);
    }

    fn column_values(&self) -> Vec<Value> {
        vec![
            Value::from(self.employee_id),
            Value::from(self.first_name.clone()),
            Value::from(self.last_name.clone()),
            Value::from(self.address1.clone()),
            Value::from(self.address2.clone()),
            Value::from(self.address3.clone()),
            Value::from(self.state.clone()),
            Value::from(self.district.clone()),
            Value::from(self.city.clone()),
            Value::from(self.pincode),
            // ISO-8601 calendar date, the same text rusqlite's chrono reader expects.
            Value::from(
                self.joining_date
                    .map(|date| date.format("%Y-%m-%d").to_string()),
            ),
            Value::from(self.gender.clone()),
            Value::from(self.roles.admin),
            Value::from(self.roles.reporting),
            Value::from(self.roles.supervisor),
            Value::from(self.roles.user),
            Value::from(self.designation.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(required_id(row, Self::TABLE)?),
            employee_id: row.get("employee_Id")?,
            first_name: row.get("firstName")?,
            last_name: row.get("lastName")?,
            address1: row.get("address1")?,
            address2: row.get("address2")?,
            address3: row.get("address3")?,
            state: row.get("state")?,
            district: row.get("district")?,
            city: row.get("city")?,
            pincode: row.get("pincode")?,
            joining_date: row.get("joiningDate")?,
            gender: row.get("gender")?,
            roles: RoleFlags {
                admin: row.get("admin")?,
                reporting: row.get("reporting")?,
                supervisor: row.get("supervisor")?,
                user: row.get("user")?,
            },
            designation: row.get("designation")?,
        })
    }
}

impl BusinessKeyed for Employee {
    const BUSINESS_KEY: &'static str = "employee_Id";
}

#[cfg(test)]
mod tests {
    use super::{insert_sql, select_sql, update_sql, Record};
    use crate::model::employee::Employee;
    use crate::model::geography::State;

    #[test]
    fn generated_sql_quotes_legacy_identifiers() {
        assert_eq!(
            select_sql::<State>(),
            "SELECT \"id\", \"stateId\", \"stateName\" FROM \"statet\""
        );
        assert_eq!(
            insert_sql::<State>(),
            "INSERT INTO \"statet\" (\"stateId\", \"stateName\") VALUES (?1, ?2);"
        );
        assert_eq!(
            update_sql::<State>(),
            "UPDATE \"statet\" SET \"stateId\" = ?1, \"stateName\" = ?2 WHERE \"id\" = ?3;"
        );
    }

    #[test]
    fn employee_values_match_column_list() {
        let employee = Employee::new(7, "Ravi", "Kulkarni");
        assert_eq!(employee.column_values().len(), Employee::COLUMNS.len());
    }
}
