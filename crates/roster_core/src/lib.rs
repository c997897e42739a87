//! Core persistence layer for the roster schema.
//! Records, SQLite migrations, repositories, and use-case services for
//! employees, students, and their lookup tables.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::catalog::{Designation, EmpTechStack, Tech};
pub use model::employee::{Employee, RoleFlags};
pub use model::geography::{City, CityLocation, District, State};
pub use model::payroll::{SalaryInput, SalarySlip};
pub use model::student::{Student, StudentId, BUS_FACILITY_NO, BUS_FACILITY_YES};
pub use model::SurrogateId;
pub use repo::geography_repo::GeographyRepository;
pub use repo::record::{BusinessKeyed, Record};
pub use repo::record_repo::RecordRepository;
pub use repo::sqlite::SqliteRosterRepository;
pub use repo::student_repo::StudentRepository;
pub use repo::tech_stack_repo::TechStackRepository;
pub use repo::{RepoError, RepoResult};
pub use service::catalog_service::CatalogService;
pub use service::employee_service::{
    EmployeeService, EmployeeServiceError, EmployeeServiceResult,
};
pub use service::location_service::LocationService;
pub use service::payroll_service::compute_salary_slip;
pub use service::student_service::StudentService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
