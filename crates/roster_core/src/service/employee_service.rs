//! Employee use-case service.
//!
//! # Responsibility
//! - Onboard employees together with their tech stack.
//! - Keep tech-stack rows in step with employee removal.
//! - Never clear a stack still owned by an employee sharing the business id.
//!
//! # Invariants
//! - Tech-stack rows reference the employee business id, so an employee
//!   without `employee_id` cannot carry a tech stack.
//! - Role flags and free-text fields pass through unvalidated.

use crate::model::catalog::Tech;
use crate::model::employee::Employee;
use crate::model::SurrogateId;
use crate::repo::record_repo::RecordRepository;
use crate::repo::tech_stack_repo::TechStackRepository;
use crate::repo::RepoError;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from employee service operations.
#[derive(Debug)]
pub enum EmployeeServiceError {
    /// Tech stack requested for an employee without business id.
    MissingEmployeeId,
    /// Target employee does not exist.
    EmployeeNotFound(SurrogateId),
    /// Repository-level failure.
    Repo(RepoError),
}

impl Display for EmployeeServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEmployeeId => {
                write!(f, "employee needs an employee id to carry a tech stack")
            }
            Self::EmployeeNotFound(id) => write!(f, "employee not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EmployeeServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::MissingEmployeeId | Self::EmployeeNotFound(_) => None,
        }
    }
}

impl From<RepoError> for EmployeeServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub type EmployeeServiceResult<T> = Result<T, EmployeeServiceError>;

/// Use-case service for employees and their tech stacks.
pub struct EmployeeService<R: RecordRepository + TechStackRepository> {
    repo: R,
}

impl<R: RecordRepository + TechStackRepository> EmployeeService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts an employee, then pairs it with `tech_ids`.
    ///
    /// # Contract
    /// - Assigns the surrogate id into `employee`.
    /// - Fails with `MissingEmployeeId` before writing anything when techs
    ///   are requested for an employee without business id.
    pub fn onboard(
        &self,
        employee: &mut Employee,
        tech_ids: &[i32],
    ) -> EmployeeServiceResult<SurrogateId> {
        if !tech_ids.is_empty() && employee.employee_id.is_none() {
            return Err(EmployeeServiceError::MissingEmployeeId);
        }

        let id = self.repo.create(employee)?;
        if let Some(employee_id) = employee.employee_id {
            if !tech_ids.is_empty() {
                self.repo.replace_for_employee(employee_id, tech_ids)?;
            }
        }

        info!(
            "event=employee_onboard module=service status=ok id={id} techs={}",
            tech_ids.len()
        );
        Ok(id)
    }

    pub fn update(&self, employee: &Employee) -> EmployeeServiceResult<()> {
        self.repo.update(employee)?;
        Ok(())
    }

    /// Replaces the tech stack of the employee with business id `employee_id`.
    pub fn update_tech_stack(
        &self,
        employee_id: i32,
        tech_ids: &[i32],
    ) -> EmployeeServiceResult<()> {
        self.repo.replace_for_employee(employee_id, tech_ids)?;
        Ok(())
    }

    pub fn get(&self, id: SurrogateId) -> EmployeeServiceResult<Option<Employee>> {
        Ok(self.repo.get::<Employee>(id)?)
    }

    pub fn find_by_employee_id(
        &self,
        employee_id: i32,
    ) -> EmployeeServiceResult<Option<Employee>> {
        Ok(self.repo.find_by_business_id::<Employee>(employee_id)?)
    }

    pub fn list(&self) -> EmployeeServiceResult<Vec<Employee>> {
        Ok(self.repo.list::<Employee>()?)
    }

    /// Technologies paired with the employee with business id `employee_id`.
    pub fn tech_stack(&self, employee_id: i32) -> EmployeeServiceResult<Vec<Tech>> {
        Ok(self.repo.techs_for_employee(employee_id)?)
    }

    /// Deletes an employee by surrogate id.
    ///
    /// Tech-stack rows go with it unless another employee still shares the
    /// business id.
    pub fn remove(&self, id: SurrogateId) -> EmployeeServiceResult<()> {
        let cleared = match self.repo.remove_employee(id) {
            Ok(cleared) => cleared,
            Err(RepoError::NotFound { .. }) => {
                return Err(EmployeeServiceError::EmployeeNotFound(id))
            }
            Err(err) => return Err(err.into()),
        };

        info!("event=employee_remove module=service status=ok id={id} techs_cleared={cleared}");
        Ok(())
    }
}
