//! Designation and technology catalog service.
//!
//! Lookups are addressed by business id; removing a technology does not
//! touch existing tech-stack rows.

use crate::model::catalog::{Designation, Tech};
use crate::model::SurrogateId;
use crate::repo::record::{BusinessKeyed, Record};
use crate::repo::record_repo::RecordRepository;
use crate::repo::{RepoError, RepoResult};

/// Use-case service for designation and technology lookups.
pub struct CatalogService<R: RecordRepository> {
    repo: R,
}

impl<R: RecordRepository> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn add_designation(&self, designation: &mut Designation) -> RepoResult<SurrogateId> {
        self.repo.create(designation)
    }

    /// Renames the designation with business id `designation_id`.
    pub fn rename_designation(
        &self,
        designation_id: i32,
        name: impl Into<String>,
    ) -> RepoResult<Designation> {
        let mut designation = self.require::<Designation>(designation_id)?;
        designation.designation_name = Some(name.into());
        self.repo.update(&designation)?;
        Ok(designation)
    }

    pub fn list_designations(&self) -> RepoResult<Vec<Designation>> {
        self.repo.list()
    }

    pub fn remove_designation(&self, designation_id: i32) -> RepoResult<()> {
        let designation = self.require::<Designation>(designation_id)?;
        self.repo.delete::<Designation>(surrogate_of(&designation)?)
    }

    pub fn add_tech(&self, tech: &mut Tech) -> RepoResult<SurrogateId> {
        self.repo.create(tech)
    }

    /// Replaces the description of the tech with business id `tech_id`.
    pub fn describe_tech(
        &self,
        tech_id: i32,
        description: impl Into<String>,
    ) -> RepoResult<Tech> {
        let mut tech = self.require::<Tech>(tech_id)?;
        tech.tech_description = Some(description.into());
        self.repo.update(&tech)?;
        Ok(tech)
    }

    pub fn list_techs(&self) -> RepoResult<Vec<Tech>> {
        self.repo.list()
    }

    pub fn remove_tech(&self, tech_id: i32) -> RepoResult<()> {
        let tech = self.require::<Tech>(tech_id)?;
        self.repo.delete::<Tech>(surrogate_of(&tech)?)
    }

    fn require<T: BusinessKeyed>(&self, business_id: i32) -> RepoResult<T> {
        self.repo
            .find_by_business_id::<T>(business_id)?
            .ok_or_else(|| RepoError::NotFound {
                table: T::TABLE,
                key: business_id.to_string(),
            })
    }
}

fn surrogate_of<T: Record>(record: &T) -> RepoResult<SurrogateId> {
    record.surrogate_id().ok_or(RepoError::Unassigned(T::TABLE))
}
