//! Administrative hierarchy use-case service.
//!
//! # Invariants
//! - Parent references are not checked on insert; a district may name a
//!   state that does not exist yet.

use crate::model::geography::{City, CityLocation, District, State};
use crate::model::SurrogateId;
use crate::repo::geography_repo::GeographyRepository;
use crate::repo::record_repo::RecordRepository;
use crate::repo::RepoResult;

/// Use-case service for states, districts and cities.
pub struct LocationService<R: RecordRepository + GeographyRepository> {
    repo: R,
}

impl<R: RecordRepository + GeographyRepository> LocationService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn add_state(&self, state: &mut State) -> RepoResult<SurrogateId> {
        self.repo.create(state)
    }

    pub fn add_district(&self, district: &mut District) -> RepoResult<SurrogateId> {
        self.repo.create(district)
    }

    pub fn add_city(&self, city: &mut City) -> RepoResult<SurrogateId> {
        self.repo.create(city)
    }

    pub fn states(&self) -> RepoResult<Vec<State>> {
        self.repo.list()
    }

    pub fn state(&self, state_id: i32) -> RepoResult<Option<State>> {
        self.repo.find_by_business_id(state_id)
    }

    pub fn districts_of(&self, state_id: i32) -> RepoResult<Vec<District>> {
        self.repo.districts_in_state(state_id)
    }

    pub fn cities_of(&self, district_id: i32) -> RepoResult<Vec<City>> {
        self.repo.cities_in_district(district_id)
    }

    /// Resolves the full location chain of a city by business id.
    pub fn resolve_city(&self, city_id: i32) -> RepoResult<Option<CityLocation>> {
        self.repo.resolve_city(city_id)
    }

    /// Returns the state a city belongs to, if every hop resolves.
    pub fn state_of_city(&self, city_id: i32) -> RepoResult<Option<State>> {
        Ok(self
            .repo
            .resolve_city(city_id)?
            .and_then(|location| location.state))
    }
}
