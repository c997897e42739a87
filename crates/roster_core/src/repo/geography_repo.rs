//! State / district / city hierarchy queries.
//!
//! # Invariants
//! - Every hop matches business ids (`districtId`, `stateId`), never
//!   surrogate ids.
//! - Dangling references resolve to `None` rather than an error.

use super::record_repo::{find_unique_by_column, list_by_column};
use super::sqlite::SqliteRosterRepository;
use super::RepoResult;
use crate::model::geography::{City, CityLocation, District, State};

/// Repository interface for the administrative hierarchy.
pub trait GeographyRepository {
    /// Lists districts whose `stateId` equals `state_id`.
    fn districts_in_state(&self, state_id: i32) -> RepoResult<Vec<District>>;
    /// Lists cities whose `districtId` equals `district_id`.
    fn cities_in_district(&self, district_id: i32) -> RepoResult<Vec<City>>;
    /// Walks City -> District -> State starting at business `city_id`.
    ///
    /// Returns `Ok(None)` when the city does not exist.
    fn resolve_city(&self, city_id: i32) -> RepoResult<Option<CityLocation>>;
}

impl GeographyRepository for SqliteRosterRepository<'_> {
    fn districts_in_state(&self, state_id: i32) -> RepoResult<Vec<District>> {
        list_by_column::<District>(self.conn, "stateId", state_id)
    }

    fn cities_in_district(&self, district_id: i32) -> RepoResult<Vec<City>> {
        list_by_column::<City>(self.conn, "districtId", district_id)
    }

    fn resolve_city(&self, city_id: i32) -> RepoResult<Option<CityLocation>> {
        let Some(city) = find_unique_by_column::<City>(self.conn, "cityId", city_id)? else {
            return Ok(None);
        };

        let district =
            find_unique_by_column::<District>(self.conn, "districtId", city.district_id)?;
        let state = match &district {
            Some(district) => {
                find_unique_by_column::<State>(self.conn, "stateId", district.state_id)?
            }
            None => None,
        };

        Ok(Some(CityLocation {
            city,
            district,
            state,
        }))
    }
}
