//! Location hierarchy commands
//!
//! Usage: roster location seed-example | roster location resolve <CITY_ID>

use clap::{Args, Subcommand};
use roster_core::db::open_db;
use roster_core::{City, District, LocationService, SqliteRosterRepository, State};
use std::path::Path;

#[derive(Debug, Args)]
pub struct LocationArgs {
    #[command(subcommand)]
    pub command: LocationCommand,
}

#[derive(Debug, Subcommand)]
pub enum LocationCommand {
    /// Insert Maharashtra / Pune / Pune City unless the state already exists
    SeedExample,
    /// Walk a city up to its district and state
    Resolve {
        /// Business id of the city
        city_id: i32,
    },
    /// List districts of a state
    Districts {
        /// Business id of the state
        state_id: i32,
    },
}

pub fn execute(db: &Path, args: LocationArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db(db)?;
    let service = LocationService::new(SqliteRosterRepository::try_new(&conn)?);

    match args.command {
        LocationCommand::SeedExample => {
            if service.state(1)?.is_some() {
                println!("example already present");
                return Ok(());
            }
            service.add_state(&mut State::new(1, "Maharashtra"))?;
            service.add_district(&mut District::new(10, "Pune", 1))?;
            service.add_city(&mut City::new(100, "Pune City", 10))?;
            println!("seeded state=1 district=10 city=100");
        }
        LocationCommand::Resolve { city_id } => match service.resolve_city(city_id)? {
            Some(location) => {
                println!(
                    "city={} name={}",
                    location.city.city_id,
                    location.city.city_name.as_deref().unwrap_or("-")
                );
                match &location.district {
                    Some(district) => println!(
                        "district={} name={}",
                        district.district_id,
                        district.district_name.as_deref().unwrap_or("-")
                    ),
                    None => println!("district={} unresolved", location.city.district_id),
                }
                match &location.state {
                    Some(state) => println!(
                        "state={} name={}",
                        state.state_id,
                        state.state_name.as_deref().unwrap_or("-")
                    ),
                    None => println!("state unresolved"),
                }
            }
            None => return Err(format!("city {city_id} not found").into()),
        },
        LocationCommand::Districts { state_id } => {
            for district in service.districts_of(state_id)? {
                println!(
                    "{}\t{}",
                    district.district_id,
                    district.district_name.as_deref().unwrap_or("-")
                );
            }
        }
    }

    Ok(())
}
