pub mod location;
pub mod payroll;
pub mod students;

use roster_core::db::migrations::{current_user_version, latest_version};
use roster_core::db::open_db;
use std::path::Path;

/// Opens the database, which applies pending migrations, and reports the version.
pub fn migrate(db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db(db)?;
    println!(
        "schema_version={} latest={}",
        current_user_version(&conn)?,
        latest_version()
    );
    Ok(())
}
