//! Student commands

use clap::{Args, Subcommand};
use roster_core::db::open_db;
use roster_core::{SqliteRosterRepository, StudentService};
use std::path::Path;

#[derive(Debug, Args)]
pub struct StudentsArgs {
    #[command(subcommand)]
    pub command: StudentsCommand,
}

#[derive(Debug, Subcommand)]
pub enum StudentsCommand {
    /// List students ordered by id
    List,
    /// Delete one student
    Withdraw {
        student_id: i64,
    },
}

pub fn execute(db: &Path, args: StudentsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db(db)?;
    let service = StudentService::new(SqliteRosterRepository::try_new(&conn)?);

    match args.command {
        StudentsCommand::List => {
            for student in service.list()? {
                println!(
                    "{}\t{}\t{}/{}\tfees={}\tbus={}\tv{}",
                    student.student_id,
                    student.name.as_deref().unwrap_or("-"),
                    student.division.as_deref().unwrap_or("-"),
                    student.section.as_deref().unwrap_or("-"),
                    student.fees.unwrap_or_default(),
                    student.bus_facility.as_deref().unwrap_or("-"),
                    student.version.unwrap_or_default()
                );
            }
        }
        StudentsCommand::Withdraw { student_id } => {
            service.withdraw(student_id)?;
            println!("withdrawn student={student_id}");
        }
    }

    Ok(())
}
