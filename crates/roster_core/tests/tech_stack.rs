use roster_core::db::open_db_in_memory;
use roster_core::{
    Employee, EmployeeService, EmployeeServiceError, RecordRepository, RepoError,
    SqliteRosterRepository, Tech, TechStackRepository,
};

fn seed_techs(repo: &SqliteRosterRepository<'_>) {
    for (tech_id, description) in [(1, "Java"), (2, "React"), (3, "MySQL"), (4, "Rust")] {
        repo.create(&mut Tech::new(tech_id, description)).unwrap();
    }
}

fn tech_ids(techs: &[Tech]) -> Vec<i32> {
    techs.iter().map(|tech| tech.tech_id).collect()
}

#[test]
fn assign_is_idempotent_per_pair() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRosterRepository::try_new(&conn).unwrap();
    seed_techs(&repo);

    let first = repo.assign(1042, 2).unwrap();
    let second = repo.assign(1042, 2).unwrap();
    assert_eq!(first, second);
    assert_eq!(repo.stack_rows(1042).unwrap().len(), 1);

    assert!(repo.unassign(1042, 2).unwrap());
    assert!(!repo.unassign(1042, 2).unwrap());
}

#[test]
fn techs_and_employees_are_resolved_through_join_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRosterRepository::try_new(&conn).unwrap();
    seed_techs(&repo);

    repo.assign(1, 3).unwrap();
    repo.assign(1, 1).unwrap();
    repo.assign(2, 3).unwrap();
    // Tech 9 is not in the catalog; the pairing is kept but not resolved.
    repo.assign(1, 9).unwrap();

    assert_eq!(tech_ids(&repo.techs_for_employee(1).unwrap()), vec![1, 3]);
    assert_eq!(repo.employees_for_tech(3).unwrap(), vec![1, 2]);
    assert_eq!(repo.stack_rows(1).unwrap().len(), 3);
}

#[test]
fn replace_for_employee_swaps_full_set_and_dedupes() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRosterRepository::try_new(&conn).unwrap();
    seed_techs(&repo);

    repo.replace_for_employee(7, &[1, 2]).unwrap();
    repo.replace_for_employee(7, &[4, 3, 4]).unwrap();

    let rows = repo.stack_rows(7).unwrap();
    let paired: Vec<_> = rows.iter().map(|row| row.tech_id).collect();
    assert_eq!(paired, vec![4, 3]);

    assert_eq!(repo.clear_employee(7).unwrap(), 2);
    assert!(repo.techs_for_employee(7).unwrap().is_empty());
}

#[test]
fn onboarding_creates_employee_and_tech_stack() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRosterRepository::try_new(&conn).unwrap();
    seed_techs(&repo);
    let service = EmployeeService::new(repo);

    let mut employee = Employee::new(1042, "Meera", "Joshi");
    employee.roles.user = true;
    let id = service.onboard(&mut employee, &[2, 4]).unwrap();
    assert_eq!(employee.id, Some(id));

    let found = service.find_by_employee_id(1042).unwrap().unwrap();
    assert_eq!(found, employee);
    assert_eq!(tech_ids(&service.tech_stack(1042).unwrap()), vec![2, 4]);

    service.update_tech_stack(1042, &[1]).unwrap();
    assert_eq!(tech_ids(&service.tech_stack(1042).unwrap()), vec![1]);

    service.remove(id).unwrap();
    assert!(service.get(id).unwrap().is_none());
    assert!(service.tech_stack(1042).unwrap().is_empty());
    assert!(matches!(
        service.remove(id).unwrap_err(),
        EmployeeServiceError::EmployeeNotFound(missing) if missing == id
    ));
}

#[test]
fn onboarding_without_employee_id_rejects_tech_stack_before_writing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRosterRepository::try_new(&conn).unwrap();
    let service = EmployeeService::new(repo);

    let mut anonymous = Employee::default();
    let err = service.onboard(&mut anonymous, &[1]).unwrap_err();
    assert!(matches!(err, EmployeeServiceError::MissingEmployeeId));
    assert!(service.list().unwrap().is_empty());

    service.onboard(&mut anonymous, &[]).unwrap();
    assert_eq!(service.list().unwrap().len(), 1);
}

#[test]
fn removing_one_of_two_employees_sharing_an_id_keeps_the_stack() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRosterRepository::try_new(&conn).unwrap();
    seed_techs(&repo);
    let service = EmployeeService::new(repo);

    let mut first = Employee::new(42, "Asha", "Patil");
    let first_id = service.onboard(&mut first, &[1]).unwrap();
    let mut second = Employee::new(42, "Bhavna", "Patil");
    let second_id = service.onboard(&mut second, &[]).unwrap();

    service.remove(second_id).unwrap();
    assert!(service.get(first_id).unwrap().is_some());
    assert_eq!(tech_ids(&service.tech_stack(42).unwrap()), vec![1]);

    service.remove(first_id).unwrap();
    assert!(service.tech_stack(42).unwrap().is_empty());
}

#[test]
fn remove_employee_reports_cleared_rows_and_missing_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRosterRepository::try_new(&conn).unwrap();
    seed_techs(&repo);

    let mut employee = Employee::new(77, "Kiran", "Rao");
    let id = repo.create(&mut employee).unwrap();
    repo.replace_for_employee(77, &[2, 3]).unwrap();

    assert_eq!(repo.remove_employee(id).unwrap(), 2);
    assert!(repo.get::<Employee>(id).unwrap().is_none());
    assert!(matches!(
        repo.remove_employee(id).unwrap_err(),
        RepoError::NotFound { table: "employees", .. }
    ));
}
