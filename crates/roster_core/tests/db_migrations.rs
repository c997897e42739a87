use roster_core::db::migrations::latest_version;
use roster_core::db::{open_db, open_db_in_memory, DbError};
use roster_core::{RepoError, SqliteRosterRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    for table in [
        "statet",
        "districtt",
        "cityt",
        "Designation",
        "technology",
        "emptechstack",
        "employees",
        "students",
    ] {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn legacy_column_names_are_preserved() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(
        column_names(&conn, "employees"),
        vec![
            "id",
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
        ]
    );
    assert_eq!(
        column_names(&conn, "students"),
        vec![
            "studentId",
            "name",
            "division",
            "section",
            "fees",
            "busFacility",
            "version",
        ]
    );
    assert_eq!(
        column_names(&conn, "cityt"),
        vec!["id", "cityId", "cityName", "districtId"]
    );
}

#[test]
fn not_null_columns_match_legacy_schema() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(not_null_columns(&conn, "employees"), vec!["admin"]);
    assert_eq!(
        not_null_columns(&conn, "students"),
        vec!["name", "division", "section", "fees", "busFacility"]
    );
    assert!(not_null_columns(&conn, "statet").is_empty());
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "students");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repository_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let err = SqliteRosterRepository::try_new(&conn).err().unwrap();
    assert!(matches!(
        err,
        RepoError::UninitializedConnection {
            actual_version: 0,
            ..
        }
    ));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}

fn column_names(conn: &Connection, table: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info(\"{table}\");"))
        .unwrap();
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .unwrap()
        .map(Result::unwrap)
        .collect();
    names
}

fn not_null_columns(conn: &Connection, table: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info(\"{table}\");"))
        .unwrap();
    let names = stmt
        .query_map([], |row| Ok((row.get::<_, String>(1)?, row.get::<_, i64>(3)?)))
        .unwrap()
        .map(Result::unwrap)
        .filter(|(_, not_null)| *not_null == 1)
        .map(|(name, _)| name)
        .collect();
    names
}
