//! Student use-case service.
//!
//! Conflicts are surfaced to the caller unchanged; nothing here retries a
//! rejected write.

use crate::model::student::{Student, StudentId};
use crate::repo::student_repo::StudentRepository;
use crate::repo::{RepoError, RepoResult};

/// Use-case service wrapper for student records.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts a new student; the record comes back at version 0.
    pub fn enroll(&self, student: &mut Student) -> RepoResult<StudentId> {
        self.repo.create_student(student)
    }

    pub fn get(&self, student_id: StudentId) -> RepoResult<Option<Student>> {
        self.repo.get_student(student_id)
    }

    pub fn list(&self) -> RepoResult<Vec<Student>> {
        self.repo.list_students()
    }

    /// Writes back a previously read student.
    pub fn save(&self, student: &mut Student) -> RepoResult<i64> {
        self.repo.update_student(student)
    }

    /// Reads the current row, applies `change`, and writes it back.
    ///
    /// `change` cannot move the record to another student id.
    pub fn modify(
        &self,
        student_id: StudentId,
        change: impl FnOnce(&mut Student),
    ) -> RepoResult<Student> {
        let mut student = self
            .repo
            .get_student(student_id)?
            .ok_or_else(|| RepoError::NotFound {
                table: "students",
                key: student_id.to_string(),
            })?;

        change(&mut student);
        student.student_id = student_id;
        self.repo.update_student(&mut student)?;
        Ok(student)
    }

    pub fn withdraw(&self, student_id: StudentId) -> RepoResult<()> {
        self.repo.delete_student(student_id)
    }
}
