//! In-memory record store
//!
//! One `Store` owns the course, student and grade collections and is handed
//! to the GraphQL schema as context data. Each collection has its own lock;
//! id assignment and append happen under a single write guard.

mod collection;
mod seed;

pub use collection::{Collection, Table};
pub use seed::{SeedData, COURSES_FILE, GRADES_FILE, STUDENTS_FILE};

use crate::model::{Course, Grade, Student};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub courses: usize,
    pub students: usize,
    pub grades: usize,
}

#[derive(Debug)]
pub struct Store {
    courses: Table<Course>,
    students: Table<Student>,
    grades: Table<Grade>,
}

impl Store {
    pub fn new(seed: SeedData) -> Self {
        Self {
            courses: Table::new(seed.courses),
            students: Table::new(seed.students),
            grades: Table::new(seed.grades),
        }
    }

    pub fn courses(&self) -> &Table<Course> {
        &self.courses
    }

    pub fn students(&self) -> &Table<Student> {
        &self.students
    }

    pub fn grades(&self) -> &Table<Grade> {
        &self.grades
    }

    pub async fn counts(&self) -> StoreCounts {
        StoreCounts {
            courses: self.courses.len().await,
            students: self.students.len().await,
            grades: self.grades.len().await,
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(SeedData::default())
    }
}
