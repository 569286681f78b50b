//! Seed data loading
//!
//! Each collection is seeded from one JSON file holding an array of flat
//! records. Files are read once at startup and never written back.

use crate::error::{ApiError, Result};
use crate::model::{Course, Grade, Student};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

pub const COURSES_FILE: &str = "course.json";
pub const STUDENTS_FILE: &str = "student.json";
pub const GRADES_FILE: &str = "grade.json";

#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub courses: Vec<Course>,
    pub students: Vec<Student>,
    pub grades: Vec<Grade>,
}

impl SeedData {
    /// Load all three seed files from `data_dir`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let seed = Self {
            courses: load_records(&data_dir.join(COURSES_FILE))?,
            students: load_records(&data_dir.join(STUDENTS_FILE))?,
            grades: load_records(&data_dir.join(GRADES_FILE))?,
        };

        info!(
            "Loaded seed data from {}: {} courses, {} students, {} grades",
            data_dir.display(),
            seed.courses.len(),
            seed.students.len(),
            seed.grades.len()
        );

        Ok(seed)
    }
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = fs::read_to_string(path).map_err(|e| ApiError::DataLoad {
        path: path.to_path_buf(),
        cause: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| ApiError::DataLoad {
        path: path.to_path_buf(),
        cause: e.to_string(),
    })
}
