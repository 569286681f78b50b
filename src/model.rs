//! Record types
//!
//! The same structs are read from the seed files (camelCase JSON keys) and
//! exposed as GraphQL objects. Relation fields such as `Student.course` are
//! attached in `graphql::relations`.

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// A flat record addressed by an integer id.
pub trait Record: Clone + Send + Sync + 'static {
    /// Fields supplied by the caller when creating a record.
    type New: Send;

    /// Human readable collection name, used in logs.
    const KIND: &'static str;

    fn id(&self) -> i32;

    fn from_new(id: i32, new: Self::New) -> Self;
}

/// Represent courses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "Courses")]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub description: String,
}

impl Record for Course {
    type New = NewCourse;
    const KIND: &'static str = "course";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_new(id: i32, new: NewCourse) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
        }
    }
}

/// Represent students
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "Student", complex)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub lastname: String,
    pub course_id: i32,
}

#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub lastname: String,
    pub course_id: i32,
}

impl Record for Student {
    type New = NewStudent;
    const KIND: &'static str = "student";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_new(id: i32, new: NewStudent) -> Self {
        Self {
            id,
            name: new.name,
            lastname: new.lastname,
            course_id: new.course_id,
        }
    }
}

/// Represent grades
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(name = "grades", complex)]
pub struct Grade {
    pub id: i32,
    pub course_id: i32,
    pub student_id: i32,
    pub grade: i32,
}

#[derive(Debug, Clone)]
pub struct NewGrade {
    pub course_id: i32,
    pub student_id: i32,
    pub grade: i32,
}

impl Record for Grade {
    type New = NewGrade;
    const KIND: &'static str = "grade";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_new(id: i32, new: NewGrade) -> Self {
        Self {
            id,
            course_id: new.course_id,
            student_id: new.student_id,
            grade: new.grade,
        }
    }
}
