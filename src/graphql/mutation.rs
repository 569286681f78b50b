use super::store;
use crate::model::{Course, Grade, NewCourse, NewGrade, NewStudent, Student};
use async_graphql::{Context, Object, Result};

pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a new grade
    async fn add_grade(
        &self,
        ctx: &Context<'_>,
        course_id: i32,
        student_id: i32,
        grade: i32,
    ) -> Result<Grade> {
        let new = NewGrade {
            course_id,
            student_id,
            grade,
        };
        Ok(store(ctx)?.grades().add(new).await?)
    }

    /// Add a new student
    async fn add_student(
        &self,
        ctx: &Context<'_>,
        name: String,
        lastname: String,
        course_id: i32,
    ) -> Result<Student> {
        let new = NewStudent {
            name,
            lastname,
            course_id,
        };
        Ok(store(ctx)?.students().add(new).await?)
    }

    /// Add a new course
    async fn add_course(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
    ) -> Result<Course> {
        let new = NewCourse { name, description };
        Ok(store(ctx)?.courses().add(new).await?)
    }

    /// Delete a course, returning it if it existed
    async fn delete_course(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Course>> {
        Ok(store(ctx)?.courses().delete(id).await)
    }

    /// Delete a student, returning it if it existed
    async fn delete_student(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Student>> {
        Ok(store(ctx)?.students().delete(id).await)
    }

    /// Delete a grade, returning it if it existed
    async fn delete_grade(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Grade>> {
        Ok(store(ctx)?.grades().delete(id).await)
    }
}
