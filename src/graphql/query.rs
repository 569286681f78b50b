use super::store;
use crate::model::{Course, Grade, Student};
use async_graphql::{Context, Object, Result};

pub struct QueryRoot;

/// Lists are exposed as nullable lists of nullable records, `[T]`.
fn listing<T>(records: Vec<T>) -> Option<Vec<Option<T>>> {
    Some(records.into_iter().map(Some).collect())
}

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// List of all students
    async fn students(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Student>>>> {
        Ok(listing(store(ctx)?.students().list().await))
    }

    /// List of all courses
    async fn courses(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Course>>>> {
        Ok(listing(store(ctx)?.courses().list().await))
    }

    /// List of all grades
    async fn grades(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Grade>>>> {
        Ok(listing(store(ctx)?.grades().list().await))
    }

    /// One student
    async fn student(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Student>> {
        let Some(id) = id else { return Ok(None) };
        Ok(store(ctx)?.students().get(id).await)
    }

    /// One course
    async fn course(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Course>> {
        let Some(id) = id else { return Ok(None) };
        Ok(store(ctx)?.courses().get(id).await)
    }

    /// One grade
    async fn grade(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Grade>> {
        let Some(id) = id else { return Ok(None) };
        Ok(store(ctx)?.grades().get(id).await)
    }
}
