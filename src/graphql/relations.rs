//! Cross-collection fields, resolved by id at read time.
//!
//! References are not enforced, so a dangling id resolves to `null`.

use super::store;
use crate::model::{Course, Grade, Student};
use async_graphql::{ComplexObject, Context, Result};

#[ComplexObject]
impl Student {
    async fn course(&self, ctx: &Context<'_>) -> Result<Option<Course>> {
        Ok(store(ctx)?.courses().get(self.course_id).await)
    }
}

#[ComplexObject]
impl Grade {
    async fn student(&self, ctx: &Context<'_>) -> Result<Option<Student>> {
        Ok(store(ctx)?.students().get(self.student_id).await)
    }

    async fn course(&self, ctx: &Context<'_>) -> Result<Option<Course>> {
        Ok(store(ctx)?.courses().get(self.course_id).await)
    }
}
