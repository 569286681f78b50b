//! GraphQL schema over the record store
//!
//! - [`QueryRoot`]: list and get-by-id per collection
//! - [`MutationRoot`]: add and delete per collection
//!
//! The store travels as schema data, so every resolver reaches the same
//! collections without global state.

mod mutation;
mod query;
mod relations;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use crate::store::Store;
use async_graphql::extensions::Tracing;
use async_graphql::{Context, EmptySubscription, Schema};
use std::sync::Arc;

pub type GradebookSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<Store>) -> GradebookSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .extension(Tracing)
        .finish()
}

fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Store> {
    ctx.data::<Arc<Store>>().map(|store| store.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, Grade, Student};
    use crate::store::SeedData;
    use serde_json::{json, Value};

    fn seeded_schema() -> (GradebookSchema, Arc<Store>) {
        let store = Arc::new(Store::new(SeedData {
            courses: vec![Course {
                id: 1,
                name: "Physics".to_string(),
                description: "Mechanics".to_string(),
            }],
            students: vec![
                Student {
                    id: 1,
                    name: "Marie".to_string(),
                    lastname: "Curie".to_string(),
                    course_id: 1,
                },
                Student {
                    id: 2,
                    name: "Nobody".to_string(),
                    lastname: "Dangling".to_string(),
                    course_id: 42,
                },
            ],
            grades: vec![Grade {
                id: 1,
                course_id: 1,
                student_id: 1,
                grade: 99,
            }],
        }));
        (build_schema(store.clone()), store)
    }

    async fn run(schema: &GradebookSchema, query: &str) -> Value {
        let response = schema.execute(query).await;
        assert!(response.errors.is_empty(), "errors: {:?}", response.errors);
        response.data.into_json().unwrap()
    }

    #[tokio::test]
    async fn test_add_course_then_fetch() {
        let (schema, _) = seeded_schema();

        let added = run(
            &schema,
            r#"mutation { addCourse(name: "Math", description: "desc") { id name description } }"#,
        )
        .await;
        assert_eq!(
            added,
            json!({ "addCourse": { "id": 2, "name": "Math", "description": "desc" } })
        );

        let fetched = run(&schema, "{ course(id: 2) { id name description } }").await;
        assert_eq!(fetched["course"], added["addCourse"]);

        let listed = run(&schema, "{ courses { id } }").await;
        assert_eq!(listed["courses"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_nested_student_course() {
        let (schema, _) = seeded_schema();

        let data = run(
            &schema,
            "{ students { id course { name } } }",
        )
        .await;
        assert_eq!(
            data,
            json!({ "students": [
                { "id": 1, "course": { "name": "Physics" } },
                { "id": 2, "course": null }
            ] })
        );
    }

    #[tokio::test]
    async fn test_nested_grade_relations() {
        let (schema, _) = seeded_schema();

        let data = run(
            &schema,
            "{ grade(id: 1) { grade courseId studentId student { lastname } course { id } } }",
        )
        .await;
        assert_eq!(
            data,
            json!({ "grade": {
                "grade": 99,
                "courseId": 1,
                "studentId": 1,
                "student": { "lastname": "Curie" },
                "course": { "id": 1 }
            } })
        );
    }

    #[tokio::test]
    async fn test_dangling_grade_references_are_null() {
        let store = Arc::new(Store::new(SeedData {
            grades: vec![Grade {
                id: 1,
                course_id: 404,
                student_id: 405,
                grade: 50,
            }],
            ..SeedData::default()
        }));
        let schema = build_schema(store);

        let data = run(&schema, "{ grades { id student { id } course { id } } }").await;
        assert_eq!(
            data,
            json!({ "grades": [{ "id": 1, "student": null, "course": null }] })
        );
    }

    #[tokio::test]
    async fn test_add_after_delete_uses_count_plus_one() {
        let (schema, store) = seeded_schema();
        run(
            &schema,
            r#"mutation { addCourse(name: "Art", description: "Painting") { id } }"#,
        )
        .await;
        run(&schema, "mutation { deleteCourse(id: 1) { id } }").await;

        let before = store.courses().len().await as i32;
        let data = run(
            &schema,
            r#"mutation { addCourse(name: "Math", description: "desc") { id name } }"#,
        )
        .await;
        assert_eq!(data["addCourse"]["id"], json!(before + 1));
        assert_eq!(data["addCourse"]["name"], "Math");
    }

    #[tokio::test]
    async fn test_add_with_max_seed_id() {
        let store = Arc::new(Store::new(SeedData {
            courses: vec![Course {
                id: i32::MAX,
                name: "Edge".to_string(),
                description: "Largest id".to_string(),
            }],
            ..SeedData::default()
        }));
        let schema = build_schema(store);

        let data = run(
            &schema,
            r#"mutation { addCourse(name: "Math", description: "desc") { id } }"#,
        )
        .await;
        assert_eq!(data, json!({ "addCourse": { "id": 2 } }));
    }

    #[tokio::test]
    async fn test_lookup_miss_is_null() {
        let (schema, _) = seeded_schema();

        let data = run(&schema, "{ student(id: 77) { id } course { id } }").await;
        assert_eq!(data, json!({ "student": null, "course": null }));
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record() {
        let (schema, store) = seeded_schema();

        let data = run(&schema, "mutation { deleteStudent(id: 1) { id name } }").await;
        assert_eq!(data, json!({ "deleteStudent": { "id": 1, "name": "Marie" } }));

        let ids: Vec<i32> = store.students().list().await.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let (schema, store) = seeded_schema();

        let data = run(&schema, "mutation { deleteCourse(id: 9) { id } }").await;
        assert_eq!(data, json!({ "deleteCourse": null }));
        assert_eq!(store.courses().len().await, 1);
    }

    #[tokio::test]
    async fn test_add_grade_and_student() {
        let (schema, _) = seeded_schema();

        let data = run(
            &schema,
            r#"mutation {
                addStudent(name: "Lise", lastname: "Meitner", courseId: 1) { id courseId course { name } }
                addGrade(courseId: 1, studentId: 3, grade: 87) { id grade student { name } }
            }"#,
        )
        .await;
        assert_eq!(
            data,
            json!({
                "addStudent": { "id": 3, "courseId": 1, "course": { "name": "Physics" } },
                "addGrade": { "id": 2, "grade": 87, "student": { "name": "Lise" } }
            })
        );
    }

    #[tokio::test]
    async fn test_missing_argument_rejected_before_resolver() {
        let (schema, store) = seeded_schema();

        let response = schema
            .execute(r#"mutation { addCourse(name: "Math") { id } }"#)
            .await;
        assert!(!response.errors.is_empty());
        assert_eq!(store.courses().len().await, 1);
    }

    #[tokio::test]
    async fn test_wrong_argument_type_rejected() {
        let (schema, _) = seeded_schema();

        let response = schema.execute(r#"{ student(id: "one") { id } }"#).await;
        assert!(!response.errors.is_empty());
    }

    #[test]
    fn test_type_names() {
        let (schema, _) = seeded_schema();
        let sdl = schema.sdl();
        assert!(sdl.contains("type Courses"));
        assert!(sdl.contains("type Student"));
        assert!(sdl.contains("type grades"));
        assert!(sdl.contains("students: [Student]"));
        assert!(sdl.contains("courses: [Courses]"));
        assert!(sdl.contains("grades: [grades]"));
        assert!(!sdl.contains("[Student!]"));
    }
}
