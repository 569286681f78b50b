//! Gradebook API Library
//!
//! A GraphQL service over in-memory course, student and grade records,
//! seeded from JSON files at startup.

pub mod api;
pub mod config;
pub mod error;
pub mod graphql;
pub mod model;
pub mod store;
