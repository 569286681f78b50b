//! CLI tool to print the GraphQL schema in SDL form
//!
//! Usage:
//!   cargo run --bin print-schema
//!   cargo run --bin print-schema -- schema.graphql

use gradebook_api::graphql::build_schema;
use gradebook_api::store::Store;
use std::env;
use std::sync::Arc;

fn main() {
    let args: Vec<String> = env::args().collect();

    let sdl = build_schema(Arc::new(Store::default())).sdl();

    match args.len() {
        1 => print!("{}", sdl),
        2 => {
            if let Err(e) = std::fs::write(&args[1], &sdl) {
                eprintln!("Failed to write {}: {}", args[1], e);
                std::process::exit(1);
            }
            println!("Schema written to {}", args[1]);
        }
        _ => {
            eprintln!("Usage:");
            eprintln!("  {}            - Print schema to stdout", args[0]);
            eprintln!("  {} <file>     - Write schema to file", args[0]);
            std::process::exit(1);
        }
    }
}
