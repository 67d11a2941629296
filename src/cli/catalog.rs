//! Catalog command implementation

use serde::Serialize;
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::registry::{TransformRegistry, LATEST_CATALOG_VERSION};

#[derive(Serialize)]
struct CatalogRow {
    id: u32,
    name: &'static str,
    composed: bool,
    steps: Vec<String>,
}

/// Run the catalog command
pub fn run_catalog(catalog_version: Option<u32>, json: bool) -> ExitCode {
    let version = catalog_version.unwrap_or(LATEST_CATALOG_VERSION);
    let registry = match TransformRegistry::for_version(version) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let rows: Vec<CatalogRow> = registry
        .iter()
        .map(|entry| CatalogRow {
            id: entry.id,
            name: entry.name,
            composed: entry.transform.is_composed(),
            steps: entry.transform.steps().iter().map(ToString::to_string).collect(),
        })
        .collect();

    if json {
        match serde_json::to_string_pretty(&rows) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        println!("Catalog v{} ({} transforms)", version, rows.len());
        for row in &rows {
            println!("  {:>2}  {:<32} {}", row.id, row.name, row.steps.join(" -> "));
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
