//! Entity and view-mode listings for the CLI.
//!
//! `mcx entities` prints every entity type with its timeline support and
//! the selection keys its assembler consumes; `mcx view-modes <entity>`
//! prints the ordered view modes of one entity.

use anyhow::Result;
use media_companion_core::assemble::{field_name, supported_dimensions};
use media_companion_core::{get_view_modes, supports_timeline, EntityType};

pub fn list_entities() -> Result<()> {
    println!("{:<12} {:<10} DIMENSIONS", "ENTITY", "TIMELINE");
    for entity in EntityType::ALL {
        let dims: Vec<String> = supported_dimensions(entity)
            .map(|d| match field_name(entity, d) {
                Some(field) if field != d.selection_key() => {
                    format!("{}->{}", d.selection_key(), field)
                }
                _ => d.selection_key().to_string(),
            })
            .collect();
        println!(
            "{:<12} {:<10} {}",
            entity.as_str(),
            supports_timeline(entity),
            dims.join(", ")
        );
    }
    Ok(())
}

/// Print view modes for an entity key. Unknown keys print no modes.
pub fn list_view_modes(entity: &str, json: bool) -> Result<()> {
    let modes = get_view_modes(entity);
    if json {
        println!("{}", serde_json::to_string(modes)?);
        return Ok(());
    }
    if modes.is_empty() {
        eprintln!("No view modes for '{}'.", entity);
        return Ok(());
    }
    println!("{:<10} LABEL", "ID");
    for mode in modes {
        println!("{:<10} {}", mode.id, mode.label);
    }
    Ok(())
}
