use crate::decompose::{Condensation, Subsystem, build_condensation, decompose, subsystem_edges};
use crate::loader;
use crate::matrix::AdjacencyMatrix;
use anyhow::Result;
use log::info;
use std::path::Path;

pub fn run(file: &Path, json: bool) -> Result<()> {
    let adjacency = loader::load_adjacency(file)?;
    let subsystems = decompose(&adjacency);
    let condensation = build_condensation(&adjacency, &subsystems);
    info!(
        "{} vertices decomposed into {} subsystems",
        adjacency.size(),
        subsystems.len()
    );

    if json {
        print_json(&adjacency, &subsystems, &condensation)?;
    } else {
        print_human(&adjacency, &subsystems, &condensation);
    }
    Ok(())
}

fn edge_list(edges: &[(usize, usize)]) -> Vec<String> {
    edges
        .iter()
        .map(|&(u, v)| format!("{}->{}", u + 1, v + 1))
        .collect()
}

fn print_json(
    adjacency: &AdjacencyMatrix,
    subsystems: &[Subsystem],
    condensation: &Condensation,
) -> Result<()> {
    let subsystems_output: Vec<_> = subsystems
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let internal = subsystem_edges(adjacency, s);
            serde_json::json!({
                "subsystem": idx + 1,
                "vertices": s.members.iter().map(|&v| v + 1).collect::<Vec<_>>(),
                "edges": edge_list(&internal),
            })
        })
        .collect();

    let incoming: Vec<_> = condensation
        .right_incidence()
        .iter()
        .enumerate()
        .map(|(j, sources)| {
            serde_json::json!({
                "subsystem": j + 1,
                "incoming": sources.iter().map(|&i| i + 1).collect::<Vec<_>>(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "subsystem_count": subsystems.len(),
        "subsystems": subsystems_output,
        "condensation_edges": edge_list(&condensation.edges),
        "right_incidence": incoming,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_human(
    adjacency: &AdjacencyMatrix,
    subsystems: &[Subsystem],
    condensation: &Condensation,
) {
    println!("Subsystems:");
    for (idx, subsystem) in subsystems.iter().enumerate() {
        println!(
            "  Subsystem {}: vertices {}",
            idx + 1,
            super::vertex_list(&subsystem.members)
        );
        let internal = subsystem_edges(adjacency, subsystem);
        if internal.is_empty() {
            println!("    no edges");
        } else {
            println!("    edges {}", edge_list(&internal).join(", "));
        }
    }

    println!("\nCondensation edges:");
    if condensation.edges.is_empty() {
        println!("  none");
    } else {
        for entry in edge_list(&condensation.edges) {
            println!("  {entry}");
        }
    }

    println!("\nRight incidence of subsystems (incoming):");
    for (j, sources) in condensation.right_incidence().iter().enumerate() {
        println!("  Subsystem {}: {}", j + 1, super::vertex_list(sources));
    }
}
